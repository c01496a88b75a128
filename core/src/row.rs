//! Row rendering.
//!
//! Generators keep typed row structs; output formats only ever see the
//! rendered column values. A column renders as None when its bit is
//! set in the row's null bitmap or when a key column holds the null
//! key sentinel.

use crate::dates::{format_date, from_julian};
use crate::decimal::Decimal;
use crate::nulls::is_column_null;
use crate::table::Table;
use crate::types::{Julian, NULL_KEY};

pub trait TableRow {
    fn table(&self) -> Table;
    fn values(&self) -> Vec<Option<String>>;
}

/// Walks the columns of one row left to right, consulting the null
/// bitmap positionally. Columns must be emitted in output order.
pub struct RowBuilder {
    null_bitmap: i64,
    position: i32,
    values: Vec<Option<String>>,
}

impl RowBuilder {
    pub fn new(null_bitmap: i64) -> Self {
        Self { null_bitmap, position: 0, values: Vec::new() }
    }

    fn push(&mut self, value: Option<String>) {
        let value = if is_column_null(self.null_bitmap, self.position) {
            None
        } else {
            value
        };
        self.values.push(value);
        self.position += 1;
    }

    pub fn put_string(&mut self, value: &str) {
        self.push(Some(value.to_string()));
    }

    pub fn put_optional_string(&mut self, value: Option<&str>) {
        self.push(value.map(str::to_string));
    }

    pub fn put_key(&mut self, key: i64) {
        let value = if key == NULL_KEY { None } else { Some(key.to_string()) };
        self.push(value);
    }

    pub fn put_int(&mut self, value: i64) {
        self.push(Some(value.to_string()));
    }

    pub fn put_decimal(&mut self, value: &Decimal) {
        self.push(Some(value.to_string()));
    }

    pub fn put_boolean(&mut self, value: bool) {
        self.push(Some(if value { "Y" } else { "N" }.to_string()));
    }

    pub fn put_date(&mut self, julian: Julian) {
        let value = if i64::from(julian) == NULL_KEY {
            None
        } else {
            Some(format_date(from_julian(julian)))
        };
        self.push(value);
    }

    pub fn finish(self) -> Vec<Option<String>> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::JULIAN_DATA_START;

    #[test]
    fn bitmap_bits_map_to_column_positions() {
        let mut builder = RowBuilder::new(0b101);
        builder.put_int(1);
        builder.put_int(2);
        builder.put_int(3);
        builder.put_int(4);
        assert_eq!(
            builder.finish(),
            vec![None, Some("2".to_string()), None, Some("4".to_string())]
        );
    }

    #[test]
    fn sentinel_keys_render_as_null() {
        let mut builder = RowBuilder::new(0);
        builder.put_key(NULL_KEY);
        builder.put_key(7);
        builder.put_date(-1);
        builder.put_date(JULIAN_DATA_START);
        assert_eq!(
            builder.finish(),
            vec![
                None,
                Some("7".to_string()),
                None,
                Some("1998-01-01".to_string())
            ]
        );
    }
}
