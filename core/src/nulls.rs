//! Per-row null bitmaps.
//!
//! Every table draws exactly two seeds from its nulls stream on every
//! row, whether or not the row ends up carrying nulls. Bit N of the
//! bitmap corresponds to the Nth output column; key columns are pinned
//! non-null by each table's mask.

use crate::rng::RandomNumberStream;
use crate::table::Table;
use crate::value_generator::{generate_uniform_random_int, generate_uniform_random_key};

pub fn create_null_bitmap(table: Table, stream: &mut RandomNumberStream) -> i64 {
    let threshold = generate_uniform_random_int(0, 9999, stream);
    let bitmap = generate_uniform_random_key(1, i64::from(i32::MAX), stream);
    if threshold < table.null_basis_points() {
        bitmap & !table.not_null_bitmap()
    } else {
        0
    }
}

pub fn is_column_null(bitmap: i64, column_position: i32) -> bool {
    bitmap & (1 << column_position) != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RandomNumberStream;

    #[test]
    fn zero_rate_tables_never_produce_nulls() {
        let mut stream = RandomNumberStream::new(701, 2);
        for _ in 0..1000 {
            assert_eq!(create_null_bitmap(Table::DateDim, &mut stream), 0);
        }
    }

    #[test]
    fn key_columns_stay_non_null() {
        let mut stream = RandomNumberStream::new(702, 2);
        for _ in 0..10_000 {
            let bitmap = create_null_bitmap(Table::WebSales, &mut stream);
            assert!(!is_column_null(bitmap, 3));
            assert!(!is_column_null(bitmap, 17));
        }
    }

    #[test]
    fn null_rate_tracks_basis_points() {
        let mut stream = RandomNumberStream::new(703, 2);
        let mut with_nulls = 0;
        let trials = 20_000;
        for _ in 0..trials {
            if create_null_bitmap(Table::Inventory, &mut stream) != 0 {
                with_nulls += 1;
            }
        }
        // 1000 basis points, so roughly one row in ten.
        let rate = f64::from(with_nulls) / f64::from(trials);
        assert!(rate > 0.08 && rate < 0.12, "observed rate {rate}");
    }
}
