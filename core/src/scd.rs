//! Slowly changing dimensions.
//!
//! History-keeping tables emit 6 rows per cycle covering 3 business
//! keys: one key with a single open-ended revision, one with two
//! revisions split at the midpoint of the data window, and one with
//! three revisions split at the third points. Fact tables resolve a
//! business key plus a sale date to the revision that was current on
//! that date.

use crate::business_key::to_business_key;
use crate::dates::{JULIAN_DATA_END, JULIAN_DATA_START};
use crate::rng::RandomNumberStream;
use crate::scaling::Scaling;
use crate::table::Table;
use crate::types::Julian;
use crate::value_generator::generate_uniform_random_key;

pub struct ScdKey {
    pub business_key: String,
    pub is_new_business_key: bool,
    pub start_date: Julian,
    /// -1 marks a revision that is still current.
    pub end_date: Julian,
}

fn window_cut_points() -> (Julian, Julian, Julian) {
    let half_point = JULIAN_DATA_START + (JULIAN_DATA_END - JULIAN_DATA_START) / 2;
    let third_span = (JULIAN_DATA_END - JULIAN_DATA_START) / 3;
    let first_third = JULIAN_DATA_START + third_span;
    let second_third = first_third + third_span;
    (half_point, first_third, second_third)
}

pub fn compute_scd_key(table: Table, row_number: i64) -> ScdKey {
    let (half_point, first_third, second_third) = window_cut_points();
    let cycle_base = ((row_number - 1) / 6) * 3;
    let (key_index, is_new_business_key, start_date, end_date) = match row_number % 6 {
        1 => (cycle_base + 1, true, JULIAN_DATA_START, -1),
        2 => (cycle_base + 2, true, JULIAN_DATA_START, half_point),
        3 => (cycle_base + 2, false, half_point + 1, -1),
        4 => (cycle_base + 3, true, JULIAN_DATA_START, first_third),
        5 => (cycle_base + 3, false, first_third + 1, second_third),
        _ => (cycle_base + 3, false, second_third + 1, -1),
    };
    // Each history-keeping table shifts its date stamps by a fixed
    // offset so their revision boundaries do not all coincide.
    let offset = (table.history_offset_index() * 6) as Julian;
    ScdKey {
        business_key: to_business_key(key_index),
        is_new_business_key,
        start_date: start_date - offset,
        end_date: if end_date == -1 { -1 } else { end_date - offset },
    }
}

/// Picks between the freshly generated field value and the one carried
/// from the previous row, then shifts the change flags for the next
/// field.
pub fn scd_field<T: Clone>(
    is_new_business_key: bool,
    field_change_flags: &mut i64,
    new_value: T,
    old_value: &Option<T>,
) -> T {
    let result = if is_new_business_key || (*field_change_flags & 1) != 0 {
        new_value
    } else {
        match old_value {
            Some(value) => value.clone(),
            None => new_value,
        }
    };
    *field_change_flags >>= 1;
    result
}

/// Resolves a business-key index and a date to the surrogate key of
/// the revision current on that date.
pub fn match_surrogate_key(
    unique: i64,
    date: Julian,
    table: Table,
    scaling: &Scaling,
) -> i64 {
    let (half_point, first_third, second_third) = window_cut_points();
    let mut key = match unique % 3 {
        1 => (unique / 3) * 6 + 1,
        2 => {
            let mut key = (unique / 3) * 6 + 2;
            if date > half_point {
                key += 1;
            }
            key
        }
        _ => {
            let mut key = (unique / 3) * 6 - 2;
            if date > first_third {
                key += 1;
            }
            if date > second_third {
                key += 1;
            }
            key
        }
    };
    let row_count = scaling.row_count(table);
    if key > row_count {
        key = row_count;
    }
    key
}

/// Join key into a history-keeping table: picks a business key at
/// random and resolves it against the given date.
pub fn pick_random_scd_key(
    table: Table,
    date: Julian,
    scaling: &Scaling,
    stream: &mut RandomNumberStream,
) -> i64 {
    let unique = generate_uniform_random_key(1, scaling.id_count(table), stream);
    match_surrogate_key(unique, date, table, scaling)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_row_cycle_spans_three_business_keys() {
        let keys: Vec<ScdKey> = (1..=6)
            .map(|row| compute_scd_key(Table::Item, row))
            .collect();
        assert_eq!(keys[1].business_key, keys[2].business_key);
        assert_eq!(keys[3].business_key, keys[4].business_key);
        assert_eq!(keys[4].business_key, keys[5].business_key);
        assert_ne!(keys[0].business_key, keys[1].business_key);
        assert_ne!(keys[1].business_key, keys[3].business_key);
    }

    #[test]
    fn revision_windows_tile_the_data_window() {
        let second = compute_scd_key(Table::Item, 2);
        let third = compute_scd_key(Table::Item, 3);
        assert_eq!(third.start_date, second.end_date + 1);
        assert_eq!(third.end_date, -1);
        assert!(second.is_new_business_key);
        assert!(!third.is_new_business_key);
    }

    #[test]
    fn surrogate_keys_follow_the_date() {
        let scaling = Scaling::new(1).expect("scale 1");
        let early = match_surrogate_key(2, JULIAN_DATA_START, Table::Item, &scaling);
        let late = match_surrogate_key(2, JULIAN_DATA_END, Table::Item, &scaling);
        assert_eq!(late, early + 1);
    }

    #[test]
    fn change_flags_consume_one_bit_per_field() {
        let mut flags: i64 = 0b10;
        let old = Some(1);
        assert_eq!(scd_field(false, &mut flags, 2, &old), 1);
        assert_eq!(scd_field(false, &mut flags, 3, &old), 3);
        assert_eq!(flags, 0);
    }
}
