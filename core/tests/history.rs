//! Revision history of the item dimension. Every cycle of six rows
//! covers three business keys: one key with a single open revision,
//! one split in half, one split in thirds. The open revision is
//! always the last row of its key.

use stargen_core::dates::{format_date, from_julian, JULIAN_DATA_START};
use stargen_core::{GenerationEngine, Scaling, Session, SessionConfig, Table};

const ITEM_ID: usize = 1;
const REC_START: usize = 2;
const REC_END: usize = 3;
const CURRENT_PRICE: usize = 5;
const WHOLESALE_COST: usize = 6;
const BRAND: usize = 8;
const PROMO_SK: usize = 22;

fn item_rows() -> Vec<Vec<Option<String>>> {
    let session = Session::new(&SessionConfig::default()).expect("valid session config");
    let engine = GenerationEngine::new(&session);
    let rows = engine.collect_rows(Table::Item).expect("generation succeeds");
    rows.iter().map(|row| row.values()).collect()
}

fn id(row: &[Option<String>]) -> &str {
    row[ITEM_ID].as_deref().expect("item id is never null")
}

#[test]
fn each_cycle_spans_three_business_keys() {
    let rows = item_rows();
    for cycle_start in [0usize, 600, 17_994] {
        let cycle = &rows[cycle_start..cycle_start + 6];
        assert_ne!(id(&cycle[0]), id(&cycle[1]));
        assert_eq!(id(&cycle[1]), id(&cycle[2]), "two-revision key at rows 2 and 3");
        assert_ne!(id(&cycle[2]), id(&cycle[3]));
        assert_eq!(id(&cycle[3]), id(&cycle[4]), "three-revision key at rows 4 to 6");
        assert_eq!(id(&cycle[4]), id(&cycle[5]));
    }
}

#[test]
fn revision_windows_tile_without_gaps() {
    let rows = item_rows();
    let data_start = format_date(from_julian(JULIAN_DATA_START));

    // Single-revision key: open from the start of the window. The
    // start column is nullable, so it is only checked when present.
    if let Some(start) = rows[0][REC_START].as_deref() {
        assert_eq!(start, data_start);
    }
    assert_eq!(rows[0][REC_END], None);

    // Two-revision key: the first revision closes, the second is open.
    if let Some(start) = rows[1][REC_START].as_deref() {
        assert_eq!(start, data_start);
    }
    assert!(rows[1][REC_END].is_some());
    assert_eq!(rows[2][REC_END], None);

    // Three-revision key: two closed revisions in order, then open.
    let first_close = rows[3][REC_END].as_deref().expect("first revision closes");
    let second_close = rows[4][REC_END].as_deref().expect("second revision closes");
    assert!(first_close < second_close, "revision boundaries out of order");
    assert_eq!(rows[5][REC_END], None);

    // The half cut falls after the first third and before the second.
    let half_close = rows[1][REC_END].as_deref().expect("half cut");
    assert!(first_close < half_close && half_close < second_close);
}

#[test]
fn revisions_redraw_price_and_brand_but_gate_wholesale_cost() {
    let rows = item_rows();

    // Carry-over rate per column across revision rows. The price and
    // the brand string never carry; the wholesale cost follows its
    // change bit, so roughly half the revisions keep the old value.
    let mut checked = [0u32; 3];
    let mut carried = [0u32; 3];
    for index in 1..rows.len() {
        if id(&rows[index]) != id(&rows[index - 1]) {
            continue;
        }
        for (slot, column) in [CURRENT_PRICE, BRAND, WHOLESALE_COST].into_iter().enumerate() {
            if let (Some(previous), Some(current)) =
                (&rows[index - 1][column], &rows[index][column])
            {
                checked[slot] += 1;
                if previous == current {
                    carried[slot] += 1;
                }
            }
        }
    }

    let rate = |slot: usize| f64::from(carried[slot]) / f64::from(checked[slot]);
    assert!(checked.iter().all(|&count| count > 5000), "too few revision rows compared");
    assert!(rate(0) < 0.02, "current price carried at rate {}", rate(0));
    assert!(rate(1) < 0.05, "brand carried at rate {}", rate(1));
    assert!(
        (0.35..0.65).contains(&rate(2)),
        "wholesale cost carry rate {} off its change bit",
        rate(2)
    );
}

#[test]
fn item_rows_close_with_an_optional_promotion_key() {
    let rows = item_rows();
    let promotion_count = Scaling::new(1).expect("scale 1").row_count(Table::Promotion);

    let mut present = 0u32;
    for row in &rows {
        assert_eq!(row.len(), PROMO_SK + 1);
        if let Some(value) = row[PROMO_SK].as_deref() {
            let key: i64 = value.parse().expect("promotion key is numeric");
            assert!(key >= 1 && key <= promotion_count, "promotion key {key} out of range");
            present += 1;
        }
    }

    // One item in five carries a promotion.
    let rate = f64::from(present) / rows.len() as f64;
    assert!((0.15..0.25).contains(&rate), "observed promotion rate {rate}");
}

#[test]
fn every_business_key_has_exactly_one_open_revision() {
    let rows = item_rows();
    let expected_keys = Scaling::new(1).expect("scale 1").id_count(Table::Item);

    let mut open_by_key = std::collections::HashMap::new();
    for row in &rows {
        if row[REC_END].is_none() {
            *open_by_key.entry(id(row).to_string()).or_insert(0u32) += 1;
        }
    }
    assert_eq!(open_by_key.len() as i64, expected_keys);
    assert!(open_by_key.values().all(|count| *count == 1));
}
