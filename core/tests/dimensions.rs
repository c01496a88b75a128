//! Spot checks of individual dimension rows against known values.
//! These pins keep refactors honest: the numbers below are part of
//! the output contract, not an implementation detail.

use stargen_core::{GenerationEngine, Session, SessionConfig, Table};

fn first_rows(table: Table, count: usize) -> Vec<Vec<Option<String>>> {
    let session = Session::new(&SessionConfig::default()).expect("valid session config");
    let engine = GenerationEngine::new(&session);
    let rows = engine.collect_rows(table).expect("generation succeeds");
    rows.iter().take(count).map(|row| row.values()).collect()
}

fn cell(row: &[Option<String>], index: usize) -> &str {
    row[index].as_deref().unwrap_or_else(|| panic!("column {index} unexpectedly null"))
}

#[test]
fn first_reason_row() {
    let rows = first_rows(Table::Reason, 1);
    assert_eq!(cell(&rows[0], 0), "1");
    assert_eq!(cell(&rows[0], 1), "AAAAAAAABAAAAAAA");
    assert_eq!(cell(&rows[0], 2), "Package was damaged");
}

#[test]
fn first_date_dim_row() {
    let rows = first_rows(Table::DateDim, 1);
    let row = &rows[0];
    assert_eq!(cell(row, 0), "2415022");
    assert_eq!(cell(row, 1), "AAAAAAAAOKJNECAA");
    assert_eq!(cell(row, 2), "1900-01-02");
    assert_eq!(cell(row, 3), "0", "month sequence starts at zero");
    assert_eq!(cell(row, 4), "1", "week sequence starts at one");
    assert_eq!(cell(row, 6), "1900");
    assert_eq!(cell(row, 8), "1", "month of year");
    assert_eq!(cell(row, 9), "2", "day of month");
    assert_eq!(cell(row, 10), "1", "quarter of year");
    assert_eq!(cell(row, 14), "Tuesday");
    assert_eq!(cell(row, 15), "1900Q1");
    assert_eq!(cell(row, 17), "N", "not a weekend");
    assert_eq!(cell(row, 19), "2415021", "first day of month");
    assert_eq!(cell(row, 20), "2415051", "last day of month");
    assert_eq!(cell(row, 21), "2414657", "same day last year");
    assert_eq!(cell(row, 22), "2414930", "same day last quarter");
}

#[test]
fn time_dim_covers_the_day() {
    let session = Session::new(&SessionConfig::default()).expect("valid session config");
    let engine = GenerationEngine::new(&session);
    let rows = engine.collect_rows(Table::TimeDim).expect("generation succeeds");
    assert_eq!(rows.len(), 86_400);

    let midnight = rows[0].values();
    assert_eq!(cell(&midnight, 0), "0");
    assert_eq!(cell(&midnight, 6), "AM");
    assert_eq!(cell(&midnight, 7), "third");
    assert_eq!(cell(&midnight, 8), "night");
    assert_eq!(midnight[9], None, "no meal at midnight");

    // Row 43201 is the first second of hour twelve.
    let noon = rows[43_200].values();
    assert_eq!(cell(&noon, 2), "43200");
    assert_eq!(cell(&noon, 3), "12");
    assert_eq!(cell(&noon, 6), "PM");
    assert_eq!(cell(&noon, 7), "first");
    assert_eq!(cell(&noon, 8), "afternoon");
    assert_eq!(cell(&noon, 9), "lunch");
}

#[test]
fn income_bands_are_contiguous_ten_thousands() {
    let rows = first_rows(Table::IncomeBand, 3);
    assert_eq!(cell(&rows[0], 1), "0");
    assert_eq!(cell(&rows[0], 2), "10000");
    assert_eq!(cell(&rows[1], 1), "10001");
    assert_eq!(cell(&rows[1], 2), "20000");
    assert_eq!(cell(&rows[2], 1), "20001");
    assert_eq!(cell(&rows[2], 2), "30000");
}

// Only direct mail varies. The other seven channel flags and the
// purpose column are fixed, and that shape is part of the output
// contract. Nullable columns are only checked when present.
#[test]
fn promotion_channels_beyond_direct_mail_are_never_active() {
    let session = Session::new(&SessionConfig::default()).expect("valid session config");
    let engine = GenerationEngine::new(&session);
    let rows = engine.collect_rows(Table::Promotion).expect("generation succeeds");
    assert_eq!(rows.len(), 300);

    let mut dmail_active = 0;
    for row in &rows {
        let values = row.values();
        if values[8].as_deref() == Some("Y") {
            dmail_active += 1;
        }
        for channel in 9..=15 {
            if let Some(flag) = values[channel].as_deref() {
                assert_eq!(flag, "N", "channel column {channel} should never be active");
            }
        }
        if let Some(purpose) = values[17].as_deref() {
            assert_eq!(purpose, "Unknown");
        }
        if let Some(cost) = values[5].as_deref() {
            assert_eq!(cost, "1000.00");
        }
    }
    assert!(dmail_active > 0, "direct mail never activated across 300 promotions");
    assert!(dmail_active < 300, "direct mail activated on every promotion");
}

#[test]
fn ship_modes_have_sequential_keys_and_ids() {
    let rows = first_rows(Table::ShipMode, 20);
    assert_eq!(rows.len(), 20);
    for (index, row) in rows.iter().enumerate() {
        assert_eq!(cell(row, 0), (index + 1).to_string());
        assert_eq!(cell(row, 1).len(), 16, "business keys are sixteen characters");
    }
}
