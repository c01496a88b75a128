//! The web returns table rides along with web sales. Generating the
//! pair together, generating the returns alone, and generating the
//! sales alone must all tell the same story.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use stargen_core::{GenerationEngine, Session, SessionConfig, Table};

/// Drives `driven` and keeps only the rows belonging to `kept`,
/// so a full fact table run never sits in memory at once.
fn collect_kept_rows(config: &SessionConfig, driven: Table, kept: Table) -> Vec<Vec<Option<String>>> {
    let session = Session::new(config).expect("valid session config");
    let engine = GenerationEngine::new(&session);
    let mut rows = Vec::new();
    engine
        .generate_table(driven, &mut |row| {
            if row.table() == kept {
                rows.push(row.values());
            }
            Ok(())
        })
        .expect("generation succeeds");
    rows
}

#[test]
fn isolated_returns_match_returns_from_joint_run() {
    let config = SessionConfig::default();

    let joint = collect_kept_rows(&config, Table::WebSales, Table::WebReturns);
    let isolated = collect_kept_rows(&config, Table::WebReturns, Table::WebReturns);

    assert!(!joint.is_empty(), "joint run produced no returns");
    assert_eq!(joint.len(), isolated.len(), "return row counts diverged");
    for (index, (from_joint, from_isolated)) in joint.iter().zip(&isolated).enumerate() {
        assert_eq!(from_joint, from_isolated, "return row {} diverged", index + 1);
    }
}

/// Digest of the sales rows of a run. The fact table is too large to
/// hold in memory for an elementwise comparison.
fn sales_digest(config: &SessionConfig) -> (u64, usize) {
    let session = Session::new(config).expect("valid session config");
    let engine = GenerationEngine::new(&session);
    let mut hasher = DefaultHasher::new();
    let mut count = 0usize;
    engine
        .generate_table(Table::WebSales, &mut |row| {
            if row.table() == Table::WebSales {
                row.values().hash(&mut hasher);
                count += 1;
            } else {
                assert!(config.table.is_none(), "sales-only run leaked a return row");
            }
            Ok(())
        })
        .expect("generation succeeds");
    (hasher.finish(), count)
}

#[test]
fn naming_the_sales_table_suppresses_returns() {
    let sales_only_config =
        SessionConfig { table: Some("web_sales".to_string()), ..SessionConfig::default() };

    // Suppressing the child must not change the sales rows themselves.
    let (joint_digest, joint_count) = sales_digest(&SessionConfig::default());
    let (alone_digest, alone_count) = sales_digest(&sales_only_config);
    assert_eq!(joint_count, alone_count, "sales row counts diverged");
    assert_eq!(joint_digest, alone_digest, "sales row content diverged");
}

#[test]
fn a_tenth_of_sale_lines_come_back() {
    let session = Session::new(&SessionConfig::default()).expect("valid session config");
    let engine = GenerationEngine::new(&session);
    let mut sales = 0usize;
    let mut returns = 0usize;
    engine
        .generate_table(Table::WebSales, &mut |row| {
            match row.table() {
                Table::WebReturns => returns += 1,
                _ => sales += 1,
            }
            Ok(())
        })
        .expect("generation succeeds");
    let rate = returns as f64 / sales as f64;
    assert!(
        (0.08..=0.12).contains(&rate),
        "expected roughly one return per ten sale lines, got {:.4} ({} of {})",
        rate,
        returns,
        sales
    );
}
