//! The engine must emit exactly the number of rows the scaling model
//! promises, table by table.

use stargen_core::{GenerationEngine, Scaling, Session, SessionConfig, Table};

#[test]
fn dimension_tables_hit_their_scaled_row_counts() {
    let session = Session::new(&SessionConfig::default()).expect("valid session config");
    let engine = GenerationEngine::new(&session);
    let scaling = Scaling::new(1).expect("scale 1");

    for table in [
        Table::Reason,
        Table::ShipMode,
        Table::IncomeBand,
        Table::Warehouse,
        Table::Promotion,
        Table::CustomerAddress,
        Table::Item,
    ] {
        let rows = engine.collect_rows(table).expect("generation succeeds");
        assert_eq!(
            rows.len() as i64,
            scaling.row_count(table),
            "{}: emitted row count diverged from the scaling model",
            table.name()
        );
    }
}

#[test]
fn sales_row_count_tracks_the_order_count() {
    let session = Session::new(&SessionConfig::default()).expect("valid session config");
    let engine = GenerationEngine::new(&session);

    let mut sales_lines = 0i64;
    engine
        .generate_table(Table::WebSales, &mut |row| {
            if row.table() == Table::WebSales {
                sales_lines += 1;
            }
            Ok(())
        })
        .expect("generation succeeds");

    // Each order carries between eight and sixteen line items, so the
    // line count brackets the order count accordingly.
    let orders = session.scaling().row_count(Table::WebSales);
    assert!(sales_lines >= orders * 8, "too few sale lines for {orders} orders");
    assert!(sales_lines <= orders * 16, "too many sale lines for {orders} orders");
}
