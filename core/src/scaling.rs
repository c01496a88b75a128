//! Row counts per scale factor.
//!
//! Three curves cover the schema: fact tables grow linearly with
//! scale, most dimensions grow along a ten-step logarithmic ladder,
//! and the fixed dimensions never grow at all. History-keeping tables
//! double their curve because every business entity averages two
//! revisions per cycle.

use std::collections::HashMap;

use crate::dates::{JULIAN_DATA_START, JULIAN_SALES_END};
use crate::error::{GenError, GenResult};
use crate::table::{ScalingModel, Table};

pub const DEFINED_SCALES: [i64; 10] = [0, 1, 10, 100, 300, 1000, 3000, 10000, 30000, 100000];

/// Id counts per 6-row revision cycle remainder: cycle position k adds
/// this many distinct business keys.
const ID_COUNT_REMAINDERS: [i64; 6] = [0, 1, 2, 2, 3, 3];

pub struct Scaling {
    scale: i64,
    row_counts: HashMap<Table, i64>,
}

impl Scaling {
    pub fn new(scale: i64) -> GenResult<Self> {
        if scale < 1 || scale > DEFINED_SCALES[9] {
            return Err(GenError::InvalidScale { scale: scale as i32 });
        }
        let mut row_counts = HashMap::new();
        for table in Table::ALL {
            if table == Table::Inventory {
                continue;
            }
            row_counts.insert(table, base_row_count(table, scale));
        }
        // Inventory carries one row per (item id, warehouse, week of
        // the sales window), so it resolves after its inputs.
        let weeks = weeks_in_sales_window();
        let item_ids = id_count_for(row_counts[&Table::Item], Table::Item);
        let inventory = item_ids * row_counts[&Table::Warehouse] * weeks;
        row_counts.insert(Table::Inventory, inventory);
        Ok(Self { scale, row_counts })
    }

    pub fn scale(&self) -> i64 {
        self.scale
    }

    pub fn row_count(&self, table: Table) -> i64 {
        self.row_counts[&table]
    }

    /// Distinct business keys. Equal to the row count except for
    /// history-keeping tables, where a 6-row cycle spans 3 keys.
    pub fn id_count(&self, table: Table) -> i64 {
        id_count_for(self.row_count(table), table)
    }
}

fn id_count_for(row_count: i64, table: Table) -> i64 {
    if !table.keeps_history() {
        return row_count;
    }
    (row_count / 6) * 3 + ID_COUNT_REMAINDERS[(row_count % 6) as usize]
}

fn base_row_count(table: Table, scale: i64) -> i64 {
    let info = table.scaling_info();
    let base = match info.model {
        ScalingModel::Static => info.row_counts_per_scale[1],
        ScalingModel::Logarithmic => {
            let slot = DEFINED_SCALES
                .iter()
                .position(|&defined| defined >= scale)
                .unwrap_or(9);
            info.row_counts_per_scale[slot]
        }
        ScalingModel::Linear => {
            // Greedy decomposition of the scale into defined scales so
            // intermediate factors still land on the published curve.
            let mut remaining = scale;
            let mut total = 0;
            for slot in (1..DEFINED_SCALES.len()).rev() {
                while remaining >= DEFINED_SCALES[slot] {
                    total += info.row_counts_per_scale[slot];
                    remaining -= DEFINED_SCALES[slot];
                }
            }
            total
        }
    };
    let history_multiplier = if table.keeps_history() { 2 } else { 1 };
    base * 10_i64.pow(info.multiplier as u32) * history_multiplier
}

fn weeks_in_sales_window() -> i64 {
    let days = i64::from(JULIAN_SALES_END - JULIAN_DATA_START) + 1;
    (days + 6) / 7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_scale_one_counts() {
        let scaling = Scaling::new(1).expect("scale 1");
        assert_eq!(scaling.row_count(Table::Item), 18_000);
        assert_eq!(scaling.id_count(Table::Item), 9_000);
        assert_eq!(scaling.row_count(Table::Warehouse), 5);
        assert_eq!(scaling.row_count(Table::Customer), 100_000);
        assert_eq!(scaling.row_count(Table::CustomerDemographics), 1_920_800);
        assert_eq!(scaling.row_count(Table::DateDim), 73_049);
        assert_eq!(scaling.row_count(Table::WebSales), 60_000);
        assert_eq!(scaling.row_count(Table::WebSite), 30);
        assert_eq!(scaling.row_count(Table::Inventory), 11_745_000);
    }

    #[test]
    fn linear_tables_decompose_intermediate_scales() {
        let scaling = Scaling::new(500).expect("scale 500");
        // 500 = 300 + 100 + 100
        assert_eq!(scaling.row_count(Table::WebSales), (18_000 + 6_000 + 6_000) * 1000);
    }

    #[test]
    fn invalid_scales_are_rejected() {
        assert!(Scaling::new(0).is_err());
        assert!(Scaling::new(100_001).is_err());
    }
}
