//! Weekly inventory snapshots: one row per (item, warehouse, week).

use std::any::Any;

use crate::dates::JULIAN_DATA_START;
use crate::error::GenResult;
use crate::generator::{RowGenerator, RowGeneratorResult};
use crate::nulls::create_null_bitmap;
use crate::rng::StreamBank;
use crate::row::{RowBuilder, TableRow};
use crate::scd::match_surrogate_key;
use crate::session::Session;
use crate::table::Table;
use crate::types::Julian;
use crate::value_generator::generate_uniform_random_int;

// Stream slots. NEVER reorder, only append.
const INV_NULLS: usize = 0;
const INV_QUANTITY: usize = 1;

const STREAMS: &[(i32, i32)] = &[
    (240, 2), // nulls
    (241, 1), // quantity on hand
];

pub struct InventoryRow {
    null_bitmap: i64,
    inv_date_sk: Julian,
    inv_item_sk: i64,
    inv_warehouse_sk: i64,
    inv_quantity_on_hand: i64,
}

impl TableRow for InventoryRow {
    fn table(&self) -> Table {
        Table::Inventory
    }

    fn values(&self) -> Vec<Option<String>> {
        let mut builder = RowBuilder::new(self.null_bitmap);
        builder.put_key(i64::from(self.inv_date_sk));
        builder.put_key(self.inv_item_sk);
        builder.put_key(self.inv_warehouse_sk);
        builder.put_int(self.inv_quantity_on_hand);
        builder.finish()
    }
}

pub struct InventoryRowGenerator {
    streams: StreamBank,
}

impl InventoryRowGenerator {
    pub fn new() -> Self {
        Self { streams: StreamBank::new(STREAMS) }
    }
}

impl Default for InventoryRowGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGenerator for InventoryRowGenerator {
    fn table(&self) -> Table {
        Table::Inventory
    }

    fn generate_row_and_child_rows(
        &mut self,
        row_number: i64,
        session: &Session,
        _parent: Option<&mut (dyn RowGenerator + '_)>,
        _child: Option<&mut (dyn RowGenerator + '_)>,
    ) -> GenResult<RowGeneratorResult> {
        let scaling = session.scaling();
        let null_bitmap = create_null_bitmap(Table::Inventory, self.streams.stream(INV_NULLS));

        // Items cycle fastest, then warehouses, then weeks.
        let mut index = row_number - 1;
        let item_count = scaling.id_count(Table::Item);
        let item_id = index % item_count + 1;
        index /= item_count;
        let warehouse_count = scaling.row_count(Table::Warehouse);
        let warehouse_sk = index % warehouse_count + 1;
        index /= warehouse_count;
        let date = JULIAN_DATA_START + (index as Julian) * 7;

        let row = InventoryRow {
            null_bitmap,
            inv_date_sk: date,
            inv_item_sk: match_surrogate_key(item_id, date, Table::Item, scaling),
            inv_warehouse_sk: warehouse_sk,
            inv_quantity_on_hand: i64::from(generate_uniform_random_int(
                0,
                1000,
                self.streams.stream(INV_QUANTITY),
            )),
        };
        Ok(RowGeneratorResult::single(Box::new(row)))
    }

    fn stream_bank(&mut self) -> &mut StreamBank {
        &mut self.streams
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
