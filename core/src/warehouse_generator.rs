//! Warehouse dimension. A small table: its addresses draw cities from
//! a prefix of the city list sized by the warehouse count.

use std::any::Any;

use crate::address::{make_address, Address};
use crate::business_key::to_business_key;
use crate::error::GenResult;
use crate::generator::{RowGenerator, RowGeneratorResult};
use crate::nulls::create_null_bitmap;
use crate::rng::StreamBank;
use crate::row::{RowBuilder, TableRow};
use crate::session::Session;
use crate::table::Table;
use crate::value_generator::{generate_uniform_random_int, generate_word};

// Stream slots. NEVER reorder, only append.
const W_NULLS: usize = 0;
const W_SQ_FT: usize = 1;
const W_ADDRESS: usize = 2;

const STREAMS: &[(i32, i32)] = &[
    (170, 2), // nulls
    (171, 1), // square footage
    (172, 7), // address block
];

pub struct WarehouseRow {
    null_bitmap: i64,
    w_warehouse_sk: i64,
    w_warehouse_id: String,
    w_warehouse_name: String,
    w_warehouse_sq_ft: i64,
    address: Address,
}

impl TableRow for WarehouseRow {
    fn table(&self) -> Table {
        Table::Warehouse
    }

    fn values(&self) -> Vec<Option<String>> {
        let mut builder = RowBuilder::new(self.null_bitmap);
        builder.put_key(self.w_warehouse_sk);
        builder.put_string(&self.w_warehouse_id);
        builder.put_string(&self.w_warehouse_name);
        builder.put_int(self.w_warehouse_sq_ft);
        builder.put_int(i64::from(self.address.street_number));
        builder.put_string(&self.address.street_name);
        builder.put_string(self.address.street_type);
        builder.put_string(&self.address.suite_number);
        builder.put_string(self.address.city);
        builder.put_string(self.address.county);
        builder.put_string(self.address.state);
        builder.put_string(&format!("{:05}", self.address.zip));
        builder.put_string(self.address.country);
        builder.put_int(i64::from(self.address.gmt_offset));
        builder.finish()
    }
}

pub struct WarehouseRowGenerator {
    streams: StreamBank,
}

impl WarehouseRowGenerator {
    pub fn new() -> Self {
        Self { streams: StreamBank::new(STREAMS) }
    }
}

impl Default for WarehouseRowGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGenerator for WarehouseRowGenerator {
    fn table(&self) -> Table {
        Table::Warehouse
    }

    fn generate_row_and_child_rows(
        &mut self,
        row_number: i64,
        session: &Session,
        _parent: Option<&mut (dyn RowGenerator + '_)>,
        _child: Option<&mut (dyn RowGenerator + '_)>,
    ) -> GenResult<RowGeneratorResult> {
        let null_bitmap = create_null_bitmap(Table::Warehouse, self.streams.stream(W_NULLS));
        let row = WarehouseRow {
            null_bitmap,
            w_warehouse_sk: row_number,
            w_warehouse_id: to_business_key(row_number),
            w_warehouse_name: generate_word(
                row_number,
                20,
                &session.distributions().syllables,
            ),
            w_warehouse_sq_ft: i64::from(generate_uniform_random_int(
                50_000,
                1_000_000,
                self.streams.stream(W_SQ_FT),
            )),
            address: make_address(
                Table::Warehouse,
                session.scaling(),
                session.distributions(),
                self.streams.stream(W_ADDRESS),
            ),
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
