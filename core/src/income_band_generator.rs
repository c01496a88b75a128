//! Income band dimension: twenty fixed 10000-wide brackets.

use std::any::Any;

use crate::error::GenResult;
use crate::generator::{RowGenerator, RowGeneratorResult};
use crate::nulls::create_null_bitmap;
use crate::rng::StreamBank;
use crate::row::{RowBuilder, TableRow};
use crate::session::Session;
use crate::table::Table;

// Stream slots. NEVER reorder, only append.
const IB_NULLS: usize = 0;

const STREAMS: &[(i32, i32)] = &[
    (90, 2), // nulls
];

pub struct IncomeBandRow {
    null_bitmap: i64,
    ib_income_band_sk: i64,
    ib_lower_bound: i64,
    ib_upper_bound: i64,
}

impl TableRow for IncomeBandRow {
    fn table(&self) -> Table {
        Table::IncomeBand
    }

    fn values(&self) -> Vec<Option<String>> {
        let mut builder = RowBuilder::new(self.null_bitmap);
        builder.put_key(self.ib_income_band_sk);
        builder.put_int(self.ib_lower_bound);
        builder.put_int(self.ib_upper_bound);
        builder.finish()
    }
}

pub struct IncomeBandRowGenerator {
    streams: StreamBank,
}

impl IncomeBandRowGenerator {
    pub fn new() -> Self {
        Self { streams: StreamBank::new(STREAMS) }
    }
}

impl Default for IncomeBandRowGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGenerator for IncomeBandRowGenerator {
    fn table(&self) -> Table {
        Table::IncomeBand
    }

    fn generate_row_and_child_rows(
        &mut self,
        row_number: i64,
        _session: &Session,
        _parent: Option<&mut (dyn RowGenerator + '_)>,
        _child: Option<&mut (dyn RowGenerator + '_)>,
    ) -> GenResult<RowGeneratorResult> {
        let null_bitmap = create_null_bitmap(Table::IncomeBand, self.streams.stream(IB_NULLS));
        // The first band starts at zero; later bands start one dollar
        // above the previous upper bound.
        let lower = (row_number - 1) * 10_000 + i64::from(row_number > 1);
        let row = IncomeBandRow {
            null_bitmap,
            ib_income_band_sk: row_number,
            ib_lower_bound: lower,
            ib_upper_bound: row_number * 10_000,
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
