//! Return reason dimension.

use std::any::Any;

use crate::business_key::to_business_key;
use crate::error::GenResult;
use crate::generator::{RowGenerator, RowGeneratorResult};
use crate::nulls::create_null_bitmap;
use crate::rng::StreamBank;
use crate::row::{RowBuilder, TableRow};
use crate::session::Session;
use crate::table::Table;

// Stream slots. NEVER reorder, only append.
const R_NULLS: usize = 0;

const STREAMS: &[(i32, i32)] = &[
    (50, 2), // nulls
];

pub struct ReasonRow {
    null_bitmap: i64,
    r_reason_sk: i64,
    r_reason_id: String,
    r_reason_desc: &'static str,
}

impl TableRow for ReasonRow {
    fn table(&self) -> Table {
        Table::Reason
    }

    fn values(&self) -> Vec<Option<String>> {
        let mut builder = RowBuilder::new(self.null_bitmap);
        builder.put_key(self.r_reason_sk);
        builder.put_string(&self.r_reason_id);
        builder.put_string(self.r_reason_desc);
        builder.finish()
    }
}

pub struct ReasonRowGenerator {
    streams: StreamBank,
}

impl ReasonRowGenerator {
    pub fn new() -> Self {
        Self { streams: StreamBank::new(STREAMS) }
    }
}

impl Default for ReasonRowGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGenerator for ReasonRowGenerator {
    fn table(&self) -> Table {
        Table::Reason
    }

    fn generate_row_and_child_rows(
        &mut self,
        row_number: i64,
        session: &Session,
        _parent: Option<&mut (dyn RowGenerator + '_)>,
        _child: Option<&mut (dyn RowGenerator + '_)>,
    ) -> GenResult<RowGeneratorResult> {
        let null_bitmap = create_null_bitmap(Table::Reason, self.streams.stream(R_NULLS));
        let row = ReasonRow {
            null_bitmap,
            r_reason_sk: row_number,
            r_reason_id: to_business_key(row_number),
            r_reason_desc: session
                .distributions()
                .return_reasons
                .value_for_index_mod_size(row_number - 1),
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
