//! The row generator contract.

use std::any::Any;

use crate::error::GenResult;
use crate::rng::StreamBank;
use crate::row::TableRow;
use crate::session::Session;
use crate::table::Table;

pub struct RowGeneratorResult {
    pub rows: Vec<Box<dyn TableRow>>,
    /// False while a multi-line order still has line items pending, in
    /// which case the driver calls again with the same row number.
    pub ends_row: bool,
}

impl RowGeneratorResult {
    pub fn single(row: Box<dyn TableRow>) -> Self {
        Self { rows: vec![row], ends_row: true }
    }

    pub fn of(rows: Vec<Box<dyn TableRow>>, ends_row: bool) -> Self {
        Self { rows, ends_row }
    }
}

pub trait RowGenerator {
    fn table(&self) -> Table;

    /// Produces the rows for one call at the given row number. A child
    /// generator receives its parent so the parent can drive both
    /// sides of the relationship from one pass over the streams.
    fn generate_row_and_child_rows(
        &mut self,
        row_number: i64,
        session: &Session,
        parent: Option<&mut (dyn RowGenerator + '_)>,
        child: Option<&mut (dyn RowGenerator + '_)>,
    ) -> GenResult<RowGeneratorResult>;

    fn stream_bank(&mut self) -> &mut StreamBank;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn skip_rows(&mut self, row_count: i64) {
        self.stream_bank().skip_rows(row_count);
    }

    /// Called once per completed logical row. Burns whatever each
    /// column stream did not draw so the next row starts aligned.
    fn finish_row(&mut self) {
        self.stream_bank().finish_row();
    }
}
