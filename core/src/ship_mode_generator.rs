//! Ship mode dimension. The 20 rows enumerate every (type, code)
//! combination; the carrier table lines up one to one with the rows.

use std::any::Any;

use crate::business_key::to_business_key;
use crate::error::GenResult;
use crate::generator::{RowGenerator, RowGeneratorResult};
use crate::nulls::create_null_bitmap;
use crate::rng::StreamBank;
use crate::row::{RowBuilder, TableRow};
use crate::session::Session;
use crate::table::Table;
use crate::value_generator::{generate_random_charset, ALPHA_NUMERIC};

// Stream slots. NEVER reorder, only append.
const SM_NULLS: usize = 0;
const SM_CONTRACT: usize = 1;

const STREAMS: &[(i32, i32)] = &[
    (70, 2),  // nulls
    (71, 21), // contract: one length draw plus one draw per character
];

pub struct ShipModeRow {
    null_bitmap: i64,
    sm_ship_mode_sk: i64,
    sm_ship_mode_id: String,
    sm_type: &'static str,
    sm_code: &'static str,
    sm_carrier: &'static str,
    sm_contract: String,
}

impl TableRow for ShipModeRow {
    fn table(&self) -> Table {
        Table::ShipMode
    }

    fn values(&self) -> Vec<Option<String>> {
        let mut builder = RowBuilder::new(self.null_bitmap);
        builder.put_key(self.sm_ship_mode_sk);
        builder.put_string(&self.sm_ship_mode_id);
        builder.put_string(self.sm_type);
        builder.put_string(self.sm_code);
        builder.put_string(self.sm_carrier);
        builder.put_string(&self.sm_contract);
        builder.finish()
    }
}

pub struct ShipModeRowGenerator {
    streams: StreamBank,
}

impl ShipModeRowGenerator {
    pub fn new() -> Self {
        Self { streams: StreamBank::new(STREAMS) }
    }
}

impl Default for ShipModeRowGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGenerator for ShipModeRowGenerator {
    fn table(&self) -> Table {
        Table::ShipMode
    }

    fn generate_row_and_child_rows(
        &mut self,
        row_number: i64,
        session: &Session,
        _parent: Option<&mut (dyn RowGenerator + '_)>,
        _child: Option<&mut (dyn RowGenerator + '_)>,
    ) -> GenResult<RowGeneratorResult> {
        let distributions = session.distributions();
        let null_bitmap = create_null_bitmap(Table::ShipMode, self.streams.stream(SM_NULLS));
        // Types cycle fastest; the code advances once per full cycle
        // of types.
        let sm_type = distributions.ship_mode_types.value_for_index_mod_size(row_number - 1);
        let code_index = (row_number - 1) / distributions.ship_mode_types.size() as i64;
        let sm_code = distributions.ship_mode_codes.value_for_index_mod_size(code_index);
        let row = ShipModeRow {
            null_bitmap,
            sm_ship_mode_sk: row_number,
            sm_ship_mode_id: to_business_key(row_number),
            sm_type,
            sm_code,
            sm_carrier: distributions
                .ship_mode_carriers
                .value_for_index_mod_size(row_number - 1),
            sm_contract: generate_random_charset(
                ALPHA_NUMERIC,
                1,
                20,
                self.streams.stream(SM_CONTRACT),
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
