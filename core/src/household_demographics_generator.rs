//! Household demographics cross product, decomposed from the row
//! number the same way customer demographics is.

use std::any::Any;

use crate::error::GenResult;
use crate::generator::{RowGenerator, RowGeneratorResult};
use crate::nulls::create_null_bitmap;
use crate::rng::StreamBank;
use crate::row::{RowBuilder, TableRow};
use crate::session::Session;
use crate::table::Table;

// Stream slots. NEVER reorder, only append.
const HD_NULLS: usize = 0;

const STREAMS: &[(i32, i32)] = &[
    (130, 2), // nulls
];

const INCOME_BAND_COUNT: i64 = 20;
const DEP_COUNT_RANGE: i64 = 10;
const VEHICLE_COUNT_RANGE: i64 = 6;

pub struct HouseholdDemographicsRow {
    null_bitmap: i64,
    hd_demo_sk: i64,
    hd_income_band_sk: i64,
    hd_buy_potential: &'static str,
    hd_dep_count: i64,
    hd_vehicle_count: i64,
}

impl TableRow for HouseholdDemographicsRow {
    fn table(&self) -> Table {
        Table::HouseholdDemographics
    }

    fn values(&self) -> Vec<Option<String>> {
        let mut builder = RowBuilder::new(self.null_bitmap);
        builder.put_key(self.hd_demo_sk);
        builder.put_key(self.hd_income_band_sk);
        builder.put_string(self.hd_buy_potential);
        builder.put_int(self.hd_dep_count);
        builder.put_int(self.hd_vehicle_count);
        builder.finish()
    }
}

pub struct HouseholdDemographicsRowGenerator {
    streams: StreamBank,
}

impl HouseholdDemographicsRowGenerator {
    pub fn new() -> Self {
        Self { streams: StreamBank::new(STREAMS) }
    }
}

impl Default for HouseholdDemographicsRowGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGenerator for HouseholdDemographicsRowGenerator {
    fn table(&self) -> Table {
        Table::HouseholdDemographics
    }

    fn generate_row_and_child_rows(
        &mut self,
        row_number: i64,
        session: &Session,
        _parent: Option<&mut (dyn RowGenerator + '_)>,
        _child: Option<&mut (dyn RowGenerator + '_)>,
    ) -> GenResult<RowGeneratorResult> {
        let distributions = session.distributions();
        let null_bitmap =
            create_null_bitmap(Table::HouseholdDemographics, self.streams.stream(HD_NULLS));

        let mut index = row_number - 1;
        let income_band = index % INCOME_BAND_COUNT + 1;
        index /= INCOME_BAND_COUNT;
        let buy_potential = distributions.buy_potentials.value_for_index_mod_size(index);
        index /= distributions.buy_potentials.size() as i64;
        let dep_count = index % DEP_COUNT_RANGE;
        index /= DEP_COUNT_RANGE;
        // Vehicle counts run from -1 so one slot in six reads unknown.
        let vehicle_count = index % VEHICLE_COUNT_RANGE - 1;

        let row = HouseholdDemographicsRow {
            null_bitmap,
            hd_demo_sk: row_number,
            hd_income_band_sk: income_band,
            hd_buy_potential: buy_potential,
            hd_dep_count: dep_count,
            hd_vehicle_count: vehicle_count,
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
