//! Customer demographics: the full cross product of every demographic
//! attribute, laid out by decomposing the row number. No draws beyond
//! the null bitmap, so any row can be produced without its neighbors.

use std::any::Any;

use crate::error::GenResult;
use crate::generator::{RowGenerator, RowGeneratorResult};
use crate::nulls::create_null_bitmap;
use crate::rng::StreamBank;
use crate::row::{RowBuilder, TableRow};
use crate::session::Session;
use crate::table::Table;

// Stream slots. NEVER reorder, only append.
const CD_NULLS: usize = 0;

const STREAMS: &[(i32, i32)] = &[
    (110, 2), // nulls
];

pub struct CustomerDemographicsRow {
    null_bitmap: i64,
    cd_demo_sk: i64,
    cd_gender: &'static str,
    cd_marital_status: &'static str,
    cd_education_status: &'static str,
    cd_purchase_estimate: &'static str,
    cd_credit_rating: &'static str,
    cd_dep_count: i64,
    cd_dep_employed_count: i64,
    cd_dep_college_count: i64,
}

impl TableRow for CustomerDemographicsRow {
    fn table(&self) -> Table {
        Table::CustomerDemographics
    }

    fn values(&self) -> Vec<Option<String>> {
        let mut builder = RowBuilder::new(self.null_bitmap);
        builder.put_key(self.cd_demo_sk);
        builder.put_string(self.cd_gender);
        builder.put_string(self.cd_marital_status);
        builder.put_string(self.cd_education_status);
        builder.put_string(self.cd_purchase_estimate);
        builder.put_string(self.cd_credit_rating);
        builder.put_int(self.cd_dep_count);
        builder.put_int(self.cd_dep_employed_count);
        builder.put_int(self.cd_dep_college_count);
        builder.finish()
    }
}

pub struct CustomerDemographicsRowGenerator {
    streams: StreamBank,
}

impl CustomerDemographicsRowGenerator {
    pub fn new() -> Self {
        Self { streams: StreamBank::new(STREAMS) }
    }
}

impl Default for CustomerDemographicsRowGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGenerator for CustomerDemographicsRowGenerator {
    fn table(&self) -> Table {
        Table::CustomerDemographics
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
            create_null_bitmap(Table::CustomerDemographics, self.streams.stream(CD_NULLS));

        // Attribute order is fixed: earlier attributes cycle faster.
        let mut index = row_number - 1;
        let gender = distributions.genders.value_for_index_mod_size(index);
        index /= distributions.genders.size() as i64;
        let marital_status = distributions.marital_statuses.value_for_index_mod_size(index);
        index /= distributions.marital_statuses.size() as i64;
        let education = distributions.education_levels.value_for_index_mod_size(index);
        index /= distributions.education_levels.size() as i64;
        let purchase_estimate = distributions.purchase_bands.value_for_index_mod_size(index);
        index /= distributions.purchase_bands.size() as i64;
        let credit_rating = distributions.credit_ratings.value_for_index_mod_size(index);
        index /= distributions.credit_ratings.size() as i64;
        let dep_count = index % 7;
        index /= 7;
        let dep_employed_count = index % 7;
        index /= 7;
        let dep_college_count = index % 7;

        let row = CustomerDemographicsRow {
            null_bitmap,
            cd_demo_sk: row_number,
            cd_gender: gender,
            cd_marital_status: marital_status,
            cd_education_status: education,
            cd_purchase_estimate: purchase_estimate,
            cd_credit_rating: credit_rating,
            cd_dep_count: dep_count,
            cd_dep_employed_count: dep_employed_count,
            cd_dep_college_count: dep_college_count,
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
