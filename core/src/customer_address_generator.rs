//! Customer address dimension.

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

// Stream slots. NEVER reorder, only append.
const CA_NULLS: usize = 0;
const CA_ADDRESS: usize = 1;
const CA_LOCATION_TYPE: usize = 2;

const STREAMS: &[(i32, i32)] = &[
    (150, 2), // nulls
    (151, 7), // street through county, one block
    (152, 1), // location type
];

pub struct CustomerAddressRow {
    null_bitmap: i64,
    ca_address_sk: i64,
    ca_address_id: String,
    address: Address,
    ca_location_type: &'static str,
}

impl TableRow for CustomerAddressRow {
    fn table(&self) -> Table {
        Table::CustomerAddress
    }

    fn values(&self) -> Vec<Option<String>> {
        let mut builder = RowBuilder::new(self.null_bitmap);
        builder.put_key(self.ca_address_sk);
        builder.put_string(&self.ca_address_id);
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
        builder.put_string(self.ca_location_type);
        builder.finish()
    }
}

pub struct CustomerAddressRowGenerator {
    streams: StreamBank,
}

impl CustomerAddressRowGenerator {
    pub fn new() -> Self {
        Self { streams: StreamBank::new(STREAMS) }
    }
}

impl Default for CustomerAddressRowGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGenerator for CustomerAddressRowGenerator {
    fn table(&self) -> Table {
        Table::CustomerAddress
    }

    fn generate_row_and_child_rows(
        &mut self,
        row_number: i64,
        session: &Session,
        _parent: Option<&mut (dyn RowGenerator + '_)>,
        _child: Option<&mut (dyn RowGenerator + '_)>,
    ) -> GenResult<RowGeneratorResult> {
        let null_bitmap =
            create_null_bitmap(Table::CustomerAddress, self.streams.stream(CA_NULLS));
        let address = make_address(
            Table::CustomerAddress,
            session.scaling(),
            session.distributions(),
            self.streams.stream(CA_ADDRESS),
        );
        let row = CustomerAddressRow {
            null_bitmap,
            ca_address_sk: row_number,
            ca_address_id: to_business_key(row_number),
            address,
            ca_location_type: session
                .distributions()
                .location_types
                .pick_random_value(0, self.streams.stream(CA_LOCATION_TYPE)),
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
