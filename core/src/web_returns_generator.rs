//! Web returns fact table.
//!
//! Return rows ride along with their parent sale. When returns are
//! generated on their own, this generator drives the sales generator
//! over the same row range and keeps only the return rows.

use std::any::Any;

use anyhow::anyhow;

use crate::error::GenResult;
use crate::generator::{RowGenerator, RowGeneratorResult};
use crate::join_key::{pick_random_join_key, pick_random_return_date, pick_random_web_time};
use crate::nulls::create_null_bitmap;
use crate::pricing::{generate_pricing_for_returns_table, Pricing};
use crate::rng::StreamBank;
use crate::row::{RowBuilder, TableRow};
use crate::session::Session;
use crate::table::Table;
use crate::types::Julian;
use crate::value_generator::generate_uniform_random_int;
use crate::web_sales_generator::WebSalesRow;

// Stream slots. NEVER reorder, only append.
const WR_NULLS: usize = 0;
const WR_RETURNED_DATE_SK: usize = 1;
const WR_RETURNED_TIME_SK: usize = 2;
const WR_REFUNDED_CUSTOMER_SK: usize = 3;
const WR_REFUNDED_CDEMO_SK: usize = 4;
const WR_REFUNDED_HDEMO_SK: usize = 5;
const WR_REFUNDED_ADDR_SK: usize = 6;
const WR_REASON_SK: usize = 7;
const WR_PRICING: usize = 8;

// Per-order allotments sized for the 16 line item maximum.
const STREAMS: &[(i32, i32)] = &[
    (290, 32), // nulls
    (291, 16), // returned date lag
    (292, 16), // returned time
    (293, 32), // refunded customer plus gift test
    (294, 16), // refunded customer demographics
    (295, 16), // refunded household demographics
    (296, 16), // refunded address
    (297, 16), // reason
    (298, 64), // quantity and returns pricing
];

const GIFT_PERCENTAGE: i32 = 7;

pub struct WebReturnsRow {
    null_bitmap: i64,
    wr_returned_date_sk: Julian,
    wr_returned_time_sk: i64,
    wr_item_sk: i64,
    wr_refunded_customer_sk: i64,
    wr_refunded_cdemo_sk: i64,
    wr_refunded_hdemo_sk: i64,
    wr_refunded_addr_sk: i64,
    wr_returning_customer_sk: i64,
    wr_returning_cdemo_sk: i64,
    wr_returning_hdemo_sk: i64,
    wr_returning_addr_sk: i64,
    wr_web_page_sk: i64,
    wr_reason_sk: i64,
    wr_order_number: i64,
    pricing: Pricing,
}

impl TableRow for WebReturnsRow {
    fn table(&self) -> Table {
        Table::WebReturns
    }

    fn values(&self) -> Vec<Option<String>> {
        let mut builder = RowBuilder::new(self.null_bitmap);
        builder.put_key(i64::from(self.wr_returned_date_sk));
        builder.put_key(self.wr_returned_time_sk);
        builder.put_key(self.wr_item_sk);
        builder.put_key(self.wr_refunded_customer_sk);
        builder.put_key(self.wr_refunded_cdemo_sk);
        builder.put_key(self.wr_refunded_hdemo_sk);
        builder.put_key(self.wr_refunded_addr_sk);
        builder.put_key(self.wr_returning_customer_sk);
        builder.put_key(self.wr_returning_cdemo_sk);
        builder.put_key(self.wr_returning_hdemo_sk);
        builder.put_key(self.wr_returning_addr_sk);
        builder.put_key(self.wr_web_page_sk);
        builder.put_key(self.wr_reason_sk);
        builder.put_key(self.wr_order_number);
        builder.put_int(i64::from(self.pricing.quantity));
        builder.put_decimal(&self.pricing.net_paid);
        builder.put_decimal(&self.pricing.ext_tax);
        builder.put_decimal(&self.pricing.net_paid_including_tax);
        builder.put_decimal(&self.pricing.fee);
        builder.put_decimal(&self.pricing.ext_ship_cost);
        builder.put_decimal(&self.pricing.refunded_cash);
        builder.put_decimal(&self.pricing.reversed_charge);
        builder.put_decimal(&self.pricing.account_credit);
        builder.put_decimal(&self.pricing.net_loss);
        builder.finish()
    }
}

pub struct WebReturnsRowGenerator {
    streams: StreamBank,
}

impl WebReturnsRowGenerator {
    pub fn new() -> Self {
        Self { streams: StreamBank::new(STREAMS) }
    }

    /// Builds the return for one sold line item. Called by the sales
    /// generator when its return coin flip comes up.
    pub fn generate_returns_row(
        &mut self,
        session: &Session,
        sale: &WebSalesRow,
    ) -> GenResult<WebReturnsRow> {
        let scaling = session.scaling();
        let null_bitmap = create_null_bitmap(Table::WebReturns, self.streams.stream(WR_NULLS));

        let returned_date = pick_random_return_date(
            sale.ws_ship_date_sk,
            self.streams.stream(WR_RETURNED_DATE_SK),
        );
        let returned_time =
            i64::from(pick_random_web_time(self.streams.stream(WR_RETURNED_TIME_SK)));

        let mut refunded_customer_sk = pick_random_join_key(
            Table::Customer,
            scaling,
            self.streams.stream(WR_REFUNDED_CUSTOMER_SK),
        );
        let mut refunded_cdemo_sk = pick_random_join_key(
            Table::CustomerDemographics,
            scaling,
            self.streams.stream(WR_REFUNDED_CDEMO_SK),
        );
        let mut refunded_hdemo_sk = pick_random_join_key(
            Table::HouseholdDemographics,
            scaling,
            self.streams.stream(WR_REFUNDED_HDEMO_SK),
        );
        let mut refunded_addr_sk = pick_random_join_key(
            Table::CustomerAddress,
            scaling,
            self.streams.stream(WR_REFUNDED_ADDR_SK),
        );
        // Gifts come back from whoever received them.
        let gift = generate_uniform_random_int(
            0,
            99,
            self.streams.stream(WR_REFUNDED_CUSTOMER_SK),
        );
        if gift < GIFT_PERCENTAGE {
            refunded_customer_sk = sale.ws_ship_customer_sk;
            refunded_cdemo_sk = sale.ws_ship_cdemo_sk;
            refunded_hdemo_sk = sale.ws_ship_hdemo_sk;
            refunded_addr_sk = sale.ws_ship_addr_sk;
        }

        let reason_sk =
            pick_random_join_key(Table::Reason, scaling, self.streams.stream(WR_REASON_SK));

        let quantity = generate_uniform_random_int(
            1,
            sale.pricing.quantity,
            self.streams.stream(WR_PRICING),
        );
        let pricing = generate_pricing_for_returns_table(
            &sale.pricing,
            quantity,
            self.streams.stream(WR_PRICING),
        );

        Ok(WebReturnsRow {
            null_bitmap,
            wr_returned_date_sk: returned_date,
            wr_returned_time_sk: returned_time,
            wr_item_sk: sale.ws_item_sk,
            wr_refunded_customer_sk: refunded_customer_sk,
            wr_refunded_cdemo_sk: refunded_cdemo_sk,
            wr_refunded_hdemo_sk: refunded_hdemo_sk,
            wr_refunded_addr_sk: refunded_addr_sk,
            wr_returning_customer_sk: refunded_customer_sk,
            wr_returning_cdemo_sk: refunded_cdemo_sk,
            wr_returning_hdemo_sk: refunded_hdemo_sk,
            wr_returning_addr_sk: refunded_addr_sk,
            wr_web_page_sk: sale.ws_web_page_sk,
            wr_reason_sk: reason_sk,
            wr_order_number: sale.ws_order_number,
            pricing,
        })
    }
}

impl Default for WebReturnsRowGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGenerator for WebReturnsRowGenerator {
    fn table(&self) -> Table {
        Table::WebReturns
    }

    /// Standalone generation: run the parent over the same row number
    /// and keep whatever return rows fall out.
    fn generate_row_and_child_rows(
        &mut self,
        row_number: i64,
        session: &Session,
        parent: Option<&mut (dyn RowGenerator + '_)>,
        _child: Option<&mut (dyn RowGenerator + '_)>,
    ) -> GenResult<RowGeneratorResult> {
        let parent = parent.ok_or_else(|| anyhow!("web returns needs a web sales parent"))?;
        let mut result =
            parent.generate_row_and_child_rows(row_number, session, None, Some(self))?;
        let rows = if result.rows.len() == 2 {
            vec![result.rows.remove(1)]
        } else {
            Vec::new()
        };
        Ok(RowGeneratorResult::of(rows, result.ends_row))
    }

    fn stream_bank(&mut self) -> &mut StreamBank {
        &mut self.streams
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
