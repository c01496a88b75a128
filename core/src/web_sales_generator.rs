//! Web sales fact table.
//!
//! A logical row is one order; the driver keeps calling with the same
//! row number until the order's line items run out. Roughly one line
//! in ten spawns a return row through the child generator.

use std::any::Any;

use anyhow::anyhow;

use crate::error::GenResult;
use crate::generator::{RowGenerator, RowGeneratorResult};
use crate::join_key::{pick_random_join_key, pick_random_sales_date, pick_random_web_time};
use crate::nulls::create_null_bitmap;
use crate::permutations::{get_permutation_entry, make_permutation};
use crate::pricing::{generate_pricing_for_sales_table, Pricing};
use crate::rng::StreamBank;
use crate::row::{RowBuilder, TableRow};
use crate::scd::{match_surrogate_key, pick_random_scd_key};
use crate::session::Session;
use crate::table::Table;
use crate::types::Julian;
use crate::value_generator::generate_uniform_random_int;
use crate::web_returns_generator::WebReturnsRowGenerator;

// Stream slots. NEVER reorder, only append.
const WS_NULLS: usize = 0;
const WS_SOLD_DATE_SK: usize = 1;
const WS_SOLD_TIME_SK: usize = 2;
const WS_SHIP_DATE_SK: usize = 3;
const WS_BILL_CUSTOMER_SK: usize = 4;
const WS_BILL_CDEMO_SK: usize = 5;
const WS_BILL_HDEMO_SK: usize = 6;
const WS_BILL_ADDR_SK: usize = 7;
const WS_SHIP_CUSTOMER_SK: usize = 8;
const WS_SHIP_CDEMO_SK: usize = 9;
const WS_SHIP_HDEMO_SK: usize = 10;
const WS_SHIP_ADDR_SK: usize = 11;
const WS_WEB_PAGE_SK: usize = 12;
const WS_WEB_SITE_SK: usize = 13;
const WS_SHIP_MODE_SK: usize = 14;
const WS_WAREHOUSE_SK: usize = 15;
const WS_PROMO_SK: usize = 16;
const WS_ITEM_SK: usize = 17;
const WS_ORDER_NUMBER: usize = 18;
const WS_PRICING: usize = 19;
const WS_PERMUTATION: usize = 20;
const WR_IS_RETURNED: usize = 21;

// Per-row allotments budget for the 16 line item maximum.
const STREAMS: &[(i32, i32)] = &[
    (260, 32),  // nulls
    (261, 2),   // sold date
    (262, 1),   // sold time
    (263, 16),  // ship lag
    (264, 1),   // bill customer
    (265, 1),   // bill customer demographics
    (266, 1),   // bill household demographics
    (267, 1),   // bill address
    (268, 2),   // gift test plus ship customer
    (269, 1),   // ship customer demographics
    (270, 1),   // ship household demographics
    (271, 1),   // ship address
    (272, 16),  // web page
    (273, 16),  // web site
    (274, 16),  // ship mode
    (275, 16),  // warehouse
    (276, 16),  // promotion
    (277, 1),   // item cursor start
    (278, 1),   // line item count
    (279, 128), // pricing
    (280, 0),   // item permutation, consumed once per chunk
    (281, 16),  // return coin flip
];

const GIFT_PERCENTAGE: i32 = 7;
const RETURN_PERCENTAGE: i32 = 10;
const MIN_LINE_ITEMS: i32 = 8;
const MAX_LINE_ITEMS: i32 = 16;

struct OrderInfo {
    order_number: i64,
    sold_date_sk: Julian,
    sold_time_sk: i64,
    bill_customer_sk: i64,
    bill_cdemo_sk: i64,
    bill_hdemo_sk: i64,
    bill_addr_sk: i64,
    ship_customer_sk: i64,
    ship_cdemo_sk: i64,
    ship_hdemo_sk: i64,
    ship_addr_sk: i64,
}

#[derive(Clone)]
pub struct WebSalesRow {
    pub(crate) null_bitmap: i64,
    pub(crate) ws_sold_date_sk: Julian,
    pub(crate) ws_sold_time_sk: i64,
    pub(crate) ws_ship_date_sk: Julian,
    pub(crate) ws_item_sk: i64,
    pub(crate) ws_bill_customer_sk: i64,
    pub(crate) ws_bill_cdemo_sk: i64,
    pub(crate) ws_bill_hdemo_sk: i64,
    pub(crate) ws_bill_addr_sk: i64,
    pub(crate) ws_ship_customer_sk: i64,
    pub(crate) ws_ship_cdemo_sk: i64,
    pub(crate) ws_ship_hdemo_sk: i64,
    pub(crate) ws_ship_addr_sk: i64,
    pub(crate) ws_web_page_sk: i64,
    pub(crate) ws_web_site_sk: i64,
    pub(crate) ws_ship_mode_sk: i64,
    pub(crate) ws_warehouse_sk: i64,
    pub(crate) ws_promo_sk: i64,
    pub(crate) ws_order_number: i64,
    pub(crate) pricing: Pricing,
}

impl TableRow for WebSalesRow {
    fn table(&self) -> Table {
        Table::WebSales
    }

    fn values(&self) -> Vec<Option<String>> {
        let mut builder = RowBuilder::new(self.null_bitmap);
        builder.put_key(i64::from(self.ws_sold_date_sk));
        builder.put_key(self.ws_sold_time_sk);
        builder.put_key(i64::from(self.ws_ship_date_sk));
        builder.put_key(self.ws_item_sk);
        builder.put_key(self.ws_bill_customer_sk);
        builder.put_key(self.ws_bill_cdemo_sk);
        builder.put_key(self.ws_bill_hdemo_sk);
        builder.put_key(self.ws_bill_addr_sk);
        builder.put_key(self.ws_ship_customer_sk);
        builder.put_key(self.ws_ship_cdemo_sk);
        builder.put_key(self.ws_ship_hdemo_sk);
        builder.put_key(self.ws_ship_addr_sk);
        builder.put_key(self.ws_web_page_sk);
        builder.put_key(self.ws_web_site_sk);
        builder.put_key(self.ws_ship_mode_sk);
        builder.put_key(self.ws_warehouse_sk);
        builder.put_key(self.ws_promo_sk);
        builder.put_key(self.ws_order_number);
        builder.put_int(i64::from(self.pricing.quantity));
        builder.put_decimal(&self.pricing.wholesale_cost);
        builder.put_decimal(&self.pricing.list_price);
        builder.put_decimal(&self.pricing.sales_price);
        builder.put_decimal(&self.pricing.ext_discount_amount);
        builder.put_decimal(&self.pricing.ext_sales_price);
        builder.put_decimal(&self.pricing.ext_wholesale_cost);
        builder.put_decimal(&self.pricing.ext_list_price);
        builder.put_decimal(&self.pricing.ext_tax);
        builder.put_decimal(&self.pricing.coupon_amount);
        builder.put_decimal(&self.pricing.ext_ship_cost);
        builder.put_decimal(&self.pricing.net_paid);
        builder.put_decimal(&self.pricing.net_paid_including_tax);
        builder.put_decimal(&self.pricing.net_paid_including_ship);
        builder.put_decimal(&self.pricing.net_paid_including_ship_and_tax);
        builder.put_decimal(&self.pricing.net_profit);
        builder.finish()
    }
}

pub struct WebSalesRowGenerator {
    streams: StreamBank,
    item_permutation: Option<Vec<i64>>,
    order: Option<OrderInfo>,
    remaining_line_items: i32,
    item_cursor: i64,
}

impl WebSalesRowGenerator {
    pub fn new() -> Self {
        Self {
            streams: StreamBank::new(STREAMS),
            item_permutation: None,
            order: None,
            remaining_line_items: 0,
            item_cursor: 0,
        }
    }

    fn generate_order_info(&mut self, row_number: i64, session: &Session) -> OrderInfo {
        let scaling = session.scaling();
        let sold_date_sk = pick_random_sales_date(
            &session.distributions().calendar,
            self.streams.stream(WS_SOLD_DATE_SK),
        );
        let sold_time_sk =
            i64::from(pick_random_web_time(self.streams.stream(WS_SOLD_TIME_SK)));

        let bill_customer_sk =
            pick_random_join_key(Table::Customer, scaling, self.streams.stream(WS_BILL_CUSTOMER_SK));
        let bill_cdemo_sk = pick_random_join_key(
            Table::CustomerDemographics,
            scaling,
            self.streams.stream(WS_BILL_CDEMO_SK),
        );
        let bill_hdemo_sk = pick_random_join_key(
            Table::HouseholdDemographics,
            scaling,
            self.streams.stream(WS_BILL_HDEMO_SK),
        );
        let bill_addr_sk =
            pick_random_join_key(Table::CustomerAddress, scaling, self.streams.stream(WS_BILL_ADDR_SK));

        // Ship-to starts as the buyer; the draw below usually swaps in
        // a different household.
        let mut ship_customer_sk = bill_customer_sk;
        let mut ship_cdemo_sk = bill_cdemo_sk;
        let mut ship_hdemo_sk = bill_hdemo_sk;
        let mut ship_addr_sk = bill_addr_sk;
        let gift = generate_uniform_random_int(0, 99, self.streams.stream(WS_SHIP_CUSTOMER_SK));
        if gift > GIFT_PERCENTAGE {
            ship_customer_sk = pick_random_join_key(
                Table::Customer,
                scaling,
                self.streams.stream(WS_SHIP_CUSTOMER_SK),
            );
            ship_cdemo_sk = pick_random_join_key(
                Table::CustomerDemographics,
                scaling,
                self.streams.stream(WS_SHIP_CDEMO_SK),
            );
            ship_hdemo_sk = pick_random_join_key(
                Table::HouseholdDemographics,
                scaling,
                self.streams.stream(WS_SHIP_HDEMO_SK),
            );
            ship_addr_sk = pick_random_join_key(
                Table::CustomerAddress,
                scaling,
                self.streams.stream(WS_SHIP_ADDR_SK),
            );
        }

        let item_count = scaling.id_count(Table::Item);
        self.item_cursor = generate_uniform_random_int(
            1,
            item_count as i32,
            self.streams.stream(WS_ITEM_SK),
        ) as i64;
        self.remaining_line_items = generate_uniform_random_int(
            MIN_LINE_ITEMS,
            MAX_LINE_ITEMS,
            self.streams.stream(WS_ORDER_NUMBER),
        );

        OrderInfo {
            order_number: row_number,
            sold_date_sk,
            sold_time_sk,
            bill_customer_sk,
            bill_cdemo_sk,
            bill_hdemo_sk,
            bill_addr_sk,
            ship_customer_sk,
            ship_cdemo_sk,
            ship_hdemo_sk,
            ship_addr_sk,
        }
    }
}

impl Default for WebSalesRowGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGenerator for WebSalesRowGenerator {
    fn table(&self) -> Table {
        Table::WebSales
    }

    fn generate_row_and_child_rows(
        &mut self,
        row_number: i64,
        session: &Session,
        _parent: Option<&mut (dyn RowGenerator + '_)>,
        child: Option<&mut (dyn RowGenerator + '_)>,
    ) -> GenResult<RowGeneratorResult> {
        let scaling = session.scaling();
        let item_count = scaling.id_count(Table::Item);
        if self.item_permutation.is_none() {
            log::debug!("building item permutation over {item_count} ids");
            self.item_permutation = Some(make_permutation(
                item_count,
                self.streams.stream(WS_PERMUTATION),
            ));
        }

        if self.remaining_line_items == 0 {
            self.order = Some(self.generate_order_info(row_number, session));
        }
        let order = self
            .order
            .as_ref()
            .ok_or_else(|| anyhow!("order info missing for row {row_number}"))?;
        let sold_date = order.sold_date_sk;

        let null_bitmap = create_null_bitmap(Table::WebSales, self.streams.stream(WS_NULLS));
        let ship_lag =
            generate_uniform_random_int(1, 120, self.streams.stream(WS_SHIP_DATE_SK));

        self.item_cursor += 1;
        if self.item_cursor > item_count {
            self.item_cursor = 1;
        }
        let permutation = self
            .item_permutation
            .as_ref()
            .ok_or_else(|| anyhow!("item permutation missing"))?;
        let item_id = get_permutation_entry(permutation, self.item_cursor);
        let item_sk = match_surrogate_key(item_id, sold_date, Table::Item, scaling);

        let web_page_sk = pick_random_scd_key(
            Table::WebPage,
            sold_date,
            scaling,
            self.streams.stream(WS_WEB_PAGE_SK),
        );
        let web_site_sk = pick_random_scd_key(
            Table::WebSite,
            sold_date,
            scaling,
            self.streams.stream(WS_WEB_SITE_SK),
        );
        let ship_mode_sk =
            pick_random_join_key(Table::ShipMode, scaling, self.streams.stream(WS_SHIP_MODE_SK));
        let warehouse_sk =
            pick_random_join_key(Table::Warehouse, scaling, self.streams.stream(WS_WAREHOUSE_SK));
        let promo_sk =
            pick_random_join_key(Table::Promotion, scaling, self.streams.stream(WS_PROMO_SK));
        let pricing = generate_pricing_for_sales_table(self.streams.stream(WS_PRICING));

        let sale = WebSalesRow {
            null_bitmap,
            ws_sold_date_sk: sold_date,
            ws_sold_time_sk: order.sold_time_sk,
            ws_ship_date_sk: sold_date + ship_lag,
            ws_item_sk: item_sk,
            ws_bill_customer_sk: order.bill_customer_sk,
            ws_bill_cdemo_sk: order.bill_cdemo_sk,
            ws_bill_hdemo_sk: order.bill_hdemo_sk,
            ws_bill_addr_sk: order.bill_addr_sk,
            ws_ship_customer_sk: order.ship_customer_sk,
            ws_ship_cdemo_sk: order.ship_cdemo_sk,
            ws_ship_hdemo_sk: order.ship_hdemo_sk,
            ws_ship_addr_sk: order.ship_addr_sk,
            ws_web_page_sk: web_page_sk,
            ws_web_site_sk: web_site_sk,
            ws_ship_mode_sk: ship_mode_sk,
            ws_warehouse_sk: warehouse_sk,
            ws_promo_sk: promo_sk,
            ws_order_number: order.order_number,
            pricing,
        };

        let mut rows: Vec<Box<dyn TableRow>> = Vec::with_capacity(2);
        // The return coin flip happens even when returns are switched
        // off, to keep the stream positions identical either way.
        let returned =
            generate_uniform_random_int(0, 99, self.streams.stream(WR_IS_RETURNED))
                < RETURN_PERCENTAGE;
        if returned && session.only_table() != Some(Table::WebSales) {
            if let Some(child) = child {
                let returns = child
                    .as_any_mut()
                    .downcast_mut::<WebReturnsRowGenerator>()
                    .ok_or_else(|| anyhow!("web sales child must generate web returns"))?;
                let return_row = returns.generate_returns_row(session, &sale)?;
                rows.push(Box::new(sale));
                rows.push(Box::new(return_row));
            } else {
                rows.push(Box::new(sale));
            }
        } else {
            rows.push(Box::new(sale));
        }

        self.remaining_line_items -= 1;
        Ok(RowGeneratorResult::of(rows, self.remaining_line_items == 0))
    }

    fn stream_bank(&mut self) -> &mut StreamBank {
        &mut self.streams
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
