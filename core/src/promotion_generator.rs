//! Promotion dimension.

use std::any::Any;

use crate::business_key::to_business_key;
use crate::dates::JULIAN_DATA_START;
use crate::decimal::Decimal;
use crate::error::GenResult;
use crate::generator::{RowGenerator, RowGeneratorResult};
use crate::nulls::create_null_bitmap;
use crate::rng::StreamBank;
use crate::row::{RowBuilder, TableRow};
use crate::scd::pick_random_scd_key;
use crate::session::Session;
use crate::table::Table;
use crate::types::Julian;
use crate::value_generator::{generate_random_text, generate_uniform_random_int, generate_word};

// Stream slots. NEVER reorder, only append.
const P_NULLS: usize = 0;
const P_START_DATE: usize = 1;
const P_END_DATE: usize = 2;
const P_ITEM_SK: usize = 3;
const P_CHANNEL_FLAGS: usize = 4;
const P_CHANNEL_DETAILS: usize = 5;

const STREAMS: &[(i32, i32)] = &[
    (190, 2),   // nulls
    (191, 1),   // start date offset
    (192, 1),   // duration
    (193, 1),   // item join
    (194, 1),   // channel flag bits
    (195, 100), // details text, worst case sentence budget
];

const PROMOTION_COST: Decimal = Decimal::new(100_000, 2);

pub struct PromotionRow {
    null_bitmap: i64,
    p_promo_sk: i64,
    p_promo_id: String,
    p_start_date_sk: Julian,
    p_end_date_sk: Julian,
    p_item_sk: i64,
    p_cost: Decimal,
    p_response_target: i64,
    p_promo_name: String,
    p_channel_dmail: bool,
    p_channel_email: bool,
    p_channel_catalog: bool,
    p_channel_tv: bool,
    p_channel_radio: bool,
    p_channel_press: bool,
    p_channel_event: bool,
    p_channel_demo: bool,
    p_channel_details: String,
    p_purpose: &'static str,
}

impl TableRow for PromotionRow {
    fn table(&self) -> Table {
        Table::Promotion
    }

    fn values(&self) -> Vec<Option<String>> {
        let mut builder = RowBuilder::new(self.null_bitmap);
        builder.put_key(self.p_promo_sk);
        builder.put_string(&self.p_promo_id);
        builder.put_key(i64::from(self.p_start_date_sk));
        builder.put_key(i64::from(self.p_end_date_sk));
        builder.put_key(self.p_item_sk);
        builder.put_decimal(&self.p_cost);
        builder.put_int(self.p_response_target);
        builder.put_string(&self.p_promo_name);
        builder.put_boolean(self.p_channel_dmail);
        builder.put_boolean(self.p_channel_email);
        builder.put_boolean(self.p_channel_catalog);
        builder.put_boolean(self.p_channel_tv);
        builder.put_boolean(self.p_channel_radio);
        builder.put_boolean(self.p_channel_press);
        builder.put_boolean(self.p_channel_event);
        builder.put_boolean(self.p_channel_demo);
        builder.put_string(&self.p_channel_details);
        builder.put_string(self.p_purpose);
        // Discount-active carries no generated value.
        builder.put_string("");
        builder.finish()
    }
}

pub struct PromotionRowGenerator {
    streams: StreamBank,
}

impl PromotionRowGenerator {
    pub fn new() -> Self {
        Self { streams: StreamBank::new(STREAMS) }
    }
}

impl Default for PromotionRowGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGenerator for PromotionRowGenerator {
    fn table(&self) -> Table {
        Table::Promotion
    }

    fn generate_row_and_child_rows(
        &mut self,
        row_number: i64,
        session: &Session,
        _parent: Option<&mut (dyn RowGenerator + '_)>,
        _child: Option<&mut (dyn RowGenerator + '_)>,
    ) -> GenResult<RowGeneratorResult> {
        let distributions = session.distributions();
        let null_bitmap = create_null_bitmap(Table::Promotion, self.streams.stream(P_NULLS));

        // Promotions can begin well before the sales window opens.
        let start_date = JULIAN_DATA_START
            + generate_uniform_random_int(-720, 100, self.streams.stream(P_START_DATE));
        let end_date =
            start_date + generate_uniform_random_int(1, 60, self.streams.stream(P_END_DATE));
        let item_sk = pick_random_scd_key(
            Table::Item,
            JULIAN_DATA_START,
            session.scaling(),
            self.streams.stream(P_ITEM_SK),
        );

        // Each channel test looks at the low bit and the flag word is
        // shifted left afterwards, so only direct mail ever varies.
        // That shape is part of the output contract.
        let mut flags =
            generate_uniform_random_int(0, 511, self.streams.stream(P_CHANNEL_FLAGS));
        let mut next_channel = || {
            let active = flags & 0x01 != 0;
            flags <<= 1;
            active
        };
        let p_channel_dmail = next_channel();
        let p_channel_email = next_channel();
        let p_channel_catalog = next_channel();
        let p_channel_tv = next_channel();
        let p_channel_radio = next_channel();
        let p_channel_press = next_channel();
        let p_channel_event = next_channel();
        let p_channel_demo = next_channel();

        let row = PromotionRow {
            null_bitmap,
            p_promo_sk: row_number,
            p_promo_id: to_business_key(row_number),
            p_start_date_sk: start_date,
            p_end_date_sk: end_date,
            p_item_sk: item_sk,
            p_cost: PROMOTION_COST,
            p_response_target: 1,
            p_promo_name: generate_word(row_number, 5, &distributions.syllables),
            p_channel_dmail,
            p_channel_email,
            p_channel_catalog,
            p_channel_tv,
            p_channel_radio,
            p_channel_press,
            p_channel_event,
            p_channel_demo,
            p_channel_details: generate_random_text(
                20,
                60,
                self.streams.stream(P_CHANNEL_DETAILS),
                distributions,
            ),
            p_purpose: "Unknown",
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
