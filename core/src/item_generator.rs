//! Item dimension with revision history.
//!
//! Items come out in 6-row cycles covering 3 business keys. Fields of
//! a revised row either carry over from the previous row or are drawn
//! fresh, selected bit by bit from a per-row change mask. Every draw
//! happens whether or not its value is kept, so the streams stay
//! aligned with skip-ahead.

use std::any::Any;

use crate::decimal::Decimal;
use crate::error::GenResult;
use crate::generator::{RowGenerator, RowGeneratorResult};
use crate::nulls::create_null_bitmap;
use crate::rng::StreamBank;
use crate::row::{RowBuilder, TableRow};
use crate::scd::{compute_scd_key, scd_field};
use crate::session::Session;
use crate::table::Table;
use crate::types::{Julian, NULL_KEY};
use crate::value_generator::{
    generate_random_charset, generate_random_text, generate_uniform_random_decimal,
    generate_uniform_random_int, generate_uniform_random_key, generate_word, DIGITS,
};
use crate::distribution::items::{COLORS_SKEWED, SIZES_NO_SIZE, SIZES_SIZED};
use crate::join_key::pick_random_join_key;

// Stream slots. NEVER reorder, only append.
const I_NULLS: usize = 0;
const I_MANAGER_ID: usize = 1;
const I_SCD: usize = 2;
const I_ITEM_DESC: usize = 3;
const I_CATEGORY: usize = 4;
const I_CLASS: usize = 5;
const I_CURRENT_PRICE: usize = 6;
const I_WHOLESALE_COST: usize = 7;
const I_SIZE: usize = 8;
const I_MANUFACT_ID: usize = 9;
const I_FORMULATION: usize = 10;
const I_COLOR: usize = 11;
const I_UNITS: usize = 12;
const I_PROMO_SK: usize = 13;

const STREAMS: &[(i32, i32)] = &[
    (210, 2),   // nulls
    (211, 2),   // manager range pick plus id
    (212, 1),   // field change mask
    (213, 250), // description text, worst case sentence budget
    (214, 1),   // category pick
    (215, 1),   // class pick
    (216, 2),   // price range pick plus price
    (217, 1),   // wholesale markdown
    (218, 1),   // size pick
    (219, 2),   // manufacturer range pick plus id
    (220, 23),  // formulation charset, color and splice position
    (221, 1),   // color pick
    (222, 1),   // units pick
    (223, 2),   // promotion join plus usage gate
];

const PROMOTION_USAGE_PERCENT: i32 = 20;
const MIN_MARKDOWN: Decimal = Decimal::new(30, 2);
const MAX_MARKDOWN: Decimal = Decimal::new(90, 2);

#[derive(Clone)]
pub struct ItemRow {
    null_bitmap: i64,
    i_item_sk: i64,
    i_item_id: String,
    i_rec_start_date: Julian,
    i_rec_end_date: Julian,
    i_item_desc: String,
    i_current_price: Decimal,
    i_wholesale_cost: Decimal,
    i_brand_id: i64,
    i_brand: String,
    i_class_id: i64,
    i_class: &'static str,
    i_category_id: i64,
    i_category: &'static str,
    i_manufact_id: i64,
    i_manufact: String,
    i_size: &'static str,
    i_formulation: String,
    i_color: &'static str,
    i_units: &'static str,
    i_container: &'static str,
    i_manager_id: i64,
    i_product_name: String,
    i_promo_sk: i64,
}

impl TableRow for ItemRow {
    fn table(&self) -> Table {
        Table::Item
    }

    fn values(&self) -> Vec<Option<String>> {
        let mut builder = RowBuilder::new(self.null_bitmap);
        builder.put_key(self.i_item_sk);
        builder.put_string(&self.i_item_id);
        builder.put_date(self.i_rec_start_date);
        builder.put_date(self.i_rec_end_date);
        builder.put_string(&self.i_item_desc);
        builder.put_decimal(&self.i_current_price);
        builder.put_decimal(&self.i_wholesale_cost);
        builder.put_key(self.i_brand_id);
        builder.put_string(&self.i_brand);
        builder.put_key(self.i_class_id);
        builder.put_string(self.i_class);
        builder.put_key(self.i_category_id);
        builder.put_string(self.i_category);
        builder.put_key(self.i_manufact_id);
        builder.put_string(&self.i_manufact);
        builder.put_string(self.i_size);
        builder.put_string(&self.i_formulation);
        builder.put_string(self.i_color);
        builder.put_string(self.i_units);
        builder.put_string(self.i_container);
        builder.put_key(self.i_manager_id);
        builder.put_string(&self.i_product_name);
        builder.put_key(self.i_promo_sk);
        builder.finish()
    }
}

pub struct ItemRowGenerator {
    streams: StreamBank,
    previous_row: Option<ItemRow>,
}

impl ItemRowGenerator {
    pub fn new() -> Self {
        Self { streams: StreamBank::new(STREAMS), previous_row: None }
    }
}

impl Default for ItemRowGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGenerator for ItemRowGenerator {
    fn table(&self) -> Table {
        Table::Item
    }

    fn generate_row_and_child_rows(
        &mut self,
        row_number: i64,
        session: &Session,
        _parent: Option<&mut (dyn RowGenerator + '_)>,
        _child: Option<&mut (dyn RowGenerator + '_)>,
    ) -> GenResult<RowGeneratorResult> {
        let distributions = session.distributions();
        let items = &distributions.items;
        let old = &self.previous_row;

        let null_bitmap = create_null_bitmap(Table::Item, self.streams.stream(I_NULLS));

        let manager_range = items.pick_random_manager_id_range(self.streams.stream(I_MANAGER_ID));
        let manager_id = generate_uniform_random_key(
            i64::from(manager_range.0),
            i64::from(manager_range.1),
            self.streams.stream(I_MANAGER_ID),
        );

        let scd = compute_scd_key(Table::Item, row_number);
        let is_new = scd.is_new_business_key;
        let mut change_flags = self.streams.stream(I_SCD).next_random();

        let item_desc = scd_field(
            is_new,
            &mut change_flags,
            generate_random_text(1, 200, self.streams.stream(I_ITEM_DESC), distributions),
            &old.as_ref().map(|row| row.i_item_desc.clone()),
        );

        // Current price ignores its change bit and is always drawn
        // fresh, but the bit is still consumed. Part of the output
        // contract.
        let price_range =
            items.pick_random_current_price_range(self.streams.stream(I_CURRENT_PRICE));
        let current_price = generate_uniform_random_decimal(
            &price_range.0,
            &price_range.1,
            self.streams.stream(I_CURRENT_PRICE),
        );
        change_flags >>= 1;

        let markdown = generate_uniform_random_decimal(
            &MIN_MARKDOWN,
            &MAX_MARKDOWN,
            self.streams.stream(I_WHOLESALE_COST),
        );
        let wholesale_cost = scd_field(
            is_new,
            &mut change_flags,
            current_price.multiply(&markdown),
            &old.as_ref().map(|row| row.i_wholesale_cost),
        );

        // Category and the class and brand strings never consult the
        // change mask; only the class and brand ids do.
        let category_index = items.pick_random_category_index(self.streams.stream(I_CATEGORY));
        let category_id = category_index as i64 + 1;
        let category = items.category_at(category_index);

        let class =
            items.pick_random_category_class(category_index, self.streams.stream(I_CLASS));
        let new_class_id = class.id;
        let class_id = scd_field(
            is_new,
            &mut change_flags,
            new_class_id,
            &old.as_ref().map(|row| row.i_class_id),
        );

        let base_brand_id = row_number % i64::from(class.brand_count) + 1;
        let brand = format!(
            "{} #{}",
            generate_word(category_id * 10 + new_class_id, 45, items.brand_syllables()),
            base_brand_id,
        );
        let brand_id = scd_field(
            is_new,
            &mut change_flags,
            base_brand_id + (category_id * 1000 + new_class_id) * 1000,
            &old.as_ref().map(|row| row.i_brand_id),
        );

        // Size is always fresh like the price, and its bit is consumed
        // too.
        let size_weights = if items.category_has_size(category_index) {
            SIZES_SIZED
        } else {
            SIZES_NO_SIZE
        };
        let size = items.pick_random_size(size_weights, self.streams.stream(I_SIZE));
        change_flags >>= 1;

        let manufact_range =
            items.pick_random_manufact_id_range(self.streams.stream(I_MANUFACT_ID));
        let manufact_id = scd_field(
            is_new,
            &mut change_flags,
            i64::from(generate_uniform_random_int(
                manufact_range.0,
                manufact_range.1,
                self.streams.stream(I_MANUFACT_ID),
            )),
            &old.as_ref().map(|row| row.i_manufact_id),
        );
        let manufact = scd_field(
            is_new,
            &mut change_flags,
            generate_word(manufact_id, 50, &distributions.syllables),
            &old.as_ref().map(|row| row.i_manufact.clone()),
        );

        let formulation = scd_field(
            is_new,
            &mut change_flags,
            generate_formulation(items, self.streams.stream(I_FORMULATION)),
            &old.as_ref().map(|row| row.i_formulation.clone()),
        );

        let color = items.pick_random_color(COLORS_SKEWED, self.streams.stream(I_COLOR));
        let units = items.pick_random_unit(self.streams.stream(I_UNITS));

        let promo_sk = {
            let key = pick_random_join_key(
                Table::Promotion,
                session.scaling(),
                self.streams.stream(I_PROMO_SK),
            );
            let usage = generate_uniform_random_int(1, 100, self.streams.stream(I_PROMO_SK));
            if usage > PROMOTION_USAGE_PERCENT {
                NULL_KEY
            } else {
                key
            }
        };

        let row = ItemRow {
            null_bitmap,
            i_item_sk: row_number,
            i_item_id: scd.business_key,
            i_rec_start_date: scd.start_date,
            i_rec_end_date: scd.end_date,
            i_item_desc: item_desc,
            i_current_price: current_price,
            i_wholesale_cost: wholesale_cost,
            i_brand_id: brand_id,
            i_brand: brand,
            i_class_id: class_id,
            i_class: class.name,
            i_category_id: category_id,
            i_category: category,
            i_manufact_id: manufact_id,
            i_manufact: manufact,
            i_size: size,
            i_formulation: formulation,
            i_color: color,
            i_units: units,
            i_container: "Unknown",
            i_manager_id: manager_id,
            i_product_name: generate_word(row_number, 50, &distributions.syllables),
            i_promo_sk: promo_sk,
        };
        self.previous_row = Some(row.clone());
        Ok(RowGeneratorResult::single(Box::new(row)))
    }

    fn stream_bank(&mut self) -> &mut StreamBank {
        &mut self.streams
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Twenty digits with a color name spliced in at a random offset.
fn generate_formulation(
    items: &crate::distribution::items::ItemsDistributions,
    stream: &mut crate::rng::RandomNumberStream,
) -> String {
    let mut formulation = generate_random_charset(DIGITS, 20, 20, stream);
    let color = items.pick_random_color(COLORS_SKEWED, stream);
    let max_offset = formulation.len().saturating_sub(color.len() + 1);
    let offset = generate_uniform_random_int(0, max_offset as i32, stream) as usize;
    formulation.replace_range(offset..offset + color.len(), color);
    formulation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::items::ItemsDistributions;
    use crate::rng::RandomNumberStream;

    // The heavily weighted front of the color table.
    const COMMON_COLORS: &[&str] = &[
        "almond", "antique", "aquamarine", "azure", "beige", "bisque", "black", "blue", "blush",
        "brown", "burlywood", "burnished", "chartreuse", "chiffon", "chocolate", "coral",
    ];

    #[test]
    fn formulation_colors_lean_on_the_common_set() {
        let items = ItemsDistributions::new();
        let mut stream = RandomNumberStream::new(220, 23);
        let trials = 2000;
        let mut common = 0;
        for _ in 0..trials {
            let formulation = generate_formulation(&items, &mut stream);
            assert_eq!(formulation.len(), 20);
            let color: String =
                formulation.chars().filter(|c| c.is_ascii_alphabetic()).collect();
            assert!(!color.is_empty(), "no color spliced into {formulation}");
            if COMMON_COLORS.contains(&color.as_str()) {
                common += 1;
            }
        }
        // A uniform pick would land near 0.18; the skewed set sits
        // around 0.64.
        let rate = f64::from(common) / f64::from(trials);
        assert!(rate > 0.45, "observed common color rate {rate}");
    }
}
