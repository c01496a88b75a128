//! Sales and returns pricing.
//!
//! Every monetary column on a fact row derives from one block of draws
//! on a single pricing stream, so the draw order is part of the wire
//! format and must not change.

use crate::decimal::{Decimal, ONE, ZERO};
use crate::rng::RandomNumberStream;
use crate::value_generator::{generate_uniform_random_decimal, generate_uniform_random_int};

const MIN_WHOLESALE_COST: Decimal = Decimal::new(100, 2);
const MAX_WHOLESALE_COST: Decimal = Decimal::new(10000, 2);
const MIN_MARKUP: Decimal = Decimal::new(0, 2);
const MAX_MARKUP: Decimal = Decimal::new(200, 2);
const MIN_DISCOUNT: Decimal = Decimal::new(0, 2);
const MAX_DISCOUNT: Decimal = Decimal::new(100, 2);
const MIN_COUPON_PERCENT: Decimal = Decimal::new(0, 2);
const MAX_COUPON_PERCENT: Decimal = Decimal::new(100, 2);
const MIN_SHIP_PERCENT: Decimal = Decimal::new(0, 2);
const MAX_SHIP_PERCENT: Decimal = Decimal::new(75, 2);
const MIN_TAX_PERCENT: Decimal = Decimal::new(0, 2);
const MAX_TAX_PERCENT: Decimal = Decimal::new(9, 2);
const MIN_FEE: Decimal = Decimal::new(50, 2);
const MAX_FEE: Decimal = Decimal::new(10000, 2);
const COUPON_USAGE_PERCENT: i32 = 20;

#[derive(Clone, Default)]
pub struct Pricing {
    pub quantity: i32,
    pub wholesale_cost: Decimal,
    pub ext_wholesale_cost: Decimal,
    pub list_price: Decimal,
    pub sales_price: Decimal,
    pub ext_discount_amount: Decimal,
    pub ext_sales_price: Decimal,
    pub ext_list_price: Decimal,
    pub coupon_amount: Decimal,
    pub ship_cost: Decimal,
    pub ext_ship_cost: Decimal,
    pub net_paid: Decimal,
    pub net_paid_including_ship: Decimal,
    pub tax_percent: Decimal,
    pub ext_tax: Decimal,
    pub net_paid_including_tax: Decimal,
    pub net_paid_including_ship_and_tax: Decimal,
    pub net_profit: Decimal,
    pub fee: Decimal,
    pub refunded_cash: Decimal,
    pub reversed_charge: Decimal,
    pub account_credit: Decimal,
    pub net_loss: Decimal,
}

/// Eight draws, always, so the stream position after a line item does
/// not depend on the values drawn.
pub fn generate_pricing_for_sales_table(stream: &mut RandomNumberStream) -> Pricing {
    let mut pricing = Pricing::default();
    pricing.quantity = generate_uniform_random_int(1, 100, stream);
    let quantity = Decimal::from_int(i64::from(pricing.quantity));

    pricing.wholesale_cost =
        generate_uniform_random_decimal(&MIN_WHOLESALE_COST, &MAX_WHOLESALE_COST, stream);
    pricing.ext_wholesale_cost = quantity.multiply(&pricing.wholesale_cost);

    let markup = generate_uniform_random_decimal(&MIN_MARKUP, &MAX_MARKUP, stream).add(&ONE);
    pricing.list_price = pricing.wholesale_cost.multiply(&markup);

    let discount = generate_uniform_random_decimal(&MIN_DISCOUNT, &MAX_DISCOUNT, stream)
        .subtract(&ONE)
        .negate();
    pricing.sales_price = pricing.list_price.multiply(&discount);
    pricing.ext_sales_price = quantity.multiply(&pricing.sales_price);
    pricing.ext_list_price = quantity.multiply(&pricing.list_price);
    pricing.ext_discount_amount =
        pricing.ext_list_price.subtract(&pricing.ext_sales_price);

    let coupon_percent =
        generate_uniform_random_decimal(&MIN_COUPON_PERCENT, &MAX_COUPON_PERCENT, stream);
    let coupon_usage = generate_uniform_random_int(1, 100, stream);
    pricing.coupon_amount = if coupon_usage <= COUPON_USAGE_PERCENT {
        pricing.ext_sales_price.multiply(&coupon_percent)
    } else {
        ZERO
    };
    pricing.net_paid = pricing.ext_sales_price.subtract(&pricing.coupon_amount);

    let ship_percent =
        generate_uniform_random_decimal(&MIN_SHIP_PERCENT, &MAX_SHIP_PERCENT, stream);
    pricing.ship_cost = pricing.list_price.multiply(&ship_percent);
    pricing.ext_ship_cost = quantity.multiply(&pricing.ship_cost);
    pricing.net_paid_including_ship = pricing.net_paid.add(&pricing.ext_ship_cost);

    pricing.tax_percent =
        generate_uniform_random_decimal(&MIN_TAX_PERCENT, &MAX_TAX_PERCENT, stream);
    pricing.ext_tax = pricing.net_paid.multiply(&pricing.tax_percent);
    pricing.net_paid_including_tax = pricing.net_paid.add(&pricing.ext_tax);
    pricing.net_paid_including_ship_and_tax =
        pricing.net_paid_including_ship.add(&pricing.ext_tax);

    pricing.net_profit = pricing.net_paid.subtract(&pricing.ext_wholesale_cost);
    pricing
}

/// Three draws on top of the caller-drawn return quantity. The sale's
/// per-unit sales price, ship cost, and tax rate carry over.
pub fn generate_pricing_for_returns_table(
    sale: &Pricing,
    quantity: i32,
    stream: &mut RandomNumberStream,
) -> Pricing {
    let mut pricing = Pricing::default();
    pricing.quantity = quantity;
    let quantity = Decimal::from_int(i64::from(quantity));

    pricing.sales_price = sale.sales_price;
    pricing.tax_percent = sale.tax_percent;
    pricing.net_paid = quantity.multiply(&sale.sales_price);
    pricing.ext_tax = pricing.net_paid.multiply(&sale.tax_percent);
    pricing.net_paid_including_tax = pricing.net_paid.add(&pricing.ext_tax);
    pricing.ext_ship_cost = quantity.multiply(&sale.ship_cost);

    pricing.fee = generate_uniform_random_decimal(&MIN_FEE, &MAX_FEE, stream);

    let cash_percent = generate_uniform_random_decimal(&ZERO, &ONE, stream);
    pricing.refunded_cash = pricing.net_paid.multiply(&cash_percent);
    let remainder = pricing.net_paid.subtract(&pricing.refunded_cash);
    let credit_percent = generate_uniform_random_decimal(&ZERO, &ONE, stream);
    pricing.reversed_charge = remainder.multiply(&credit_percent);
    pricing.account_credit = remainder.subtract(&pricing.reversed_charge);

    pricing.net_loss = pricing
        .net_paid_including_tax
        .add(&pricing.ext_ship_cost)
        .add(&pricing.fee)
        .subtract(&pricing.refunded_cash)
        .subtract(&pricing.reversed_charge)
        .subtract(&pricing.account_credit);
    pricing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RandomNumberStream;

    #[test]
    fn sales_pricing_consumes_a_fixed_seed_count() {
        let mut stream = RandomNumberStream::new(706, 8);
        generate_pricing_for_sales_table(&mut stream);
        assert_eq!(stream.seeds_used(), 8);
    }

    #[test]
    fn extended_amounts_scale_with_quantity() {
        let mut stream = RandomNumberStream::new(707, 8);
        let pricing = generate_pricing_for_sales_table(&mut stream);
        let quantity = Decimal::from_int(i64::from(pricing.quantity));
        assert_eq!(
            pricing.ext_list_price.number(),
            quantity.multiply(&pricing.list_price).number()
        );
        assert_eq!(
            pricing.net_paid.number(),
            pricing.ext_sales_price.subtract(&pricing.coupon_amount).number()
        );
    }

    #[test]
    fn refunds_split_the_amount_paid() {
        let mut stream = RandomNumberStream::new(708, 12);
        let sale = generate_pricing_for_sales_table(&mut stream);
        let returned = generate_pricing_for_returns_table(&sale, sale.quantity, &mut stream);
        let refunds = returned
            .refunded_cash
            .add(&returned.reversed_charge)
            .add(&returned.account_credit);
        // Truncating arithmetic can shave pennies off the split.
        assert!((returned.net_paid.number() - refunds.number()).abs() <= 2);
        assert_eq!(
            returned.net_loss.number(),
            returned
                .net_paid_including_tax
                .add(&returned.ext_ship_cost)
                .add(&returned.fee)
                .subtract(&refunds)
                .number()
        );
    }
}
