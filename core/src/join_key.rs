//! Foreign-key picks into other tables.

use crate::dates::{to_julian, GregorianDate, YEAR_MAXIMUM, YEAR_MINIMUM};
use crate::distribution::calendar::{CalendarDistribution, CalendarWeights};
use crate::dates::is_leap_year;
use crate::rng::RandomNumberStream;
use crate::scaling::Scaling;
use crate::table::Table;
use crate::types::Julian;
use crate::value_generator::{generate_uniform_random_int, generate_uniform_random_key};

pub const SECONDS_PER_DAY: i32 = 86_400;

/// Sale date within the sales window. Days are weighted by the
/// calendar so holiday seasons sell more. Two draws.
pub fn pick_random_sales_date(
    calendar: &CalendarDistribution,
    stream: &mut RandomNumberStream,
) -> Julian {
    let year = generate_uniform_random_int(YEAR_MINIMUM, YEAR_MAXIMUM, stream);
    let weights = if is_leap_year(year) {
        CalendarWeights::SalesLeapYear
    } else {
        CalendarWeights::Sales
    };
    let day_of_year = calendar.pick_random_day_of_year(weights, stream);
    to_julian(GregorianDate { year, month: 1, day: 1 }) + day_of_year - 1
}

/// Return date relative to the shipped date. One draw.
pub fn pick_random_return_date(ship_date: Julian, stream: &mut RandomNumberStream) -> Julian {
    ship_date + generate_uniform_random_int(1, 60, stream)
}

/// Time of day in seconds. Web orders arrive around the clock. One
/// draw.
pub fn pick_random_web_time(stream: &mut RandomNumberStream) -> i32 {
    generate_uniform_random_int(0, SECONDS_PER_DAY - 1, stream)
}

/// Plain join key: uniform over the target table's rows. One draw.
pub fn pick_random_join_key(
    table: Table,
    scaling: &Scaling,
    stream: &mut RandomNumberStream,
) -> i64 {
    generate_uniform_random_key(1, scaling.row_count(table), stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::{JULIAN_DATA_START, JULIAN_SALES_END};

    #[test]
    fn sales_dates_stay_inside_the_window() {
        let calendar = CalendarDistribution::new();
        let mut stream = RandomNumberStream::new(704, 2);
        for _ in 0..5_000 {
            let date = pick_random_sales_date(&calendar, &mut stream);
            assert!(date >= JULIAN_DATA_START && date <= JULIAN_SALES_END);
        }
    }

    #[test]
    fn return_dates_trail_the_shipment() {
        let mut stream = RandomNumberStream::new(705, 1);
        for _ in 0..1_000 {
            let date = pick_random_return_date(JULIAN_DATA_START, &mut stream);
            assert!(date > JULIAN_DATA_START && date <= JULIAN_DATA_START + 60);
        }
    }
}
