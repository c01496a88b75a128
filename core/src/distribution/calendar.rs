//! Day-of-year table driving date joins and date dimension flags.
//!
//! Sales dates are not uniform over the year: the late-year holiday
//! season carries several times the weight of an ordinary day. The
//! leap-year weight set shifts everything after February 28 by one day
//! so the same calendar shape holds in both year kinds.

use crate::rng::RandomNumberStream;
use crate::value_generator::generate_uniform_random_int;

/// Weight sets for [`CalendarDistribution::pick_random_day_of_year`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalendarWeights {
    Sales,
    SalesLeapYear,
}

/// Fixed-season holidays as (month, day). Thanksgiving-style floating
/// holidays are approximated by their most common date.
const HOLIDAYS: &[(i32, i32)] = &[
    (1, 1),
    (2, 14),
    (5, 31),
    (7, 4),
    (9, 6),
    (10, 31),
    (11, 25),
    (12, 24),
    (12, 25),
    (12, 31),
];

const HOLIDAY_WEIGHT: i32 = 500;
const SEASON_WEIGHT: i32 = 300;
const BASE_WEIGHT: i32 = 100;

const DAYS_BEFORE_MONTH: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

pub struct CalendarDistribution {
    cumulative_sales: Vec<i32>,
    cumulative_sales_leap: Vec<i32>,
    holiday_flags: Vec<bool>,
    holiday_flags_leap: Vec<bool>,
}

impl CalendarDistribution {
    pub fn new() -> Self {
        let (weights, flags) = build_year(false);
        let (weights_leap, flags_leap) = build_year(true);
        Self {
            cumulative_sales: cumulative(&weights),
            cumulative_sales_leap: cumulative(&weights_leap),
            holiday_flags: flags,
            holiday_flags_leap: flags_leap,
        }
    }

    /// One draw; returns a 1-based day-of-year.
    pub fn pick_random_day_of_year(
        &self,
        weights: CalendarWeights,
        stream: &mut RandomNumberStream,
    ) -> i32 {
        let cumulative = match weights {
            CalendarWeights::Sales => &self.cumulative_sales,
            CalendarWeights::SalesLeapYear => &self.cumulative_sales_leap,
        };
        let max_weight = *cumulative.last().unwrap_or(&1);
        let weight = generate_uniform_random_int(1, max_weight, stream);
        cumulative.partition_point(|&total| total < weight) as i32 + 1
    }

    /// Holiday flag for a 1-based day-of-year index.
    pub fn is_holiday_at_index(&self, day_index: i32, leap_year: bool) -> bool {
        let flags = if leap_year { &self.holiday_flags_leap } else { &self.holiday_flags };
        flags
            .get((day_index - 1) as usize)
            .copied()
            .unwrap_or(false)
    }
}

impl Default for CalendarDistribution {
    fn default() -> Self {
        Self::new()
    }
}

fn build_year(leap_year: bool) -> (Vec<i32>, Vec<bool>) {
    let day_count = if leap_year { 366 } else { 365 };
    let season_start = day_of_year(11, 1, leap_year);
    let mut weights = Vec::with_capacity(day_count);
    let mut flags = vec![false; day_count];
    for day in 1..=day_count as i32 {
        weights.push(if day >= season_start { SEASON_WEIGHT } else { BASE_WEIGHT });
    }
    for &(month, day) in HOLIDAYS {
        let index = (day_of_year(month, day, leap_year) - 1) as usize;
        weights[index] = HOLIDAY_WEIGHT;
        flags[index] = true;
    }
    (weights, flags)
}

fn cumulative(weights: &[i32]) -> Vec<i32> {
    let mut total = 0;
    weights
        .iter()
        .map(|&weight| {
            total += weight;
            total
        })
        .collect()
}

fn day_of_year(month: i32, day: i32, leap_year: bool) -> i32 {
    let leap_bump = if leap_year && month > 2 { 1 } else { 0 };
    DAYS_BEFORE_MONTH[(month - 1) as usize] + day + leap_bump
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picked_days_stay_in_the_year() {
        let calendar = CalendarDistribution::new();
        let mut stream = RandomNumberStream::new(1, 0);
        for _ in 0..1000 {
            let day = calendar.pick_random_day_of_year(CalendarWeights::Sales, &mut stream);
            assert!((1..=365).contains(&day));
            let day = calendar.pick_random_day_of_year(CalendarWeights::SalesLeapYear, &mut stream);
            assert!((1..=366).contains(&day));
        }
    }

    #[test]
    fn cumulative_weights_run_a_prefix_sum() {
        assert_eq!(cumulative(&[100, 300, 500]), vec![100, 400, 900]);
        let (weights, _) = build_year(false);
        let totals = cumulative(&weights);
        assert_eq!(totals.len(), 365);
        assert_eq!(*totals.last().unwrap(), weights.iter().sum::<i32>());
        assert!(totals.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn christmas_is_a_holiday_in_both_year_kinds() {
        let calendar = CalendarDistribution::new();
        assert!(calendar.is_holiday_at_index(359, false)); // Dec 25, common year
        assert!(calendar.is_holiday_at_index(360, true)); // Dec 25, leap year
    }
}
