//! Calendar math on julian day numbers.
//!
//! All generated dates live in a fixed window so that the same scale
//! factor always yields the same calendar content. Sales activity spans
//! 1998-2002; dimension history extends one year further.

use crate::types::Julian;

/// First day of the data window, 1998-01-01.
pub const JULIAN_DATA_START: Julian = 2_450_815;
/// Last day of sales activity, 2002-12-31.
pub const JULIAN_SALES_END: Julian = 2_452_640;
/// Last day of the history window, 2003-12-31.
pub const JULIAN_DATA_END: Julian = 2_453_005;

/// Day 1 of the date dimension, 1900-01-01.
pub const JULIAN_EPOCH: Julian = 2_415_021;

pub const YEAR_MINIMUM: i32 = 1998;
pub const YEAR_MAXIMUM: i32 = 2002;

/// The fixed "generation day" used for the current-period flags.
pub const TODAYS_DATE: GregorianDate = GregorianDate { year: 2003, month: 1, day: 8 };
pub const CURRENT_QUARTER: i32 = 1;
pub const CURRENT_WEEK: i32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GregorianDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

const DAYS_BEFORE_MONTH: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_year(year: i32) -> i32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Gregorian date to julian day number.
pub fn to_julian(date: GregorianDate) -> Julian {
    let a = (14 - date.month) / 12;
    let y = date.year + 4800 - a;
    let m = date.month + 12 * a - 3;
    date.day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Julian day number back to a gregorian date.
pub fn from_julian(julian: Julian) -> GregorianDate {
    let a = julian + 32044;
    let b = (4 * a + 3) / 146097;
    let c = a - 146097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    GregorianDate {
        day: e - (153 * m + 2) / 5 + 1,
        month: m + 3 - 12 * (m / 10),
        year: 100 * b + d - 4800 + m / 10,
    }
}

/// 1-based day-of-year index.
pub fn day_of_year(date: GregorianDate) -> i32 {
    let leap_bump = if is_leap_year(date.year) && date.month > 2 { 1 } else { 0 };
    DAYS_BEFORE_MONTH[(date.month - 1) as usize] + date.day + leap_bump
}

/// 0 = Monday .. 6 = Sunday.
pub fn day_of_week(julian: Julian) -> i32 {
    julian % 7
}

pub fn is_weekend(julian: Julian) -> bool {
    let dow = day_of_week(julian);
    dow == 5 || dow == 6
}

pub fn format_date(date: GregorianDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year, date.month, date.day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn julian_round_trip_at_window_edges() {
        assert_eq!(to_julian(GregorianDate { year: 1900, month: 1, day: 1 }), JULIAN_EPOCH);
        assert_eq!(to_julian(GregorianDate { year: 1998, month: 1, day: 1 }), JULIAN_DATA_START);
        assert_eq!(to_julian(GregorianDate { year: 2002, month: 12, day: 31 }), JULIAN_SALES_END);
        assert_eq!(to_julian(GregorianDate { year: 2003, month: 12, day: 31 }), JULIAN_DATA_END);
        for julian in [JULIAN_EPOCH, JULIAN_DATA_START, JULIAN_SALES_END, JULIAN_DATA_END] {
            assert_eq!(to_julian(from_julian(julian)), julian);
        }
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(1996));
        assert!(!is_leap_year(1998));
    }

    #[test]
    fn day_of_year_counts_leap_february() {
        assert_eq!(day_of_year(GregorianDate { year: 2000, month: 3, day: 1 }), 61);
        assert_eq!(day_of_year(GregorianDate { year: 1999, month: 3, day: 1 }), 60);
        assert_eq!(day_of_year(GregorianDate { year: 1999, month: 1, day: 1 }), 1);
    }
}
