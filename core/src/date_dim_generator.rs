//! Date dimension: one row per day from 1900 onward, every column a
//! pure function of the row number.

use std::any::Any;

use crate::business_key::to_business_key;
use crate::dates::{
    day_of_week, day_of_year, days_in_year, from_julian, is_leap_year, is_weekend, to_julian,
    GregorianDate, CURRENT_QUARTER, CURRENT_WEEK, JULIAN_EPOCH, TODAYS_DATE,
};
use crate::error::GenResult;
use crate::generator::{RowGenerator, RowGeneratorResult};
use crate::nulls::create_null_bitmap;
use crate::rng::StreamBank;
use crate::row::{RowBuilder, TableRow};
use crate::session::Session;
use crate::table::Table;
use crate::types::Julian;

// Stream slots. NEVER reorder, only append.
const D_NULLS: usize = 0;

const STREAMS: &[(i32, i32)] = &[
    (10, 2), // nulls
];

const DAY_NAMES: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

pub struct DateDimRow {
    null_bitmap: i64,
    d_date_sk: i64,
    d_date_id: String,
    d_date: Julian,
    d_month_seq: i64,
    d_week_seq: i64,
    d_quarter_seq: i64,
    d_year: i64,
    d_dow: i64,
    d_moy: i64,
    d_dom: i64,
    d_qoy: i64,
    d_fy_year: i64,
    d_fy_quarter_seq: i64,
    d_fy_week_seq: i64,
    d_day_name: &'static str,
    d_quarter_name: String,
    d_holiday: bool,
    d_weekend: bool,
    d_following_holiday: bool,
    d_first_dom: Julian,
    d_last_dom: Julian,
    d_same_day_ly: Julian,
    d_same_day_lq: Julian,
    d_current_day: bool,
    d_current_week: bool,
    d_current_month: bool,
    d_current_quarter: bool,
    d_current_year: bool,
}

impl TableRow for DateDimRow {
    fn table(&self) -> Table {
        Table::DateDim
    }

    fn values(&self) -> Vec<Option<String>> {
        let mut builder = RowBuilder::new(self.null_bitmap);
        builder.put_key(self.d_date_sk);
        builder.put_string(&self.d_date_id);
        builder.put_date(self.d_date);
        builder.put_int(self.d_month_seq);
        builder.put_int(self.d_week_seq);
        builder.put_int(self.d_quarter_seq);
        builder.put_int(self.d_year);
        builder.put_int(self.d_dow);
        builder.put_int(self.d_moy);
        builder.put_int(self.d_dom);
        builder.put_int(self.d_qoy);
        builder.put_int(self.d_fy_year);
        builder.put_int(self.d_fy_quarter_seq);
        builder.put_int(self.d_fy_week_seq);
        builder.put_string(self.d_day_name);
        builder.put_string(&self.d_quarter_name);
        builder.put_boolean(self.d_holiday);
        builder.put_boolean(self.d_weekend);
        builder.put_boolean(self.d_following_holiday);
        builder.put_key(i64::from(self.d_first_dom));
        builder.put_key(i64::from(self.d_last_dom));
        builder.put_key(i64::from(self.d_same_day_ly));
        builder.put_key(i64::from(self.d_same_day_lq));
        builder.put_boolean(self.d_current_day);
        builder.put_boolean(self.d_current_week);
        builder.put_boolean(self.d_current_month);
        builder.put_boolean(self.d_current_quarter);
        builder.put_boolean(self.d_current_year);
        builder.finish()
    }
}

pub struct DateDimRowGenerator {
    streams: StreamBank,
}

impl DateDimRowGenerator {
    pub fn new() -> Self {
        Self { streams: StreamBank::new(STREAMS) }
    }
}

impl Default for DateDimRowGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGenerator for DateDimRowGenerator {
    fn table(&self) -> Table {
        Table::DateDim
    }

    fn generate_row_and_child_rows(
        &mut self,
        row_number: i64,
        session: &Session,
        _parent: Option<&mut (dyn RowGenerator + '_)>,
        _child: Option<&mut (dyn RowGenerator + '_)>,
    ) -> GenResult<RowGeneratorResult> {
        let calendar = &session.distributions().calendar;
        let null_bitmap = create_null_bitmap(Table::DateDim, self.streams.stream(D_NULLS));

        let julian = row_number as Julian + JULIAN_EPOCH;
        let date = from_julian(julian);
        let year = date.year;
        let day_index = day_of_year(date);
        let leap = is_leap_year(year);
        let dow = day_of_week(julian);
        let qoy = i64::from((date.month - 1) / 3 + 1);
        let month_seq = i64::from(year - 1900) * 12 + i64::from(date.month) - 1;
        let week_seq = (row_number + 6) / 7;
        let quarter_seq = i64::from(year - 1900) * 4 + qoy;

        // The first day of a year looks back at the last day of the
        // previous year's calendar for the following-holiday flag.
        let following_holiday = if day_index == 1 {
            let previous_leap = is_leap_year(year - 1);
            calendar.is_holiday_at_index(365 + i32::from(previous_leap), previous_leap)
        } else {
            calendar.is_holiday_at_index(day_index - 1, leap)
        };

        let first_dom = julian - date.day + 1;
        let last_dom = first_of_next_month(date) - 1;
        let same_day_ly = julian - days_in_year(year - 1);
        let quarter_start = to_julian(GregorianDate {
            year,
            month: ((date.month - 1) / 3) * 3 + 1,
            day: 1,
        });
        let previous_quarter_start = previous_quarter_first_day(date);
        let same_day_lq = julian - (quarter_start - previous_quarter_start);

        let current_year = year == TODAYS_DATE.year;
        let row = DateDimRow {
            null_bitmap,
            d_date_sk: i64::from(julian),
            d_date_id: to_business_key(i64::from(julian)),
            d_date: julian,
            d_month_seq: month_seq,
            d_week_seq: week_seq,
            d_quarter_seq: quarter_seq,
            d_year: i64::from(year),
            d_dow: i64::from(dow),
            d_moy: i64::from(date.month),
            d_dom: i64::from(date.day),
            d_qoy: qoy,
            // The fiscal calendar tracks the civil calendar.
            d_fy_year: i64::from(year),
            d_fy_quarter_seq: quarter_seq,
            d_fy_week_seq: week_seq,
            d_day_name: DAY_NAMES[dow as usize],
            d_quarter_name: format!("{year}Q{qoy}"),
            d_holiday: calendar.is_holiday_at_index(day_index, leap),
            d_weekend: is_weekend(julian),
            d_following_holiday: following_holiday,
            d_first_dom: first_dom,
            d_last_dom: last_dom,
            d_same_day_ly: same_day_ly,
            d_same_day_lq: same_day_lq,
            d_current_day: date == TODAYS_DATE,
            d_current_week: current_year && (day_index + 6) / 7 == CURRENT_WEEK,
            d_current_month: current_year && date.month == TODAYS_DATE.month,
            d_current_quarter: current_year && qoy == i64::from(CURRENT_QUARTER),
            d_current_year: current_year,
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

fn first_of_next_month(date: GregorianDate) -> Julian {
    let (year, month) = if date.month == 12 {
        (date.year + 1, 1)
    } else {
        (date.year, date.month + 1)
    };
    to_julian(GregorianDate { year, month, day: 1 })
}

fn previous_quarter_first_day(date: GregorianDate) -> Julian {
    let quarter_start_month = ((date.month - 1) / 3) * 3 + 1;
    let (year, month) = if quarter_start_month == 1 {
        (date.year - 1, 10)
    } else {
        (date.year, quarter_start_month - 3)
    };
    to_julian(GregorianDate { year, month, day: 1 })
}
