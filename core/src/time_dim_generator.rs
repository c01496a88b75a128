//! Time dimension: one row per second of the day.

use std::any::Any;

use crate::business_key::to_business_key;
use crate::error::GenResult;
use crate::generator::{RowGenerator, RowGeneratorResult};
use crate::nulls::create_null_bitmap;
use crate::rng::StreamBank;
use crate::row::{RowBuilder, TableRow};
use crate::session::Session;
use crate::table::Table;

// Stream slots. NEVER reorder, only append.
const TD_NULLS: usize = 0;

const STREAMS: &[(i32, i32)] = &[
    (30, 2), // nulls
];

pub struct TimeDimRow {
    null_bitmap: i64,
    t_time_sk: i64,
    t_time_id: String,
    t_time: i64,
    t_hour: i64,
    t_minute: i64,
    t_second: i64,
    t_am_pm: &'static str,
    t_shift: &'static str,
    t_sub_shift: &'static str,
    t_meal_time: Option<&'static str>,
}

impl TableRow for TimeDimRow {
    fn table(&self) -> Table {
        Table::TimeDim
    }

    fn values(&self) -> Vec<Option<String>> {
        let mut builder = RowBuilder::new(self.null_bitmap);
        builder.put_key(self.t_time_sk);
        builder.put_string(&self.t_time_id);
        builder.put_int(self.t_time);
        builder.put_int(self.t_hour);
        builder.put_int(self.t_minute);
        builder.put_int(self.t_second);
        builder.put_string(self.t_am_pm);
        builder.put_string(self.t_shift);
        builder.put_string(self.t_sub_shift);
        builder.put_optional_string(self.t_meal_time);
        builder.finish()
    }
}

pub struct TimeDimRowGenerator {
    streams: StreamBank,
}

impl TimeDimRowGenerator {
    pub fn new() -> Self {
        Self { streams: StreamBank::new(STREAMS) }
    }
}

impl Default for TimeDimRowGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RowGenerator for TimeDimRowGenerator {
    fn table(&self) -> Table {
        Table::TimeDim
    }

    fn generate_row_and_child_rows(
        &mut self,
        row_number: i64,
        _session: &Session,
        _parent: Option<&mut (dyn RowGenerator + '_)>,
        _child: Option<&mut (dyn RowGenerator + '_)>,
    ) -> GenResult<RowGeneratorResult> {
        let null_bitmap = create_null_bitmap(Table::TimeDim, self.streams.stream(TD_NULLS));
        let seconds = row_number - 1;
        let hour = seconds / 3600;
        let row = TimeDimRow {
            null_bitmap,
            t_time_sk: seconds,
            t_time_id: to_business_key(row_number),
            t_time: seconds,
            t_hour: hour,
            t_minute: seconds / 60 % 60,
            t_second: seconds % 60,
            t_am_pm: if hour < 12 { "AM" } else { "PM" },
            t_shift: match hour {
                8..=15 => "first",
                16..=23 => "second",
                _ => "third",
            },
            t_sub_shift: match hour {
                6..=11 => "morning",
                12..=17 => "afternoon",
                18..=21 => "evening",
                _ => "night",
            },
            t_meal_time: match hour {
                6..=8 => Some("breakfast"),
                11..=13 => Some("lunch"),
                17..=20 => Some("dinner"),
                _ => None,
            },
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
