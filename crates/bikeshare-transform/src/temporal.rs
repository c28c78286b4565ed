//! Timestamp parsing and derived time columns.
//!
//! Trip timestamps are stored as text (`2017-06-23 15:09:32`). Derived
//! columns are `Int32` and null wherever the source value does not parse,
//! including cells holding the `"Unknown"` fill marker.

use chrono::{Datelike, NaiveDateTime, Timelike};
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use bikeshare_model::FilterKind;

use crate::error::Result;
use crate::frame::text_column;

/// Formats accepted for trip timestamps, tried in order.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parse a trip timestamp. Returns `None` for empty or unparseable values.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}

/// Component extracted from a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePart {
    /// Hour of day, 0-23.
    Hour,
    /// Day of week, 0-6 with Monday=0.
    Weekday,
    /// Month of year, 1-12.
    Month,
}

impl TimePart {
    /// Part a temporal filter compares against; `None` for label filters.
    pub fn for_filter(kind: FilterKind) -> Option<TimePart> {
        match kind {
            FilterKind::Month => Some(TimePart::Month),
            FilterKind::DayOfWeek => Some(TimePart::Weekday),
            FilterKind::NoFilter | FilterKind::Gender | FilterKind::UserType => None,
        }
    }

    pub fn extract(self, timestamp: &NaiveDateTime) -> u32 {
        match self {
            TimePart::Hour => timestamp.hour(),
            TimePart::Weekday => timestamp.weekday().num_days_from_monday(),
            TimePart::Month => timestamp.month(),
        }
    }
}

/// Extract `part` from every row of a text timestamp column.
pub fn time_parts(df: &DataFrame, source: &str, part: TimePart) -> Result<Vec<Option<u32>>> {
    let column = text_column(df, source)?;
    Ok(column
        .into_iter()
        .map(|value| {
            value
                .and_then(parse_timestamp)
                .map(|timestamp| part.extract(&timestamp))
        })
        .collect())
}

/// Return a copy of `df` with `target` holding `part` of the `source` timestamps.
pub fn with_time_part(
    df: &DataFrame,
    source: &str,
    part: TimePart,
    target: &str,
) -> Result<DataFrame> {
    let values: Vec<Option<i32>> = time_parts(df, source, part)?
        .into_iter()
        .map(|value| value.and_then(|v| i32::try_from(v).ok()))
        .collect();
    let mut derived = df.clone();
    derived.with_column(Series::new(target.into(), values).into_column())?;
    Ok(derived)
}

/// English weekday name for a Monday=0 index.
pub fn weekday_name(index: u32) -> Option<&'static str> {
    WEEKDAY_NAMES.get(index as usize).copied()
}

/// English month name for a 1-12 month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
}
