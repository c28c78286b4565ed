//! Mode-based trip statistics.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;
use tracing::debug;

use bikeshare_model::columns::{END_TIME, START_TIME};

use crate::error::Result;
use crate::temporal::{TimePart, month_name, time_parts, weekday_name};

/// Most frequent start/end hour, weekday and month of a set of trips.
///
/// A field is `None` when no row has a parseable timestamp for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripSummary {
    pub trips: usize,
    pub start_hour: Option<u32>,
    pub end_hour: Option<u32>,
    /// Monday=0.
    pub weekday: Option<u32>,
    /// 1-12.
    pub month: Option<u32>,
}

impl TripSummary {
    pub fn weekday_name(&self) -> Option<&'static str> {
        self.weekday.and_then(weekday_name)
    }

    pub fn month_name(&self) -> Option<&'static str> {
        self.month.and_then(month_name)
    }
}

/// Summarize the trips in `df`. Returns `None` for a frame with no rows.
pub fn summarize(df: &DataFrame) -> Result<Option<TripSummary>> {
    if df.height() == 0 {
        debug!("no trips to summarize");
        return Ok(None);
    }
    let summary = TripSummary {
        trips: df.height(),
        start_hour: mode(time_parts(df, START_TIME, TimePart::Hour)?.into_iter().flatten()),
        end_hour: mode(time_parts(df, END_TIME, TimePart::Hour)?.into_iter().flatten()),
        weekday: mode(time_parts(df, START_TIME, TimePart::Weekday)?.into_iter().flatten()),
        month: mode(time_parts(df, START_TIME, TimePart::Month)?.into_iter().flatten()),
    };
    debug!(?summary, "trip summary");
    Ok(Some(summary))
}

/// Most frequent value; ties go to the smallest value.
pub fn mode<I>(values: I) -> Option<u32>
where
    I: IntoIterator<Item = u32>,
{
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let mut best: Option<(u32, usize)> = None;
    for (value, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}
