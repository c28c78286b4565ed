//! Observed filter values and filter application.
//!
//! Value domains are built from what the loaded data actually contains, so a
//! month with no trips can never be chosen. Temporal filters derive a helper
//! column from "Start Time", filter on it and drop it again before returning.

use std::collections::BTreeSet;
use std::fmt;

use polars::prelude::{DataFrame, IntoLazy, col, lit};
use tracing::debug;

use bikeshare_model::columns::START_TIME;
use bikeshare_model::{Domain, FilterKind};

use crate::error::Result;
use crate::frame::distinct_text;
use crate::temporal::{TimePart, time_parts, with_time_part};

/// A committed filter: the kind plus the chosen value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSelection {
    NoFilter,
    /// Start month, 1-12.
    Month(u32),
    /// Start weekday, 0-6 with Monday=0.
    DayOfWeek(u32),
    Gender(String),
    UserType(String),
}

impl FilterSelection {
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterSelection::NoFilter => FilterKind::NoFilter,
            FilterSelection::Month(_) => FilterKind::Month,
            FilterSelection::DayOfWeek(_) => FilterKind::DayOfWeek,
            FilterSelection::Gender(_) => FilterKind::Gender,
            FilterSelection::UserType(_) => FilterKind::UserType,
        }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterSelection::NoFilter => write!(f, "No Filter"),
            FilterSelection::Month(value) | FilterSelection::DayOfWeek(value) => {
                write!(f, "{} = {value}", self.kind())
            }
            FilterSelection::Gender(label) | FilterSelection::UserType(label) => {
                write!(f, "{} = {label}", self.kind())
            }
        }
    }
}

/// Values of a filter attribute present in a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservedValues {
    /// Sorted distinct month or weekday numbers.
    Numbers(Vec<u32>),
    /// Distinct labels in first-seen order.
    Labels(Vec<String>),
}

impl ObservedValues {
    pub fn is_empty(&self) -> bool {
        match self {
            ObservedValues::Numbers(values) => values.is_empty(),
            ObservedValues::Labels(values) => values.is_empty(),
        }
    }

    /// Enumeration domain accepting exactly the observed values.
    pub fn domain(&self) -> Domain {
        match self {
            ObservedValues::Numbers(values) => Domain::enumeration(values.iter()),
            ObservedValues::Labels(values) => Domain::enumeration(values.iter()),
        }
    }

    /// Literal list form, e.g. `[1, 3, 5]`.
    pub fn render(&self) -> String {
        let items: Vec<String> = match self {
            ObservedValues::Numbers(values) => values.iter().map(u32::to_string).collect(),
            ObservedValues::Labels(values) => values.clone(),
        };
        format!("[{}]", items.join(", "))
    }

    /// Turn a validated answer into a selection for `kind`.
    ///
    /// Labels are matched case-insensitively and the observed spelling is
    /// kept, so the equality predicate sees the exact cell value. Returns
    /// `None` if the answer is not one of the observed values.
    pub fn select(&self, kind: FilterKind, answer: &str) -> Option<FilterSelection> {
        let answer = answer.trim();
        match (self, kind) {
            (ObservedValues::Numbers(values), FilterKind::Month | FilterKind::DayOfWeek) => {
                let number: u32 = answer.parse().ok()?;
                if !values.contains(&number) {
                    return None;
                }
                Some(if kind == FilterKind::Month {
                    FilterSelection::Month(number)
                } else {
                    FilterSelection::DayOfWeek(number)
                })
            }
            (ObservedValues::Labels(values), FilterKind::Gender | FilterKind::UserType) => {
                let wanted = answer.to_lowercase();
                let label = values
                    .iter()
                    .find(|value| value.trim().to_lowercase() == wanted)?
                    .clone();
                Some(if kind == FilterKind::Gender {
                    FilterSelection::Gender(label)
                } else {
                    FilterSelection::UserType(label)
                })
            }
            _ => None,
        }
    }
}

/// Values of `kind` present in `df`. `None` for [`FilterKind::NoFilter`].
pub fn observed_values(df: &DataFrame, kind: FilterKind) -> Result<Option<ObservedValues>> {
    let Some(column) = kind.column() else {
        return Ok(None);
    };
    let observed = match TimePart::for_filter(kind) {
        Some(part) => observed_numbers(df, part)?,
        None => ObservedValues::Labels(distinct_text(df, column)?),
    };
    debug!(kind = %kind, values = %observed.render(), "observed filter values");
    Ok(Some(observed))
}

fn observed_numbers(df: &DataFrame, part: TimePart) -> Result<ObservedValues> {
    let distinct: BTreeSet<u32> = time_parts(df, START_TIME, part)?
        .into_iter()
        .flatten()
        .collect();
    Ok(ObservedValues::Numbers(distinct.into_iter().collect()))
}

/// Apply a committed filter and return the reduced frame.
///
/// Matching rows keep their order. The helper column of temporal filters is
/// dropped, and so is the filtered column of label filters.
pub fn apply_selection(df: &DataFrame, selection: &FilterSelection) -> Result<DataFrame> {
    let kind = selection.kind();
    let filtered = match (kind.column(), TimePart::for_filter(kind), selection) {
        (
            Some(helper),
            Some(part),
            FilterSelection::Month(value) | FilterSelection::DayOfWeek(value),
        ) => filter_on_time_part(df, part, helper, *value)?,
        (Some(column), None, FilterSelection::Gender(label) | FilterSelection::UserType(label)) => {
            filter_on_label(df, column, label)?
        }
        _ => df.clone(),
    };
    debug!(
        selection = %selection,
        rows_before = df.height(),
        rows_after = filtered.height(),
        "filter applied"
    );
    Ok(filtered)
}

fn filter_on_time_part(df: &DataFrame, part: TimePart, helper: &str, value: u32) -> Result<DataFrame> {
    let target = i32::try_from(value).unwrap_or(i32::MAX);
    let filtered = with_time_part(df, START_TIME, part, helper)?
        .lazy()
        .filter(col(helper).eq(lit(target)))
        .collect()?;
    Ok(filtered.drop(helper)?)
}

fn filter_on_label(df: &DataFrame, column: &str, value: &str) -> Result<DataFrame> {
    let filtered = df
        .clone()
        .lazy()
        .filter(col(column).eq(lit(value)))
        .collect()?;
    Ok(filtered.drop(column)?)
}
