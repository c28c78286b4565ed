//! Filter kinds and the per-dataset filter menu.

use std::fmt;
use std::str::FromStr;

use crate::columns;
use crate::domain::Domain;

/// Attribute the user can narrow a dataset by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    NoFilter,
    Month,
    DayOfWeek,
    Gender,
    UserType,
}

impl FilterKind {
    pub const ALL: [FilterKind; 5] = [
        FilterKind::NoFilter,
        FilterKind::Month,
        FilterKind::DayOfWeek,
        FilterKind::Gender,
        FilterKind::UserType,
    ];

    /// Canonical label, also the value the filter lookup domain resolves to.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::NoFilter => "No Filter",
            FilterKind::Month => "Month",
            FilterKind::DayOfWeek => "Day of Week",
            FilterKind::Gender => "Gender",
            FilterKind::UserType => "User Type",
        }
    }

    /// Short form built from the first letter of each word.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            FilterKind::NoFilter => "NF",
            FilterKind::Month => "M",
            FilterKind::DayOfWeek => "DOW",
            FilterKind::Gender => "G",
            FilterKind::UserType => "UT",
        }
    }

    /// Column the filter compares against; `None` for [`FilterKind::NoFilter`].
    ///
    /// Month and weekday filters compare against a derived helper column.
    pub fn column(&self) -> Option<&'static str> {
        match self {
            FilterKind::NoFilter => None,
            FilterKind::Month => Some(columns::MONTH),
            FilterKind::DayOfWeek => Some(columns::DAY_OF_WEEK),
            FilterKind::Gender => Some(columns::GENDER),
            FilterKind::UserType => Some(columns::USER_TYPE),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = String;

    /// Parse a canonical label or abbreviation (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        FilterKind::ALL
            .into_iter()
            .find(|kind| {
                kind.as_str().eq_ignore_ascii_case(normalized)
                    || kind.abbreviation().eq_ignore_ascii_case(normalized)
            })
            .ok_or_else(|| format!("Unknown filter: {s}"))
    }
}

/// Filters offered for one loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMenu {
    kinds: Vec<FilterKind>,
}

impl FilterMenu {
    /// The Gender option is offered only when the dataset has a gender column.
    pub fn new(has_gender_column: bool) -> Self {
        let kinds = FilterKind::ALL
            .into_iter()
            .filter(|kind| has_gender_column || *kind != FilterKind::Gender)
            .collect();
        Self { kinds }
    }

    /// Lookup domain: full label and abbreviation of every offered kind.
    pub fn domain(&self) -> Domain {
        Domain::lookup(self.kinds.iter().flat_map(|kind| {
            [
                (kind.as_str(), kind.as_str()),
                (kind.abbreviation(), kind.as_str()),
            ]
        }))
    }

    pub fn prompt(&self) -> String {
        let labels: Vec<&str> = self.kinds.iter().map(FilterKind::as_str).collect();
        let abbreviations: Vec<&str> = self.kinds.iter().map(FilterKind::abbreviation).collect();
        format!(
            "Choose your filter: {}.\nNote: you could type first letters like: {}.",
            labels.join(", "),
            abbreviations.join(", ")
        )
    }
}
