//! The three fixed bike-share datasets.

use std::fmt;

use crate::domain::Domain;

/// Prompt shown when asking which city to explore.
pub const CITY_PROMPT: &str = "Choose between: chicago, new york city, washington";

/// A city whose trip data ships with the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// CSV resource holding this city's trips.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Full name and abbreviation accepted at the city prompt.
    pub fn aliases(self) -> [&'static str; 2] {
        match self {
            City::Chicago => ["chicago", "c"],
            City::NewYorkCity => ["new york city", "nyc"],
            City::Washington => ["washington", "w"],
        }
    }

    pub fn from_file_name(name: &str) -> Option<City> {
        City::ALL
            .into_iter()
            .find(|city| city.file_name().eq_ignore_ascii_case(name.trim()))
    }

    /// Lookup domain mapping every alias to the city's file name.
    pub fn domain() -> Domain {
        Domain::lookup(City::ALL.into_iter().flat_map(|city| {
            city.aliases()
                .into_iter()
                .map(move |alias| (alias, city.file_name()))
        }))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
