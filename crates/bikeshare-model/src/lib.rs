//! Data model for the bike-share explorer.
//!
//! Holds the fixed city datasets, the filter kinds offered by the explorer,
//! the column names the explorer relies on and the [`Domain`] type that
//! describes which answers a prompt accepts.

pub mod city;
pub mod columns;
pub mod domain;
pub mod filter;

pub use city::{CITY_PROMPT, City};
pub use domain::{Domain, NO, YES, capitalize_first, yes_no_domain};
pub use filter::{FilterKind, FilterMenu};
