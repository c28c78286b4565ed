//! Bike-share data ingestion.
//!
//! This crate locates the trip CSV of a [`City`](bikeshare_model::City) and
//! loads it into a Polars [`DataFrame`](polars::prelude::DataFrame).
//!
//! # Features
//!
//! - **Location**: explicit primary directory plus one fallback next to the
//!   running executable, without touching the process working directory
//! - **CSV Loading**: every column read as text, empty cells filled with
//!   `"Unknown"`
//! - **Schema Check**: rejects files lacking the trip timestamp or user type columns
//!
//! # Example
//!
//! ```ignore
//! use bikeshare_ingest::{DataLocations, load_city};
//! use bikeshare_model::City;
//!
//! let locations = DataLocations::current_dir();
//! let dataset = load_city(City::Chicago, &locations, |_| {})?;
//! println!("{} trips", dataset.frame.height());
//! ```

mod error;
mod loader;
mod locate;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Dataset Location ===
pub use locate::{DataLocations, program_dir};

// === CSV Reading ===
pub use reader::{fill_missing, read_trip_csv, require_columns};

// === Loading ===
pub use loader::{LoadedDataset, load_city};
