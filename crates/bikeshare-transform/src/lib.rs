//! Frame transformations behind the bike-share explorer.
//!
//! - [`temporal`]: timestamp parsing and derived hour/weekday/month columns
//! - [`selection`]: observed filter values and application of a committed filter
//! - [`summary`]: mode-based trip statistics
//! - [`frame`]: small DataFrame helpers shared by the above and the CLI

pub mod error;
pub mod frame;
pub mod selection;
pub mod summary;
pub mod temporal;

pub use error::{Result, TransformError};
pub use selection::{FilterSelection, ObservedValues, apply_selection, observed_values};
pub use summary::{TripSummary, mode, summarize};
pub use temporal::{TimePart, month_name, parse_timestamp, weekday_name, with_time_part};
