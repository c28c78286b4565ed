//! Column names shared by every bike-share dataset.

/// Trip start timestamp.
pub const START_TIME: &str = "Start Time";
/// Trip end timestamp.
pub const END_TIME: &str = "End Time";
/// Subscriber / customer classification.
pub const USER_TYPE: &str = "User Type";
/// Rider gender; absent from the Washington dataset.
pub const GENDER: &str = "Gender";

/// Helper column holding the start month (1-12) while a month filter runs.
pub const MONTH: &str = "Month";
/// Helper column holding the start weekday (0-6, Monday=0) while a weekday filter runs.
pub const DAY_OF_WEEK: &str = "Day of Week";

/// Marker written into every cell that was empty in the source CSV.
pub const UNKNOWN: &str = "Unknown";

/// Columns every dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 3] = [START_TIME, END_TIME, USER_TYPE];
