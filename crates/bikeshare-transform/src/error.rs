//! Error types for trip frame transformations.

use thiserror::Error;

/// Errors that can occur while deriving, filtering or summarizing trips.
#[derive(Debug, Error)]
pub enum TransformError {
    // === Schema Errors ===
    /// A filter or summary column is absent from the frame.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    // === DataFrame Errors ===
    /// Failed Polars operation (dtype mismatch, filter, drop).
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
