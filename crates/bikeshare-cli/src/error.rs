//! Session error types.

use thiserror::Error;

use bikeshare_ingest::IngestError;
use bikeshare_transform::TransformError;

/// Ways an exploration session can end early.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The user typed a quit keyword or closed the input.
    #[error("session cancelled by user")]
    Quit,
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Transform(#[from] TransformError),
    /// A validated answer did not map back to a known option.
    #[error("answer '{0}' does not match any option")]
    UnexpectedAnswer(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;
