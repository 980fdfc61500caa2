//! Error types for cleaning operations.

use thiserror::Error;

/// Errors that can occur while cleaning a dataset.
#[derive(Debug, Error)]
pub enum CleanError {
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {0}")]
    DataFrame(#[from] polars::prelude::PolarsError),
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, CleanError>;
