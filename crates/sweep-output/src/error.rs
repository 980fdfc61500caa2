//! Error types for artifact generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing an artifact.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output directory or file could not be created or written.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize delimited output.
    #[error("failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {0}")]
    DataFrame(#[from] polars::prelude::PolarsError),

    /// Failed to rasterize or encode the histogram image.
    #[error("failed to render {path}: {message}")]
    Render { path: PathBuf, message: String },
}

impl OutputError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for artifact generation.
pub type Result<T> = std::result::Result<T, OutputError>;
