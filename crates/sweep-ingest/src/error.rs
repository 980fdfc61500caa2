//! Error types for dataset loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Format Errors ===
    /// File extension is not one of the supported formats.
    #[error("unsupported file format '{extension}' for {path} (supported: .csv, .xlsx, .tsv, .json)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// Failed to parse delimited text with Polars.
    #[error("failed to parse delimited file {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to open or read an Excel workbook.
    #[error("failed to read workbook {path}: {message}")]
    ExcelParse { path: PathBuf, message: String },

    /// JSON document is malformed or has an unsupported shape.
    #[error("failed to parse JSON {path}: {message}")]
    JsonParse { path: PathBuf, message: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl IngestError {
    /// Returns true for failures reading or parsing a supported file, as
    /// opposed to rejecting the file extension up front.
    pub fn is_load_error(&self) -> bool {
        !matches!(self, Self::UnsupportedFormat { .. })
    }

    /// Short name of the error category, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat { .. } => "unsupported_format",
            Self::FileNotFound { .. } => "file_not_found",
            Self::FileRead { .. } => "file_read",
            Self::CsvParse { .. } | Self::ExcelParse { .. } | Self::JsonParse { .. } => "parse",
            Self::DataFrame { .. } => "dataframe",
        }
    }

    /// Map an I/O error on `path` to `FileNotFound` or `FileRead`.
    pub(crate) fn from_io(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: error,
            }
        }
    }
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, IngestError>;
