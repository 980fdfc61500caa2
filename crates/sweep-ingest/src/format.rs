//! Source format detection from file extensions.

use std::fmt;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Tabular source formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Tsv,
    Xlsx,
    Json,
}

/// Every supported format, in the order they are documented.
pub const SUPPORTED_FORMATS: [FileFormat; 4] = [
    FileFormat::Csv,
    FileFormat::Xlsx,
    FileFormat::Tsv,
    FileFormat::Json,
];

impl FileFormat {
    /// Detect the format from the path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "xlsx" => Ok(Self::Xlsx),
            "json" => Ok(Self::Json),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: if extension.is_empty() {
                    "(none)".to_string()
                } else {
                    extension
                },
            }),
        }
    }

    /// File extension including the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => ".csv",
            Self::Tsv => ".tsv",
            Self::Xlsx => ".xlsx",
            Self::Json => ".json",
        }
    }

    /// One-line description of how the format is parsed.
    pub fn description(self) -> &'static str {
        match self {
            Self::Csv => "Comma-separated values with a header row",
            Self::Tsv => "Tab-separated values with a header row",
            Self::Xlsx => "Excel workbook (first worksheet, first row is the header)",
            Self::Json => "JSON array of records or object of columns",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
