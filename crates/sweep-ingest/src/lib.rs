//! Dataset loading for datasweep.
//!
//! This crate turns a tabular source file into a Polars `DataFrame`. The
//! reader is chosen from the file extension:
//!
//! - **`.csv`**: comma-delimited text with a header row
//! - **`.tsv`**: tab-delimited text with a header row
//! - **`.xlsx`**: first worksheet of an Excel workbook
//! - **`.json`**: an array of records or an object of columns
//!
//! Empty fields and the usual null tokens (`NA`, `null`, `n/a`, ...) load as
//! missing values.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use sweep_ingest::{load_dataset, try_load_dataset};
//!
//! // Fallible form, for callers that want the error
//! let df = load_dataset(Path::new("raw_data.tsv"))?;
//!
//! // Boundary form: logs the failure and returns None
//! if let Some(df) = try_load_dataset(Path::new("raw_data.tsv")) {
//!     println!("{} rows", df.height());
//! }
//! ```

mod cells;
mod csv;
mod error;
mod excel;
mod format;
mod json;
mod loader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Format Detection ===
pub use format::{FileFormat, SUPPORTED_FORMATS};

// === Readers ===
pub use csv::{NULL_TOKENS, read_delimited};
pub use excel::read_xlsx;
pub use json::read_json;

// === Loader Boundary ===
pub use loader::{load_dataset, try_load_dataset};
