//! Shared helpers for the datasweep crates.
//!
//! - [`values`]: cell conversions between Polars `AnyValue`, text and `f64`
//! - [`columns`]: the numeric-or-text decision made for every column

pub mod columns;
pub mod values;

pub use columns::{
    ColumnKind, MISSING_SENTINEL, classify_column, is_numeric_dtype, numeric_column_names,
};
pub use values::{any_to_f64, any_to_string, format_numeric, is_missing, parse_numeric};
