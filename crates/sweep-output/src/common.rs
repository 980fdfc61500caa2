//! Shared artifact names and directory helpers.

use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::{AnyValue, Column};

use crate::error::{OutputError, Result};

/// Cleaned dataset file name.
pub const CLEANED_DATA_FILE: &str = "cleaned_data.csv";

/// Summary report file name.
pub const SUMMARY_REPORT_FILE: &str = "summary_report.txt";

/// Histogram image file name.
pub const VISUAL_SUMMARY_FILE: &str = "visual_summary.png";

/// Ensure the output directory exists, creating it and its parents if absent.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| OutputError::io(dir, e))
}

/// Path of an artifact inside the output directory.
pub(crate) fn artifact_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}

/// Non-missing, non-NaN values of a numeric column, in row order.
pub(crate) fn numeric_values(column: &Column) -> Vec<f64> {
    let series = column.as_materialized_series();
    (0..series.len())
        .filter_map(|idx| sweep_common::any_to_f64(series.get(idx).unwrap_or(AnyValue::Null)))
        .filter(|value| !value.is_nan())
        .collect()
}
