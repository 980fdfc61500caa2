//! Cleaned dataset serialization.

use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use polars::prelude::{AnyValue, DataFrame};
use tracing::info;

use sweep_common::any_to_string;

use crate::common::{CLEANED_DATA_FILE, artifact_path};
use crate::error::{OutputError, Result};

/// Writes `cleaned_data.csv` into `output_dir`, overwriting any previous file.
///
/// A header row is followed by one line per data row; there is no index
/// column. Missing values are written as empty fields and floats without
/// trailing zeros, so the same frame always produces the same bytes.
pub fn write_cleaned_data(df: &DataFrame, output_dir: &Path) -> Result<PathBuf> {
    let path = artifact_path(output_dir, CLEANED_DATA_FILE);
    let csv_error = |error: csv::Error| csv_failure(&path, error);

    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .from_path(&path)
        .map_err(csv_error)?;

    let header: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    writer.write_record(&header).map_err(csv_error)?;

    let columns: Vec<_> = df
        .get_columns()
        .iter()
        .map(|column| column.as_materialized_series())
        .collect();
    let mut record = Vec::with_capacity(columns.len());
    for idx in 0..df.height() {
        record.clear();
        for series in &columns {
            record.push(any_to_string(series.get(idx).unwrap_or(AnyValue::Null)));
        }
        writer.write_record(&record).map_err(csv_error)?;
    }
    writer.flush().map_err(|e| OutputError::io(&path, e))?;

    info!(path = %path.display(), rows = df.height(), "wrote cleaned data");
    Ok(path)
}

/// I/O failures keep the same variant as the other writers.
fn csv_failure(path: &Path, error: csv::Error) -> OutputError {
    if !error.is_io_error() {
        return OutputError::Csv {
            path: path.to_path_buf(),
            source: error,
        };
    }
    match error.into_kind() {
        csv::ErrorKind::Io(source) => OutputError::io(path, source),
        kind => OutputError::io(path, std::io::Error::other(format!("{kind:?}"))),
    }
}
