//! Extension dispatch and the loader boundary.

use std::path::Path;

use polars::prelude::DataFrame;
use tracing::{error, info};

use crate::csv::read_delimited;
use crate::error::Result;
use crate::excel::read_xlsx;
use crate::format::FileFormat;
use crate::json::read_json;

/// Loads a dataset, choosing the reader from the file extension.
pub fn load_dataset(path: &Path) -> Result<DataFrame> {
    let format = FileFormat::from_path(path)?;
    let df = match format {
        FileFormat::Csv => read_delimited(path, b',')?,
        FileFormat::Tsv => read_delimited(path, b'\t')?,
        FileFormat::Xlsx => read_xlsx(path)?,
        FileFormat::Json => read_json(path)?,
    };
    info!(
        path = %path.display(),
        format = %format,
        rows = df.height(),
        columns = df.width(),
        "loaded dataset"
    );
    Ok(df)
}

/// Loads a dataset, logging any failure and returning `None` instead.
///
/// Callers must check for `None` before continuing; no error escapes.
pub fn try_load_dataset(path: &Path) -> Option<DataFrame> {
    match load_dataset(path) {
        Ok(df) => Some(df),
        Err(err) => {
            error!(
                path = %path.display(),
                kind = err.kind(),
                "error loading file: {err}"
            );
            None
        }
    }
}
