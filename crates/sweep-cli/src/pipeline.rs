//! Cleaning pipeline with explicit stages.
//!
//! 1. **Load**: read the input into a frame (failures end the run quietly)
//! 2. **Clean**: drop duplicate rows, coerce numeric columns, fill text
//! 3. **Report**: write the cleaned CSV, the summary report and the histogram
//! 4. **Finalize**: fill every remaining missing cell and rewrite the CSV

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use sweep_clean::{clean_dataset, fill_missing_with_sentinel};
use sweep_ingest::try_load_dataset;
use sweep_output::{
    ensure_output_dir, write_cleaned_data, write_histogram, write_summary_report,
};

use crate::types::{OutputPaths, RunResult};

/// Run the full pipeline on `input`, writing artifacts into `output_dir`.
///
/// Returns `Ok(None)` when the input cannot be loaded; the failure has
/// already been logged and no artifact is written. Write failures are
/// returned as errors, and artifacts written before the failure remain.
pub fn run_pipeline(input: &Path, output_dir: &Path) -> Result<Option<RunResult>> {
    let run_span = info_span!("run", input = %input.display());
    let _run_guard = run_span.enter();
    let start = Instant::now();

    ensure_output_dir(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;

    let Some(raw) = load(input) else {
        return Ok(None);
    };
    let cleaned = clean(&raw)?;
    let (outputs, cells_filled) = write_outputs(&cleaned, output_dir)?;

    info!(
        rows = cleaned.height(),
        duration_ms = start.elapsed().as_millis(),
        "data cleaning process completed"
    );
    Ok(Some(RunResult {
        input: input.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        rows_loaded: raw.height(),
        rows_cleaned: cleaned.height(),
        columns: cleaned.width(),
        numeric_columns: sweep_common::numeric_column_names(&cleaned).len(),
        cells_filled,
        outputs,
    }))
}

fn load(input: &Path) -> Option<DataFrame> {
    let _span = info_span!("load").entered();
    try_load_dataset(input)
}

fn clean(raw: &DataFrame) -> Result<DataFrame> {
    let _span = info_span!("clean").entered();
    clean_dataset(raw).context("clean dataset")
}

/// Writes every artifact and returns their paths with the number of cells
/// filled by the final pass.
fn write_outputs(cleaned: &DataFrame, output_dir: &Path) -> Result<(OutputPaths, usize)> {
    let report_span = info_span!("report");
    let report_guard = report_span.enter();
    write_cleaned_data(cleaned, output_dir).context("write cleaned data")?;
    let summary_report =
        write_summary_report(cleaned, output_dir).context("write summary report")?;
    let visual_summary = write_histogram(cleaned, output_dir).context("write histogram")?;
    drop(report_guard);

    let _span = info_span!("finalize").entered();
    let cells_filled = cleaned
        .get_columns()
        .iter()
        .map(|column| column.null_count())
        .sum();
    let filled = fill_missing_with_sentinel(cleaned).context("fill missing values")?;
    let cleaned_data = write_cleaned_data(&filled, output_dir).context("rewrite cleaned data")?;
    info!(cells_filled, "finalized cleaned data");

    Ok((
        OutputPaths {
            cleaned_data,
            summary_report,
            visual_summary,
        },
        cells_filled,
    ))
}
