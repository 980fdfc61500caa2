use std::path::PathBuf;

/// Outcome of one cleaning run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Rows in the dataset as loaded.
    pub rows_loaded: usize,
    /// Rows left after duplicate removal.
    pub rows_cleaned: usize,
    pub columns: usize,
    /// Columns treated as numeric after coercion.
    pub numeric_columns: usize,
    /// Missing cells replaced with the sentinel in the final pass.
    pub cells_filled: usize,
    pub outputs: OutputPaths,
}

/// Artifacts written by a run.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub cleaned_data: PathBuf,
    pub summary_report: PathBuf,
    /// Absent when the dataset has no numeric column.
    pub visual_summary: Option<PathBuf>,
}

impl RunResult {
    pub fn duplicates_removed(&self) -> usize {
        self.rows_loaded.saturating_sub(self.rows_cleaned)
    }
}
