//! Plain-text summary report.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use tracing::info;

use sweep_common::is_numeric_dtype;

use crate::common::{SUMMARY_REPORT_FILE, artifact_path};
use crate::error::{OutputError, Result};
use crate::stats::describe_column;

const TITLE: &str = "Summary Report";
const RULE: &str = "=====================";

/// Writes `summary_report.txt` into `output_dir`.
pub fn write_summary_report(df: &DataFrame, output_dir: &Path) -> Result<PathBuf> {
    let path = artifact_path(output_dir, SUMMARY_REPORT_FILE);
    let report = render_summary_report(df);

    let file = File::create(&path).map_err(|e| OutputError::io(&path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(report.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| OutputError::io(&path, e))?;

    info!(path = %path.display(), "wrote summary report");
    Ok(path)
}

/// Renders the report text: row and column totals, missing values per
/// column, and descriptive statistics for every numeric column.
pub fn render_summary_report(df: &DataFrame) -> String {
    let lines = [
        TITLE.to_string(),
        RULE.to_string(),
        String::new(),
        format!("Total rows: {}", df.height()),
        format!("Total columns: {}", df.width()),
        String::new(),
        "Missing Values Per Column:".to_string(),
        missing_values_table(df),
        String::new(),
        "Numeric Column Statistics:".to_string(),
        describe_table(df),
    ];
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// One line per column: name left-aligned, missing count right-aligned.
fn missing_values_table(df: &DataFrame) -> String {
    if df.width() == 0 {
        return "No columns.".to_string();
    }
    let rows: Vec<(String, String)> = df
        .get_columns()
        .iter()
        .map(|column| (column.name().to_string(), column.null_count().to_string()))
        .collect();
    let name_width = rows.iter().map(|(name, _)| text_width(name)).max().unwrap_or(0);
    let count_width = rows.iter().map(|(_, count)| count.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(name, count)| format!("{name:<name_width$}    {count:>count_width$}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_stat(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.6}")
    }
}

/// Describe table: one row per statistic, one right-aligned column per
/// numeric column.
fn describe_table(df: &DataFrame) -> String {
    let numeric: Vec<_> = df
        .get_columns()
        .iter()
        .filter(|column| is_numeric_dtype(column.dtype()))
        .collect();
    if numeric.is_empty() {
        return "No numeric columns.".to_string();
    }

    let labels = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];
    let label_width = labels.iter().map(|label| label.len()).max().unwrap_or(0);

    let columns: Vec<(String, Vec<String>)> = numeric
        .iter()
        .map(|column| {
            let values = describe_column(column)
                .rows()
                .iter()
                .map(|(_, value)| format_stat(*value))
                .collect();
            (column.name().to_string(), values)
        })
        .collect();
    let widths: Vec<usize> = columns
        .iter()
        .map(|(name, values)| {
            values
                .iter()
                .map(|value| value.len())
                .chain(std::iter::once(text_width(name)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(labels.len() + 1);
    let mut header = " ".repeat(label_width);
    for ((name, _), &width) in columns.iter().zip(&widths) {
        header.push_str(&format!("  {name:>width$}"));
    }
    lines.push(header);
    for (row, label) in labels.iter().enumerate() {
        let mut line = format!("{label:<label_width$}");
        for ((_, values), &width) in columns.iter().zip(&widths) {
            line.push_str(&format!("  {:>width$}", values[row]));
        }
        lines.push(line);
    }
    lines.join("\n")
}
