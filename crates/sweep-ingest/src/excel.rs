//! Excel workbook reading via calamine.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Data, Reader, Xlsx, XlsxError, open_workbook};
use polars::prelude::{Column, DataFrame};

use crate::cells::{Cell, build_column};
use crate::error::{IngestError, Result};

/// Reads the first worksheet of an `.xlsx` workbook into a DataFrame.
///
/// The first row holds the column names; blank header cells are named
/// `column_<n>` (1-based). Empty and error cells load as missing values.
pub fn read_xlsx(path: &Path) -> Result<DataFrame> {
    std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;

    let mut workbook: Xlsx<BufReader<File>> =
        open_workbook(path).map_err(|e: XlsxError| IngestError::ExcelParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::ExcelParse {
            path: path.to_path_buf(),
            message: "workbook has no worksheets".to_string(),
        })?
        .map_err(|e| IngestError::ExcelParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(DataFrame::empty());
    };
    let headers = header_names(header_row);

    let mut cells: Vec<Vec<Cell>> = vec![Vec::new(); headers.len()];
    for row in rows {
        for (col_idx, column) in cells.iter_mut().enumerate() {
            column.push(row.get(col_idx).map_or(Cell::Missing, excel_cell));
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(&cells)
        .map(|(name, column)| build_column(name, column))
        .collect();
    let df = DataFrame::new(columns)?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read workbook"
    );
    Ok(df)
}

/// Column names from the header row. Blank names become `column_<n>` and
/// repeated names get a `.1`, `.2`, ... suffix.
fn header_names(row: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    row.iter()
        .enumerate()
        .map(|(idx, cell)| {
            let raw = cell.to_string();
            let base = if raw.trim().is_empty() {
                format!("column_{}", idx + 1)
            } else {
                raw.trim().to_string()
            };
            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{base}.{count}")
            };
            *count += 1;
            name
        })
        .collect()
}

/// Converts a calamine cell into a buffered cell.
///
/// Workbooks store every number as a float, so whole values within the
/// `i64` range load as integers.
fn excel_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Missing,
        Data::Int(v) => Cell::Int(*v),
        Data::Float(v) if is_whole(*v) => Cell::Int(*v as i64),
        Data::Float(v) => Cell::Float(*v),
        Data::Bool(v) => Cell::Bool(*v),
        Data::String(s) if s.trim().is_empty() => Cell::Missing,
        Data::String(s) => Cell::Text(s.clone()),
        other => Cell::Text(other.to_string()),
    }
}

fn is_whole(v: f64) -> bool {
    v.is_finite() && v.fract() == 0.0 && v.abs() < 9.0e15
}
