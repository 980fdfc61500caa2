//! Typed cell buffers shared by the workbook and JSON readers.

use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

/// A single source value before its column type is known.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Cell {
    Missing,
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Cell {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    fn as_text(&self) -> Option<String> {
        match self {
            Self::Missing => None,
            Self::Int(v) => Some(v.to_string()),
            Self::Float(v) => Some(sweep_common::format_numeric(*v)),
            Self::Bool(v) => Some(v.to_string()),
            Self::Text(v) => Some(v.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellColumnType {
    Int64,
    Float64,
    Boolean,
    Utf8,
}

/// Infers the column type: all integers → Int64, all numbers → Float64,
/// all booleans → Boolean, anything mixed or textual → Utf8.
fn infer_column_type(cells: &[Cell]) -> CellColumnType {
    let mut has_int = false;
    let mut has_float = false;
    let mut has_bool = false;
    for cell in cells {
        match cell {
            Cell::Missing => {}
            Cell::Int(_) => has_int = true,
            Cell::Float(_) => has_float = true,
            Cell::Bool(_) => has_bool = true,
            Cell::Text(_) => return CellColumnType::Utf8,
        }
    }
    match (has_int, has_float, has_bool) {
        (_, _, true) if has_int || has_float => CellColumnType::Utf8,
        (false, false, true) => CellColumnType::Boolean,
        (_, true, false) => CellColumnType::Float64,
        (true, false, false) => CellColumnType::Int64,
        // Nothing but missing values
        _ => CellColumnType::Utf8,
    }
}

/// Build a Polars column from buffered cells using the inferred type.
pub(crate) fn build_column(name: &str, cells: &[Cell]) -> Column {
    let series = match infer_column_type(cells) {
        CellColumnType::Int64 => {
            let v: Vec<Option<i64>> = cells
                .iter()
                .map(|cell| match cell {
                    Cell::Int(v) => Some(*v),
                    _ => None,
                })
                .collect();
            Series::new(name.into(), v)
        }
        CellColumnType::Float64 => {
            let v: Vec<Option<f64>> = cells.iter().map(Cell::as_f64).collect();
            Series::new(name.into(), v)
        }
        CellColumnType::Boolean => {
            let v: Vec<Option<bool>> = cells
                .iter()
                .map(|cell| match cell {
                    Cell::Bool(v) => Some(*v),
                    _ => None,
                })
                .collect();
            Series::new(name.into(), v)
        }
        CellColumnType::Utf8 => {
            let v: Vec<Option<String>> = cells.iter().map(Cell::as_text).collect();
            Series::new(name.into(), v)
        }
    };
    series.into_column()
}
