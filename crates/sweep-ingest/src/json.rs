//! JSON reading via serde_json.
//!
//! Two document shapes are accepted:
//!
//! - an array of record objects: `[{"id": 1, "name": "a"}, ...]`
//! - an object of columns, each either an array or an index-keyed object:
//!   `{"id": [1, 2]}` or `{"id": {"0": 1, "1": 2}}`

use std::path::Path;

use polars::prelude::{Column, DataFrame};
use serde_json::{Map, Value};

use crate::cells::{Cell, build_column};
use crate::error::{IngestError, Result};

/// Reads a JSON document into a DataFrame.
pub fn read_json(path: &Path) -> Result<DataFrame> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::from_io(path, e))?;
    let value: Value = serde_json::from_str(&text).map_err(|e| IngestError::JsonParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let columns = match value {
        Value::Array(records) => columns_from_records(&records),
        Value::Object(columns) => columns_from_object(&columns),
        _ => Err("expected an array of records or an object of columns".to_string()),
    }
    .map_err(|message| IngestError::JsonParse {
        path: path.to_path_buf(),
        message,
    })?;

    let columns: Vec<Column> = columns
        .iter()
        .map(|(name, cells)| build_column(name, cells))
        .collect();
    let df = DataFrame::new(columns)?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read json document"
    );
    Ok(df)
}

type NamedCells = Vec<(String, Vec<Cell>)>;

/// Columns in first-seen key order; keys absent from a record are missing.
fn columns_from_records(records: &[Value]) -> std::result::Result<NamedCells, String> {
    let mut columns: NamedCells = Vec::new();
    for (row_idx, record) in records.iter().enumerate() {
        let Value::Object(fields) = record else {
            return Err(format!("record {row_idx} is not an object"));
        };
        for (key, value) in fields {
            let position = match columns.iter().position(|(name, _)| name == key) {
                Some(position) => position,
                None => {
                    columns.push((key.clone(), vec![Cell::Missing; row_idx]));
                    columns.len() - 1
                }
            };
            columns[position].1.push(json_cell(value));
        }
        for (_, cells) in &mut columns {
            if cells.len() == row_idx {
                cells.push(Cell::Missing);
            }
        }
    }
    Ok(columns)
}

fn columns_from_object(object: &Map<String, Value>) -> std::result::Result<NamedCells, String> {
    let mut columns: NamedCells = Vec::with_capacity(object.len());
    for (name, values) in object {
        let cells: Vec<Cell> = match values {
            Value::Array(items) => items.iter().map(json_cell).collect(),
            Value::Object(indexed) => indexed.values().map(json_cell).collect(),
            _ => return Err(format!("column '{name}' is not an array or object")),
        };
        if let Some((first, first_cells)) = columns.first()
            && first_cells.len() != cells.len()
        {
            return Err(format!(
                "column '{name}' has {} values but '{first}' has {}",
                cells.len(),
                first_cells.len()
            ));
        }
        columns.push((name.clone(), cells));
    }
    Ok(columns)
}

/// Converts a JSON value into a buffered cell. Nested values keep their JSON text.
fn json_cell(value: &Value) -> Cell {
    match value {
        Value::Null => Cell::Missing,
        Value::Bool(v) => Cell::Bool(*v),
        Value::Number(n) => match n.as_i64() {
            Some(v) => Cell::Int(v),
            None => n.as_f64().map_or(Cell::Missing, Cell::Float),
        },
        Value::String(s) => Cell::Text(s.clone()),
        other => Cell::Text(other.to_string()),
    }
}
