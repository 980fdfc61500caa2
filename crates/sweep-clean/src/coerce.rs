use polars::prelude::{AnyValue, Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};
use tracing::{debug, info};

use sweep_common::{
    ColumnKind, MISSING_SENTINEL, any_to_f64, any_to_string, classify_column, is_missing,
    is_numeric_dtype,
};

use crate::dedupe::drop_duplicate_rows;
use crate::error::Result;

/// Removes duplicate rows, then normalizes every column.
///
/// The input frame is left untouched.
pub fn clean_dataset(df: &DataFrame) -> Result<DataFrame> {
    let deduped = drop_duplicate_rows(df)?;
    let columns: Vec<Column> = deduped.get_columns().iter().map(coerce_column).collect();
    let numeric = columns
        .iter()
        .filter(|column| is_numeric_dtype(column.dtype()))
        .count();
    let cleaned = DataFrame::new(columns)?;
    info!(
        rows_in = df.height(),
        rows_out = cleaned.height(),
        numeric_columns = numeric,
        text_columns = cleaned.width() - numeric,
        "cleaned dataset"
    );
    Ok(cleaned)
}

/// Normalizes one column according to its [`ColumnKind`].
///
/// - Text: rendered as strings, missing values and empty text replaced by
///   the sentinel.
/// - Numeric: coerced to `f64`; values that do not parse become missing.
pub fn coerce_column(column: &Column) -> Column {
    let series = column.as_materialized_series();
    let name = column.name().clone();
    let missing = missing_count(column);
    let values = (0..series.len()).map(|idx| series.get(idx).unwrap_or(AnyValue::Null));
    match classify_column(column) {
        ColumnKind::Numeric => {
            let coerced: Vec<Option<f64>> = values
                .map(|value| any_to_f64(value).filter(|v| !v.is_nan()))
                .collect();
            let invalid = coerced
                .iter()
                .filter(|value| value.is_none())
                .count()
                .saturating_sub(missing);
            debug!(column = %name, invalid, "coerced column to numeric");
            Series::new(name, coerced).into_column()
        }
        ColumnKind::Text => {
            let text: Vec<String> = values.map(text_or_sentinel).collect();
            debug!(column = %name, filled = missing, "filled missing text values");
            Series::new(name, text).into_column()
        }
    }
}

/// Replaces every remaining missing value, in any column, with the sentinel.
///
/// Columns that contain a missing value or empty text are rendered as text;
/// columns without one are returned unchanged.
pub fn fill_missing_with_sentinel(df: &DataFrame) -> Result<DataFrame> {
    let mut filled = 0usize;
    let columns: Vec<Column> = df
        .get_columns()
        .iter()
        .map(|column| {
            let missing = missing_count(column);
            if missing == 0 {
                return column.clone();
            }
            filled += missing;
            let series = column.as_materialized_series();
            let text: Vec<String> = (0..series.len())
                .map(|idx| text_or_sentinel(series.get(idx).unwrap_or(AnyValue::Null)))
                .collect();
            Series::new(column.name().clone(), text).into_column()
        })
        .collect();
    let result = DataFrame::new(columns)?;
    debug!(filled, "filled remaining missing values");
    Ok(result)
}

fn missing_count(column: &Column) -> usize {
    if !matches!(column.dtype(), DataType::String) {
        return column.null_count();
    }
    let series = column.as_materialized_series();
    (0..series.len())
        .filter(|&idx| is_missing(&series.get(idx).unwrap_or(AnyValue::Null)))
        .count()
}

fn text_or_sentinel(value: AnyValue<'_>) -> String {
    if is_missing(&value) {
        MISSING_SENTINEL.to_string()
    } else {
        any_to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string_column(name: &str, values: &[Option<&str>]) -> Column {
        Series::new(name.into(), values.to_vec()).into_column()
    }

    fn strings(column: &Column) -> Vec<Option<String>> {
        column
            .as_materialized_series()
            .str()
            .unwrap()
            .into_iter()
            .map(|value| value.map(str::to_string))
            .collect()
    }

    fn floats(column: &Column) -> Vec<Option<f64>> {
        column
            .as_materialized_series()
            .f64()
            .unwrap()
            .into_iter()
            .collect()
    }

    #[test]
    fn text_column_gets_sentinel() {
        let column = string_column("name", &[Some("a"), None, Some("c")]);
        let coerced = coerce_column(&column);

        assert_eq!(coerced.null_count(), 0);
        assert_eq!(
            strings(&coerced),
            vec![Some("a".into()), Some("n/a".into()), Some("c".into())]
        );
    }

    #[test]
    fn empty_text_gets_sentinel() {
        let column = string_column("name", &[Some(""), Some("b"), None]);
        let coerced = coerce_column(&column);

        assert_eq!(
            strings(&coerced),
            vec![Some("n/a".into()), Some("b".into()), Some("n/a".into())]
        );
    }

    #[test]
    fn final_pass_fills_empty_text() {
        let df = DataFrame::new(vec![string_column("note", &[Some("x"), Some("")])]).unwrap();
        let filled = fill_missing_with_sentinel(&df).unwrap();

        let note = filled.column("note").unwrap();
        assert_eq!(strings(note), vec![Some("x".into()), Some("n/a".into())]);
    }

    #[test]
    fn numeric_strings_are_coerced_with_invalid_as_missing() {
        let column = string_column("id", &[Some("1"), Some("abc"), Some("3.5"), None]);
        let coerced = coerce_column(&column);

        assert_eq!(coerced.dtype(), &DataType::Float64);
        assert_eq!(floats(&coerced), vec![Some(1.0), None, Some(3.5), None]);
    }

    #[test]
    fn integer_columns_become_floats() {
        let column = Series::new("n".into(), &[Some(1i64), None]).into_column();
        let coerced = coerce_column(&column);

        assert_eq!(coerced.dtype(), &DataType::Float64);
        assert_eq!(floats(&coerced), vec![Some(1.0), None]);
    }

    #[test]
    fn nan_becomes_missing() {
        let column = Series::new("x".into(), &[1.0f64, f64::NAN]).into_column();
        let coerced = coerce_column(&column);
        assert_eq!(coerced.null_count(), 1);
    }

    #[test]
    fn final_pass_fills_numeric_gaps() {
        let df = DataFrame::new(vec![
            Series::new("id".into(), &[Some(1.0f64), None]).into_column(),
            string_column("name", &[Some("a"), Some("b")]),
        ])
        .unwrap();
        let filled = fill_missing_with_sentinel(&df).unwrap();

        let id = filled.column("id").unwrap();
        assert_eq!(id.dtype(), &DataType::String);
        assert_eq!(strings(id), vec![Some("1".into()), Some("n/a".into())]);
        // Untouched when nothing is missing
        let name = filled.column("name").unwrap();
        assert_eq!(strings(name), vec![Some("a".into()), Some("b".into())]);
    }
}
