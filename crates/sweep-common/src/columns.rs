//! Column classification shared by the cleaner, reporter and visualizer.

use polars::prelude::{AnyValue, Column, DataFrame, DataType};

use crate::values::{any_to_f64, is_missing};

/// Placeholder written wherever a missing value is filled in.
pub const MISSING_SENTINEL: &str = "n/a";

/// How a column is treated during cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Values are coerced to `f64`; unparseable entries become missing.
    Numeric,
    /// Values are kept as text; missing entries become [`MISSING_SENTINEL`].
    Text,
}

/// Returns true for integer and floating-point dtypes.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Decide whether a column is numeric or text.
///
/// Numeric dtypes are numeric. A string column is numeric when it has at least
/// one non-missing value (empty text counts as missing) and strictly more than half of its non-missing values
/// parse as numbers, so a single stray entry does not demote a numeric column
/// to text. Everything else is text.
pub fn classify_column(column: &Column) -> ColumnKind {
    let dtype = column.dtype();
    if is_numeric_dtype(dtype) {
        return ColumnKind::Numeric;
    }
    if !matches!(dtype, DataType::String) {
        return ColumnKind::Text;
    }
    let series = column.as_materialized_series();
    let mut present = 0usize;
    let mut numeric = 0usize;
    for idx in 0..series.len() {
        let value = series.get(idx).unwrap_or(AnyValue::Null);
        if is_missing(&value) {
            continue;
        }
        present += 1;
        if any_to_f64(value).is_some() {
            numeric += 1;
        }
    }
    if present > 0 && numeric * 2 > present {
        ColumnKind::Numeric
    } else {
        ColumnKind::Text
    }
}

/// Names of the columns with a numeric dtype, in frame order.
pub fn numeric_column_names(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|column| is_numeric_dtype(column.dtype()))
        .map(|column| column.name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn string_column(name: &str, values: &[Option<&str>]) -> Column {
        Series::new(name.into(), values.to_vec()).into_column()
    }

    #[test]
    fn numeric_dtypes_are_numeric() {
        let column = Series::new("a".into(), &[1i64, 2, 3]).into_column();
        assert_eq!(classify_column(&column), ColumnKind::Numeric);
    }

    #[test]
    fn mostly_numeric_strings_are_numeric() {
        let column = string_column("id", &[Some("1"), Some("2"), Some("abc"), None]);
        assert_eq!(classify_column(&column), ColumnKind::Numeric);
    }

    #[test]
    fn half_numeric_strings_are_text() {
        let column = string_column("code", &[Some("1"), Some("x")]);
        assert_eq!(classify_column(&column), ColumnKind::Text);
    }

    #[test]
    fn all_missing_strings_are_text() {
        let column = string_column("empty", &[None, None]);
        assert_eq!(classify_column(&column), ColumnKind::Text);
    }

    #[test]
    fn empty_text_does_not_count_as_a_value() {
        let column = string_column("id", &[Some("1"), Some(""), Some(""), Some("x"), Some("2")]);
        assert_eq!(classify_column(&column), ColumnKind::Numeric);
    }

    #[test]
    fn booleans_are_text() {
        let column = Series::new("flag".into(), &[true, false]).into_column();
        assert_eq!(classify_column(&column), ColumnKind::Text);
    }

    #[test]
    fn numeric_column_names_keep_frame_order() {
        let df = DataFrame::new(vec![
            Series::new("b".into(), &[1.5f64]).into_column(),
            string_column("name", &[Some("x")]),
            Series::new("a".into(), &[2i32]).into_column(),
        ])
        .unwrap();
        assert_eq!(numeric_column_names(&df), vec!["b", "a"]);
    }
}
