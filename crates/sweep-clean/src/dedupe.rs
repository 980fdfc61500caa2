use std::collections::HashSet;

use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NewChunkedArray};
use tracing::debug;

use sweep_common::any_to_string;

use crate::error::Result;

/// Cell key for row comparison; `None` keeps missing distinct from empty text.
fn cell_key(value: AnyValue<'_>) -> Option<String> {
    if value.is_null() {
        None
    } else {
        Some(any_to_string(value))
    }
}

/// Returns a copy of `df` without rows that exactly repeat an earlier row.
///
/// All columns take part in the comparison and missing equals missing. The
/// first occurrence is kept and the relative order of survivors is preserved.
pub fn drop_duplicate_rows(df: &DataFrame) -> Result<DataFrame> {
    if df.height() == 0 || df.width() == 0 {
        return Ok(df.clone());
    }
    let columns: Vec<_> = df
        .get_columns()
        .iter()
        .map(|column| column.as_materialized_series())
        .collect();
    let mut seen = HashSet::with_capacity(df.height());
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let row: Vec<Option<String>> = columns
            .iter()
            .map(|series| cell_key(series.get(idx).unwrap_or(AnyValue::Null)))
            .collect();
        keep.push(seen.insert(row));
    }
    let removed = keep.iter().filter(|kept| !**kept).count();
    if removed == 0 {
        return Ok(df.clone());
    }
    let mask = BooleanChunked::from_slice("dedupe".into(), &keep);
    let deduped = df.filter(&mask)?;
    debug!(
        removed,
        remaining = deduped.height(),
        "dropped duplicate rows"
    );
    Ok(deduped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn frame(ids: &[Option<i64>], names: &[Option<&str>]) -> DataFrame {
        DataFrame::new(vec![
            Series::new("id".into(), ids.to_vec()).into_column(),
            Series::new("name".into(), names.to_vec()).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn keeps_first_occurrence_in_order() {
        let df = frame(
            &[Some(1), Some(2), Some(1), Some(3)],
            &[Some("a"), Some("b"), Some("a"), Some("c")],
        );
        let deduped = drop_duplicate_rows(&df).unwrap();

        assert_eq!(deduped.height(), 3);
        let ids: Vec<Option<i64>> = deduped
            .column("id")
            .unwrap()
            .as_materialized_series()
            .i64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn partial_matches_are_not_duplicates() {
        let df = frame(&[Some(1), Some(1)], &[Some("a"), Some("b")]);
        assert_eq!(drop_duplicate_rows(&df).unwrap().height(), 2);
    }

    #[test]
    fn missing_equals_missing_but_not_empty_text() {
        let df = frame(&[None, None, None], &[None, None, Some("")]);
        assert_eq!(drop_duplicate_rows(&df).unwrap().height(), 2);
    }

    #[test]
    fn input_frame_is_untouched() {
        let df = frame(&[Some(1), Some(1)], &[Some("a"), Some("a")]);
        let _ = drop_duplicate_rows(&df).unwrap();
        assert_eq!(df.height(), 2);
    }
}
