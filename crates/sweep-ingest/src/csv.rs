//! Delimited text reading (CSV and TSV) via Polars.

use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Cell contents that load as missing values. `""` also covers quoted empty
/// fields.
pub const NULL_TOKENS: &[&str] = &[
    "",
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Reads a delimited file with a single header row into a DataFrame.
///
/// The schema is inferred from the whole file, so a late non-numeric value
/// turns its column into a string column instead of failing the parse.
pub fn read_delimited(path: &Path, separator: u8) -> Result<DataFrame> {
    std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;

    let null_values: Vec<PlSmallStr> = NULL_TOKENS.iter().map(|token| (*token).into()).collect();

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .map_parse_options(|options| {
            options
                .with_separator(separator)
                .with_null_values(Some(NullValues::AllColumns(null_values.clone())))
        })
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read delimited file"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn column_names(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    #[test]
    fn test_read_csv() {
        let file = create_temp_file("A,B,C\n1,2,3\n4,5,6\n");
        let df = read_delimited(file.path(), b',').unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
        assert_eq!(column_names(&df), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_read_tsv() {
        let file = create_temp_file("id\tname\n1\tAlice\n2\tBob\n");
        let df = read_delimited(file.path(), b'\t').unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(column_names(&df), vec!["id", "name"]);
        assert!(df.column("id").unwrap().dtype().is_integer());
    }

    #[test]
    fn test_null_tokens_and_empty_fields_are_missing() {
        let file = create_temp_file("a,b\n1,NA\n,x\nn/a,null\n");
        let df = read_delimited(file.path(), b',').unwrap();

        assert_eq!(df.column("a").unwrap().null_count(), 2);
        assert_eq!(df.column("b").unwrap().null_count(), 2);
    }

    #[test]
    fn test_quoted_empty_field_is_missing() {
        let file = create_temp_file("id,name\n1,\"\"\n2,b\n");
        let df = read_delimited(file.path(), b',').unwrap();

        assert_eq!(df.height(), 2);
        let name = df.column("name").unwrap();
        assert!(sweep_common::is_missing(&name.get(0).unwrap()));
        assert!(!sweep_common::is_missing(&name.get(1).unwrap()));
    }

    #[test]
    fn test_late_text_value_keeps_column_as_string() {
        let mut content = String::from("id\n");
        for i in 0..200 {
            content.push_str(&format!("{i}\n"));
        }
        content.push_str("abc\n");
        let file = create_temp_file(&content);
        let df = read_delimited(file.path(), b',').unwrap();

        assert_eq!(df.height(), 201);
        assert_eq!(df.column("id").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_missing_file() {
        let result = read_delimited(Path::new("/definitely/not/here.csv"), b',');
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
