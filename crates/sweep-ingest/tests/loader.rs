//! Integration tests for extension dispatch and the loader boundary.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use polars::prelude::DataType;
use tempfile::TempDir;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use sweep_ingest::{FileFormat, IngestError, SUPPORTED_FORMATS, load_dataset, try_load_dataset};

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets></workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

/// Writes a single-sheet workbook whose `<sheetData>` holds `rows`.
fn write_workbook(dir: &TempDir, name: &str, rows: &str) -> PathBuf {
    let path = dir.path().join(name);
    let sheet = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{rows}</sheetData></worksheet>"#
    );
    let parts = [
        ("[Content_Types].xml", CONTENT_TYPES),
        ("_rels/.rels", ROOT_RELS),
        ("xl/workbook.xml", WORKBOOK),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
        ("xl/worksheets/sheet1.xml", sheet.as_str()),
    ];

    let mut zip = zip::ZipWriter::new(fs::File::create(&path).expect("create workbook"));
    for (part, body) in parts {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        zip.start_file(part, options).expect("start part");
        zip.write_all(body.as_bytes()).expect("write part");
    }
    zip.finish().expect("finish workbook");
    path
}

fn text_cell(reference: &str, text: &str) -> String {
    format!(r#"<c r="{reference}" t="inlineStr"><is><t>{text}</t></is></c>"#)
}

fn number_cell(reference: &str, value: &str) -> String {
    format!(r#"<c r="{reference}"><v>{value}</v></c>"#)
}

#[test]
fn csv_counts_match_source() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "data.csv", "id,name,score\n1,a,2.5\n2,b,\n3,c,4\n");

    let df = load_dataset(&path).expect("load csv");
    assert_eq!(df.height(), 3);
    assert_eq!(df.width(), 3);
}

#[test]
fn tsv_counts_match_source() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "data.tsv", "id\tname\n1\tAlice\n2\tBob, Jr.\n");

    let df = load_dataset(&path).expect("load tsv");
    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 2);
}

#[test]
fn json_counts_match_source() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "data.json",
        r#"[{"id": 1, "name": "a"}, {"id": 2, "name": "b"}, {"id": 3, "name": "c"}, {"id": 4, "name": "d"}]"#,
    );

    let df = load_dataset(&path).expect("load json");
    assert_eq!(df.height(), 4);
    assert_eq!(df.width(), 2);
}

#[test]
fn xlsx_first_sheet_is_typed_by_column() {
    let dir = TempDir::new().unwrap();
    // Row 3 has no score cell and row 4 has no name cell.
    let rows = [
        format!(
            r#"<row r="1">{}{}{}</row>"#,
            text_cell("A1", "id"),
            text_cell("B1", "score"),
            text_cell("C1", "name")
        ),
        format!(
            r#"<row r="2">{}{}{}</row>"#,
            number_cell("A2", "1"),
            number_cell("B2", "2.5"),
            text_cell("C2", "a")
        ),
        format!(r#"<row r="3">{}{}</row>"#, number_cell("A3", "2"), text_cell("C3", "b")),
        format!(r#"<row r="4">{}{}</row>"#, number_cell("A4", "3"), number_cell("B4", "4")),
    ]
    .concat();
    let path = write_workbook(&dir, "data.xlsx", &rows);

    let df = load_dataset(&path).expect("load xlsx");
    assert_eq!(df.height(), 3);
    assert_eq!(df.width(), 3);

    let names: Vec<&str> = df.get_column_names().iter().map(|name| name.as_str()).collect();
    assert_eq!(names, vec!["id", "score", "name"]);

    let id = df.column("id").unwrap();
    assert_eq!(id.dtype(), &DataType::Int64);
    assert_eq!(id.null_count(), 0);

    let score = df.column("score").unwrap();
    assert_eq!(score.dtype(), &DataType::Float64);
    assert_eq!(score.null_count(), 1);
    assert!(score.get(1).unwrap().is_null());

    let name = df.column("name").unwrap();
    assert_eq!(name.dtype(), &DataType::String);
    assert_eq!(name.null_count(), 1);
    assert!(name.get(2).unwrap().is_null());
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "data.txt", "id\n1\n");

    let err = load_dataset(&path).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
    assert!(!err.is_load_error());
}

#[test]
fn boundary_returns_none_for_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "data.parquet", "PAR1");

    assert!(try_load_dataset(&path).is_none());
}

#[test]
fn boundary_returns_none_for_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");

    let err = load_dataset(&path).unwrap_err();
    assert!(err.is_load_error());
    assert!(try_load_dataset(&path).is_none());
}

#[test]
fn boundary_returns_none_for_corrupt_content() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "data.json", "{ not json");

    assert!(try_load_dataset(&path).is_none());
}

#[test]
fn supported_formats_cover_all_extensions() {
    let extensions: Vec<&str> = SUPPORTED_FORMATS.iter().map(|f| f.extension()).collect();
    assert_eq!(extensions, vec![".csv", ".xlsx", ".tsv", ".json"]);
    assert_eq!(FileFormat::Tsv.to_string(), ".tsv");
}
