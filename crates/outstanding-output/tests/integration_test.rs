//! Integration tests for writing extrema results to disk.

use outstanding::{ExtremaResult, ReduceOptions, reduce};
use outstanding_output::{DEFAULT_OUTPUT_FILE, ExportFormat, Exporter, write_result};
use std::fs;

fn abbvie() -> ExtremaResult {
    let json = r#"{
        "cik": 1551152,
        "entityName": "AbbVie Inc.",
        "units": {"shares": [
            {"fy": 2020, "val": 1765440000},
            {"fy": 2021, "val": 1766000000},
            {"fy": 2022, "val": 1768700000}
        ]}
    }"#;
    reduce(json, &ReduceOptions::default()).unwrap()
}

#[test]
fn test_write_and_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_OUTPUT_FILE);
    let result = abbvie();

    write_result(&path, &result).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n  \"entityName\": \"AbbVie Inc.\",\n"));
    let back: ExtremaResult = serde_json::from_str(&text).unwrap();
    assert_eq!(back, result);
}

#[test]
fn test_write_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    fs::write(&path, "stale content that is longer than the new document ".repeat(20)).unwrap();

    write_result(&path, &abbvie()).unwrap();

    let back: ExtremaResult = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(back.entity_name(), "AbbVie Inc.");
    assert_eq!(back.max().fy.to_string(), "2022");
    assert_eq!(back.min().fy.to_string(), "2021");
}

#[test]
fn test_export_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join(format!("data.{}", ExportFormat::Csv.extension()));

    abbvie().export_to_file(&path, ExportFormat::Csv).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("AbbVie Inc.,max,2022,1768700000.0"));
    assert!(text.contains("AbbVie Inc.,min,2021,1766000000.0"));
}

#[test]
fn test_write_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("data.json");

    assert!(write_result(&path, &abbvie()).is_err());
    assert!(!path.exists());
}
