mod common;

use common::write_workbook;
use rtuforge::error::Error;
use rtuforge::source::{CsvWorkbook, TabularSource};
use tempfile::TempDir;

#[test]
fn test_reads_rows_with_uneven_lengths() {
    let temp_dir = TempDir::new().unwrap();
    write_workbook(
        temp_dir.path(),
        "RTU,Indirizzo,CA\nRTU1,\"Via Roma, 1\",12\nRTU2\n",
        "RTU,Numero\n",
    );

    let rows = CsvWorkbook::new(temp_dir.path()).sheet("RTU").unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], vec!["RTU1", "Via Roma, 1", "12"]);
    assert_eq!(rows[2], vec!["RTU2"]);
}

#[test]
fn test_custom_delimiter() {
    let temp_dir = TempDir::new().unwrap();
    write_workbook(temp_dir.path(), "RTU;IP\nRTU1;10.0.0.1\n", "RTU;Numero\n");

    let rows = CsvWorkbook::new(temp_dir.path())
        .with_delimiter(b';')
        .sheet("RTU")
        .unwrap();
    assert_eq!(rows[1], vec!["RTU1", "10.0.0.1"]);
}

#[test]
fn test_strips_byte_order_mark() {
    let temp_dir = TempDir::new().unwrap();
    write_workbook(temp_dir.path(), "\u{feff}RTU,IP\nRTU1,10.0.0.1\n", "RTU\n");

    let rows = CsvWorkbook::new(temp_dir.path()).sheet("RTU").unwrap();
    assert_eq!(rows[0][0], "RTU");
}

#[test]
fn test_missing_sheet() {
    let temp_dir = TempDir::new().unwrap();
    let workbook = CsvWorkbook::new(temp_dir.path());

    match workbook.sheet("PROTEZIONI") {
        Err(Error::MissingSheet { sheet, workbook }) => {
            assert_eq!(sheet, "PROTEZIONI");
            assert_eq!(workbook, temp_dir.path().display().to_string());
        }
        other => panic!("Expected MissingSheet, got {other:?}"),
    }
}

#[test]
fn test_sheet_path() {
    let workbook = CsvWorkbook::new("conf");
    assert_eq!(
        workbook.sheet_path("RTU"),
        std::path::PathBuf::from("conf/RTU.csv")
    );
}
