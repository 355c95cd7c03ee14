use std::fs;

use calamine::{Data, Range};
use tempfile::tempdir;

use wpi_ingest::{ingest_file, table_from_range};

#[test]
fn reads_delimited_text_with_quoting() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("places.csv");
    fs::write(
        &path,
        "Name,Lat,Lon,Notes\n\"Cafe \"\"Blue\"\", Ltd\",59.33,18.06,\"has, commas\"\nPark,59.34,18.07,\n",
    )
    .expect("write csv");

    let table = ingest_file(&path).expect("ingest csv");
    assert_eq!(table.source_id, "places.csv");
    assert_eq!(table.columns, ["Name", "Lat", "Lon", "Notes"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows[0].row_number, 2);
    assert_eq!(table.rows[0].cell("Name"), Some("Cafe \"Blue\", Ltd"));
    assert_eq!(table.rows[0].cell("Notes"), Some("has, commas"));
    assert_eq!(table.rows[1].cell("Notes"), Some(""));
}

#[test]
fn blank_rows_are_dropped_and_keep_their_gap() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("gaps.csv");
    fs::write(&path, "Name,Lat\nAlpha,1\n\n,\nBeta,2\n").expect("write csv");

    let table = ingest_file(&path).expect("ingest csv");
    let numbers: Vec<u32> = table.rows.iter().map(|row| row.row_number).collect();
    assert_eq!(numbers, [2, 5]);
    assert_eq!(table.rows[1].cell("Name"), Some("Beta"));
}

#[test]
fn empty_and_repeated_headers_are_dropped() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("headers.csv");
    fs::write(&path, "Name, ,Name,City\nAlpha,x,Beta,Oslo\n").expect("write csv");

    let table = ingest_file(&path).expect("ingest csv");
    assert_eq!(table.columns, ["Name", "City"]);
    assert_eq!(table.rows[0].cell("Name"), Some("Alpha"));
    assert_eq!(table.rows[0].cell("City"), Some("Oslo"));
}

#[test]
fn header_bom_is_stripped_and_cells_stay_raw() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("bom.csv");
    fs::write(&path, "\u{feff}Name ,City\n  Oslo Cafe ,Oslo\n").expect("write csv");

    let table = ingest_file(&path).expect("ingest csv");
    assert_eq!(table.columns, ["Name", "City"]);
    assert_eq!(table.rows[0].cell("Name"), Some("  Oslo Cafe "));
}

#[test]
fn header_only_delimited_file_yields_no_rows() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("empty.csv");
    fs::write(&path, "Name,Lat,Lon\n").expect("write csv");

    let table = ingest_file(&path).expect("ingest csv");
    assert_eq!(table.columns.len(), 3);
    assert!(table.rows.is_empty());
}

#[test]
fn empty_delimited_file_is_a_parse_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("nothing.csv");
    fs::write(&path, "").expect("write csv");

    let err = ingest_file(&path).expect_err("empty file");
    assert!(err.to_string().contains("at least 2 rows"));
}

#[test]
fn spreadsheet_needs_header_and_one_data_row() {
    let mut range: Range<Data> = Range::new((0, 0), (0, 1));
    range.set_value((0, 0), Data::String("Name".to_string()));
    range.set_value((0, 1), Data::String("Lat".to_string()));

    let err = table_from_range("one.xlsx", &range).expect_err("header only");
    assert!(err.to_string().contains("file must have at least 2 rows"));
}

#[test]
fn spreadsheet_cells_format_like_text() {
    let mut range: Range<Data> = Range::new((0, 0), (2, 2));
    range.set_value((0, 0), Data::String("Name".to_string()));
    range.set_value((0, 1), Data::String("Lat".to_string()));
    range.set_value((0, 2), Data::String("Ref".to_string()));
    range.set_value((1, 0), Data::String("Ferry Dock".to_string()));
    range.set_value((1, 1), Data::Float(59.5));
    range.set_value((1, 2), Data::Float(12345.0));
    range.set_value((2, 0), Data::String("Old Mill".to_string()));
    range.set_value((2, 1), Data::Float(58.97));
    range.set_value((2, 2), Data::Bool(true));

    let table = table_from_range("grid.xlsx", &range).expect("grid table");
    assert_eq!(table.columns, ["Name", "Lat", "Ref"]);
    assert_eq!(table.rows[0].row_number, 2);
    assert_eq!(table.rows[0].cell("Lat"), Some("59.5"));
    assert_eq!(table.rows[0].cell("Ref"), Some("12345"));
    assert_eq!(table.rows[1].row_number, 3);
    assert_eq!(table.rows[1].cell("Ref"), Some("true"));
}
