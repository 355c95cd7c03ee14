use std::collections::BTreeMap;
use std::fs;

use tempfile::TempDir;

use wpi_model::{FieldValue, PlaceRecord};
use wpi_store::{JsonlPlaceStore, MemoryPlaceStore, PlaceStore, StoreError};

fn record(fingerprint: &str, name: &str, latitude: f64, longitude: f64) -> PlaceRecord {
    let mut fields = BTreeMap::new();
    fields.insert("name".to_string(), FieldValue::Text(name.to_string()));
    fields.insert("latitude".to_string(), FieldValue::Number(latitude));
    fields.insert("longitude".to_string(), FieldValue::Number(longitude));
    PlaceRecord {
        fingerprint: fingerprint.to_string(),
        fields,
    }
}

#[test]
fn memory_store_acknowledges_fingerprints() {
    let store = MemoryPlaceStore::new();
    let batch = vec![
        record("aa", "Harbor Cafe", 59.332, 18.064),
        record("bb", "Old Mill", 59.4, 18.1),
    ];
    let ack = store.insert_batch(&batch).expect("insert");
    assert_eq!(ack.inserted_ids, vec!["aa".to_string(), "bb".to_string()]);
    assert_eq!(store.len(), 2);
    assert_eq!(store.records(), batch);
}

#[test]
fn memory_snapshot_projects_matchable_records() {
    let mut unmatchable = record("cc", "No Coordinates", 0.0, 0.0);
    unmatchable.fields.remove("latitude");

    let store = MemoryPlaceStore::seeded(vec![record("aa", "Harbor Cafe", 59.332, 18.064), unmatchable]);
    let snapshot = store.fetch_existing_for_dedup().expect("fetch");
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, "aa");
    assert_eq!(snapshot[0].name, "Harbor Cafe");
    assert_eq!(snapshot[0].latitude, 59.332);
}

#[test]
fn jsonl_missing_file_reads_empty() {
    let dir = TempDir::new().expect("tempdir");
    let store = JsonlPlaceStore::new(dir.path().join("places.jsonl"));
    assert!(store.fetch_existing_for_dedup().expect("fetch").is_empty());
}

#[test]
fn jsonl_round_trips_batches() {
    let dir = TempDir::new().expect("tempdir");
    let store = JsonlPlaceStore::new(dir.path().join("places.jsonl"));

    store
        .insert_batch(&[record("aa", "Harbor Cafe", 59.332, 18.064)])
        .expect("first batch");
    store
        .insert_batch(&[record("bb", "Old Mill", 59.4, 18.1)])
        .expect("second batch");

    let snapshot = store.fetch_existing_for_dedup().expect("fetch");
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].name, "Harbor Cafe");
    assert_eq!(snapshot[1].name, "Old Mill");
}

#[test]
fn jsonl_tolerates_blank_lines() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("places.jsonl");
    let store = JsonlPlaceStore::new(&path);
    store
        .insert_batch(&[record("aa", "Harbor Cafe", 59.332, 18.064)])
        .expect("insert");

    let mut contents = fs::read_to_string(&path).expect("read");
    contents.push('\n');
    fs::write(&path, contents).expect("rewrite");

    assert_eq!(store.fetch_existing_for_dedup().expect("fetch").len(), 1);
}

#[test]
fn jsonl_malformed_line_is_a_hard_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("places.jsonl");
    fs::write(&path, "{not json}\n").expect("seed");

    let store = JsonlPlaceStore::new(&path);
    let err = store.fetch_existing_for_dedup().expect_err("malformed");
    assert!(matches!(err, StoreError::Malformed { .. }));
}
