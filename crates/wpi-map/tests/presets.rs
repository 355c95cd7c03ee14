use std::fs;

use tempfile::tempdir;

use wpi_map::{PresetStore, suggest};
use wpi_model::{ColumnMapping, FieldCatalog};

fn sample_mapping() -> ColumnMapping {
    let catalog = FieldCatalog::standard();
    let columns = vec!["Name".to_string(), "lat".to_string(), "lng".to_string()];
    suggest(&catalog, &columns)
}

#[test]
fn save_then_list_round_trips() {
    let dir = tempdir().expect("temp dir");
    let store = PresetStore::new(dir.path()).expect("open store");

    let saved = store
        .save("airbnb export", &sample_mapping())
        .expect("save preset");
    let listed = store.list().expect("list presets");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, saved.id);
    assert_eq!(listed[0].mapping, sample_mapping());
}

#[test]
fn duplicate_names_keep_distinct_ids() {
    let dir = tempdir().expect("temp dir");
    let store = PresetStore::new(dir.path()).expect("open store");

    let first = store
        .save("weekly drop", &sample_mapping())
        .expect("save first");
    let second = store
        .save("weekly drop", &ColumnMapping::new())
        .expect("save second");
    assert_ne!(first.id, second.id);
    assert_eq!(store.list().expect("list presets").len(), 2);

    let newest = store
        .find_by_name("weekly drop")
        .expect("find by name")
        .expect("preset present");
    assert_eq!(newest.id, second.id);
}

#[test]
fn corrupt_store_reads_as_empty() {
    let dir = tempdir().expect("temp dir");
    let store = PresetStore::new(dir.path()).expect("open store");
    fs::write(store.path(), "{not json").expect("corrupt file");

    assert!(store.list().expect("list presets").is_empty());
    store
        .save("fresh", &sample_mapping())
        .expect("save after corruption");
    assert_eq!(store.list().expect("list presets").len(), 1);
}

#[test]
fn delete_removes_by_id() {
    let dir = tempdir().expect("temp dir");
    let store = PresetStore::new(dir.path()).expect("open store");

    let saved = store.save("one off", &sample_mapping()).expect("save");
    assert!(store.delete(&saved.id).expect("delete"));
    assert!(store.list().expect("list presets").is_empty());
    assert!(!store.delete(&saved.id).expect("second delete"));
}
