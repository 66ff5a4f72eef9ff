use super::{CheckStore, FileStore, MemoryStore};
use std::fs;

#[test]
fn test_memory_store_roundtrip() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("check-0-0"), None);

    store.set("check-0-0", "true");
    store.set("check-0-0", "false");

    assert_eq!(store.get("check-0-0").as_deref(), Some("false"));
    assert_eq!(store.entries().len(), 1);
}

#[test]
fn test_file_store_persists_across_opens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("checks.json");

    let mut store = FileStore::open(&path);
    assert_eq!(store.get("check-0-1"), None);
    store.set("check-0-1", "true");

    let reopened = FileStore::open(&path);
    assert_eq!(reopened.get("check-0-1").as_deref(), Some("true"));
    assert_eq!(reopened.path(), path.as_path());

    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk["check-0-1"], "true");
}

#[test]
fn test_corrupt_store_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checks.json");
    fs::write(&path, "not json at all").unwrap();

    let mut store = FileStore::open(&path);
    assert_eq!(store.get("check-0-0"), None);

    // The first write moves the corrupt file aside, then writes a valid one.
    store.set("check-0-0", "true");
    assert_eq!(
        FileStore::open(&path).get("check-0-0").as_deref(),
        Some("true")
    );
    assert_eq!(
        fs::read_to_string(store.backup_path()).unwrap(),
        "not json at all"
    );
}

#[test]
fn test_non_string_values_do_not_discard_valid_marks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checks.json");
    fs::write(
        &path,
        r#"{"check-0-0":"true","check-0-1":true,"check-0-2":3,"check-0-3":"false"}"#,
    )
    .unwrap();

    let mut store = FileStore::open(&path);
    assert_eq!(store.get("check-0-0").as_deref(), Some("true"));
    assert_eq!(store.get("check-0-1").as_deref(), Some("true"));
    assert_eq!(store.get("check-0-2"), None);
    assert_eq!(store.get("check-0-3").as_deref(), Some("false"));

    store.set("check-1-0", "true");

    let reopened = FileStore::open(&path);
    assert_eq!(reopened.get("check-0-0").as_deref(), Some("true"));
    assert_eq!(reopened.get("check-0-1").as_deref(), Some("true"));
    assert_eq!(reopened.get("check-1-0").as_deref(), Some("true"));
    assert!(!store.backup_path().exists(), "A readable store is not backed up");
}

#[test]
fn test_unwritable_store_keeps_value_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be makes every write fail.
    let path = dir.path().join("checks.json");
    fs::create_dir(&path).unwrap();

    let mut store = FileStore::open(&path);
    store.set("check-2-0", "true");

    assert_eq!(store.get("check-2-0").as_deref(), Some("true"));
}
