#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `JsonFileRecordStore`: load recovery policy,
//! pretty-printed layout and write failures.

use std::fs;

use passvault_app::adapters::JsonFileRecordStore;
use passvault_core::error::CoreError;
use passvault_core::traits::RecordStore;
use passvault_core::types::Record;

// ===== Helpers =====

fn create_test_store() -> (JsonFileRecordStore, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let store = JsonFileRecordStore::new(tmp.path().join("PasswordDatabase.txt"));
    (store, tmp)
}

fn make_record(id: &str) -> Record {
    Record {
        id: id.to_string(),
        website: format!("{id}.example.com"),
        username: "alice".to_string(),
        password: "p@ss".to_string(),
    }
}

fn dir_entries(store: &JsonFileRecordStore) -> Vec<String> {
    let dir = store.path().parent().unwrap();
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn snapshot(writer: usize, len: usize) -> Vec<Record> {
    (0..len).map(|i| make_record(&format!("w{writer}-{i}"))).collect()
}

// ===== load =====

#[tokio::test]
async fn load_absent_file_is_empty() {
    let (store, _tmp) = create_test_store();
    assert!(store.load().await.is_empty());
}

#[tokio::test]
async fn load_blank_file_is_empty() {
    let (store, _tmp) = create_test_store();
    fs::write(store.path(), "  \n\t ").unwrap();
    assert!(store.load().await.is_empty());
}

#[tokio::test]
async fn load_corrupt_file_is_empty() {
    let (store, _tmp) = create_test_store();
    fs::write(store.path(), "{not json").unwrap();
    assert!(store.load().await.is_empty());

    fs::write(store.path(), r#"{"id":"1"}"#).unwrap();
    assert!(store.load().await.is_empty());
}

#[tokio::test]
async fn load_fills_missing_optional_fields() {
    let (store, _tmp) = create_test_store();
    fs::write(store.path(), r#"[{"id":"1","website":"a.com"}]"#).unwrap();

    let records = store.load().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].username, "");
    assert_eq!(records[0].password, "");
}

// ===== replace =====

#[tokio::test]
async fn replace_then_load_roundtrips_in_order() {
    let (store, _tmp) = create_test_store();
    let records = vec![make_record("b"), make_record("a"), make_record("c")];

    store.replace(&records).await.unwrap();

    assert_eq!(store.load().await, records);
    assert_eq!(dir_entries(&store), vec!["PasswordDatabase.txt".to_string()]);
}

#[tokio::test]
async fn replace_writes_pretty_printed_array() {
    let (store, _tmp) = create_test_store();
    store.replace(&[make_record("1")]).await.unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(raw.starts_with("[\n  {\n    \"id\": \"1\""));
    assert!(raw.contains("\"password\": \"p@ss\""));
}

#[tokio::test]
async fn replace_with_empty_snapshot_writes_empty_array() {
    let (store, _tmp) = create_test_store();
    store.replace(&[make_record("1")]).await.unwrap();
    store.replace(&[]).await.unwrap();

    assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
    assert!(store.load().await.is_empty());
}

#[tokio::test]
async fn replace_creates_missing_parent_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let store = JsonFileRecordStore::new(tmp.path().join("nested").join("db.txt"));

    store.replace(&[make_record("1")]).await.unwrap();

    assert_eq!(store.load().await.len(), 1);
}

#[tokio::test]
async fn replace_failure_is_surfaced() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, "a file, not a directory").unwrap();
    let store = JsonFileRecordStore::new(blocker.join("db.txt"));

    let result = store.replace(&[make_record("1")]).await;

    assert!(matches!(result, Err(CoreError::PersistenceFailure(_))));
}

#[tokio::test]
async fn corrupt_store_is_overwritten_by_next_replace() {
    let (store, _tmp) = create_test_store();
    fs::write(store.path(), "garbage").unwrap();

    store.replace(&[make_record("1")]).await.unwrap();

    assert_eq!(store.load().await, vec![make_record("1")]);
}

// ===== concurrency =====

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_replaces_never_fail_or_corrupt() {
    let (store, _tmp) = create_test_store();

    for round in 0..25 {
        let mut handles = Vec::new();
        for writer in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.replace(&snapshot(writer, 20 + writer)).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap_or_else(|e| panic!("round {round}: {e}"));
        }

        // Last writer wins: the file holds exactly one writer's full snapshot
        let raw = fs::read_to_string(store.path()).unwrap();
        let records: Vec<Record> = serde_json::from_str(&raw)
            .unwrap_or_else(|e| panic!("round {round}: store is not valid JSON: {e}"));
        let writer = (0..8)
            .find(|&w| records == snapshot(w, 20 + w))
            .unwrap_or_else(|| panic!("round {round}: store holds a mixed snapshot"));
        assert_eq!(records.len(), 20 + writer);
    }

    assert_eq!(dir_entries(&store), vec!["PasswordDatabase.txt".to_string()]);
}
