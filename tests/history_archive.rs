use chrono::NaiveDateTime;
use newsdesk::history::{HistoryStore, JsonArchiveStore, ARCHIVE_TIMESTAMP_FORMAT};
use newsdesk::models::{Message, Role};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn sample_session(i: usize) -> Vec<Message> {
    vec![
        Message::user(format!("question {}", i)),
        Message::assistant(format!("answer {}", i)),
    ]
}

#[test]
fn test_append_then_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("chat_history.json");
    let store = JsonArchiveStore::new(&path, 0);

    for i in 0..3 {
        store.append(&sample_session(i)).unwrap();
    }

    let records = store.load();
    assert_eq!(records.len(), 3);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.session, sample_session(i));
        assert_eq!(record.session[0].role, Role::User);
        assert_eq!(record.session[1].role, Role::Assistant);
    }
}

#[test]
fn test_timestamp_uses_archive_format() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("chat_history.json");
    let store = JsonArchiveStore::new(&path, 0);

    store.append(&sample_session(0)).unwrap();

    let records = store.load();
    assert!(NaiveDateTime::parse_from_str(&records[0].timestamp, ARCHIVE_TIMESTAMP_FORMAT).is_ok());
}

#[test]
fn test_archive_wire_format() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("chat_history.json");
    let store = JsonArchiveStore::new(&path, 0);

    store.append(&sample_session(0)).unwrap();

    let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let records = raw.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0]["timestamp"].is_string());
    assert_eq!(records[0]["session"][0]["role"], "user");
    assert_eq!(records[0]["session"][0]["content"], "question 0");
    assert_eq!(records[0]["session"][1]["role"], "assistant");
}

#[test]
fn test_load_missing_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonArchiveStore::new(temp_dir.path().join("nope.json"), 0);

    assert!(store.load().is_empty());
    assert!(store.last_session().is_empty());
}

#[test]
fn test_load_corrupt_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("chat_history.json");
    fs::write(&path, "{ this is not json").unwrap();

    let store = JsonArchiveStore::new(&path, 0);
    assert!(store.load().is_empty());
    assert!(store.last_session().is_empty());
}

#[test]
fn test_last_session_is_most_recent() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("chat_history.json");
    let store = JsonArchiveStore::new(&path, 0);

    store.append(&sample_session(0)).unwrap();
    store.append(&sample_session(1)).unwrap();

    assert_eq!(store.last_session(), sample_session(1));
}

#[test]
fn test_retention_cap_drops_oldest_records() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("chat_history.json");
    let store = JsonArchiveStore::new(&path, 3);

    for i in 0..5 {
        store.append(&sample_session(i)).unwrap();
    }

    let records = store.load();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].session, sample_session(2));
    assert_eq!(records[2].session, sample_session(4));
}

#[test]
fn test_zero_cap_disables_retention() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("chat_history.json");
    let store = JsonArchiveStore::new(&path, 0);

    for i in 0..5 {
        store.append(&sample_session(i)).unwrap();
    }

    assert_eq!(store.load().len(), 5);
}

#[test]
fn test_clear_removes_file_and_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("chat_history.json");
    let store = JsonArchiveStore::new(&path, 0);

    store.append(&sample_session(0)).unwrap();
    assert!(path.exists());

    store.clear().unwrap();
    assert!(!path.exists());

    // Clearing an already-missing archive is not an error
    store.clear().unwrap();
}

#[test]
fn test_append_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("dir").join("chat_history.json");
    let store = JsonArchiveStore::new(&path, 0);

    store.append(&sample_session(0)).unwrap();
    assert!(path.exists());
    assert_eq!(store.load().len(), 1);
}
