//! Tests for the key record storage contract

use keygate_key::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn record_path(dir: &TempDir) -> PathBuf {
    dir.path().join("access_keys.json")
}

#[test]
fn test_fresh_store_bootstrap() {
    let dir = tempfile::tempdir().unwrap();
    let path = record_path(&dir);
    let store = KeyStore::open(&path);

    let record = store.load().unwrap();
    assert_eq!(record, KeyRecord::empty());

    // The empty structure was persisted for later calls
    let on_disk: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, serde_json::json!({ "active": [], "used": [] }));
}

#[test]
fn test_corrupted_store_recovers_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = record_path(&dir);
    fs::write(&path, "{ this is not json").unwrap();

    let store = KeyStore::open(&path);
    let record = store.load().unwrap();
    assert_eq!(record, KeyRecord::empty());

    // The bad file is left alone by a read
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ this is not json");
}

#[test]
fn test_record_missing_field_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = record_path(&dir);
    fs::write(&path, r#"{ "active": ["ABCDEFGHIJKLMNOP"] }"#).unwrap();

    let store = KeyStore::open(&path);
    assert_eq!(store.load().unwrap(), KeyRecord::empty());
}

#[test]
fn test_corrupted_store_is_replaced_on_next_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = record_path(&dir);
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

    let store = KeyStore::open(&path);
    let keys = store.create(2).unwrap();

    let record: KeyRecord = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(record.active, keys);
    assert!(record.used.is_empty());
}

#[test]
fn test_unreadable_record_recovers_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = record_path(&dir);
    // A directory where the record should be cannot be read as a file
    fs::create_dir(&path).unwrap();

    let store = KeyStore::open(&path);
    assert_eq!(store.list().unwrap(), KeyRecord::empty());
}

#[test]
fn test_existing_record_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = record_path(&dir);
    fs::write(
        &path,
        r#"{
  "active": ["AAAAAAAAAAAAAAAA", "BBBBBBBBBBBBBBBB"],
  "used": ["CCCCCCCCCCCCCCCC"]
}"#,
    )
    .unwrap();

    let store = KeyStore::open(&path);
    let record = store.load().unwrap();
    assert_eq!(record.active, vec!["AAAAAAAAAAAAAAAA", "BBBBBBBBBBBBBBBB"]);
    assert_eq!(record.used, vec!["CCCCCCCCCCCCCCCC"]);

    assert_eq!(store.validate("CCCCCCCCCCCCCCCC").unwrap().message, "already used");
    assert!(store.validate("BBBBBBBBBBBBBBBB").unwrap().valid);
}

#[test]
fn test_save_overwrites_whole_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = record_path(&dir);
    let store = KeyStore::open(&path);
    store.create(5).unwrap();

    let replacement = KeyRecord {
        active: vec!["QQQQQQQQQQQQQQQQ".to_string()],
        used: vec![],
    };
    store.save(&replacement).unwrap();

    assert_eq!(store.load().unwrap(), replacement);
    // Only the record and its lock file remain, no staging file
    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["access_keys.json", "access_keys.json.lock"]);
}

#[test]
fn test_record_is_indented_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = record_path(&dir);
    let store = KeyStore::open(&path);
    let keys = store.create(1).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\n  \"active\": [\n"));
    assert!(contents.contains(&format!("    \"{}\"", keys[0])));
    assert!(contents.contains("\"used\": []"));
}

#[test]
fn test_nested_store_directory_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deploy").join("keys").join("access_keys.json");
    let store = KeyStore::open(&path);

    store.create(1).unwrap();
    assert!(path.is_file());
}

#[test]
fn test_write_failure_propagates() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the store directory should be
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, "").unwrap();
    let store = KeyStore::open(blocker.join("access_keys.json"));

    let err = store.create(1).unwrap_err();
    assert!(err.is_storage_error(), "unexpected error: {err}");
}

#[cfg(unix)]
#[test]
fn test_record_permissions_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = record_path(&dir);
    KeyStore::open(&path).load().unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[cfg(target_os = "linux")]
#[test]
fn test_store_usable_when_lock_file_cannot_be_created() {
    let dir = tempfile::tempdir().unwrap();
    // 251 bytes is a legal name, the 256-byte lock file name is not
    let path = dir.path().join(format!("{}.json", "k".repeat(246)));
    fs::write(&path, r#"{"active":["AAAAAAAAAAAAAAAA"],"used":[]}"#).unwrap();

    let store = KeyStore::open(&path);
    assert!(!store.config().lock_path().exists());

    let record = store.list().unwrap();
    assert_eq!(record.active, vec!["AAAAAAAAAAAAAAAA"]);

    let outcome = store.validate("AAAAAAAAAAAAAAAA").unwrap();
    assert!(outcome.valid);
    assert_eq!(store.validate("AAAAAAAAAAAAAAAA").unwrap().message, "already used");
    assert_eq!(store.validate("BBBBBBBBBBBBBBBB").unwrap().message, "invalid key");

    let record = store.list().unwrap();
    assert!(record.active.is_empty());
    assert_eq!(record.used, vec!["AAAAAAAAAAAAAAAA"]);
}
