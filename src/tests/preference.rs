use super::common::setup;
use crate::error::PersistenceError;
use crate::utils::preference::{ FileStorage, MemoryStorage, PreferenceStorage };

#[test]
fn test_memory_storage_read_write() {
    let mut storage = MemoryStorage::new();
    assert_eq!(storage.read("theme"), Ok(None));
    storage.write("theme", "dark").unwrap();
    assert_eq!(storage.read("theme"), Ok(Some("dark".to_string())));
}

#[test]
fn test_file_storage_missing_file_is_absent() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("preferences.json"));
    assert_eq!(storage.read("portfolio-theme"), Ok(None));
}

#[test]
fn test_file_storage_round_trip_creates_parent_dirs() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio").join("preferences.json");
    let mut storage = FileStorage::new(&path);

    storage.write("portfolio-theme", "dark").unwrap();
    assert!(path.exists());

    let reopened = FileStorage::new(&path);
    assert_eq!(reopened.read("portfolio-theme"), Ok(Some("dark".to_string())));
}

#[test]
fn test_file_storage_keeps_other_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, r#"{"other": "value"}"#).unwrap();

    let mut storage = FileStorage::new(&path);
    storage.write("portfolio-theme", "light").unwrap();

    assert_eq!(storage.read("other"), Ok(Some("value".to_string())));
    assert_eq!(storage.read("portfolio-theme"), Ok(Some("light".to_string())));
}

#[test]
fn test_file_storage_corrupt_file_reads_as_error_and_is_replaced() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "not json").unwrap();

    let mut storage = FileStorage::new(&path);
    assert!(matches!(storage.read("portfolio-theme"), Err(PersistenceError::Read(_))));

    storage.write("portfolio-theme", "dark").unwrap();
    assert_eq!(storage.read("portfolio-theme"), Ok(Some("dark".to_string())));
}

#[test]
fn test_file_storage_write_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    // The parent "directory" is a regular file, so the write cannot succeed.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    let mut storage = FileStorage::new(blocker.join("preferences.json"));
    assert!(matches!(storage.write("portfolio-theme", "dark"), Err(PersistenceError::Write(_))));
}

#[test]
fn test_file_storage_unreadable_file_is_left_untouched() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    // Not valid UTF-8, so reading fails before any JSON parsing happens.
    let original = vec![0xff, 0xfe, 0x00, 0x7b];
    std::fs::write(&path, &original).unwrap();

    let mut storage = FileStorage::new(&path);
    assert!(matches!(storage.write("portfolio-theme", "dark"), Err(PersistenceError::Write(_))));
    assert_eq!(std::fs::read(&path).unwrap(), original);
}
