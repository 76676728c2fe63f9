use std::fs;

use pawview_engine::{ensure_state_dir, FlagStore};
use tempfile::TempDir;

#[test]
fn creates_missing_state_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("state");
    assert!(!new_dir.exists());
    ensure_state_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn unset_flag_reads_as_none() {
    let temp = TempDir::new().unwrap();
    let store = FlagStore::new(temp.path());
    assert_eq!(store.read_flag("dark_mode"), None);
}

#[test]
fn flags_round_trip_and_overwrite() {
    let temp = TempDir::new().unwrap();
    let store = FlagStore::new(temp.path().join("nested"));

    store.persist_flag("dark_mode", true).unwrap();
    store.persist_flag("other", false).unwrap();
    assert_eq!(store.read_flag("dark_mode"), Some(true));

    store.persist_flag("dark_mode", false).unwrap();
    let reopened = FlagStore::new(temp.path().join("nested"));
    assert_eq!(reopened.read_flag("dark_mode"), Some(false));
    assert_eq!(reopened.read_flag("other"), Some(false));
}

#[test]
fn corrupt_file_reads_as_unset() {
    pawview_logging::initialize_for_tests();
    let temp = TempDir::new().unwrap();
    let store = FlagStore::new(temp.path());
    fs::write(store.path(), "not ron at all {").unwrap();

    assert_eq!(store.read_flag("dark_mode"), None);
    store.persist_flag("dark_mode", true).unwrap();
    assert_eq!(store.read_flag("dark_mode"), Some(true));
}

#[test]
fn state_dir_that_is_a_file_fails() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let store = FlagStore::new(&file_path);
    assert!(store.persist_flag("dark_mode", true).is_err());
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "x");
}
