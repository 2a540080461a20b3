//! Tests for loading `tracker.toml` and building stores from it

use std::fs;
use tempfile::TempDir;
use tracker::config::CONFIG_FILE_NAME;
use tracker::{IssueDraft, IssueStore, NotFoundError, Status, TrackerConfig, UnknownIdPolicy};

fn write_config(content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILE_NAME), content).unwrap();
    temp
}

#[test]
fn test_no_config_file_gives_empty_strict_store() {
    let temp = TempDir::new().unwrap();
    let config = TrackerConfig::load(temp.path()).unwrap();
    let mut store = IssueStore::from_config(&config);

    assert!(store.is_empty());
    assert_eq!(
        store.set_status(1, Status::Closed),
        Err(NotFoundError { id: 1 })
    );
}

#[test]
fn test_seeded_store_from_config() {
    let temp = write_config("[store]\nseed = true\n");
    let config = TrackerConfig::load(temp.path()).unwrap();
    let store = IssueStore::from_config(&config);

    let titles: Vec<String> = store.list().iter().map(|i| i.title.clone()).collect();
    assert_eq!(
        titles,
        vec!["Bug in login page", "UI alignment problem", "Add export button"]
    );
}

#[test]
fn test_ignore_policy_from_config() {
    let temp = write_config("[store]\nunknown_id = \"ignore\"\n");
    let config = TrackerConfig::load(temp.path()).unwrap();
    assert_eq!(config.unknown_id_policy(), UnknownIdPolicy::Ignore);

    let mut store = IssueStore::from_config(&config);
    assert!(store.set_status(9, Status::Closed).is_ok());
    assert!(store.is_empty());
}

#[test]
fn test_reject_blank_from_config() {
    let temp = write_config("[validation]\nreject_blank = true\n");
    let config = TrackerConfig::load(temp.path()).unwrap();
    let mut store = IssueStore::from_config(&config);

    assert!(store.add(&IssueDraft::new("   ", "Dan")).is_err());
    assert!(store.add(&IssueDraft::new("Real title", "Dan")).is_ok());
}

#[test]
fn test_malformed_config_is_an_error() {
    let temp = write_config("store = [");
    let result = TrackerConfig::load(temp.path());
    assert!(result.is_err());
}

#[test]
fn test_wrong_type_is_an_error() {
    let temp = write_config("[store]\nseed = \"yes\"\n");
    let err = TrackerConfig::load(temp.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("tracker.toml"));
}
