//! File store round-trip tests

use autotag::domain::Config;
use autotag::infrastructure::{ConfigStore, FileConfigStore};
use tempfile::TempDir;

#[test]
fn test_round_trip_preserves_rule_text_exactly() {
    let temp = TempDir::new().unwrap();
    let store = FileConfigStore::new(temp.path().join("autotag.toml"));

    let text = "# 非公開設定\nprivate R-18 R-18G\n\npattern_all ~1 ^(.+)(改)$\n";
    store.save(&Config::new(text)).unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.rule_raw(), text);
    assert_eq!(loaded.rules().unwrap().len(), 2);
}

#[test]
fn test_save_overwrites_previous_config() {
    let temp = TempDir::new().unwrap();
    let store = FileConfigStore::new(temp.path().join("autotag.toml"));

    store.save(&Config::new("private R-18")).unwrap();
    store.save(&Config::new("match 卯月 うーちゃん")).unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.rule_raw(), "match 卯月 うーちゃん");
}

#[test]
fn test_missing_file_loads_as_none() {
    let temp = TempDir::new().unwrap();
    let store = FileConfigStore::new(temp.path().join("never-saved.toml"));
    assert!(store.load().unwrap().is_none());
}
