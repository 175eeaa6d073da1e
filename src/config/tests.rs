use super::Config;
use crate::errors::Error;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_config(contents: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    let path = std::env::temp_dir().join(format!("dayboard-config-{nanos}.json"));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn missing_file_is_a_config_error() {
    let err = Config::load_from("definitely-not-here.json").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn empty_object_falls_back_to_defaults() {
    let path = temp_config("{}");
    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.default_owner().as_str(), "local");
    assert!(cfg.file_logging_enabled());
    let _ = fs::remove_file(path);
}

#[test]
fn malformed_json_is_rejected() {
    let path = temp_config("{ not json");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    let _ = fs::remove_file(path);
}

#[test]
fn set_persists_to_disk() {
    let path = temp_config("{}");
    let mut cfg = Config::load_from(&path).unwrap();
    cfg.set("DEFAULT_OWNER", "alice").unwrap();
    cfg.set("FILE_LOGGING_ENABLED", "false").unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.default_owner().as_str(), "alice");
    assert!(!reloaded.file_logging_enabled());
    let _ = fs::remove_file(path);
}

#[test]
fn unknown_key_lists_valid_keys() {
    let path = temp_config("{}");
    let mut cfg = Config::load_from(&path).unwrap();
    let err = cfg.set("NOT_A_KEY", "whatever").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("DEFAULT_OWNER"));
    assert!(message.contains("FILE_LOGGING_ENABLED"));
    let _ = fs::remove_file(path);
}

#[test]
fn owner_must_not_be_empty() {
    let path = temp_config("{}");
    let mut cfg = Config::load_from(&path).unwrap();
    assert!(cfg.set("DEFAULT_OWNER", "   ").is_err());
    assert_eq!(cfg.default_owner().as_str(), "local");
    let _ = fs::remove_file(path);
}

#[test]
fn booleans_parse_case_insensitively() {
    let path = temp_config("{}");
    let mut cfg = Config::load_from(&path).unwrap();
    cfg.set("FILE_LOGGING_ENABLED", "FALSE").unwrap();
    assert!(!cfg.file_logging_enabled());
    assert!(cfg.set("FILE_LOGGING_ENABLED", "maybe").is_err());
    let _ = fs::remove_file(path);
}
