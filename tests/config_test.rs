//! Configuration loading tests
//!
//! Tests that pad configuration loads from a fresh file with the expected
//! defaults, without touching the real ~/.scanpad.cfg

use scanpad::state::config::Config;
use tempfile::tempdir;

#[test]
fn test_defaults_written_on_first_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("scanpad.cfg");

    let config = Config::load_from(&path).expect("Failed to load config");

    // File created with defaults
    assert!(path.exists());
    assert_eq!(config.debounce_ms(), 50);
    assert!(config.manual_edit());
    assert!(!config.bell());
    assert!(config.submit_command().is_none());
}

#[test]
fn test_settings_roundtrip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("scanpad.cfg");

    let mut config = Config::load_from(&path).expect("Failed to load config");
    config.set("scanner", "debounce_ms", "80");
    config.set("scanner", "manual_edit", "false");
    config.set("submit", "command", "post-batch");
    config.save().expect("Failed to save config");

    let reloaded = Config::load_from(&path).expect("Failed to reload config");
    assert_eq!(reloaded.debounce_ms(), 80);
    assert!(!reloaded.manual_edit());
    assert_eq!(reloaded.submit_command().as_deref(), Some("post-batch"));
}

#[test]
fn test_config_path_exposed() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("scanpad.cfg");

    let config = Config::load_from(&path).expect("Failed to load config");
    assert!(config.path().to_str().unwrap().contains("scanpad.cfg"));
}

#[test]
fn test_garbage_values_fall_back() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("scanpad.cfg");

    let mut config = Config::load_from(&path).expect("Failed to load config");
    config.set("scanner", "debounce_ms", "not-a-number");
    config.set("scanner", "bell", "maybe");
    config.save().expect("Failed to save config");

    let reloaded = Config::load_from(&path).expect("Failed to reload config");
    assert_eq!(reloaded.debounce_ms(), 50);
    assert!(!reloaded.bell());
}
