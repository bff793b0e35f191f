use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use todokit::config::{Config, ConfigError, LoggingConfig, UiConfig};

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.logging.level, "info");
    assert!(config.logging.log_state);
    assert!(config.logging.file.is_none());
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(!config.ui.show_ids);
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("todokit/config.toml"));
}

/// Test that a missing file falls back to defaults.
#[test]
fn test_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

/// Test that a partial file keeps defaults for unspecified keys.
#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config(
        r#"
[ui]
show_ids = true
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert!(config.ui.show_ids);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging, LoggingConfig::default());
}

/// Test that every key is read.
#[test]
fn test_full_file() {
    let (_dir, path) = write_config(
        r#"
[logging]
level = "todokit=debug,warn"
log_state = false
file = "/tmp/todokit-test.log"

[ui]
tick_rate_ms = 100
show_ids = true
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.logging.level, "todokit=debug,warn");
    assert!(!config.logging.log_state);
    assert_eq!(
        config.logging.file_path(),
        PathBuf::from("/tmp/todokit-test.log")
    );
    assert_eq!(
        config.ui,
        UiConfig {
            tick_rate_ms: 100,
            show_ids: true,
        }
    );
}

/// Test that the log file defaults to a path next to the config file.
#[test]
fn test_default_log_file_path() {
    let path = LoggingConfig::default().file_path();
    assert!(path.ends_with("todokit/todokit.log"));
}

/// Test that invalid TOML surfaces as a parse error with the path.
#[test]
fn test_parse_error() {
    let (_dir, path) = write_config("[ui\nshow_ids = ");

    let err = Config::load_from(&path).unwrap_err();

    match err {
        ConfigError::ParseError { path: err_path, .. } => assert_eq!(err_path, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

/// Test that a zero tick rate fails validation.
#[test]
fn test_validation_rejects_zero_tick_rate() {
    let (_dir, path) = write_config("[ui]\ntick_rate_ms = 0\n");

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("tick_rate_ms"));
}

/// Test that an unparsable log level fails validation.
#[test]
fn test_validation_rejects_bad_level() {
    let mut config = Config::default();
    config.logging.level = "todokit=notalevel".to_string();

    let err = config.validate().unwrap_err();

    assert!(err.to_string().contains("logging.level"));
}

/// Test that the default config validates.
#[test]
fn test_validation_passes_for_default() {
    assert!(Config::default().validate().is_ok());
}
