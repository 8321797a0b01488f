//! Integration tests for Settings loading from an explicit config file.
//!
//! These tests assume no global config file and no `TAGTREE_*` variables
//! in the test environment.

use std::fs;

use tempfile::TempDir;

use tagtree::cli::CliError;
use tagtree::config::{OutputFormat, Settings};

#[test]
fn given_config_file_when_load_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tagtree.toml");
    fs::write(&path, "indent_width = 4\nformat = \"tree\"\n").unwrap();

    // Act
    let settings = Settings::load(Some(path.as_path())).expect("load settings");

    // Assert
    assert_eq!(settings.indent_width, 4);
    assert_eq!(settings.format, OutputFormat::Tree);
    assert!(settings.color, "unspecified values keep their default");
}

#[test]
fn given_missing_config_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let result = Settings::load(Some(dir.path().join("absent.toml").as_path()));

    assert!(matches!(result, Err(CliError::Config { .. })));
}

#[test]
fn given_unknown_key_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tagtree.toml");
    fs::write(&path, "indent = 4\n").unwrap();

    let result = Settings::load(Some(path.as_path()));
    assert!(matches!(result, Err(CliError::Config { .. })));
}

#[test]
fn given_zero_indent_in_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tagtree.toml");
    fs::write(&path, "indent_width = 0\n").unwrap();

    let err = Settings::load(Some(path.as_path())).unwrap_err();
    assert_eq!(err.exit_code(), tagtree::exitcode::CONFIG);
}

#[test]
fn given_settings_when_serialized_then_round_trips_through_toml() {
    let settings = Settings {
        indent_width: 3,
        format: OutputFormat::Tree,
        color: false,
    };
    let text = settings.to_toml().unwrap();
    let parsed: Settings = toml::from_str(&text).unwrap();
    assert_eq!(parsed, settings);
}
