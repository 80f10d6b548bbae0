//! Integration tests for Settings config loading.
//!
//! These tests run without a global config (temp directories only), so they
//! test local config merging with defaults.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use textree::application::ApplicationError;
use textree::config::{local_config_path, Settings};

#[test]
fn given_local_config_when_load_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let local = r#"
min_words = 5
order_symbol = "o"

[preprocess]
enabled = false
"#;
    fs::write(local_config_path(dir.path()), local).unwrap();

    // Act
    let settings = Settings::load(Some(dir.path())).expect("load settings");

    // Assert
    assert_eq!(settings.min_words, 5);
    assert_eq!(settings.order_symbol, 'o');
    assert!(!settings.preprocess.enabled);
    assert_eq!(settings.vowels, "aeiouy");
}

#[test]
fn given_no_local_config_when_load_then_uses_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();

    // Act
    let settings = Settings::load(Some(dir.path())).expect("load settings");

    // Assert
    assert_eq!(settings.min_words, 3);
    assert_eq!(settings.input_path, PathBuf::from("data/input.txt"));
}

#[test]
fn given_malformed_local_config_when_load_then_config_error() {
    // Arrange
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "min_words = [").unwrap();

    // Act
    let result = Settings::load(Some(dir.path()));

    // Assert
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_env_vars_when_applying_overrides_then_env_wins_over_file() {
    // Arrange
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "min_words = 5\n").unwrap();
    let from_file = Settings::load(Some(dir.path())).unwrap();
    let env: HashMap<String, String> = [
        ("TEXTREE_MIN_WORDS", "7"),
        ("TEXTREE_VOWELS", "aeiou"),
        ("TEXTREE_INPUT_PATH", "texts/other.txt"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    // Act
    let settings = Settings::apply_env_overrides(from_file, Some(env)).unwrap();

    // Assert
    assert_eq!(settings.min_words, 7);
    assert_eq!(settings.vowel_set().len(), 5);
    assert_eq!(settings.input_path, PathBuf::from("texts/other.txt"));
}

#[test]
fn given_settings_when_rendering_toml_then_contains_sections() {
    // Act
    let toml = Settings::default().to_toml().unwrap();

    // Assert
    assert!(toml.contains("min_words = 3"));
    assert!(toml.contains("[preprocess]"));
    assert!(toml.contains("[parser]"));
}
