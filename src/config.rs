//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/textree/textree.toml`
//! 3. Local config: `<dir>/.textree.toml`
//! 4. Environment variables: `TEXTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, VowelSet};
use crate::domain::parser::DEFAULT_PARAGRAPH_DELIMITER;

/// Expression preprocessing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Replace embedded expressions before parsing
    pub enabled: bool,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Structural parser settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ParserConfig {
    /// Regex separating paragraphs in the concatenated input
    pub paragraph_delimiter: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            paragraph_delimiter: DEFAULT_PARAGRAPH_DELIMITER.to_string(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub input_path: Option<PathBuf>,
    pub min_words: Option<usize>,
    pub order_symbol: Option<char>,
    pub vowels: Option<String>,
    pub preprocess: RawPreprocessConfig,
    pub parser: RawParserConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawPreprocessConfig {
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawParserConfig {
    pub paragraph_delimiter: Option<String>,
}

/// Unified configuration for textree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Input file used when a command gets no FILE argument
    pub input_path: PathBuf,
    /// Sentences with fewer words are dropped by `filter`
    pub min_words: usize,
    /// Symbol counted by `sort-lexemes`
    pub order_symbol: char,
    /// Letters counted as vowels, everything else alphabetic is a consonant
    pub vowels: String,
    pub preprocess: PreprocessConfig,
    pub parser: ParserConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("data/input.txt"),
            min_words: 3,
            order_symbol: 'a',
            vowels: "aeiouy".to_string(),
            preprocess: PreprocessConfig::default(),
            parser: ParserConfig::default(),
        }
    }
}

/// Get the XDG config directory for textree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "textree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("textree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".textree.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}`; unknown variables leave the input as is.
fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(raw.as_ref()) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path.to_path_buf(),
    }
}

impl Settings {
    /// Vowel set used by the vowel / consonant analytic.
    pub fn vowel_set(&self) -> VowelSet {
        VowelSet::new(&self.vowels)
    }

    fn expand_paths(&mut self) {
        self.input_path = expand_path(&self.input_path);
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            input_path: overlay
                .input_path
                .clone()
                .unwrap_or_else(|| self.input_path.clone()),
            min_words: overlay.min_words.unwrap_or(self.min_words),
            order_symbol: overlay.order_symbol.unwrap_or(self.order_symbol),
            vowels: overlay.vowels.clone().unwrap_or_else(|| self.vowels.clone()),
            preprocess: PreprocessConfig {
                enabled: overlay.preprocess.enabled.unwrap_or(self.preprocess.enabled),
            },
            parser: ParserConfig {
                paragraph_delimiter: overlay
                    .parser
                    .paragraph_delimiter
                    .clone()
                    .unwrap_or_else(|| self.parser.paragraph_delimiter.clone()),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.textree.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        current = Self::apply_env_overrides(current, None)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply TEXTREE_* environment variables as explicit overrides.
    ///
    /// `source` replaces the process environment when given.
    pub fn apply_env_overrides(
        mut settings: Self,
        source: Option<Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("TEXTREE")
                    .prefix_separator("_")
                    .separator("__")
                    .source(source),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("input_path") {
            settings.input_path = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("min_words") {
            settings.min_words = val.parse().map_err(|e| ApplicationError::Config {
                message: format!("TEXTREE_MIN_WORDS={val}: {e}"),
            })?;
        }
        if let Ok(val) = config.get_string("order_symbol") {
            settings.order_symbol = single_char(&val).ok_or_else(|| ApplicationError::Config {
                message: format!("TEXTREE_ORDER_SYMBOL must be one character, got {val:?}"),
            })?;
        }
        if let Ok(val) = config.get_string("vowels") {
            settings.vowels = val;
        }
        if let Ok(val) = config.get_bool("preprocess.enabled") {
            settings.preprocess.enabled = val;
        }
        if let Ok(val) = config.get_string("parser.paragraph_delimiter") {
            settings.parser.paragraph_delimiter = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# textree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/textree/textree.toml
#   Local:  <dir>/.textree.toml          (selected with -C <dir>)
#   Env:    TEXTREE_* environment variables, nested keys use "__"
#           e.g. TEXTREE_MIN_WORDS=4, TEXTREE_PREPROCESS__ENABLED=false

# Input file used when a command gets no FILE argument
# input_path = "data/input.txt"

# Sentences with fewer words are removed by `textree filter`
# min_words = 3

# Symbol whose occurrences order lexemes in `textree sort-lexemes`
# order_symbol = "a"

# Letters counted as vowels by `textree vowels`
# vowels = "aeiouy"

[preprocess]
# Replace embedded arithmetic/bitwise expressions by their value
# enabled = true

[parser]
# Regex separating paragraphs after empty lines have been dropped
# paragraph_delimiter = '\r?\n[ \t]*\r?\n|\t| {4,}'
"#
        .to_string()
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
