//! Text pipeline service
//!
//! Runs "read → preprocess → parse" over a filesystem abstraction and hands
//! back the document tree.

use std::path::Path;
use std::sync::Arc;

use regex::Regex;
use tracing::{debug, info, instrument};

use crate::application::preprocess::ExpressionConverter;
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{DocumentParser, TextNode, TextParser};
use crate::infrastructure::traits::FileSystem;

/// Reads, preprocesses and parses input text.
pub struct TextService {
    fs: Arc<dyn FileSystem>,
    converter: ExpressionConverter,
    parser: DocumentParser,
    preprocess: bool,
}

impl TextService {
    /// Create a new text service.
    ///
    /// Fails with a config error when the paragraph delimiter is not a valid
    /// regex.
    pub fn new(fs: Arc<dyn FileSystem>, settings: &Settings) -> ApplicationResult<Self> {
        let delimiter = Regex::new(&settings.parser.paragraph_delimiter).map_err(|e| {
            ApplicationError::Config {
                message: format!("parser.paragraph_delimiter: {e}"),
            }
        })?;
        Ok(Self {
            fs,
            converter: ExpressionConverter::new(),
            parser: DocumentParser::with_delimiter(delimiter),
            preprocess: settings.preprocess.enabled,
        })
    }

    /// Read a file, drop empty lines and concatenate the rest without
    /// separators.
    pub fn read_all_text(&self, path: &Path) -> ApplicationResult<String> {
        debug!("read_all_text: path={}", path.display());
        if !self.fs.is_file(path) {
            return Err(ApplicationError::MissingInput(format!(
                "file not found: {}",
                path.display()
            )));
        }

        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read input", path)?;
        let text: String = content.lines().filter(|line| !line.is_empty()).collect();
        if text.is_empty() {
            return Err(ApplicationError::MissingInput(format!(
                "no text in {}",
                path.display()
            )));
        }

        info!("read {} characters from {}", text.len(), path.display());
        Ok(text)
    }

    /// Substitute embedded expressions, unless preprocessing is disabled.
    pub fn preprocess(&self, text: &str) -> String {
        if self.preprocess {
            self.converter.replace_expressions(text)
        } else {
            text.to_string()
        }
    }

    /// Parse already preprocessed text into a document.
    pub fn parse_text(&self, text: &str) -> ApplicationResult<TextNode> {
        if text.trim().is_empty() {
            return Err(ApplicationError::MissingInput("empty text".into()));
        }
        let document = self.parser.parse(text);
        debug!("parse_text: {} paragraphs", document.child_count());
        Ok(document)
    }

    /// Full pipeline: read, preprocess and parse `path`.
    #[instrument(level = "debug", skip(self), fields(path = %path.display()))]
    pub fn create(&self, path: &Path) -> ApplicationResult<TextNode> {
        let raw = self.read_all_text(path)?;
        let text = self.preprocess(&raw);
        self.parse_text(&text)
    }
}
