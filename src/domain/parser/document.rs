use std::sync::Arc;

use regex::Regex;
use tracing::debug;

use crate::domain::parser::{ParagraphParser, TextParser};
use crate::domain::{CompositeKind, TextNode};

/// A blank line, a tab, or an indent of four or more spaces. Indents survive
/// the reader's line concatenation, blank lines do not.
pub const DEFAULT_PARAGRAPH_DELIMITER: &str = r"\r?\n[ \t]*\r?\n|\t| {4,}";

/// Document stage: splits the whole text into paragraphs.
#[derive(Debug, Clone)]
pub struct DocumentParser {
    delimiter: Regex,
    paragraph_parser: ParagraphParser,
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::with_delimiter(
            Regex::new(DEFAULT_PARAGRAPH_DELIMITER).expect("valid paragraph delimiter"),
        )
    }
}

impl DocumentParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(delimiter: Regex) -> Self {
        Self {
            delimiter,
            paragraph_parser: ParagraphParser::new(),
        }
    }
}

impl TextParser for DocumentParser {
    fn parse(&self, raw: &str) -> TextNode {
        let children: Vec<_> = self
            .delimiter
            .split(raw)
            .map(str::trim_ascii)
            .filter(|paragraph| !paragraph.is_empty())
            .map(|paragraph| Arc::new(self.paragraph_parser.parse(paragraph)))
            .collect();
        debug!("parse: {} paragraphs", children.len());
        TextNode::with_children(CompositeKind::Document, children)
    }
}
