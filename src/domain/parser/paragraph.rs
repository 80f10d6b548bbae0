use std::sync::Arc;

use regex::Regex;

use crate::domain::parser::{SentenceParser, TextParser};
use crate::domain::{CompositeKind, TextNode};

/// Everything up to and including a run of terminal punctuation, or the
/// rest of the paragraph.
const SENTENCE_PATTERN: &str = r"[^.!?…]*(?:[.!?…]+|$)";

/// Paragraph stage: cuts after each run of terminal punctuation.
#[derive(Debug, Clone)]
pub struct ParagraphParser {
    sentence_regex: Regex,
    sentence_parser: SentenceParser,
}

impl Default for ParagraphParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ParagraphParser {
    pub fn new() -> Self {
        Self {
            sentence_regex: Regex::new(SENTENCE_PATTERN).expect("valid sentence pattern"),
            sentence_parser: SentenceParser::new(),
        }
    }

    pub(crate) fn split_sentences<'a>(&self, paragraph: &'a str) -> Vec<&'a str> {
        self.sentence_regex
            .find_iter(paragraph)
            .map(|m| m.as_str().trim_ascii())
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }
}

impl TextParser for ParagraphParser {
    fn parse(&self, raw: &str) -> TextNode {
        let children = self
            .split_sentences(raw)
            .into_iter()
            .map(|sentence| Arc::new(self.sentence_parser.parse(sentence)))
            .collect();
        TextNode::with_children(CompositeKind::Paragraph, children)
    }
}
