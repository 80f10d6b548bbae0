use std::sync::Arc;

use crate::domain::parser::TextParser;
use crate::domain::{CompositeKind, Leaf, TextNode};

/// Word stage: one leaf per character, letters for word characters and
/// signs for everything else.
#[derive(Debug, Default, Clone)]
pub struct WordParser;

impl WordParser {
    pub fn new() -> Self {
        Self
    }
}

impl TextParser for WordParser {
    fn parse(&self, raw: &str) -> TextNode {
        let children = raw
            .chars()
            .map(|c| Arc::new(TextNode::from(Leaf::classify(c))))
            .collect();
        TextNode::with_children(CompositeKind::Word, children)
    }
}
