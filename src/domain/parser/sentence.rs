use std::sync::Arc;

use crate::domain::parser::{LexemeParser, TextParser};
use crate::domain::{is_word_char, CompositeKind, TextNode};

/// Sentence stage: splits at whitespace runs followed by a word start
/// (word character, `-` or `(`). Whitespace followed by anything else stays
/// inside the lexeme.
#[derive(Debug, Clone, Default)]
pub struct SentenceParser {
    lexeme_parser: LexemeParser,
}

impl SentenceParser {
    pub fn new() -> Self {
        Self::default()
    }
}

fn starts_lexeme(c: char) -> bool {
    is_word_char(c) || c == '-' || c == '('
}

/// Lexeme fragments of a sentence, empty ones dropped.
pub(crate) fn split_lexemes(sentence: &str) -> Vec<&str> {
    let mut lexemes = Vec::new();
    let mut start = 0;
    let mut chars = sentence.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !c.is_ascii_whitespace() {
            continue;
        }
        let mut run_end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if !next.is_ascii_whitespace() {
                break;
            }
            run_end = j + next.len_utf8();
            chars.next();
        }
        if let Some(&(_, next)) = chars.peek() {
            if starts_lexeme(next) {
                lexemes.push(&sentence[start..i]);
                start = run_end;
            }
        }
    }
    lexemes.push(&sentence[start..]);

    lexemes.retain(|lexeme| !lexeme.is_empty());
    lexemes
}

impl TextParser for SentenceParser {
    fn parse(&self, raw: &str) -> TextNode {
        let children = split_lexemes(raw)
            .into_iter()
            .map(|lexeme| Arc::new(self.lexeme_parser.parse(lexeme)))
            .collect();
        TextNode::with_children(CompositeKind::Sentence, children)
    }
}
