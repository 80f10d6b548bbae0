//! Structural parser: raw text to composite tree.
//!
//! Each stage turns a raw fragment into a node of one granularity and hands
//! finer fragments to the next stage:
//!
//! ```text
//! DocumentParser   text      -> paragraphs  (delimiter regex)
//! ParagraphParser  paragraph -> sentences   (terminal punctuation)
//! SentenceParser   sentence  -> lexemes     (whitespace before a word start)
//! LexemeParser     lexeme    -> words + at most one trailing sign
//! WordParser       word      -> letters and signs
//! ```
//!
//! No stage fails: empty or unmatched fragments are skipped.

mod document;
mod lexeme;
mod paragraph;
mod sentence;
mod word;

pub use document::{DocumentParser, DEFAULT_PARAGRAPH_DELIMITER};
pub use lexeme::LexemeParser;
pub use paragraph::ParagraphParser;
pub use sentence::SentenceParser;
pub use word::WordParser;

use crate::domain::TextNode;

/// One stage of the structural parser.
pub trait TextParser {
    fn parse(&self, raw: &str) -> TextNode;
}
