use std::sync::Arc;

use regex::Regex;

use crate::domain::parser::{TextParser, WordParser};
use crate::domain::{CompositeKind, TextNode};

/// A word starts with a word character, bracket or apostrophe and may
/// contain hyphens after that.
const WORD_PATTERN: &str = r"[A-Za-z0-9_)(']['A-Za-z0-9_)(-]*";

/// Lexeme stage: every word match becomes a word child; when the lexeme is
/// exactly one character longer than its last word, the lexeme's last
/// character is appended as a sign.
///
/// Known limitation: a lexeme keeps at most one trailing punctuation mark.
/// `hello!!` yields only the word, the marks are dropped.
#[derive(Debug, Clone)]
pub struct LexemeParser {
    word_regex: Regex,
    word_parser: WordParser,
}

impl Default for LexemeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LexemeParser {
    pub fn new() -> Self {
        Self {
            word_regex: Regex::new(WORD_PATTERN).expect("valid word pattern"),
            word_parser: WordParser::new(),
        }
    }
}

impl TextParser for LexemeParser {
    fn parse(&self, raw: &str) -> TextNode {
        let mut children = Vec::new();
        let mut last_word_len = 0;

        for word in self.word_regex.find_iter(raw) {
            last_word_len = word.as_str().chars().count();
            children.push(Arc::new(self.word_parser.parse(word.as_str())));
        }

        if raw.chars().count() - last_word_len == 1 {
            if let Some(last) = raw.chars().last() {
                children.push(Arc::new(TextNode::sign(last)));
            }
        }

        TextNode::with_children(CompositeKind::Lexeme, children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NodeKind;

    fn parse(raw: &str) -> TextNode {
        LexemeParser::new().parse(raw)
    }

    #[test]
    fn given_word_with_comma_when_parsing_then_word_and_sign() {
        let lexeme = parse("hello,");

        assert_eq!(lexeme.kind(), NodeKind::Lexeme);
        assert_eq!(lexeme.child_count(), 2);
        let word = lexeme.get_component(0).unwrap();
        assert_eq!(word.kind(), NodeKind::Word);
        assert_eq!(word.letter_count(), 5);
        assert_eq!(word.render(), "hello");
        let sign = lexeme.get_component(1).unwrap();
        assert_eq!(sign.kind(), NodeKind::Sign);
        assert_eq!(sign.symbol(), Some(','));
    }

    #[test]
    fn given_double_punctuation_when_parsing_then_punctuation_dropped() {
        let lexeme = parse("hello!!");

        assert_eq!(lexeme.child_count(), 1);
        assert_eq!(lexeme.render(), "hello");
    }

    #[test]
    fn given_bracketed_word_when_parsing_then_brackets_stay_in_word() {
        let lexeme = parse("(hello),");

        assert_eq!(lexeme.child_count(), 2);
        assert_eq!(lexeme.get_component(0).unwrap().render(), "(hello)");
        assert_eq!(lexeme.get_component(0).unwrap().letter_count(), 5);
    }

    #[test]
    fn given_lone_dash_when_parsing_then_single_sign() {
        let lexeme = parse("-");

        assert_eq!(lexeme.child_count(), 1);
        assert_eq!(lexeme.get_component(0).unwrap().kind(), NodeKind::Sign);
    }

    #[test]
    fn given_inner_punctuation_when_parsing_then_one_word_per_match() {
        let lexeme = parse("a,b");

        assert_eq!(lexeme.child_count(), 2);
        assert!(lexeme.children().all(|c| c.is_word()));
        assert_eq!(lexeme.render(), "ab");
    }
}
