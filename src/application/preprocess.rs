//! Embedded expression substitution.
//!
//! Runs on raw text before structural parsing: every arithmetic or bitwise
//! infix expression found in the text is replaced by the decimal string of
//! its value. Fragments that fail to evaluate are left untouched.

use regex::Regex;
use tracing::debug;

use crate::domain::{evaluate_infix, is_word_char};

/// Starts with a digit, `~` or `(`, ends with a digit or `)`, and uses only
/// operand and operator characters in between.
const CANDIDATE_PATTERN: &str = r"[0-9~(][0-9~()+*|^&<>-]*[0-9)]";

const OPERATOR_CHARS: &[char] = &['+', '-', '*', '|', '^', '&', '~', '<', '>'];

/// Finds embedded expressions and replaces them by their value.
#[derive(Debug, Clone)]
pub struct ExpressionConverter {
    candidate: Regex,
}

impl Default for ExpressionConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionConverter {
    pub fn new() -> Self {
        Self {
            candidate: Regex::new(CANDIDATE_PATTERN).expect("valid expression pattern"),
        }
    }

    /// Replaces each complete expression in `text` by its value.
    pub fn replace_expressions(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut copied_up_to = 0;
        let mut replaced = 0;

        for candidate in self.candidate.find_iter(text) {
            if touches_operator(text, candidate.start(), candidate.end()) {
                debug!("replace_expressions: skipping partial {:?}", candidate.as_str());
                continue;
            }
            let (start, end) = balance_brackets(text, candidate.start(), candidate.end());
            let fragment = &text[start..end];

            if !fragment.contains(OPERATOR_CHARS) || glued_to_word(text, start, end) {
                continue;
            }

            match evaluate_infix(fragment) {
                Ok(value) => {
                    debug!("replace_expressions: {fragment} -> {value}");
                    result.push_str(&text[copied_up_to..start]);
                    result.push_str(&value.to_string());
                    copied_up_to = end;
                    replaced += 1;
                }
                Err(e) => debug!("replace_expressions: skipping {fragment:?}: {e}"),
            }
        }

        result.push_str(&text[copied_up_to..]);
        debug!("replace_expressions: {replaced} expressions replaced");
        result
    }
}

/// Drops brackets at the edges that have no partner inside the fragment,
/// so `3+4)` in `(see 3+4)` becomes `3+4`.
fn balance_brackets(text: &str, mut start: usize, mut end: usize) -> (usize, usize) {
    loop {
        let fragment = &text[start..end];
        let open = fragment.matches('(').count();
        let close = fragment.matches(')').count();
        if close > open && fragment.ends_with(')') {
            end -= 1;
        } else if open > close && fragment.starts_with('(') {
            start += 1;
        } else {
            return (start, end);
        }
    }
}

/// A candidate directly preceded or followed by an operator is only part of
/// a longer malformed run such as `1+2+`.
fn touches_operator(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    [before, after]
        .into_iter()
        .flatten()
        .any(|c| OPERATOR_CHARS.contains(&c))
}

fn glued_to_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back().is_some_and(is_word_char);
    let after = text[end..].chars().next().is_some_and(is_word_char);
    before || after
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Result 3+4*2 here", "Result 11 here")]
    #[case("Result (3+4)*2 here", "Result 14 here")]
    #[case("Mask 6&3|1.", "Mask 3.")]
    #[case("Shift 13<<2, then ~6&9", "Shift 52, then 9")]
    #[case("(see 3+4)", "(see 7)")]
    #[case("a 3+ b", "a 3+ b")]
    #[case("a 1+2+ b", "a 1+2+ b")]
    #[case("a -3+4 b", "a -3+4 b")]
    #[case("x 3<4 y", "x 3<4 y")]
    #[case("plain 42 text", "plain 42 text")]
    #[case("id abc12-3 stays", "id abc12-3 stays")]
    #[case("", "")]
    fn given_text_when_replacing_expressions_then_substitutes_values(
        #[case] text: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(ExpressionConverter::new().replace_expressions(text), expected);
    }

    #[test]
    fn given_several_expressions_when_replacing_then_each_substituted() {
        let text = "First 1+1, second (7^5|1&2<<(2|5>>2&71))|1200, third 5-7.";

        assert_eq!(
            ExpressionConverter::new().replace_expressions(text),
            "First 2, second 1202, third -2."
        );
    }
}
