//! Read-only analytics over a parsed document.
//!
//! Functions that reorder or filter build new trees whose nodes share the
//! untouched subtrees of the input through `Arc`; the input is never mutated.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use itertools::Itertools;
use rayon::prelude::*;
use tracing::debug;

use crate::domain::{CompositeKind, Leaf, NodeRef, TextNode};

/// Letters treated as vowels; any other ASCII letter is a consonant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VowelSet(BTreeSet<char>);

impl VowelSet {
    /// Builds the set from the alphabetic characters of `letters`, lowercased.
    pub fn new(letters: &str) -> Self {
        Self(
            letters
                .chars()
                .filter(char::is_ascii_alphabetic)
                .map(|c| c.to_ascii_lowercase())
                .collect(),
        )
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for VowelSet {
    fn default() -> Self {
        Self::new("aeiouy")
    }
}

impl fmt::Display for VowelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

/// Vowel and consonant totals of one sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceLetterCounts {
    pub sentence: NodeRef,
    pub vowels: usize,
    pub consonants: usize,
}

fn sentences(text: &TextNode) -> impl Iterator<Item = &NodeRef> {
    text.children().flat_map(|paragraph| paragraph.children())
}

fn words(sentence: &TextNode) -> impl Iterator<Item = &NodeRef> {
    sentence
        .children()
        .flat_map(|lexeme| lexeme.children())
        .filter(|node| node.is_word())
}

/// Rebuilds the document sentence by sentence.
fn map_sentences(text: &TextNode, f: impl Fn(&NodeRef) -> Vec<NodeRef>) -> TextNode {
    let paragraphs = text
        .children()
        .map(|paragraph| {
            let sentences = paragraph
                .children()
                .map(|sentence| {
                    Arc::new(TextNode::with_children(
                        CompositeKind::Sentence,
                        f(sentence),
                    ))
                })
                .collect();
            Arc::new(TextNode::with_children(CompositeKind::Paragraph, sentences))
        })
        .collect();
    TextNode::with_children(CompositeKind::Document, paragraphs)
}

/// Paragraphs ordered by ascending sentence count; ties keep input order.
pub fn sort_paragraphs_by_sentence_count(text: &TextNode) -> TextNode {
    let paragraphs = text
        .children()
        .sorted_by_key(|paragraph| paragraph.child_count())
        .cloned()
        .collect();
    debug!("sort_paragraphs_by_sentence_count: {} paragraphs", text.child_count());
    TextNode::with_children(CompositeKind::Document, paragraphs)
}

/// Each sentence becomes its words ordered by letter count, followed by all
/// of its signs in input order. Lexeme grouping is dropped.
pub fn sort_words_by_length(text: &TextNode) -> TextNode {
    let result = map_sentences(text, |sentence| {
        let mut words = Vec::new();
        let mut signs = Vec::new();
        for node in sentence.children().flat_map(|lexeme| lexeme.children()) {
            match node.as_ref() {
                TextNode::Composite {
                    kind: CompositeKind::Word,
                    ..
                } => words.push(Arc::clone(node)),
                TextNode::Composite { .. } | TextNode::Leaf(Leaf::Sign(_) | Leaf::Letter(_)) => {
                    signs.push(Arc::clone(node))
                }
            }
        }
        words.sort_by_key(|word| word.letter_count());
        words.extend(signs);
        words
    });
    debug!("sort_words_by_length: done");
    result
}

/// Lexemes of each sentence ordered by descending occurrences of `symbol`,
/// ties broken by case-insensitive text ascending.
pub fn reverse_sort_lexemes_by_symbol(text: &TextNode, symbol: char) -> TextNode {
    let result = map_sentences(text, |sentence| {
        let mut lexemes: Vec<NodeRef> = sentence.children().cloned().collect();
        lexemes.sort_by_cached_key(|lexeme| {
            (
                lexeme.count_of_ordered_symbol(symbol),
                Reverse(lexeme.render().to_lowercase()),
            )
        });
        lexemes.reverse();
        lexemes
    });
    debug!("reverse_sort_lexemes_by_symbol: symbol={symbol:?}");
    result
}

/// Sentences containing at least one word of maximal letter count, in
/// document order. Empty when the document has no words.
pub fn sentences_with_longest_word(text: &TextNode) -> Vec<NodeRef> {
    let Some(longest) = sentences(text)
        .flat_map(|sentence| words(sentence))
        .map(|word| word.letter_count())
        .max()
    else {
        return Vec::new();
    };

    let result: Vec<NodeRef> = sentences(text)
        .filter(|sentence| words(sentence).any(|word| word.letter_count() == longest))
        .cloned()
        .collect();
    debug!(
        "sentences_with_longest_word: length={longest}, {} sentences",
        result.len()
    );
    result
}

/// Drops sentences with fewer than `min_words` words and paragraphs left
/// without sentences.
pub fn remove_sentences_with_fewer_words(text: &TextNode, min_words: usize) -> TextNode {
    let paragraphs = text
        .children()
        .filter_map(|paragraph| {
            let kept: Vec<NodeRef> = paragraph
                .children()
                .filter(|sentence| words(sentence).count() >= min_words)
                .cloned()
                .collect();
            (!kept.is_empty())
                .then(|| Arc::new(TextNode::with_children(CompositeKind::Paragraph, kept)))
        })
        .collect();
    debug!("remove_sentences_with_fewer_words: min_words={min_words}");
    TextNode::with_children(CompositeKind::Document, paragraphs)
}

/// Lowercased words occurring more than once, with their counts.
pub fn count_duplicate_words(text: &TextNode) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for word in sentences(text).flat_map(|sentence| words(sentence)) {
        *counts.entry(word.render().to_lowercase()).or_default() += 1;
    }
    counts.retain(|_, count| *count > 1);
    debug!("count_duplicate_words: {} duplicates", counts.len());
    counts
}

/// Vowel and consonant counts per sentence, in document order.
///
/// Only ASCII letters inside words are counted; digits and underscores are
/// neither.
pub fn count_vowels_and_consonants(text: &TextNode, vowels: &VowelSet) -> Vec<SentenceLetterCounts> {
    let all: Vec<&NodeRef> = sentences(text).collect();
    let result: Vec<SentenceLetterCounts> = all
        .par_iter()
        .map(|sentence| {
            let (mut vowel_count, mut consonant_count) = (0, 0);
            for symbol in words(sentence)
                .flat_map(|word| word.children())
                .filter_map(|node| match node.as_ref() {
                    TextNode::Leaf(Leaf::Letter(c)) => Some(*c),
                    TextNode::Leaf(Leaf::Sign(_)) | TextNode::Composite { .. } => None,
                })
                .filter(char::is_ascii_alphabetic)
            {
                if vowels.contains(symbol) {
                    vowel_count += 1;
                } else {
                    consonant_count += 1;
                }
            }
            SentenceLetterCounts {
                sentence: Arc::clone(sentence),
                vowels: vowel_count,
                consonants: consonant_count,
            }
        })
        .collect();
    debug!("count_vowels_and_consonants: {} sentences", result.len());
    result
}
