//! Composite text tree: a closed sum type over every node kind.
//!
//! Composite nodes (document, paragraph, sentence, lexeme, word) own an
//! ordered list of children; leaves (sign, letter) hold one character.
//! Children are shared read-only handles so analytics can assemble new trees
//! from subtrees of an existing one without copying.

use std::fmt;
use std::sync::Arc;

use crate::domain::error::{DomainError, DomainResult};

/// Shared handle to a node. Nodes are never mutated once shared.
pub type NodeRef = Arc<TextNode>;

/// Tag identifying the granularity of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    Document,
    Paragraph,
    Sentence,
    Lexeme,
    Word,
    Sign,
    Letter,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Sentence => "sentence",
            NodeKind::Lexeme => "lexeme",
            NodeKind::Word => "word",
            NodeKind::Sign => "sign",
            NodeKind::Letter => "letter",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The subset of [`NodeKind`] that owns children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositeKind {
    Document,
    Paragraph,
    Sentence,
    Lexeme,
    Word,
}

impl From<CompositeKind> for NodeKind {
    fn from(kind: CompositeKind) -> Self {
        match kind {
            CompositeKind::Document => NodeKind::Document,
            CompositeKind::Paragraph => NodeKind::Paragraph,
            CompositeKind::Sentence => NodeKind::Sentence,
            CompositeKind::Lexeme => NodeKind::Lexeme,
            CompositeKind::Word => NodeKind::Word,
        }
    }
}

/// Word characters: ASCII alphanumerics and underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A single-character leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Leaf {
    Sign(char),
    Letter(char),
}

impl Leaf {
    /// Letter for word characters, sign for everything else.
    pub fn classify(c: char) -> Self {
        if is_word_char(c) {
            Leaf::Letter(c)
        } else {
            Leaf::Sign(c)
        }
    }

    pub fn letter(c: char) -> DomainResult<Self> {
        if is_word_char(c) {
            Ok(Leaf::Letter(c))
        } else {
            Err(DomainError::InvalidLetter(c))
        }
    }

    /// Signs are not validated: the lexeme stage may emit any trailing
    /// character as a sign.
    pub fn sign(c: char) -> Self {
        Leaf::Sign(c)
    }

    pub fn symbol(self) -> char {
        match self {
            Leaf::Sign(c) | Leaf::Letter(c) => c,
        }
    }

    pub fn kind(self) -> NodeKind {
        match self {
            Leaf::Sign(_) => NodeKind::Sign,
            Leaf::Letter(_) => NodeKind::Letter,
        }
    }
}

/// A node of the text tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextNode {
    Composite {
        kind: CompositeKind,
        children: Vec<NodeRef>,
    },
    Leaf(Leaf),
}

impl From<Leaf> for TextNode {
    fn from(leaf: Leaf) -> Self {
        TextNode::Leaf(leaf)
    }
}

impl TextNode {
    /// Empty composite node of the given kind.
    pub fn composite(kind: CompositeKind) -> Self {
        TextNode::Composite {
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_children(kind: CompositeKind, children: Vec<NodeRef>) -> Self {
        TextNode::Composite { kind, children }
    }

    pub fn document() -> Self {
        Self::composite(CompositeKind::Document)
    }

    pub fn paragraph() -> Self {
        Self::composite(CompositeKind::Paragraph)
    }

    pub fn sentence() -> Self {
        Self::composite(CompositeKind::Sentence)
    }

    pub fn lexeme() -> Self {
        Self::composite(CompositeKind::Lexeme)
    }

    pub fn word() -> Self {
        Self::composite(CompositeKind::Word)
    }

    pub fn letter(c: char) -> DomainResult<Self> {
        Leaf::letter(c).map(TextNode::Leaf)
    }

    pub fn sign(c: char) -> Self {
        TextNode::Leaf(Leaf::sign(c))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            TextNode::Composite { kind, .. } => (*kind).into(),
            TextNode::Leaf(leaf) => leaf.kind(),
        }
    }

    /// Text contributed by this subtree: children concatenated in order,
    /// no separators inserted.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            TextNode::Composite { children, .. } => {
                for child in children {
                    child.render_into(out);
                }
            }
            TextNode::Leaf(leaf) => out.push(leaf.symbol()),
        }
    }

    /// Appends a child. Leaves accept no children.
    pub fn add_component(&mut self, child: NodeRef) -> DomainResult<()> {
        match self {
            TextNode::Composite { children, .. } => {
                children.push(child);
                Ok(())
            }
            TextNode::Leaf(leaf) => Err(DomainError::UnsupportedOperation {
                kind: leaf.kind(),
                operation: "add_component",
            }),
        }
    }

    pub fn get_component(&self, index: usize) -> DomainResult<&NodeRef> {
        let children = self.child_slice();
        children.get(index).ok_or(DomainError::IndexOutOfRange {
            index,
            len: children.len(),
        })
    }

    /// Number of direct children; 0 for leaves.
    pub fn child_count(&self) -> usize {
        self.child_slice().len()
    }

    /// Occurrences of `symbol` among all leaf characters of the subtree.
    pub fn count_of_ordered_symbol(&self, symbol: char) -> usize {
        match self {
            TextNode::Composite { children, .. } => children
                .iter()
                .map(|child| child.count_of_ordered_symbol(symbol))
                .sum(),
            TextNode::Leaf(leaf) => usize::from(leaf.symbol() == symbol),
        }
    }

    pub fn children(&self) -> std::slice::Iter<'_, NodeRef> {
        self.child_slice().iter()
    }

    fn child_slice(&self) -> &[NodeRef] {
        match self {
            TextNode::Composite { children, .. } => children,
            TextNode::Leaf(_) => &[],
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind() == NodeKind::Word
    }

    /// Character held by a leaf.
    pub fn symbol(&self) -> Option<char> {
        match self {
            TextNode::Leaf(leaf) => Some(leaf.symbol()),
            TextNode::Composite { .. } => None,
        }
    }

    /// Number of direct letter children (the length of a word).
    pub fn letter_count(&self) -> usize {
        self.children()
            .filter(|child| child.kind() == NodeKind::Letter)
            .count()
    }
}

impl fmt::Display for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> TextNode {
        let mut word = TextNode::word();
        for c in text.chars() {
            word.add_component(Arc::new(Leaf::classify(c).into())).unwrap();
        }
        word
    }

    #[test]
    fn given_composite_when_rendering_then_concatenates_children() {
        let mut lexeme = TextNode::lexeme();
        lexeme.add_component(Arc::new(word("don't"))).unwrap();
        lexeme.add_component(Arc::new(TextNode::sign(','))).unwrap();

        let expected: String = lexeme.children().map(|c| c.render()).collect();
        assert_eq!(lexeme.render(), expected);
        assert_eq!(lexeme.render(), "don't,");
    }

    #[test]
    fn given_subtree_when_counting_symbol_then_sums_over_children() {
        let mut sentence = TextNode::sentence();
        sentence.add_component(Arc::new(word("banana"))).unwrap();
        sentence.add_component(Arc::new(word("Apple"))).unwrap();

        let per_child: usize = sentence
            .children()
            .map(|c| c.count_of_ordered_symbol('a'))
            .sum();
        assert_eq!(sentence.count_of_ordered_symbol('a'), 3);
        assert_eq!(per_child, 3);
        assert_eq!(sentence.count_of_ordered_symbol('A'), 1);
    }

    #[test]
    fn given_leaf_when_counting_symbol_then_one_or_zero() {
        assert_eq!(TextNode::letter('x').unwrap().count_of_ordered_symbol('x'), 1);
        assert_eq!(TextNode::letter('x').unwrap().count_of_ordered_symbol('X'), 0);
        assert_eq!(TextNode::sign('!').count_of_ordered_symbol('!'), 1);
    }

    #[test]
    fn given_leaf_when_adding_child_then_unsupported() {
        let mut sign = TextNode::sign('.');
        let err = sign
            .add_component(Arc::new(TextNode::sign(',')))
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::UnsupportedOperation {
                kind: NodeKind::Sign,
                operation: "add_component",
            }
        );
        assert!(err.is_structural());
    }

    #[test]
    fn given_empty_composite_when_getting_first_child_then_index_out_of_range() {
        let paragraph = TextNode::paragraph();
        assert_eq!(
            paragraph.get_component(0).unwrap_err(),
            DomainError::IndexOutOfRange { index: 0, len: 0 }
        );
    }

    #[test]
    fn given_nested_tree_when_counting_children_then_only_direct() {
        let mut lexeme = TextNode::lexeme();
        lexeme.add_component(Arc::new(word("abc"))).unwrap();
        assert_eq!(lexeme.child_count(), 1);
        assert_eq!(lexeme.get_component(0).unwrap().child_count(), 3);
        assert_eq!(TextNode::sign('?').child_count(), 0);
    }

    #[test]
    fn given_non_word_char_when_building_letter_then_rejected() {
        assert_eq!(TextNode::letter('-'), Err(DomainError::InvalidLetter('-')));
        assert_eq!(Leaf::classify('_'), Leaf::Letter('_'));
        assert_eq!(Leaf::classify('('), Leaf::Sign('('));
    }

    #[test]
    fn given_word_when_counting_letters_then_ignores_signs() {
        assert_eq!(word("don't").letter_count(), 4);
        assert!(word("x").is_word());
    }
}
