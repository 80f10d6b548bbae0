//! Tests for the composite text tree contract.

use std::sync::Arc;

use rstest::rstest;

use textree::domain::{DomainError, Leaf, NodeKind, NodeRef, TextNode};

fn word(text: &str) -> NodeRef {
    let mut word = TextNode::word();
    for c in text.chars() {
        word.add_component(Arc::new(Leaf::classify(c).into()))
            .unwrap();
    }
    Arc::new(word)
}

fn lexeme(children: Vec<NodeRef>) -> NodeRef {
    let mut lexeme = TextNode::lexeme();
    for child in children {
        lexeme.add_component(child).unwrap();
    }
    Arc::new(lexeme)
}

#[test]
fn given_nested_composites_when_rendering_then_concatenates_without_separators() {
    // Arrange
    let mut sentence = TextNode::sentence();
    sentence
        .add_component(lexeme(vec![word("Hello"), Arc::new(TextNode::sign(','))]))
        .unwrap();
    sentence.add_component(lexeme(vec![word("world")])).unwrap();

    // Act
    let text = sentence.render();

    // Assert
    assert_eq!(text, "Hello,world");
    assert_eq!(sentence.to_string(), text);
}

#[test]
fn given_tree_when_counting_symbol_then_sum_over_children() {
    // Arrange
    let first = lexeme(vec![word("banana")]);
    let second = lexeme(vec![word("Alpaca"), Arc::new(TextNode::sign('.'))]);
    let mut sentence = TextNode::sentence();
    sentence.add_component(Arc::clone(&first)).unwrap();
    sentence.add_component(Arc::clone(&second)).unwrap();

    // Act
    let total = sentence.count_of_ordered_symbol('a');

    // Assert
    assert_eq!(total, 5);
    assert_eq!(
        total,
        first.count_of_ordered_symbol('a') + second.count_of_ordered_symbol('a')
    );
    assert_eq!(sentence.count_of_ordered_symbol('A'), 1);
}

#[rstest]
#[case(TextNode::sign('!'), '!', 1)]
#[case(TextNode::sign('!'), '?', 0)]
#[case(TextNode::letter('q').unwrap(), 'q', 1)]
#[case(TextNode::letter('q').unwrap(), 'Q', 0)]
fn given_leaf_when_counting_symbol_then_one_or_zero(
    #[case] leaf: TextNode,
    #[case] symbol: char,
    #[case] expected: usize,
) {
    assert_eq!(leaf.count_of_ordered_symbol(symbol), expected);
    assert_eq!(leaf.child_count(), 0);
}

#[test]
fn given_sentence_when_counting_children_then_only_direct_children() {
    // Arrange
    let mut sentence = TextNode::sentence();
    sentence.add_component(lexeme(vec![word("one")])).unwrap();
    sentence.add_component(lexeme(vec![word("two")])).unwrap();

    // Act
    let count = sentence.child_count();

    // Assert
    assert_eq!(count, 2);
    assert_eq!(sentence.get_component(1).unwrap().render(), "two");
}

#[test]
fn given_empty_composite_when_getting_component_then_index_out_of_range() {
    // Arrange
    let paragraph = TextNode::paragraph();

    // Act
    let result = paragraph.get_component(0);

    // Assert
    assert_eq!(result, Err(DomainError::IndexOutOfRange { index: 0, len: 0 }));
}

#[test]
fn given_leaf_when_adding_component_then_unsupported_operation() {
    // Arrange
    let mut sign = TextNode::sign('-');

    // Act
    let result = sign.add_component(Arc::new(TextNode::sign('+')));

    // Assert
    assert!(matches!(
        result,
        Err(DomainError::UnsupportedOperation {
            kind: NodeKind::Sign,
            ..
        })
    ));
    assert!(result.unwrap_err().is_structural());
}

#[test]
fn given_non_word_char_when_creating_letter_then_invalid_letter() {
    assert_eq!(TextNode::letter('-'), Err(DomainError::InvalidLetter('-')));
    assert_eq!(TextNode::letter('7').unwrap().kind(), NodeKind::Letter);
}

#[test]
fn given_shared_subtree_when_added_to_two_parents_then_both_render_it() {
    // Arrange
    let shared = word("twice");
    let mut left = TextNode::lexeme();
    let mut right = TextNode::lexeme();

    // Act
    left.add_component(Arc::clone(&shared)).unwrap();
    right.add_component(Arc::clone(&shared)).unwrap();

    // Assert
    assert_eq!(left.render(), right.render());
    assert!(Arc::ptr_eq(left.get_component(0).unwrap(), &shared));
    assert_eq!(Arc::strong_count(&shared), 3);
}

#[test]
fn given_tree_when_sent_across_threads_then_readable() {
    // Arrange
    let tree = lexeme(vec![word("thread"), Arc::new(TextNode::sign(';'))]);
    let clone = Arc::clone(&tree);

    // Act
    let rendered = std::thread::spawn(move || clone.render()).join().unwrap();

    // Assert
    assert_eq!(rendered, tree.render());
}
