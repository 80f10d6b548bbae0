//! Tests for the analytics over the fixture document.

use std::path::PathBuf;
use std::sync::Arc;

use rstest::{fixture, rstest};

use textree::application::analytics::{
    count_duplicate_words, count_vowels_and_consonants, remove_sentences_with_fewer_words,
    reverse_sort_lexemes_by_symbol, sentences_with_longest_word,
    sort_paragraphs_by_sentence_count, sort_words_by_length,
};
use textree::application::services::TextService;
use textree::application::VowelSet;
use textree::config::Settings;
use textree::domain::{layout, TextNode};
use textree::infrastructure::traits::RealFileSystem;

#[fixture]
fn document() -> TextNode {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/resources/input.txt");
    TextService::new(Arc::new(RealFileSystem), &Settings::default())
        .unwrap()
        .create(&path)
        .unwrap()
}

#[rstest]
fn given_document_when_sorting_paragraphs_then_fewest_sentences_first(document: TextNode) {
    // Act
    let sorted = sort_paragraphs_by_sentence_count(&document);

    // Assert
    let counts: Vec<usize> = sorted.children().map(|p| p.child_count()).collect();
    assert_eq!(counts, vec![1, 2, 2]);
    assert_eq!(layout(sorted.get_component(0).unwrap()), "Bye.");
    assert!(Arc::ptr_eq(
        sorted.get_component(1).unwrap(),
        document.get_component(0).unwrap()
    ));
}

#[rstest]
fn given_document_when_sorting_words_then_each_sentence_ordered_by_length(document: TextNode) {
    // Act
    let sorted = sort_words_by_length(&document);

    // Assert
    let last_paragraph = sorted.get_component(1).unwrap();
    let sentence = last_paragraph.get_component(1).unwrap();
    assert_eq!(sentence.render(), "of14isThepointusingIpsumsimple.");
}

#[rstest]
fn given_document_when_reverse_sorting_lexemes_then_most_symbols_first(document: TextNode) {
    // Act
    let sorted = reverse_sort_lexemes_by_symbol(&document, 'e');

    // Assert
    let sentence = sorted.get_component(1).unwrap().get_component(0).unwrap();
    let lexemes: Vec<String> = sentence.children().map(|l| l.render()).collect();
    assert_eq!(
        lexemes,
        vec![
            "established", "reader", "be", "distracted.", "a", "a", "fact", "is", "It", "long",
            "that", "will",
        ]
    );
}

#[rstest]
fn given_document_when_finding_longest_word_then_all_sentences_with_it(document: TextNode) {
    // Act
    let found = sentences_with_longest_word(&document);

    // Assert
    assert_eq!(found.len(), 3);
    assert!(found[1].render().starts_with("Itwaspopularised"));
    assert!(Arc::ptr_eq(
        &found[2],
        document.get_component(1).unwrap().get_component(0).unwrap()
    ));
}

#[rstest]
fn given_min_words_when_filtering_then_short_sentences_removed(document: TextNode) {
    // Act
    let filtered = remove_sentences_with_fewer_words(&document, 3);

    // Assert
    assert_eq!(filtered.child_count(), 2);
    assert!(!layout(&filtered).contains("Bye."));
    assert_eq!(document.child_count(), 3);
}

#[rstest]
fn given_document_when_counting_duplicates_then_lowercased_words_over_one(document: TextNode) {
    // Act
    let duplicates = count_duplicate_words(&document);

    // Assert
    let pairs: Vec<(&str, usize)> = duplicates.iter().map(|(w, c)| (w.as_str(), *c)).collect();
    assert_eq!(pairs, vec![("a", 2), ("is", 2), ("it", 3), ("the", 3)]);
}

#[rstest]
fn given_document_when_counting_letters_then_one_entry_per_sentence(document: TextNode) {
    // Act
    let counts = count_vowels_and_consonants(&document, &VowelSet::default());

    // Assert
    assert_eq!(counts.len(), 5);
    let bye = &counts[4];
    assert_eq!(bye.sentence.render(), "Bye.");
    assert_eq!((bye.vowels, bye.consonants), (2, 1));
}

#[rstest]
fn given_custom_vowels_when_counting_then_y_is_consonant(document: TextNode) {
    // Act
    let counts = count_vowels_and_consonants(&document, &VowelSet::new("aeiou"));

    // Assert
    assert_eq!((counts[4].vowels, counts[4].consonants), (1, 2));
}
