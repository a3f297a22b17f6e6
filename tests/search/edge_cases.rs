//! Degenerate inputs: empty phrases, empty queries, exotic characters.

use super::common::{animal_index, assert_search_finds, index_of, indices_for};
use talpa::SuffixIndex;

#[test]
fn empty_queries_match_nothing() {
    let index = animal_index();

    assert_search_finds(&index, "", &[]);
    assert!(index.search("").is_empty());
}

#[test]
fn empty_phrases_are_skipped_entirely() {
    let mut index = SuffixIndex::new();
    index.insert("", 10).insert("real", 20).insert("", 30);

    assert_eq!(index.len(), 1);
    assert_eq!(index.values(), &[20]);
    assert_eq!(index.search("real"), vec![&20]);
}

#[test]
fn whitespace_phrases_are_real_phrases() {
    let mut index = SuffixIndex::new();
    index.insert("  ", 0).insert("a b", 1);

    assert_eq!(index.len(), 2);
    assert_eq!(indices_for(&index, " "), vec![0, 1]);
    assert_eq!(indices_for(&index, "  "), vec![0]);
}

#[test]
fn unicode_phrases_index_by_character() {
    let mut index = SuffixIndex::new();
    index.insert("नमस्ते दुनिया", 0).insert("こんにちは", 1);

    assert_eq!(indices_for(&index, "नमस्ते"), vec![0]);
    assert_eq!(indices_for(&index, "にち"), vec![1]);
    assert_eq!(indices_for(&index, "?んにちは"), vec![1]);
}

#[test]
fn queries_longer_than_any_phrase_miss() {
    let index = index_of(&["ab"]);

    assert_search_finds(&index, "abc", &[]);
    assert_search_finds(&index, "aab", &[]);
}

#[test]
fn empty_indexes_return_nothing() {
    let index: SuffixIndex<u8> = SuffixIndex::new();

    assert!(index.is_empty());
    assert!(index.search("*").is_empty());
    assert!(index.search("a").is_empty());
    assert!(index.get(0).is_none());
}

#[test]
fn stored_wildcards_are_plain_characters() {
    // A stored '*' is an ordinary trie character; in a query it is always
    // an operator. There is no escape syntax.
    let mut index = SuffixIndex::new();
    index.insert("ls *.rs", 0);

    assert_eq!(indices_for(&index, "ls"), vec![0]);
    assert_eq!(indices_for(&index, ".rs"), vec![0]);
    // The query star happily consumes the literal star in the phrase.
    assert_eq!(indices_for(&index, "ls *.rs"), vec![0]);
}
