//! Prefix-trie behavior over the product vocabulary.

use std::collections::HashSet;

use super::common::PRODUCTS;
use talpa::Trie;

fn product_trie() -> Trie {
    let mut trie = Trie::new();
    for (_, description) in PRODUCTS {
        for word in description.split_whitespace() {
            trie.insert(word);
        }
    }
    trie
}

#[test]
fn len_counts_distinct_words() {
    let trie = product_trie();
    let distinct: HashSet<&str> = PRODUCTS
        .iter()
        .flat_map(|(_, description)| description.split_whitespace())
        .collect();

    assert_eq!(trie.len(), distinct.len());
}

#[test]
fn membership_is_whole_word() {
    let trie = product_trie();

    assert!(trie.contains("keyboard"));
    assert!(trie.contains("usb-c"));
    assert!(!trie.contains("keyboar"), "prefix of a word is not a word");
    assert!(trie.starts_with("keyboar"));
}

#[test]
fn queries_normalize_like_insertion() {
    let trie = product_trie();

    assert!(trie.contains(" KEYBOARD "));
    assert!(trie.starts_with("Wire"));
    assert_eq!(
        trie.suggestions("  W  "),
        vec!["water", "wired", "wireless", "with"]
    );
}

#[test]
fn suggestions_complete_a_prefix_in_sorted_order() {
    let trie = product_trie();

    assert_eq!(
        trie.suggestions("w"),
        vec!["water", "wired", "wireless", "with"]
    );
    assert_eq!(trie.suggestions("ca"), vec!["cable", "cancelling", "case"]);
    assert!(trie.suggestions("xyz").is_empty());
}

#[test]
fn every_inserted_word_suggests_itself() {
    let trie = product_trie();
    for (_, description) in PRODUCTS {
        for word in description.split_whitespace() {
            assert!(
                trie.suggestions(word).iter().any(|s| s == word),
                "word '{}' missing from its own suggestions",
                word
            );
        }
    }
}
