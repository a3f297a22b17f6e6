//! Case handling in phrases and queries.

use super::common::indices_for;
use talpa::SuffixIndex;

#[test]
fn default_indexes_fold_phrase_and_query() {
    let mut index = SuffixIndex::new();
    index.insert("Wireless KEYBOARD", 0);

    for query in ["keyboard", "KEYBOARD", "KeyBoard", "wireless k"] {
        assert_eq!(indices_for(&index, query), vec![0], "query '{}'", query);
    }
}

#[test]
fn sensitive_indexes_preserve_case() {
    let mut index = SuffixIndex::case_sensitive();
    index.insert("The quick Fox", 0).insert("the slow fox", 1);

    assert_eq!(indices_for(&index, "Fox"), vec![0]);
    assert_eq!(indices_for(&index, "fox"), vec![1]);
    assert_eq!(indices_for(&index, "The"), vec![0]);
    assert_eq!(indices_for(&index, "the"), vec![1]);
    assert!(indices_for(&index, "FOX").is_empty());
}

#[test]
fn wildcards_respect_the_case_mode() {
    let mut sensitive = SuffixIndex::case_sensitive();
    sensitive.insert("MOOSE", 0).insert("mouse", 1);

    assert_eq!(indices_for(&sensitive, "m*se"), vec![1]);
    assert_eq!(indices_for(&sensitive, "M*SE"), vec![0]);

    let mut folded = SuffixIndex::new();
    folded.insert("MOOSE", 0).insert("mouse", 1);

    assert_eq!(indices_for(&folded, "M*SE"), vec![0, 1]);
}

#[test]
fn folding_lowercases_beyond_ascii() {
    let mut index = SuffixIndex::new();
    index.insert("CAFÉ AU LAIT", 0);

    assert_eq!(indices_for(&index, "café"), vec![0]);
    assert_eq!(indices_for(&index, "Café au"), vec![0]);
}

#[test]
fn case_mode_is_fixed_at_construction() {
    let folded: SuffixIndex<u32> = SuffixIndex::new();
    let sensitive: SuffixIndex<u32> = SuffixIndex::case_sensitive();

    assert!(!folded.is_case_sensitive());
    assert!(sensitive.is_case_sensitive());
}
