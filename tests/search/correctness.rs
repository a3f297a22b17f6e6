//! Core substring-search correctness.

use super::common::{
    animal_index, assert_index_well_formed, assert_search_finds, index_of,
    naive_substring_indices, product_index, ANIMAL_PHRASES,
};

#[test]
fn finds_phrases_by_words_and_fragments() {
    let index = animal_index();

    assert_search_finds(&index, "dog", &[0, 1]);
    assert_search_finds(&index, "fox", &[1]);
    assert_search_finds(&index, "the", &[0, 1, 2, 3]);
    assert_search_finds(&index, "wants", &[2, 3]);
    assert_search_finds(&index, "ow", &[0, 1]);
    assert_search_finds(&index, "oose", &[2]);
    assert_search_finds(&index, "cookie", &[3]);
}

#[test]
fn a_query_matches_at_every_position() {
    let index = index_of(&["banana"]);

    assert_search_finds(&index, "banana", &[0]);
    assert_search_finds(&index, "ana", &[0]);
    assert_search_finds(&index, "nan", &[0]);
    assert_search_finds(&index, "na", &[0]);
    assert_search_finds(&index, "xyz", &[]);
}

#[test]
fn repeated_occurrences_report_a_phrase_once() {
    let index = index_of(&["the cat and the hat", "the dog"]);

    // "the" occurs twice in phrase 0; the result set stays deduplicated.
    assert_search_finds(&index, "the", &[0, 1]);
    assert_search_finds(&index, "at", &[0]);
}

#[test]
fn results_come_back_in_insertion_order() {
    let index = product_index();

    assert_eq!(index.search("wireless"), vec![&"MS-114", &"PD-330"]);
    assert_eq!(index.search("mouse"), vec![&"MS-114", &"MS-115"]);
}

#[test]
fn repeating_a_query_returns_the_same_set() {
    let index = product_index();

    for query in ["mouse", "wire*", "w?red", "zzz"] {
        let first = index.get_indices_for(query);
        for _ in 0..3 {
            assert_eq!(index.get_indices_for(query), first, "query {query:?}");
        }
    }
}

#[test]
fn whole_phrase_lookup_hits_only_that_phrase() {
    let index = animal_index();

    for (i, phrase) in ANIMAL_PHRASES.iter().enumerate() {
        assert_search_finds(&index, phrase, &[i]);
    }
}

#[test]
fn every_substring_of_a_small_corpus_is_found() {
    let phrases = ["abab", "ba", "abc"];
    let index = index_of(&phrases);

    for phrase in phrases {
        for start in 0..phrase.len() {
            for end in start + 1..=phrase.len() {
                let query = &phrase[start..end];
                assert_eq!(
                    index.get_indices_for(query),
                    naive_substring_indices(&phrases, query, false),
                    "query '{}' diverged from the reference scan",
                    query
                );
            }
        }
    }
}

#[test]
fn built_indexes_stay_well_formed() {
    assert_index_well_formed(&animal_index());
    assert_index_well_formed(&product_index());
}
