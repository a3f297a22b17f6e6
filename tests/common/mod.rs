//! Shared test utilities and fixtures.

#![allow(dead_code)]

use talpa::{SuffixIndex, SuffixNode};

// Re-export canonical fixtures from talpa::testing
pub use talpa::testing::{
    animal_index, naive_substring_indices, product_index, ANIMAL_PHRASES, DOG, FOX, MOOSE, MOUSE,
    PRODUCTS,
};

// ============================================================================
// BUILDERS
// ============================================================================

/// Build an index where phrase `i` maps to value `i`.
pub fn index_of(phrases: &[&str]) -> SuffixIndex<usize> {
    let mut index = SuffixIndex::new();
    for (i, phrase) in phrases.iter().enumerate() {
        index.insert(phrase, i);
    }
    index
}

/// The matching indices for a query, ascending, as a plain Vec.
pub fn indices_for<V>(index: &SuffixIndex<V>, query: &str) -> Vec<usize> {
    index.get_indices_for(query).into_iter().collect()
}

/// Assert that a query returns exactly the expected phrase indices.
pub fn assert_search_finds(index: &SuffixIndex<usize>, query: &str, expected: &[usize]) {
    assert_eq!(
        indices_for(index, query),
        expected,
        "query '{}' matched the wrong phrases",
        query
    );
}

// ============================================================================
// INVARIANT CHECKS
// ============================================================================

/// Assert that a suffix index satisfies all structural invariants.
pub fn assert_index_well_formed<V>(index: &SuffixIndex<V>) {
    assert!(
        index.root().indices().is_empty(),
        "INVARIANT VIOLATED: root node records phrase indices"
    );
    for child in index.root().children() {
        assert_subtree_well_formed(child, index.len());
    }
}

/// Check one non-root subtree: indices strictly ascending and in bounds,
/// every child index accumulated into its parent.
fn assert_subtree_well_formed(node: &SuffixNode, value_count: usize) {
    let indices = node.indices();
    assert!(
        !indices.is_empty(),
        "INVARIANT VIOLATED: non-root node records no phrase indices"
    );
    for window in indices.windows(2) {
        assert!(
            window[0] < window[1],
            "INVARIANT VIOLATED: indices not strictly ascending: {:?}",
            indices
        );
    }
    if let Some(&last) = indices.last() {
        assert!(
            last < value_count,
            "INVARIANT VIOLATED: phrase index {} >= value count {}",
            last,
            value_count
        );
    }
    for child in node.children() {
        for &index in child.indices() {
            assert!(
                node.contains_index(index),
                "INVARIANT VIOLATED: child records index {} missing from its parent",
                index
            );
        }
        assert_subtree_well_formed(child, value_count);
    }
}
