//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the canonical phrase fixtures and reference oracles so
//! every suite agrees on what the expected answers are.

#![doc(hidden)]

use std::collections::BTreeSet;

use crate::utils::fold_case;
use crate::SuffixIndex;

/// Canonical animal phrases. [`animal_index`] stores them in this order,
/// so DOG is value 0, FOX is 1, MOOSE is 2, and MOUSE is 3.
pub const DOG: &str = "the lazy brown dog takes a nap";
pub const FOX: &str = "the quick brown fox jumps over the lazy dog";
pub const MOOSE: &str = "the massive moose wants a muffin";
pub const MOUSE: &str = "the tiny mouse wants a cookie";

pub const ANIMAL_PHRASES: [&str; 4] = [DOG, FOX, MOOSE, MOUSE];

/// Product catalog fixture: (name, description) pairs.
pub const PRODUCTS: [(&str, &str); 8] = [
    ("KB-201", "mechanical gaming keyboard with rgb lighting"),
    ("MS-114", "wireless optical mouse"),
    ("MS-115", "wired ergonomic mouse"),
    ("PD-330", "wireless charging pad for phones"),
    ("CB-042", "braided usb-c cable two meters"),
    ("WB-777", "insulated water bottle eco-friendly"),
    ("LB-001", "moisturizing lip balm with spf"),
    ("EB-505", "noise cancelling earbuds with case"),
];

/// Builds the canonical animal index: phrase `i` maps to value `i`.
pub fn animal_index() -> SuffixIndex<usize> {
    let mut index = SuffixIndex::new();
    for (i, phrase) in ANIMAL_PHRASES.iter().enumerate() {
        index.insert(phrase, i);
    }
    index
}

/// Builds an index over the product descriptions, mapping each to its
/// catalog name.
pub fn product_index() -> SuffixIndex<&'static str> {
    let mut index = SuffixIndex::new();
    for (name, description) in PRODUCTS {
        index.insert(description, name);
    }
    index
}

/// Naive reference for wildcard-free queries: the indices of phrases
/// whose folded text contains the folded query.
///
/// `phrases` must be the phrases actually inserted, in insertion order.
/// Matches the index contract for the empty query (no results).
pub fn naive_substring_indices(
    phrases: &[&str],
    query: &str,
    case_sensitive: bool,
) -> BTreeSet<usize> {
    let folded_query = fold_case(query, case_sensitive);
    if folded_query.is_empty() {
        return BTreeSet::new();
    }
    phrases
        .iter()
        .enumerate()
        .filter(|(_, phrase)| fold_case(phrase, case_sensitive).contains(&folded_query))
        .map(|(i, _)| i)
        .collect()
}
