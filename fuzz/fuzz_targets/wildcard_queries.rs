// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for wildcard query evaluation.
//!
//! Builds a suffix index from arbitrary phrases and throws an arbitrary
//! query at it. The evaluator recurses over both wildcards, so this is
//! where a missed base case would surface. If your index crashes on emoji
//! or a query that is nothing but question marks, you have a bad day.

#![no_main]

use libfuzzer_sys::fuzz_target;

use talpa::SuffixIndex;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let mut lines = text.lines();

    // First line is the query, the rest are phrases. Caps keep single runs
    // fast; each star multiplies backtracking paths.
    let query: String = lines.next().unwrap_or("").chars().take(24).collect();
    if query.chars().filter(|&c| c == '*').count() > 3 {
        return;
    }
    let phrases: Vec<String> = lines.take(8).map(|l| l.chars().take(48).collect()).collect();

    let mut index = SuffixIndex::new();
    let mut kept: Vec<String> = Vec::new();
    for phrase in &phrases {
        if !phrase.is_empty() {
            index.insert(phrase, kept.len());
            kept.push(phrase.clone());
        }
    }

    // INVARIANT 1: queries never panic and never go out of bounds
    let indices = index.get_indices_for(&query);
    for &i in &indices {
        assert!(
            i < index.len(),
            "match index {} out of bounds ({} values stored)",
            i,
            index.len()
        );
    }

    // INVARIANT 2: search returns exactly one value per matched index
    assert_eq!(index.search(&query).len(), indices.len());

    // INVARIANT 3: the empty query matches nothing
    if query.is_empty() {
        assert!(indices.is_empty(), "empty query returned {} matches", indices.len());
    }

    // INVARIANT 4: literal queries agree with a direct scan
    if !query.is_empty() && !query.contains('*') && !query.contains('?') {
        let folded_query = query.to_lowercase();
        for (i, phrase) in kept.iter().enumerate() {
            let expected = phrase.to_lowercase().contains(&folded_query);
            assert_eq!(
                indices.contains(&i),
                expected,
                "literal query {:?} disagreed with contains() on phrase {:?}",
                query,
                phrase
            );
        }
    }
});
