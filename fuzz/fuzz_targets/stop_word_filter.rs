// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the stop word filter.
//!
//! The filter lowercases, strips punctuation, tokenizes, and drops listed
//! words. Arbitrary text has a way of finding the character class you
//! forgot about.

#![no_main]

use libfuzzer_sys::fuzz_target;

use talpa::StopWords;

fuzz_target!(|text: &str| {
    // Parse the embedded lists once per process.
    static LISTS: std::sync::OnceLock<[StopWords; 3]> = std::sync::OnceLock::new();
    let lists =
        LISTS.get_or_init(|| [StopWords::english(), StopWords::minimal(), StopWords::none()]);

    for stops in lists {
        let tokens = stops.filter(text);

        for token in &tokens {
            // INVARIANT 1: tokens are non-empty ascii lowercase alphanumerics
            assert!(!token.is_empty(), "empty token from filter");
            assert!(
                token.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                "token {:?} has characters the filter should have removed",
                token
            );

            // INVARIANT 2: no token is on the list it was filtered with
            assert!(!stops.contains(token), "stop word {:?} survived filtering", token);
        }

        // INVARIANT 3: filtering is idempotent
        let rejoined = tokens.join(" ");
        assert_eq!(stops.filter(&rejoined), tokens, "second filter pass changed the output");
    }

    // INVARIANT 4: dropping stop words never produces extra tokens
    let unfiltered = StopWords::none().filter(text).len();
    for stops in lists {
        assert!(stops.filter(text).len() <= unfiltered);
    }
});
