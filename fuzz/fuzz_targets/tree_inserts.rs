// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for B+ tree inserts, checked against the standard library
//! map. Narrow u16 keys keep overwrites frequent, and small orders split
//! constantly, which is where the bugs live.

#![no_main]

use std::collections::BTreeMap;

use libfuzzer_sys::fuzz_target;

use talpa::contracts::check_bplustree_well_formed;
use talpa::BPlusTree;

fuzz_target!(|ops: Vec<(u16, u16)>| {
    let order = 3 + ops.len() % 6;
    let mut tree = BPlusTree::with_order(order).expect("order is at least 3");
    let mut model = BTreeMap::new();

    for &(key, value) in &ops {
        // INVARIANT 1: insert reports the same previous value as the model
        assert_eq!(
            tree.insert(key, value),
            model.insert(key, value),
            "insert({}, {}) disagreed with BTreeMap",
            key,
            value
        );
    }

    // INVARIANT 2: same length and same point lookups
    assert_eq!(tree.len(), model.len());
    for key in model.keys() {
        assert_eq!(tree.get(key), model.get(key));
    }

    // INVARIANT 3: entries come back sorted and complete
    let entries: Vec<(u16, u16)> = tree.entries().into_iter().map(|(k, v)| (*k, *v)).collect();
    let expected: Vec<(u16, u16)> = model.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(entries, expected);

    // INVARIANT 4: ranges agree with the model
    if let (Some((&lo, _)), Some((&hi, _))) = (model.iter().next(), model.iter().next_back()) {
        let mid = lo / 2 + hi / 2;
        for (start, end) in [(lo, hi), (lo, mid), (mid, hi), (mid, mid)] {
            if start > end {
                continue;
            }
            let got: Vec<u16> = tree.range(&start, &end).into_iter().map(|(k, _)| *k).collect();
            let want: Vec<u16> = model.range(start..=end).map(|(k, _)| *k).collect();
            assert_eq!(got, want, "range [{}, {}] diverged from BTreeMap", start, end);
        }

        // INVARIANT 5: inverted bounds return nothing instead of panicking
        if lo < hi {
            assert!(tree.range(&hi, &lo).is_empty());
        }
    }

    // Structural checks, active whenever debug assertions are on.
    check_bplustree_well_formed(&tree);
});
