// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix-trie substring index with wildcard queries.
//!
//! [`SuffixIndex`] stores every suffix of every inserted phrase in one
//! shared trie, so a query walk starting at the root finds the phrase
//! containing the query at *any* position. That is the whole trick: prefix
//! search over all suffixes equals substring search over all phrases.
//!
//! Insertion for a phrase of `m` characters touches `O(m^2)` nodes, which
//! is the price paid for literal queries that cost `O(q)` trie steps plus
//! the size of the answer. Wildcard queries fan out per `*`/`?` and cost
//! up to the size of the touched subtrie.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **APPEND_ONLY**: `values` only grows; the index stored in trie nodes
//!    is the value's final position
//! 2. **SUFFIX_COMPLETE**: after inserting phrase `p` with index `i`, every
//!    node on the path of every suffix of `p` records `i`
//! 3. **FOLD_ONCE**: phrases and queries are case-folded identically, at
//!    the boundary, before any trie step

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::utils::fold_case;

mod node;

pub use node::SuffixNode;

/// Matches one or more characters in a query.
///
/// The evaluator advances through a child for every consumed character, so
/// a `*` never matches zero width: `"m*se"` matches `"mouse"` and
/// `"moose"` but not `"mse"`.
pub const MULTI_WILDCARD: char = '*';

/// Matches exactly one character in a query.
pub const SINGLE_WILDCARD: char = '?';

const _: () = assert!(MULTI_WILDCARD != SINGLE_WILDCARD);

/// In-memory substring index over phrases, with `*` and `?` wildcards.
///
/// Values of type `V` are stored append-only; every trie node keeps the
/// ascending set of value indices whose phrase passes through it, and
/// queries map those indices back to the stored values.
///
/// Case-insensitive by default. Sensitivity is fixed at construction, so
/// there is no window where a flag flip could strand already-folded
/// entries.
///
/// ```
/// use talpa::SuffixIndex;
///
/// let mut index = SuffixIndex::new();
/// index.insert("the quick brown fox", "fox").insert("the lazy dog", "dog");
///
/// assert_eq!(index.search("quick"), vec![&"fox"]);
/// assert_eq!(index.search("the"), vec![&"fox", &"dog"]);
/// assert!(index.search("wolf").is_empty());
/// ```
///
/// Wildcards work anywhere in the query:
///
/// ```
/// use talpa::SuffixIndex;
///
/// let mut index = SuffixIndex::new();
/// index.insert("wireless mouse", 1).insert("wired mouse", 2);
///
/// assert_eq!(index.search("wire*mouse"), vec![&1, &2]);
/// assert_eq!(index.search("wir?less"), vec![&1]);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuffixIndex<V> {
    root: SuffixNode,
    values: Vec<V>,
    case_sensitive: bool,
}

impl<V> SuffixIndex<V> {
    /// Creates an empty, case-insensitive index.
    pub fn new() -> Self {
        Self {
            root: SuffixNode::new(),
            values: Vec::new(),
            case_sensitive: false,
        }
    }

    /// Creates an empty index that preserves case exactly as inserted.
    pub fn case_sensitive() -> Self {
        Self {
            root: SuffixNode::new(),
            values: Vec::new(),
            case_sensitive: true,
        }
    }

    /// Whether phrases and queries keep their case.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value stored at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&V> {
        self.values.get(index)
    }

    /// All stored values in insertion order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Read-only view of the trie root, for structural inspection.
    pub fn root(&self) -> &SuffixNode {
        &self.root
    }

    /// Indexes `phrase` and associates it with `value`.
    ///
    /// Every suffix of the folded phrase is threaded into the trie and each
    /// node on the way records the value's index. An empty phrase is a
    /// no-op: no value is stored and no node is touched.
    ///
    /// Returns `&mut Self` so insertions chain.
    pub fn insert(&mut self, phrase: &str, value: V) -> &mut Self {
        let folded = fold_case(phrase, self.case_sensitive);
        if folded.is_empty() {
            return self;
        }
        let index = self.values.len();
        self.values.push(value);
        tag_suffixes(&mut self.root, &folded, index);
        self
    }

    /// Indices of every stored value whose phrase contains a match for
    /// `query`, ascending. Supports [`MULTI_WILDCARD`] and
    /// [`SINGLE_WILDCARD`]; an empty query matches nothing.
    pub fn get_indices_for(&self, query: &str) -> BTreeSet<usize> {
        let mut matches = BTreeSet::new();
        let folded = fold_case(query, self.case_sensitive);
        if folded.is_empty() {
            return matches;
        }
        let query: Vec<char> = folded.chars().collect();
        collect_matches(&self.root, &query, 0, &mut matches);
        matches
    }

    /// The values whose phrases match `query`, in insertion order.
    ///
    /// Each matching value appears once, no matter how many positions of
    /// its phrase match.
    pub fn search(&self, query: &str) -> Vec<&V> {
        self.get_indices_for(query)
            .into_iter()
            .map(|index| &self.values[index])
            .collect()
    }
}

#[cfg(feature = "parallel")]
impl<V> SuffixIndex<V> {
    /// Indexes a batch of phrases, building per-phrase sub-tries in
    /// parallel and merging them into the index.
    ///
    /// Observable state afterwards is identical to calling [`insert`] for
    /// each entry in order: empty phrases are skipped and the rest receive
    /// ascending indices.
    ///
    /// [`insert`]: SuffixIndex::insert
    pub fn insert_all(&mut self, entries: Vec<(String, V)>) -> &mut Self {
        use rayon::prelude::*;

        // Only the folded phrases cross threads; values stay here, so `V`
        // needs no Send or Sync bound.
        let mut phrases = Vec::with_capacity(entries.len());
        let mut values = Vec::with_capacity(entries.len());
        for (phrase, value) in entries {
            let folded = fold_case(&phrase, self.case_sensitive);
            if !folded.is_empty() {
                phrases.push(folded);
                values.push(value);
            }
        }

        let base = self.values.len();
        let merged = phrases
            .par_iter()
            .enumerate()
            .map(|(offset, folded)| {
                let mut shard = SuffixNode::new();
                tag_suffixes(&mut shard, folded, base + offset);
                shard
            })
            .reduce(SuffixNode::new, |mut left, right| {
                left.merge(right);
                left
            });

        self.root.merge(merged);
        self.values.append(&mut values);
        self
    }
}

#[cfg(not(feature = "parallel"))]
impl<V> SuffixIndex<V> {
    /// Indexes a batch of phrases sequentially.
    ///
    /// Same contract as the parallel version: equivalent to calling
    /// [`insert`] for each entry in order.
    ///
    /// [`insert`]: SuffixIndex::insert
    pub fn insert_all(&mut self, entries: Vec<(String, V)>) -> &mut Self {
        for (phrase, value) in entries {
            self.insert(&phrase, value);
        }
        self
    }
}

/// Threads every suffix of `phrase` into the trie rooted at `root`,
/// recording `index` on each node along the way (SUFFIX_COMPLETE).
fn tag_suffixes(root: &mut SuffixNode, phrase: &str, index: usize) {
    let chars: Vec<char> = phrase.chars().collect();
    for start in 0..chars.len() {
        let mut node = &mut *root;
        for &c in &chars[start..] {
            node = node.child_or_insert(c);
            node.add_index(index);
        }
    }
}

/// Recursive query walk. One accumulator set is threaded through the whole
/// evaluation instead of allocating a result set per branch.
fn collect_matches(node: &SuffixNode, query: &[char], position: usize, matches: &mut BTreeSet<usize>) {
    if position == query.len() {
        matches.extend(node.indices().iter().copied());
        return;
    }
    match query[position] {
        MULTI_WILDCARD => {
            // Either the star keeps consuming through this child, or it
            // ends with the child's character and the query resumes there.
            for child in node.children() {
                collect_matches(child, query, position, matches);
                collect_matches(child, query, position + 1, matches);
            }
        }
        SINGLE_WILDCARD => {
            for child in node.children() {
                collect_matches(child, query, position + 1, matches);
            }
        }
        c => {
            if let Some(child) = node.child(c) {
                collect_matches(child, query, position + 1, matches);
            }
        }
    }
}
