// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A node in the suffix trie.
//!
//! Each node owns one outgoing edge per distinct character plus the set of
//! value indices whose phrases pass through it. Because every node on a
//! suffix path records the phrase's index, a query walk can stop at any
//! node and read the complete answer for the prefix consumed so far.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **INDICES_ASCENDING**: `indices` is strictly ascending (no duplicates)
//! 2. **ACCUMULATION**: every index in a child's set also appears in the parent's set
//! 3. **INDEX_BOUNDS**: every index is a valid position in the owning index's value list

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single trie node: child edges keyed by character and the indices of
/// every phrase with a suffix path crossing this node.
///
/// Nodes are plain data. All bookkeeping that spans nodes (index bounds,
/// accumulation down a path) is owned by [`SuffixIndex`](crate::SuffixIndex)
/// and checked by [`contracts`](crate::contracts) in debug builds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuffixNode {
    children: HashMap<char, SuffixNode>,
    indices: Vec<usize>,
}

impl SuffixNode {
    /// Creates an empty node with no children and no recorded indices.
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
            indices: Vec::new(),
        }
    }

    /// Returns the child reached by `c`, inserting a fresh empty node first
    /// if the edge does not exist yet.
    ///
    /// Calling this twice with the same character yields the same node; an
    /// existing child is never replaced, so indices recorded on it survive
    /// later insertions along the same path.
    pub fn child_or_insert(&mut self, c: char) -> &mut SuffixNode {
        self.children.entry(c).or_default()
    }

    /// Returns the child reached by `c`, if any.
    pub fn child(&self, c: char) -> Option<&SuffixNode> {
        self.children.get(&c)
    }

    /// Whether an edge labeled `c` leaves this node.
    pub fn contains_child(&self, c: char) -> bool {
        self.children.contains_key(&c)
    }

    /// Iterates over the child nodes in no particular order.
    pub fn children(&self) -> impl Iterator<Item = &SuffixNode> {
        self.children.values()
    }

    /// Number of outgoing edges.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Records `index` in this node's set.
    ///
    /// Phrase insertion produces ascending indices, so the common case is a
    /// constant-time check against the last element. Arbitrary orders fall
    /// back to a binary search; either way the set stays sorted and
    /// duplicate-free (INDICES_ASCENDING).
    pub fn add_index(&mut self, index: usize) {
        match self.indices.last() {
            Some(&last) if last == index => {}
            Some(&last) if last > index => {
                if let Err(pos) = self.indices.binary_search(&index) {
                    self.indices.insert(pos, index);
                }
            }
            _ => self.indices.push(index),
        }
    }

    /// Read-only view of the indices recorded at this node, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Whether `index` is recorded at this node.
    pub fn contains_index(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// True when the node has no children and no indices.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.indices.is_empty()
    }

    /// Merges `other` into this node: children are united recursively and
    /// the index sets are merged without disturbing INDICES_ASCENDING.
    ///
    /// Used by the parallel bulk build, where per-phrase sub-tries carry
    /// disjoint index sets that interleave arbitrarily.
    pub(crate) fn merge(&mut self, other: SuffixNode) {
        for (c, child) in other.children {
            match self.children.entry(c) {
                Entry::Occupied(slot) => slot.into_mut().merge(child),
                Entry::Vacant(slot) => {
                    slot.insert(child);
                }
            }
        }
        if !other.indices.is_empty() {
            self.indices = merge_ascending(&self.indices, &other.indices);
        }
    }
}

/// Merges two strictly-ascending index slices into one, dropping duplicates.
fn merge_ascending(a: &[usize], b: &[usize]) -> Vec<usize> {
    if a.is_empty() {
        return b.to_vec();
    }
    if b.is_empty() {
        return a.to_vec();
    }
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                merged.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                merged.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                merged.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);
    merged
}
