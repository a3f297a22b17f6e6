// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordered key/value index with range queries.
//!
//! A B+ tree over owned enum nodes: all values live in the leaves,
//! internal nodes only route. Compared to the hash-based indexes in this
//! crate it trades point-lookup speed for ordered access, which is what
//! you want for "every price between 10 and 25" style queries.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **UNIFORM_DEPTH**: every leaf sits at the same depth
//! 2. **NODE_FILL**: non-root nodes hold between `(order - 1) / 2` and
//!    `order - 1` keys; the root may hold fewer but never more
//! 3. **KEYS_ASCENDING**: keys within a node are strictly ascending
//! 4. **SEPARATION**: for separator `i`, all keys in `children[i]` are
//!    `< keys[i]` and all keys in `children[i + 1]` are `>= keys[i]`
//! 5. **CHILD_COUNT**: an internal node has exactly `keys.len() + 1`
//!    children

mod node;

pub(crate) use node::Node;

/// Fanout used by [`BPlusTree::new`]. Chosen for in-memory use: wide
/// enough to keep trees shallow, small enough that node edits stay cheap.
pub const DEFAULT_ORDER: usize = 32;

/// An ordered map from `K` to `V` with inclusive range scans.
///
/// ```
/// use talpa::BPlusTree;
///
/// let mut prices = BPlusTree::new();
/// prices.insert(1250, "gaming keyboard");
/// prices.insert(499, "usb cable");
/// prices.insert(2100, "wireless headset");
///
/// assert_eq!(prices.get(&499), Some(&"usb cable"));
/// let mid_range = prices.range(&500, &2000);
/// assert_eq!(mid_range, vec![(&1250, &"gaming keyboard")]);
/// ```
#[derive(Debug, Clone)]
pub struct BPlusTree<K, V> {
    root: Node<K, V>,
    order: usize,
    len: usize,
}

impl<K: Ord + Clone, V> BPlusTree<K, V> {
    /// Creates an empty tree with [`DEFAULT_ORDER`].
    pub fn new() -> Self {
        Self {
            root: Node::new_leaf(),
            order: DEFAULT_ORDER,
            len: 0,
        }
    }

    /// Creates an empty tree with the given fanout. Returns `None` for
    /// orders below 3, where splitting cannot produce two non-empty
    /// halves.
    pub fn with_order(order: usize) -> Option<Self> {
        (order >= 3).then(|| Self {
            root: Node::new_leaf(),
            order,
            len: 0,
        })
    }

    /// The tree's fanout.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `key`/`value`. An existing key has its value replaced and
    /// returned; a new key grows the tree, splitting nodes upward as
    /// needed. A root split adds one level and is the only way the tree
    /// gets taller.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let max_keys = self.order - 1;
        let (replaced, split) = self.root.insert(key, value, max_keys);
        if let Some((separator, right)) = split {
            let left = std::mem::replace(&mut self.root, Node::new_leaf());
            self.root = Node::Internal {
                keys: vec![separator],
                children: vec![left, right],
            };
        }
        if replaced.is_none() {
            self.len += 1;
        }
        replaced
    }

    /// The value stored under `key`, if any.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.root.get(key)
    }

    /// Whether `key` has an entry.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Every entry with `start <= key <= end`, ascending by key. Bounds
    /// are inclusive on both sides; an inverted range is empty.
    pub fn range(&self, start: &K, end: &K) -> Vec<(&K, &V)> {
        if start > end {
            return Vec::new();
        }
        let mut out = Vec::new();
        self.root.collect_range(start, end, &mut out);
        out
    }

    /// Every entry, ascending by key.
    pub fn entries(&self) -> Vec<(&K, &V)> {
        let mut out = Vec::with_capacity(self.len);
        self.root.collect_all(&mut out);
        out
    }

    /// The smallest entry.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.root.first()
    }

    /// The largest entry.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.root.last()
    }

    pub(crate) fn root(&self) -> &Node<K, V> {
        &self.root
    }
}

impl<K: Ord + Clone, V> Default for BPlusTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
