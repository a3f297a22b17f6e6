// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! B+ tree nodes.
//!
//! One enum, two shapes: leaves carry the keys and values, internal nodes
//! carry separator keys and owned children. A separator `s` at position
//! `i` means everything in `children[i]` compares `< s` and everything in
//! `children[i + 1]` compares `>= s`, so equal keys always descend right.
//!
//! Nodes own their children outright (`Vec<Node>`), which rules out the
//! classic sibling links between leaves. Ordered scans recurse instead;
//! see [`collect_range`](Node::collect_range).

/// A node in the tree. Fields are crate-visible so the invariant checks
/// in [`contracts`](crate::contracts) can walk the structure directly.
#[derive(Debug, Clone)]
pub(crate) enum Node<K, V> {
    Leaf { keys: Vec<K>, values: Vec<V> },
    Internal { keys: Vec<K>, children: Vec<Node<K, V>> },
}

impl<K: Ord + Clone, V> Node<K, V> {
    pub(crate) fn new_leaf() -> Self {
        Node::Leaf {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Inserts `key`/`value` below this node.
    ///
    /// Returns the replaced value when the key already existed, plus the
    /// split bubble `(separator, right-sibling)` when the insertion
    /// overflowed this node past `max_keys`.
    pub(crate) fn insert(
        &mut self,
        key: K,
        value: V,
        max_keys: usize,
    ) -> (Option<V>, Option<(K, Node<K, V>)>) {
        match self {
            Node::Leaf { keys, values } => match keys.binary_search(&key) {
                Ok(at) => (Some(std::mem::replace(&mut values[at], value)), None),
                Err(at) => {
                    keys.insert(at, key);
                    values.insert(at, value);
                    if keys.len() > max_keys {
                        (None, Some(split_leaf(keys, values)))
                    } else {
                        (None, None)
                    }
                }
            },
            Node::Internal { keys, children } => {
                let at = keys.partition_point(|separator| *separator <= key);
                let (replaced, split) = children[at].insert(key, value, max_keys);
                if let Some((separator, right)) = split {
                    keys.insert(at, separator);
                    children.insert(at + 1, right);
                    if keys.len() > max_keys {
                        return (replaced, Some(split_internal(keys, children)));
                    }
                }
                (replaced, None)
            }
        }
    }

    /// Walks down to the value stored under `key`, if any.
    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        match self {
            Node::Leaf { keys, values } => {
                keys.binary_search(key).ok().map(|at| &values[at])
            }
            Node::Internal { keys, children } => {
                children[keys.partition_point(|separator| separator <= key)].get(key)
            }
        }
    }

    /// Pushes every entry with `start <= key <= end` onto `out`, ascending.
    ///
    /// Internal nodes only descend into children whose key interval
    /// intersects the bounds; everything outside is skipped whole.
    pub(crate) fn collect_range<'a>(
        &'a self,
        start: &K,
        end: &K,
        out: &mut Vec<(&'a K, &'a V)>,
    ) {
        match self {
            Node::Leaf { keys, values } => {
                let from = keys.partition_point(|key| key < start);
                let to = keys.partition_point(|key| key <= end);
                for at in from..to {
                    out.push((&keys[at], &values[at]));
                }
            }
            Node::Internal { keys, children } => {
                let first = keys.partition_point(|separator| separator <= start);
                let last = keys.partition_point(|separator| separator <= end);
                for child in &children[first..=last] {
                    child.collect_range(start, end, out);
                }
            }
        }
    }

    /// Pushes every entry onto `out`, ascending.
    pub(crate) fn collect_all<'a>(&'a self, out: &mut Vec<(&'a K, &'a V)>) {
        match self {
            Node::Leaf { keys, values } => {
                out.extend(keys.iter().zip(values.iter()));
            }
            Node::Internal { children, .. } => {
                for child in children {
                    child.collect_all(out);
                }
            }
        }
    }

    /// Smallest entry in this subtree.
    pub(crate) fn first(&self) -> Option<(&K, &V)> {
        match self {
            Node::Leaf { keys, values } => keys.first().zip(values.first()),
            Node::Internal { children, .. } => children.first().and_then(Node::first),
        }
    }

    /// Largest entry in this subtree.
    pub(crate) fn last(&self) -> Option<(&K, &V)> {
        match self {
            Node::Leaf { keys, values } => keys.last().zip(values.last()),
            Node::Internal { children, .. } => children.last().and_then(Node::last),
        }
    }

    /// Levels below and including this node, following the leftmost path.
    pub(crate) fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { children, .. } => {
                1 + children.first().map_or(0, Node::depth)
            }
        }
    }
}

/// Splits an overflowing leaf in half. The separator is a copy of the
/// right half's first key; the right leaf keeps the entry itself.
fn split_leaf<K: Ord + Clone, V>(keys: &mut Vec<K>, values: &mut Vec<V>) -> (K, Node<K, V>) {
    let mid = keys.len() / 2;
    let right_keys = keys.split_off(mid);
    let right_values = values.split_off(mid);
    let separator = right_keys[0].clone();
    (
        separator,
        Node::Leaf {
            keys: right_keys,
            values: right_values,
        },
    )
}

/// Splits an overflowing internal node. The middle key moves up as the
/// separator and belongs to neither half afterwards.
fn split_internal<K: Ord + Clone, V>(
    keys: &mut Vec<K>,
    children: &mut Vec<Node<K, V>>,
) -> (K, Node<K, V>) {
    let mid = keys.len() / 2;
    let mut right_keys = keys.split_off(mid);
    let separator = right_keys.remove(0);
    let right_children = children.split_off(mid + 1);
    (
        separator,
        Node::Internal {
            keys: right_keys,
            children: right_children,
        },
    )
}
