//! Runtime contracts for the index structures.
//!
//! This module provides debug-mode assertions that verify the structural
//! invariants the indexes rely on. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. State each invariant **in one place**, named and numbered, so test
//!    suites and fuzz targets share the same definition of "well-formed"
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract function                  | Invariant                               |
//! |------------------------------------|-----------------------------------------|
//! | `check_indices_ascending`          | suffix node index sets strictly ascend  |
//! | `check_index_accumulation`         | child index sets are subsets of parents |
//! | `check_index_bounds`               | every index points into the value list  |
//! | `check_suffix_index_well_formed`   | all of the above, from the root         |
//! | `check_phrase_indexed`             | every suffix path exists end to end     |
//! | `check_inverted_index_well_formed` | postings nonempty and in bounds         |
//! | `check_bplustree_well_formed`      | depth, fill, ordering, separation       |

use crate::bplustree::{BPlusTree, Node, DEFAULT_ORDER};
use crate::inverted::InvertedWordIndex;
use crate::suffix::{SuffixIndex, SuffixNode};
use crate::utils::fold_case;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The minimum node fill must be nonzero at the default order, otherwise
/// splits could produce empty halves. If this fails, the crate won't build.
const _: () = {
    assert!(DEFAULT_ORDER >= 3);
    assert!((DEFAULT_ORDER - 1) / 2 >= 1);
};

// ============================================================================
// SUFFIX TRIE CONTRACTS
// ============================================================================

/// Check that every index set in the trie is strictly ascending.
///
/// # Panics (debug builds only)
/// Panics if any node stores indices out of order or duplicated.
#[inline]
pub fn check_indices_ascending(node: &SuffixNode) {
    for pair in node.indices().windows(2) {
        debug_assert!(
            pair[0] < pair[1],
            "Contract violation: INDICES_ASCENDING - index {} does not precede {}",
            pair[0],
            pair[1]
        );
    }
    for child in node.children() {
        check_indices_ascending(child);
    }
}

/// Check that every index recorded on a child is also recorded on its
/// parent. Query walks rely on this: stopping early must never lose
/// results that a deeper walk would find.
///
/// # Panics (debug builds only)
/// Panics if a child records an index its parent does not.
#[inline]
pub fn check_index_accumulation(node: &SuffixNode) {
    for child in node.children() {
        for &index in child.indices() {
            debug_assert!(
                node.contains_index(index),
                "Contract violation: ACCUMULATION - child records index {index} missing from its parent"
            );
        }
        check_index_accumulation(child);
    }
}

/// Check that every recorded index is a valid position in a value list of
/// `value_count` entries.
///
/// # Panics (debug builds only)
/// Panics if any node records an out-of-bounds index.
#[inline]
pub fn check_index_bounds(node: &SuffixNode, value_count: usize) {
    if let Some(&largest) = node.indices().last() {
        debug_assert!(
            largest < value_count,
            "Contract violation: INDEX_BOUNDS - index {largest} exceeds value count {value_count}"
        );
    }
    for child in node.children() {
        check_index_bounds(child, value_count);
    }
}

/// Check the whole suffix index: ascending sets, accumulation, bounds,
/// and an index-free root.
///
/// # Panics (debug builds only)
/// Panics if any structural invariant is violated.
#[inline]
pub fn check_suffix_index_well_formed<V>(index: &SuffixIndex<V>) {
    debug_assert!(
        index.root().indices().is_empty(),
        "Contract violation: the root must not record indices"
    );
    check_indices_ascending(index.root());
    check_index_accumulation(index.root());
    check_index_bounds(index.root(), index.len());
}

/// Check that `phrase`, stored at `phrase_index`, is fully reachable:
/// every suffix has an unbroken path from the root and every node on it
/// records the index.
///
/// O(m^2) in the phrase length. Use sparingly; this is the expensive
/// completeness check, not part of [`check_suffix_index_well_formed`].
///
/// # Panics (debug builds only)
/// Panics if a suffix path is missing or loses the index partway.
#[inline]
pub fn check_phrase_indexed<V>(index: &SuffixIndex<V>, phrase_index: usize, phrase: &str) {
    let folded = fold_case(phrase, index.is_case_sensitive());
    let chars: Vec<char> = folded.chars().collect();
    for start in 0..chars.len() {
        let mut node = index.root();
        for (step, &c) in chars[start..].iter().enumerate() {
            debug_assert!(
                node.contains_child(c),
                "Contract violation: suffix path from offset {start} breaks at step {step}"
            );
            let Some(child) = node.child(c) else { return };
            debug_assert!(
                child.contains_index(phrase_index),
                "Contract violation: suffix path from offset {start} loses index {phrase_index} at step {step}"
            );
            node = child;
        }
    }
}

// ============================================================================
// INVERTED INDEX CONTRACTS
// ============================================================================

/// Check that the posting map stores no empty word and no empty posting
/// set, and that every posting refers to a stored value.
///
/// # Panics (debug builds only)
/// Panics if any posting invariant is violated.
#[inline]
pub fn check_inverted_index_well_formed<V>(index: &InvertedWordIndex<V>) {
    for (word, indices) in index.postings() {
        debug_assert!(
            !word.is_empty(),
            "Contract violation: empty word stored in postings"
        );
        debug_assert!(
            !indices.is_empty(),
            "Contract violation: word {word:?} has an empty posting set"
        );
        for &posting in indices {
            debug_assert!(
                posting < index.len(),
                "Contract violation: posting {posting} for word {word:?} is out of bounds"
            );
        }
    }
}

// ============================================================================
// B+ TREE CONTRACTS
// ============================================================================

/// Check that a tree is well-formed: uniform leaf depth, node fill within
/// bounds, keys ascending within nodes, separators actually separating,
/// and a stored-entry count that agrees with `len()`.
///
/// # Panics (debug builds only)
/// Panics if any structural invariant is violated.
#[inline]
pub fn check_bplustree_well_formed<K: Ord + Clone, V>(tree: &BPlusTree<K, V>) {
    let depth = tree.root().depth();
    let mut entry_count = 0;
    walk_tree(tree.root(), tree.order(), depth, true, &mut entry_count);
    debug_assert_eq!(
        entry_count,
        tree.len(),
        "Contract violation: leaves hold {} entries but len() reports {}",
        entry_count,
        tree.len()
    );
}

fn walk_tree<K: Ord + Clone, V>(
    node: &Node<K, V>,
    order: usize,
    remaining_depth: usize,
    is_root: bool,
    entry_count: &mut usize,
) {
    match node {
        Node::Leaf { keys, values } => {
            debug_assert_eq!(
                remaining_depth, 1,
                "Contract violation: UNIFORM_DEPTH - leaf found {remaining_depth} levels above the leaf layer"
            );
            debug_assert_eq!(
                keys.len(),
                values.len(),
                "Contract violation: leaf stores {} keys but {} values",
                keys.len(),
                values.len()
            );
            check_node_keys(keys, order, is_root);
            *entry_count += keys.len();
        }
        Node::Internal { keys, children } => {
            debug_assert!(
                remaining_depth > 1,
                "Contract violation: UNIFORM_DEPTH - internal node at the leaf layer"
            );
            debug_assert_eq!(
                children.len(),
                keys.len() + 1,
                "Contract violation: CHILD_COUNT - {} keys but {} children",
                keys.len(),
                children.len()
            );
            check_node_keys(keys, order, is_root);
            for (at, child) in children.iter().enumerate() {
                if at < keys.len() {
                    if let Some((last_key, _)) = child.last() {
                        debug_assert!(
                            last_key < &keys[at],
                            "Contract violation: SEPARATION - child {at} holds a key at or above its separator"
                        );
                    }
                }
                if at > 0 {
                    if let Some((first_key, _)) = child.first() {
                        debug_assert!(
                            first_key >= &keys[at - 1],
                            "Contract violation: SEPARATION - child {at} holds a key below the previous separator"
                        );
                    }
                }
                walk_tree(child, order, remaining_depth - 1, false, entry_count);
            }
        }
    }
}

fn check_node_keys<K: Ord>(keys: &[K], order: usize, is_root: bool) {
    for pair in keys.windows(2) {
        debug_assert!(
            pair[0] < pair[1],
            "Contract violation: KEYS_ASCENDING - adjacent keys out of order"
        );
    }
    let max_keys = order - 1;
    debug_assert!(
        keys.len() <= max_keys,
        "Contract violation: NODE_FILL - node holds {} keys, maximum is {max_keys}",
        keys.len()
    );
    if !is_root {
        let min_keys = (order - 1) / 2;
        debug_assert!(
            keys.len() >= min_keys,
            "Contract violation: NODE_FILL - node holds {} keys, minimum is {min_keys}",
            keys.len()
        );
    }
}
