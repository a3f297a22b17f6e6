//! Node-level structure tests for the suffix trie.

use super::common::{assert_index_well_formed, index_of};
use talpa::SuffixNode;

#[test]
fn out_of_order_indices_stay_sorted() {
    let mut node = SuffixNode::new();
    node.add_index(5);
    node.add_index(2);
    node.add_index(8);
    node.add_index(2);

    assert_eq!(node.indices(), &[2, 5, 8]);
}

#[test]
fn repeated_indices_collapse() {
    let mut node = SuffixNode::new();
    node.add_index(3);
    node.add_index(3);
    node.add_index(3);

    assert_eq!(node.indices(), &[3]);
}

#[test]
fn child_or_insert_reuses_existing_children() {
    let mut node = SuffixNode::new();
    node.child_or_insert('a').add_index(0);
    node.child_or_insert('a').add_index(1);

    assert_eq!(node.child_count(), 1);
    assert_eq!(node.child('a').map(SuffixNode::indices), Some(&[0, 1][..]));
}

#[test]
fn fresh_nodes_are_empty() {
    let node = SuffixNode::new();

    assert!(node.is_empty());
    assert!(!node.contains_child('a'));
    assert!(!node.contains_index(0));
    assert_eq!(node.child_count(), 0);
}

#[test]
fn every_suffix_gets_its_own_path() {
    let index = index_of(&["abc"]);
    let root = index.root();

    // Suffixes "abc", "bc", and "c" each start at the root.
    assert!(root.contains_child('a'));
    assert!(root.contains_child('b'));
    assert!(root.contains_child('c'));

    let deep = root
        .child('a')
        .and_then(|node| node.child('b'))
        .and_then(|node| node.child('c'));
    assert_eq!(deep.map(SuffixNode::indices), Some(&[0][..]));
}

#[test]
fn shared_paths_accumulate_all_phrases() {
    let index = index_of(&["cat", "car", "cart"]);
    let root = index.root();

    // "ca" is on a suffix path of all three phrases.
    let ca = root.child('c').and_then(|node| node.child('a'));
    assert_eq!(ca.map(SuffixNode::indices), Some(&[0, 1, 2][..]));

    // "rt" only occurs in "cart".
    let rt = root.child('r').and_then(|node| node.child('t'));
    assert_eq!(rt.map(SuffixNode::indices), Some(&[2][..]));
}

#[test]
fn built_indexes_are_well_formed() {
    let index = index_of(&["banana", "bandana", "cabana"]);

    assert_index_well_formed(&index);
}
