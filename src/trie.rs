// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word-prefix trie for autocomplete.
//!
//! Stores whole words (trimmed, lowercased) and answers membership,
//! prefix, and suggestion queries. Unlike [`SuffixIndex`](crate::SuffixIndex)
//! this structure indexes each word once from its first character, so it
//! cannot find substrings; it exists for the "type three letters, offer
//! completions" path where that is exactly what you want.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::utils::normalize_word;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    end_of_word: bool,
}

/// A set of words supporting prefix queries and sorted completions.
///
/// ```
/// use talpa::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("hello").insert("helicopter").insert("hero");
///
/// assert!(trie.contains("hello"));
/// assert!(trie.starts_with("he"));
/// assert_eq!(trie.suggestions("hel"), vec!["helicopter", "hello"]);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
            len: 0,
        }
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no words have been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a word. Input is trimmed and lowercased; empty or
    /// whitespace-only input is a no-op. Re-inserting an existing word
    /// changes nothing.
    ///
    /// Returns `&mut Self` so insertions chain.
    pub fn insert(&mut self, word: &str) -> &mut Self {
        let word = normalize_word(word);
        if word.is_empty() {
            return self;
        }
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if !node.end_of_word {
            node.end_of_word = true;
            self.len += 1;
        }
        self
    }

    /// Whether the exact word (normalized) was inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.find_node(word).is_some_and(|node| node.end_of_word)
    }

    /// Whether any stored word starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.find_node(prefix)
            .is_some_and(|node| node.end_of_word || !node.children.is_empty())
    }

    /// Every stored word beginning with `prefix`, sorted ascending. The
    /// prefix itself is included when it is a stored word; an empty prefix
    /// yields the entire word set.
    pub fn suggestions(&self, prefix: &str) -> Vec<String> {
        let prefix = normalize_word(prefix);
        let Some(node) = self.find_node(&prefix) else {
            return Vec::new();
        };
        let mut words = Vec::new();
        let mut buffer = prefix;
        collect_words(node, &mut buffer, &mut words);
        words.sort_unstable();
        words
    }

    fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let prefix = normalize_word(prefix);
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

/// Depth-first walk pushing every completed word; `buffer` carries the
/// path from the root and is restored before returning.
fn collect_words(node: &TrieNode, buffer: &mut String, words: &mut Vec<String>) {
    if node.end_of_word {
        words.push(buffer.clone());
    }
    for (&c, child) in &node.children {
        buffer.push(c);
        collect_words(child, buffer, words);
        buffer.pop();
    }
}
