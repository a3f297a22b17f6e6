//! Whole-word inverted index.
//!
//! Maps each word of an inserted phrase to the set of value indices whose
//! phrase contains it. Queries split into words and union the posting
//! sets, so word order never matters and every word is an independent
//! hit.
//!
//! Compared to [`SuffixIndex`](crate::SuffixIndex) this builds in `O(words)`
//! instead of `O(chars^2)` and uses far less memory, at the price of whole
//! word matching only: no substrings and no wildcards.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **WORD_COMPLETE**: every word of a stored phrase has a posting for
//!    that phrase's index
//! 2. **INDEX_BOUNDS**: every posting index is a valid position in the
//!    value list
//! 3. **NON_EMPTY**: no empty-string word and no empty posting set is ever
//!    stored

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::utils::fold_case;

/// Inverted index from words to stored values.
///
/// Values are stored append-only; posting sets hold ascending value
/// indices. Case-insensitive by default, with sensitivity fixed at
/// construction like the other index structures in this crate.
///
/// ```
/// use talpa::InvertedWordIndex;
///
/// let mut index = InvertedWordIndex::new();
/// index
///     .insert("wireless charging pad", "pad")
///     .insert("wireless earbuds", "earbuds");
///
/// assert_eq!(index.search("wireless"), vec![&"pad", &"earbuds"]);
/// assert_eq!(index.search("earbuds"), vec![&"earbuds"]);
/// assert!(index.search("wire").is_empty(), "whole words only");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvertedWordIndex<V> {
    postings: HashMap<String, BTreeSet<usize>>,
    values: Vec<V>,
    case_sensitive: bool,
}

impl<V> InvertedWordIndex<V> {
    /// Creates an empty, case-insensitive index.
    pub fn new() -> Self {
        Self {
            postings: HashMap::new(),
            values: Vec::new(),
            case_sensitive: false,
        }
    }

    /// Creates an empty index that preserves case exactly as inserted.
    pub fn case_sensitive() -> Self {
        Self {
            postings: HashMap::new(),
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

    /// Number of distinct words with at least one posting.
    pub fn word_count(&self) -> usize {
        self.postings.len()
    }

    /// Whether `word` (folded) has any posting.
    pub fn contains_word(&self, word: &str) -> bool {
        self.postings.contains_key(&fold_case(word, self.case_sensitive))
    }

    /// All stored values in insertion order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Indexes `phrase` under each of its whitespace-separated words and
    /// associates it with `value`. A phrase with no words is a no-op: no
    /// value is stored and no posting is created.
    ///
    /// Returns `&mut Self` so insertions chain.
    pub fn insert(&mut self, phrase: &str, value: V) -> &mut Self {
        let folded = fold_case(phrase, self.case_sensitive);
        if folded.split_whitespace().next().is_none() {
            return self;
        }
        let index = self.values.len();
        self.values.push(value);
        for word in folded.split_whitespace() {
            self.postings.entry(word.to_string()).or_default().insert(index);
        }
        self
    }

    /// Indices of every stored value containing at least one word of
    /// `query`, ascending. Words the index has never seen contribute
    /// nothing; an empty query matches nothing.
    pub fn get_indices_for(&self, query: &str) -> BTreeSet<usize> {
        let folded = fold_case(query, self.case_sensitive);
        let mut matches = BTreeSet::new();
        for word in folded.split_whitespace() {
            if let Some(indices) = self.postings.get(word) {
                matches.extend(indices.iter().copied());
            }
        }
        matches
    }

    /// The values whose phrases contain any word of `query`, in insertion
    /// order.
    pub fn search(&self, query: &str) -> Vec<&V> {
        self.get_indices_for(query)
            .into_iter()
            .map(|index| &self.values[index])
            .collect()
    }

    pub(crate) fn postings(&self) -> &HashMap<String, BTreeSet<usize>> {
        &self.postings
    }
}

#[cfg(feature = "parallel")]
impl<V> InvertedWordIndex<V> {
    /// Indexes a batch of phrases, folding and tokenizing in parallel and
    /// merging the per-phrase posting maps into the index.
    ///
    /// Observable state afterwards is identical to calling [`insert`] for
    /// each entry in order.
    ///
    /// [`insert`]: InvertedWordIndex::insert
    pub fn insert_all(&mut self, entries: Vec<(String, V)>) -> &mut Self {
        use rayon::prelude::*;

        // Only the folded phrases cross threads; values stay here, so `V`
        // needs no Send or Sync bound.
        let mut phrases = Vec::with_capacity(entries.len());
        let mut values = Vec::with_capacity(entries.len());
        for (phrase, value) in entries {
            let folded = fold_case(&phrase, self.case_sensitive);
            if folded.split_whitespace().next().is_some() {
                phrases.push(folded);
                values.push(value);
            }
        }

        let base = self.values.len();
        let merged = phrases
            .par_iter()
            .enumerate()
            .map(|(offset, folded)| {
                let mut local: HashMap<String, BTreeSet<usize>> = HashMap::new();
                for word in folded.split_whitespace() {
                    local.entry(word.to_string()).or_default().insert(base + offset);
                }
                local
            })
            .reduce(HashMap::new, merge_postings);

        for (word, indices) in merged {
            self.postings.entry(word).or_default().extend(indices);
        }
        self.values.append(&mut values);
        self
    }
}

#[cfg(not(feature = "parallel"))]
impl<V> InvertedWordIndex<V> {
    /// Indexes a batch of phrases sequentially.
    ///
    /// Same contract as the parallel version: equivalent to calling
    /// [`insert`] for each entry in order.
    ///
    /// [`insert`]: InvertedWordIndex::insert
    pub fn insert_all(&mut self, entries: Vec<(String, V)>) -> &mut Self {
        for (phrase, value) in entries {
            self.insert(&phrase, value);
        }
        self
    }
}

#[cfg(feature = "parallel")]
fn merge_postings(
    mut left: HashMap<String, BTreeSet<usize>>,
    right: HashMap<String, BTreeSet<usize>>,
) -> HashMap<String, BTreeSet<usize>> {
    for (word, indices) in right {
        left.entry(word).or_default().extend(indices);
    }
    left
}
