//! Stop word filtering for indexing pipelines.
//!
//! [`StopWords`] tokenizes text the way the index structures expect it
//! (lowercase, punctuation stripped) and drops words that carry no search
//! value. Four curated lists ship embedded in the binary; callers can also
//! supply their own.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::utils::normalize_word;

static MINIMAL: LazyLock<HashSet<String>> =
    LazyLock::new(|| load_list(include_str!("../data/stop_words/minimal.txt")));

static ENGLISH: LazyLock<HashSet<String>> =
    LazyLock::new(|| load_list(include_str!("../data/stop_words/english.txt")));

static GENERAL_TEXT: LazyLock<HashSet<String>> =
    LazyLock::new(|| load_list(include_str!("../data/stop_words/general_text.txt")));

static INNODB: LazyLock<HashSet<String>> =
    LazyLock::new(|| load_list(include_str!("../data/stop_words/innodb.txt")));

/// Parses an embedded word list: one word per line, `#` lines are comments.
fn load_list(raw: &str) -> HashSet<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// A set of words to drop while tokenizing text.
///
/// ```
/// use talpa::StopWords;
///
/// let tokens = StopWords::minimal().filter("The quick brown fox, by and by.");
/// assert_eq!(tokens, vec!["quick", "brown", "fox"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::minimal()
    }
}

impl StopWords {
    /// The minimal list: articles, conjunctions, and the most common
    /// function words. This is also the [`Default`] set.
    pub fn minimal() -> Self {
        Self { words: MINIMAL.clone() }
    }

    /// A comprehensive English list. Aggressive; strips most function
    /// words and single-letter tokens.
    pub fn english() -> Self {
        Self { words: ENGLISH.clone() }
    }

    /// The minimal list extended with pronouns, prepositions, and
    /// auxiliaries common in running prose.
    pub fn general_text() -> Self {
        Self { words: GENERAL_TEXT.clone() }
    }

    /// The MySQL InnoDB FULLTEXT default list.
    pub fn innodb() -> Self {
        Self { words: INNODB.clone() }
    }

    /// An empty set: [`filter`](StopWords::filter) tokenizes without
    /// dropping anything.
    pub fn none() -> Self {
        Self { words: HashSet::new() }
    }

    /// Builds a set from caller-supplied words (normalized to lowercase).
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stop_words = Self::none();
        stop_words.set(words);
        stop_words
    }

    /// Adds one word to the set. Returns `&mut Self` so additions chain.
    pub fn add(&mut self, word: &str) -> &mut Self {
        let word = normalize_word(word);
        if !word.is_empty() {
            self.words.insert(word);
        }
        self
    }

    /// Replaces the entire set with `words`.
    pub fn set<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words = words
            .into_iter()
            .map(|word| normalize_word(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();
        self
    }

    /// Whether `word` (normalized) is in the set.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&normalize_word(word))
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words in the set, sorted ascending.
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Tokenizes `text` and drops stop words.
    ///
    /// The text is lowercased, every character outside ASCII letters,
    /// digits, and spaces is removed (removed, not replaced, so a
    /// hyphenated word like `anti-bacterial` becomes one token), and the
    /// remainder is split on spaces. Surviving tokens keep their input
    /// order, duplicates included.
    pub fn filter(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
            .collect();
        cleaned
            .split_whitespace()
            .filter(|word| !self.words.contains(*word))
            .map(str::to_string)
            .collect()
    }
}
