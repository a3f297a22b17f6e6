//! Suffix-trie search with `*` and `?` wildcard queries over phrase catalogs.
//!
//! Every suffix of every indexed phrase is threaded into a single trie, so a
//! query can match starting anywhere inside a phrase. Lookups walk that trie
//! once per query instead of scanning the stored phrases.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │  utils.rs  (fold_case)  │
//!                    └────────────┬────────────┘
//!                                 │
//!            ┌────────────────────┼────────────────────┐
//!            ▼                    ▼                    ▼
//!   ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐
//!   │    suffix.rs    │  │   inverted.rs   │  │     trie.rs     │
//!   │  (SuffixIndex,  │  │ (InvertedWord-  │  │     (Trie)      │
//!   │   SuffixNode)   │  │     Index)      │  │                 │
//!   └────────┬────────┘  └─────────────────┘  └─────────────────┘
//!            │
//!            ▼
//!   ┌───────────────────────────────────────────────────────────┐
//!   │                       contracts.rs                        │
//!   │  (check_suffix_index_well_formed,                         │
//!   │   check_bplustree_well_formed - debug_assert! checks)     │
//!   └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Overview
//!
//! | Module       | Types                       | Purpose                         |
//! |--------------|-----------------------------|---------------------------------|
//! | `suffix`     | `SuffixIndex`, `SuffixNode` | Substring and wildcard search   |
//! | `inverted`   | `InvertedWordIndex`         | Whole-word lookup               |
//! | `trie`       | `Trie`                      | Prefix membership, suggestions  |
//! | `stop_words` | `StopWords`                 | Tokenizing and noise filtering  |
//! | `bplustree`  | `BPlusTree`                 | Ordered map with range scans    |
//! | `contracts`  | `check_*` functions         | Debug-build invariant checks    |
//!
//! # Wildcards
//!
//! `*` spans one or more characters and `?` exactly one. Both may appear
//! anywhere in the query, any number of times. A query without wildcards is a
//! plain substring lookup.
//!
//! # Usage
//!
//! ```
//! use talpa::{StopWords, SuffixIndex};
//!
//! let mut index = SuffixIndex::new();
//! index.insert("wireless optical mouse", "MS-114");
//! index.insert("wired ergonomic mouse", "MS-115");
//! index.insert("insulated water bottle", "WB-777");
//!
//! // Substring match anywhere in the phrase.
//! assert_eq!(index.search("optic"), vec![&"MS-114"]);
//!
//! // `*` spans one or more characters, `?` exactly one.
//! assert_eq!(index.search("wire*mouse"), vec![&"MS-114", &"MS-115"]);
//! assert_eq!(index.search("wir?less"), vec![&"MS-114"]);
//!
//! // Strip noise words before indexing longer descriptions.
//! let tokens = StopWords::minimal().filter("A keyboard with the works");
//! assert_eq!(tokens, vec!["keyboard", "works"]);
//! ```

// Module declarations
pub mod bplustree;
pub mod contracts;
mod inverted;
mod stop_words;
mod suffix;
pub mod testing;
mod trie;
mod utils;

// Re-exports for public API
pub use bplustree::{BPlusTree, DEFAULT_ORDER};
pub use inverted::InvertedWordIndex;
pub use stop_words::StopWords;
pub use suffix::{SuffixIndex, SuffixNode, MULTI_WILDCARD, SINGLE_WILDCARD};
pub use trie::Trie;
pub use utils::fold_case;
