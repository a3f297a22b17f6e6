//! String folding helpers shared by the index structures.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Case-folds `text` for indexing and querying.
///
/// With `case_sensitive` set the text passes through untouched. Otherwise
/// it is lowercased; with the `unicode-normalization` feature enabled the
/// fold additionally strips combining marks after NFD decomposition:
/// - "café" → "cafe"
/// - "Münch" → "munch"
///
/// Folding never trims or collapses whitespace. Phrases keep their exact
/// spacing because queries match against it character by character.
pub fn fold_case(text: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        text.to_owned()
    } else {
        fold_insensitive(text)
    }
}

#[cfg(feature = "unicode-normalization")]
fn fold_insensitive(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(not(feature = "unicode-normalization"))]
fn fold_insensitive(text: &str) -> String {
    text.to_lowercase()
}

/// Normalizes a single word for the whole-word structures: surrounding
/// whitespace dropped, lowercased.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Check if a character is a combining mark (diacritic).
///
/// Only the dedicated combining blocks are listed. Script blocks that mix
/// combining marks with full letters (Devanagari, Telugu) are left alone
/// so folding never eats a real character.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
