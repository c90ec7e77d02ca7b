//! Sentence splitting.
//!
//! A sentence is the longest run of non-terminal characters followed by one
//! or more terminals (`.`, `!`, `?`) and any whitespace after them:
//!
//! ```text
//! [^.!?]*[.!?]+\s*
//! ```
//!
//! Matches are taken left to right without overlap, and any match that is
//! empty once trimmed is dropped. Trailing text with no terminal is not a
//! sentence.

use std::sync::LazyLock;

use regex::Regex;

static SENTENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^.!?]*[.!?]+\s*").unwrap_or_else(|e| unreachable!("sentence pattern: {e}"))
});

/// Split `text` into sentences.
///
/// Returned slices borrow from `text` and keep their trailing whitespace.
/// Text without terminal punctuation yields an empty vector.
///
/// ```
/// use ripliel_text::split_into_sentences;
///
/// let s = split_into_sentences("What is this? Is it working? Yes it is.");
/// assert_eq!(s, ["What is this? ", "Is it working? ", "Yes it is."]);
/// ```
#[must_use]
pub fn split_into_sentences(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    SENTENCE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// [`split_into_sentences`] for text that may be absent.
#[must_use]
pub fn split_optional(text: Option<&str>) -> Vec<&str> {
    text.map_or_else(Vec::new, split_into_sentences)
}

/// Number of sentences in `text`.
#[must_use]
pub fn count_sentences(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    SENTENCE
        .find_iter(text)
        .filter(|m| !m.as_str().trim().is_empty())
        .count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
