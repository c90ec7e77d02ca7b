//! Interval crossing: which lines of a paragraph earn anchors.
//!
//! Sentences are counted cumulatively down a paragraph. A line is anchored
//! when the running total passes one or more multiples of the interval
//! somewhere inside that line:
//!
//! ```text
//! interval = 3
//!
//! line   sentences   before → after   floor(before/3) → floor(after/3)   anchored
//!  1         1          0  →  1               0 → 0                        no
//!  2         1          1  →  2               0 → 0                        no
//!  3         1          2  →  3               0 → 1                        yes
//!  4         4          3  →  7               1 → 2                        yes
//! ```
//!
//! Landing exactly on a multiple counts as crossing it. A line with no
//! sentences never crosses by itself.

use crate::sentence::count_sentences;

/// Whether `line_text` carries the sentence count from `previous_count`
/// past a multiple of `interval`.
///
/// An `interval` of zero is treated as one.
#[must_use]
pub fn crosses_interval(line_text: &str, previous_count: usize, interval: u32) -> bool {
    crosses(previous_count, count_sentences(line_text), interval)
}

/// Count-based form of [`crosses_interval`].
#[must_use]
pub fn crosses(previous_count: usize, line_sentences: usize, interval: u32) -> bool {
    let interval = (interval as usize).max(1);
    let cumulative = previous_count + line_sentences;
    cumulative / interval > previous_count / interval
}

// ---------------------------------------------------------------------------
// SentenceTally
// ---------------------------------------------------------------------------

/// Running sentence count for one paragraph.
///
/// The crossing rule is stateless; this is the caller-side bookkeeping that
/// carries `previous_count` from one line to the next. Create one per
/// paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceTally {
    interval: u32,
    count: usize,
}

impl SentenceTally {
    /// Start a paragraph at zero sentences.
    #[must_use]
    pub const fn new(interval: u32) -> Self {
        Self { interval, count: 0 }
    }

    /// Sentences counted so far.
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Add one line's sentences. Returns `true` if the line is anchored.
    pub fn advance(&mut self, line_text: &str) -> bool {
        let before = self.count;
        self.count += count_sentences(line_text);
        crosses(before, self.count - before, self.interval)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
