//! Style selection: text in, `(pattern, color)` out.

use serde::Serialize;

use crate::hash::hash;
use crate::palette::{PALETTE, PALETTE_SIZE, Rgb};
use crate::pattern::{AnchorPattern, PATTERN_COUNT, PATTERNS};

/// The look of one anchored line: every anchor on the line shares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Style {
    pub pattern: AnchorPattern,
    pub color: Rgb,
}

/// Pick the style for `text`.
///
/// The pattern comes from `hash % 58`, the color from `(hash >> 4) % 20`.
/// The shift keeps neighbouring hashes from moving pattern and color in
/// lockstep. Empty text selects the first entry of each catalog.
#[must_use]
pub fn select_style(text: &str) -> Style {
    let h = hash(text) as usize;
    Style {
        pattern: PATTERNS[h % PATTERN_COUNT],
        color: PALETTE[(h >> 4) % PALETTE_SIZE],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
