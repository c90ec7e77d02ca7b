// SPDX-License-Identifier: MIT
//
// Visual lines: turning per-character rectangles into wrapped lines.
//
// The host measures each rendered character of a paragraph and hands the
// boxes over in document order. Characters whose tops sit within
// LINE_TOLERANCE of the current line's top belong to that line; anything
// further away starts a new one. The first glyph fixes a line's top, so a
// slow drift of sub-pixel baselines cannot chain two lines together.
//
//   glyphs:  T h e ␣ q u i c k ␣ ... │ b r o w n ...
//   tops:    100 100 100.5 ...        │ 120 120 ...
//                                     └─ |120 - 100| > 3 → new line

use serde::{Deserialize, Serialize};

/// Maximum top difference, in pixels, for two glyphs to share a line.
pub const LINE_TOLERANCE: f64 = 3.0;

/// One rendered character's client rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlyphBox {
    pub ch: char,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl GlyphBox {
    /// Boxes with no width or no height (collapsed whitespace, zero-width
    /// joiners) are not rendered and carry no position.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.right - self.left == 0.0 || self.bottom - self.top == 0.0
    }
}

// ---------------------------------------------------------------------------
// LineRect
// ---------------------------------------------------------------------------

/// Geometry and text of one visually wrapped line.
///
/// When deserialized, `width` may be omitted and is then `right - left`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LineInput")]
pub struct LineRect {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub width: f64,
    pub text: String,
}

impl LineRect {
    /// A line spanning `left..right`, with the width derived.
    #[must_use]
    pub fn new(left: f64, right: f64, top: f64, bottom: f64, text: impl Into<String>) -> Self {
        Self { left, right, top, bottom, width: right - left, text: text.into() }
    }
}

#[derive(Deserialize)]
struct LineInput {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    text: String,
}

impl From<LineInput> for LineRect {
    fn from(raw: LineInput) -> Self {
        Self {
            width: raw.width.unwrap_or(raw.right - raw.left),
            left: raw.left,
            right: raw.right,
            top: raw.top,
            bottom: raw.bottom,
            text: raw.text,
        }
    }
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// A line under construction.
struct Pending {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    text: String,
}

impl Pending {
    fn start(g: &GlyphBox) -> Self {
        Self { left: g.left, right: g.right, top: g.top, bottom: g.bottom, text: String::from(g.ch) }
    }

    fn extend(&mut self, g: &GlyphBox) {
        self.left = self.left.min(g.left);
        self.right = self.right.max(g.right);
        self.bottom = self.bottom.max(g.bottom);
        self.text.push(g.ch);
    }

    /// Finish the line, or `None` if it holds only whitespace.
    fn finish(self) -> Option<LineRect> {
        let text = self.text.trim();
        if text.is_empty() {
            return None;
        }
        Some(LineRect::new(self.left, self.right, self.top, self.bottom, text))
    }
}

/// Group glyph boxes, in document order, into visual lines.
///
/// Empty boxes are ignored entirely (their characters are not part of the
/// line text). Line text is trimmed and whitespace-only lines are dropped.
#[must_use]
pub fn group_visual_lines(glyphs: &[GlyphBox]) -> Vec<LineRect> {
    let mut lines = Vec::new();
    let mut current: Option<Pending> = None;

    for g in glyphs.iter().filter(|g| !g.is_empty()) {
        match &mut current {
            Some(line) if (g.top - line.top).abs() <= LINE_TOLERANCE => line.extend(g),
            slot => {
                if let Some(done) = slot.replace(Pending::start(g)).and_then(Pending::finish) {
                    lines.push(done);
                }
            }
        }
    }
    lines.extend(current.and_then(Pending::finish));
    lines
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
