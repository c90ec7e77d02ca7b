// SPDX-License-Identifier: MIT
//
// Paragraph planning: which lines get anchors, and where.
//
// A paragraph is walked line by line with a SentenceTally. Every line that
// carries the running count across a multiple of the configured interval
// gets three anchors of the same style, one under each of its start,
// middle, and end:
//
//   ┌──────────────────────── line (width w) ────────────────────────┐
//   │ ...the third sentence ends here. And the fourth begins         │
//   └────────────────────────────────────────────────────────────────┘
//    ▔▔▔▔▔▔                     ▔▔▔▔▔▔                          ▔▔▔▔▔▔
//    start                      middle                            end
//    └ aw ┘   aw = min(w × 0.12, 50), one pixel below the line bottom

use ripliel_config::Config;
use ripliel_style::{Style, select_style};
use ripliel_text::SentenceTally;
use serde::Serialize;
use tracing::debug;

use crate::lines::LineRect;

/// Paragraphs whose trimmed text is shorter than this (in characters) get
/// no anchors.
pub const MIN_PARAGRAPH_CHARS: usize = 20;

/// Lines narrower than this, in pixels, are ignored.
pub const MIN_LINE_WIDTH: f64 = 50.0;

/// Upper bound on an anchor's width, in pixels.
pub const MAX_ANCHOR_WIDTH: f64 = 50.0;

/// Anchor width as a fraction of the line width.
pub const ANCHOR_WIDTH_RATIO: f64 = 0.12;

/// Gap between the line bottom and the anchor top, in pixels.
pub const ANCHOR_GAP: f64 = 1.0;

/// Left offsets of the three anchors under a line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Positions {
    pub start: f64,
    pub middle: f64,
    pub end: f64,
}

/// Anchors for one line of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineAnchors {
    /// Index into the paragraph's line list.
    pub line: usize,
    pub style: Style,
    pub width: f64,
    pub top: f64,
    #[serde(flatten)]
    pub positions: Positions,
}

/// Anchor width for a line of `line_width` pixels.
#[inline]
#[must_use]
pub fn anchor_width(line_width: f64) -> f64 {
    (line_width * ANCHOR_WIDTH_RATIO).min(MAX_ANCHOR_WIDTH)
}

/// Start, middle, and end offsets for anchors of `anchor_width` under
/// `rect`.
#[must_use]
pub fn anchor_positions(rect: &LineRect, anchor_width: f64) -> Positions {
    Positions {
        start: rect.left,
        middle: rect.left + (rect.width - anchor_width) / 2.0,
        end: rect.right - anchor_width,
    }
}

/// Plan the anchors for one paragraph.
///
/// `text` is the paragraph's full text content and `lines` its visual
/// lines in order. Returns nothing when anchors are disabled or the
/// paragraph is too short. Lines without text or narrower than
/// [`MIN_LINE_WIDTH`] are skipped and do not count toward the interval.
#[must_use]
pub fn plan_paragraph(text: &str, lines: &[LineRect], config: &Config) -> Vec<LineAnchors> {
    if !config.enabled || text.trim().chars().count() < MIN_PARAGRAPH_CHARS {
        return Vec::new();
    }

    let mut tally = SentenceTally::new(config.sentence_interval);
    let mut planned = Vec::new();

    for (i, rect) in lines.iter().enumerate() {
        if rect.text.is_empty() || rect.width < MIN_LINE_WIDTH {
            continue;
        }
        if !tally.advance(&rect.text) {
            continue;
        }
        let width = anchor_width(rect.width);
        planned.push(LineAnchors {
            line: i,
            style: select_style(&rect.text),
            width,
            top: rect.bottom + ANCHOR_GAP,
            positions: anchor_positions(rect, width),
        });
    }

    debug!(
        lines = lines.len(),
        anchored = planned.len(),
        sentences = tally.count(),
        "paragraph planned"
    );
    planned
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PARAGRAPH: &str = "A paragraph long enough to be anchored.";

    fn line(text: &str, left: f64, right: f64, top: f64) -> LineRect {
        LineRect::new(left, right, top, top + 16.0, text)
    }

    fn config(interval: u32) -> Config {
        Config { sentence_interval: interval, ..Config::default() }
    }

    fn anchored(plan: &[LineAnchors]) -> Vec<usize> {
        plan.iter().map(|a| a.line).collect()
    }

    // ── Positions ────────────────────────────────────────────────────────

    #[test]
    fn positions_wide_line() {
        let rect = line("x", 100.0, 600.0, 0.0);
        let p = anchor_positions(&rect, 50.0);
        assert_eq!((p.start, p.middle, p.end), (100.0, 325.0, 550.0));
    }

    #[test]
    fn positions_narrow_line() {
        let rect = line("x", 0.0, 100.0, 0.0);
        let p = anchor_positions(&rect, 30.0);
        assert_eq!((p.start, p.middle, p.end), (0.0, 35.0, 70.0));
    }

    #[test]
    fn positions_collapse_when_anchor_fills_line() {
        let rect = line("x", 50.0, 100.0, 0.0);
        let p = anchor_positions(&rect, 50.0);
        assert_eq!((p.start, p.middle, p.end), (50.0, 50.0, 50.0));
    }

    #[test]
    fn anchor_width_capped() {
        assert_eq!(anchor_width(100.0), 12.0);
        assert_eq!(anchor_width(1000.0), 50.0);
    }

    // ── Planning ─────────────────────────────────────────────────────────

    #[test]
    fn every_third_sentence() {
        let lines = [
            line("One sentence here.", 0.0, 500.0, 0.0),
            line("Two sentences here.", 0.0, 500.0, 20.0),
            line("Three sentences here.", 0.0, 500.0, 40.0),
        ];
        let plan = plan_paragraph(PARAGRAPH, &lines, &config(3));
        assert_eq!(anchored(&plan), vec![2]);

        let a = plan[0];
        assert_eq!(a.style, select_style("Three sentences here."));
        assert_eq!(a.width, 50.0);
        assert_eq!(a.top, 57.0);
        assert_eq!(a.positions, anchor_positions(&lines[2], 50.0));
    }

    #[test]
    fn interval_one_anchors_each_sentence_line() {
        let lines = [
            line("First.", 0.0, 400.0, 0.0),
            line("no terminator", 0.0, 400.0, 20.0),
            line("Second.", 0.0, 400.0, 40.0),
        ];
        assert_eq!(anchored(&plan_paragraph(PARAGRAPH, &lines, &config(1))), vec![0, 2]);
    }

    #[test]
    fn line_spanning_two_multiples_anchors_once() {
        let lines = [line("A. B. C. D. E. F. G.", 0.0, 400.0, 0.0)];
        let plan = plan_paragraph(PARAGRAPH, &lines, &config(3));
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn disabled_plans_nothing() {
        let lines = [line("Yes.", 0.0, 400.0, 0.0)];
        let off = Config { enabled: false, ..config(1) };
        assert!(plan_paragraph(PARAGRAPH, &lines, &off).is_empty());
    }

    #[test]
    fn short_paragraph_plans_nothing() {
        let lines = [line("Tiny.", 0.0, 400.0, 0.0)];
        assert!(plan_paragraph("   Too short here.   ", &lines, &config(1)).is_empty());
        // Exactly twenty characters is enough.
        assert_eq!(plan_paragraph("abcdefghij0123456789", &lines, &config(1)).len(), 1);
    }

    #[test]
    fn paragraph_length_counts_chars() {
        let lines = [line("Oui.", 0.0, 400.0, 0.0)];
        // 19 characters, more than 20 bytes.
        assert!(plan_paragraph("ééééééééééééééééééé", &lines, &config(1)).is_empty());
    }

    #[test]
    fn narrow_lines_do_not_count() {
        let lines = [
            line("Skipped. Skipped.", 0.0, 49.0, 0.0),
            line("One.", 0.0, 300.0, 20.0),
            line("Two.", 0.0, 300.0, 40.0),
        ];
        // Had the narrow line counted, the tally would reach 2 on line 1.
        assert_eq!(anchored(&plan_paragraph(PARAGRAPH, &lines, &config(2))), vec![2]);
    }

    #[test]
    fn empty_text_lines_skipped() {
        let lines = [line("", 0.0, 300.0, 0.0), line("Only.", 0.0, 300.0, 20.0)];
        assert_eq!(anchored(&plan_paragraph(PARAGRAPH, &lines, &config(1))), vec![1]);
    }

    #[test]
    fn no_lines_no_plan() {
        assert!(plan_paragraph(PARAGRAPH, &[], &config(1)).is_empty());
    }

    #[test]
    fn plan_serializes_flat() {
        let lines = [line("Only.", 0.0, 100.0, 0.0)];
        let plan = plan_paragraph(PARAGRAPH, &lines, &config(1));
        let json = serde_json::to_value(plan[0]).unwrap();
        assert_eq!(json["line"], 0);
        assert_eq!(json["start"], 0.0);
        assert_eq!(json["end"], 88.0);
        assert!(json["style"]["pattern"].is_string());
    }
}
