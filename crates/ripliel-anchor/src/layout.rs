// SPDX-License-Identifier: MIT
//
// Layout documents: a page's measured paragraphs, planned in one pass.
//
// A host that cannot call into the planner element by element (the CLI,
// a snapshot test) describes the page as JSON instead:
//
//   {"paragraphs": [{"tag": "p", "lines": [{"left": 0, "right": 480, ...}]}]}
//
// A paragraph may give raw "glyphs" (one box per character) instead of
// "lines"; those are grouped into visual lines first. Each paragraph then
// goes through the skip policy and plan_paragraph.

use std::borrow::Cow;

use ripliel_config::Config;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lines::{GlyphBox, LineRect, group_visual_lines};
use crate::plan::{LineAnchors, plan_paragraph};
use crate::skip::should_skip_tag;

/// One measured block element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    /// Element tag name, e.g. `"p"` or `"PRE"`.
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub content_editable: bool,
    /// Full text content. When absent, the line texts joined by spaces.
    #[serde(default)]
    pub text: Option<String>,
    /// Measured visual lines.
    #[serde(default)]
    pub lines: Vec<LineRect>,
    /// Per-character boxes, used when `lines` is empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub glyphs: Vec<GlyphBox>,
}

impl Paragraph {
    /// The paragraph's visual lines, grouped from `glyphs` when no lines
    /// were measured.
    #[must_use]
    pub fn visual_lines(&self) -> Cow<'_, [LineRect]> {
        if self.lines.is_empty() && !self.glyphs.is_empty() {
            Cow::Owned(group_visual_lines(&self.glyphs))
        } else {
            Cow::Borrowed(&self.lines)
        }
    }

    /// The paragraph's text content.
    #[must_use]
    pub fn text(&self) -> String {
        self.text.clone().unwrap_or_else(|| join_text(&self.visual_lines()))
    }
}

fn join_text(lines: &[LineRect]) -> String {
    lines.iter().map(|l| l.text.as_str()).collect::<Vec<_>>().join(" ")
}

/// A page's paragraphs in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

/// Anchors for one paragraph of a [`Layout`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParagraphPlan {
    /// Index into [`Layout::paragraphs`].
    pub paragraph: usize,
    pub anchors: Vec<LineAnchors>,
}

/// Plan every paragraph of `layout`. Skipped and unanchored paragraphs are
/// left out of the result.
#[must_use]
pub fn plan_layout(layout: &Layout, config: &Config) -> Vec<ParagraphPlan> {
    let mut plans = Vec::new();
    for (i, para) in layout.paragraphs.iter().enumerate() {
        if should_skip_tag(&para.tag, para.content_editable) {
            debug!(paragraph = i, tag = %para.tag, "skipped");
            continue;
        }
        let lines = para.visual_lines();
        let text = para.text.clone().unwrap_or_else(|| join_text(&lines));
        let anchors = plan_paragraph(&text, &lines, config);
        if !anchors.is_empty() {
            plans.push(ParagraphPlan { paragraph: i, anchors });
        }
    }
    plans
}
