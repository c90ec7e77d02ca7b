// SPDX-License-Identifier: MIT
//
// ripliel-anchor: where reading anchors go.
//
// Ties the pure pieces together for one page:
//
//   glyph boxes ──► lines.rs ──► LineRect per visual line
//                                   │
//   element tag ──► skip.rs         │
//                     │             ▼
//                     └──────► plan.rs ──► LineAnchors (style + offsets)
//                                   ▲
//   Config ─────────────────────────┘
//
// layout.rs runs the same pipeline over a JSON page description.
// Drawing is left to the host; ripliel-style renders a style to SVG.

pub mod layout;
pub mod lines;
pub mod plan;
pub mod skip;

pub use layout::{Layout, Paragraph, ParagraphPlan, plan_layout};
pub use lines::{GlyphBox, LineRect, group_visual_lines};
pub use plan::{LineAnchors, Positions, anchor_positions, anchor_width, plan_paragraph};
pub use skip::should_skip_tag;
