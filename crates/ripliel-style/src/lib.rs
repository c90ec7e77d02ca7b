//! # ripliel-style: deterministic anchor styles
//!
//! Maps an arbitrary text fragment to a reproducible `(pattern, color)` pair
//! drawn from two fixed catalogs, and draws that pair as a small SVG strip.
//! The same text always yields the same style, so anchors look identical
//! across re-renders, resizes, and re-computation.
//!
//! # Architecture
//!
//! ```text
//! line text
//!     │
//!     ▼
//! hash.rs:    32-bit rolling hash over UTF-16 code units
//!     │
//!     ▼
//! style.rs:   hash % patterns  →  pattern
//!             (hash >> 4) % palette  →  color
//!     │
//!     ▼
//! render.rs:  pattern + color + width  →  shape primitives  →  <svg>
//! ```
//!
//! Catalog order is significant: selection is positional, so reordering
//! [`PATTERNS`] or [`PALETTE`] changes every page's anchors.

// Drawing coordinates are small loop-derived floats.
#![allow(clippy::cast_precision_loss)]

pub mod hash;
pub mod palette;
pub mod pattern;
pub mod render;
pub mod style;

pub use hash::hash;
pub use palette::{PALETTE, Rgb};
pub use pattern::{AnchorPattern, Family, PATTERNS, Variant};
pub use style::{Style, select_style};
