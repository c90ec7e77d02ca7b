//! # ripliel-text: sentence segmentation for ripliel
//!
//! - **[`sentence`]**: split text into sentence-like units at `.`, `!`, `?`
//! - **[`interval`]**: decide whether a line's sentences cross the next
//!   multiple of the configured sentence interval
//!
//! Segmentation is purely punctuation-driven, so `Dr.` and `3.5` each end a
//! sentence. Everything here is a pure function of its arguments.

pub mod interval;
pub mod sentence;

pub use interval::{SentenceTally, crosses_interval};
pub use sentence::{count_sentences, split_into_sentences};
