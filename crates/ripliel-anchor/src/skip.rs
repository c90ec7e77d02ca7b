// SPDX-License-Identifier: MIT
//
// Element skip policy. Anchors only go under prose: markup whose text is
// code, form input, metadata, or graphics is never annotated, and neither is
// anything the user is currently editing.

/// Tags whose text never gets anchors.
pub const SKIP_TAGS: &[&str] = &[
    "SCRIPT", "STYLE", "NOSCRIPT", "TEXTAREA", "INPUT", "CODE", "PRE", "SVG", "TITLE",
];

/// Whether an element with `tag` should be left alone.
///
/// Tag matching is case-insensitive, so both `"pre"` and `"PRE"` skip.
#[must_use]
pub fn should_skip_tag(tag: &str, content_editable: bool) -> bool {
    content_editable || SKIP_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}
