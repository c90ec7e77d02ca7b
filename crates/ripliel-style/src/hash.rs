//! Rolling string hash: the seed of every style decision.
//!
//! `h = h * 31 + c` over UTF-16 code units, wrapped to 32-bit signed
//! arithmetic at every step, with the absolute value taken at the end. The
//! UTF-16 iteration and the wrap points are what make the result match the
//! hash browsers compute for the same text, so a page rendered by a script
//! host and by this crate picks the same anchors.
//!
//! Not collision resistant. It only has to be deterministic and spread
//! reasonably across the catalogs.

/// Hash `text` to an unsigned 32-bit value. The empty string hashes to `0`.
///
/// `i32::MIN` has no positive counterpart in `i32`, so its absolute value
/// is reported as `2^31`.
#[must_use]
pub fn hash(text: &str) -> u32 {
    text.encode_utf16()
        .fold(0_i32, |h, unit| {
            h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

/// [`hash`] for text that may be absent. `None` hashes like `""`.
#[must_use]
pub fn hash_optional(text: Option<&str>) -> u32 {
    text.map_or(0, hash)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
