//! Anchor color palette: twenty saturated colors in light/dark pairs.

use std::fmt;

use serde::{Serialize, Serializer};

/// An sRGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional, digits are
    /// case-insensitive).
    ///
    /// Returns `None` if the string is not a six-digit hex color.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        let bytes = s.as_bytes();
        if bytes.len() != 6 {
            return None;
        }
        Some(Self::new(
            parse_hex_byte(&bytes[0..2])?,
            parse_hex_byte(&bytes[2..4])?,
            parse_hex_byte(&bytes[4..6])?,
        ))
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Number of entries in [`PALETTE`].
pub const PALETTE_SIZE: usize = 20;

/// The ordered color palette. Indexed by `(hash >> 4) % PALETTE_SIZE`.
pub static PALETTE: [Rgb; PALETTE_SIZE] = [
    Rgb::new(0xe7, 0x4c, 0x3c), Rgb::new(0xc0, 0x39, 0x2b), // reds
    Rgb::new(0x34, 0x98, 0xdb), Rgb::new(0x29, 0x80, 0xb9), // blues
    Rgb::new(0x2e, 0xcc, 0x71), Rgb::new(0x27, 0xae, 0x60), // greens
    Rgb::new(0x9b, 0x59, 0xb6), Rgb::new(0x8e, 0x44, 0xad), // purples
    Rgb::new(0xf3, 0x9c, 0x12), Rgb::new(0xe6, 0x7e, 0x22), // oranges
    Rgb::new(0x1a, 0xbc, 0x9c), Rgb::new(0x16, 0xa0, 0x85), // teals
    Rgb::new(0xe9, 0x1e, 0x63), Rgb::new(0xc2, 0x18, 0x5b), // pinks
    Rgb::new(0x00, 0xbc, 0xd4), Rgb::new(0x00, 0x97, 0xa7), // cyans
    Rgb::new(0xff, 0x57, 0x22), Rgb::new(0xd8, 0x43, 0x15), // deep oranges
    Rgb::new(0x60, 0x7d, 0x8b), Rgb::new(0x45, 0x5a, 0x64), // blue greys
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
