//! Anchor pattern catalog: shape families and their variants.
//!
//! Every anchor is drawn from one entry of [`PATTERNS`]. An entry is a
//! shape [`Family`] plus an optional [`Variant`]; its name is the kebab-case
//! join of the two (`dots-small`, `chevrons-left`) or the family alone for
//! single-variant shapes (`stars`, `hearts`).
//!
//! The catalog is positional: [`select_style`](crate::select_style) indexes
//! it with `hash % PATTERNS.len()`. Entries may be restyled freely, but the
//! count and order are part of the output contract.

use std::fmt;

use serde::{Serialize, Serializer};

/// Shape family: decides which drawing routine renders the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Dots,
    Dashes,
    Triangles,
    Waves,
    Squares,
    Diamonds,
    Crosses,
    PlusSigns,
    Stars,
    Hearts,
    Chevrons,
    Brackets,
    Slashes,
    Backslashes,
    Pipes,
    Tildes,
    Carets,
}

impl Family {
    /// Kebab-case name, as it appears as the prefix of pattern names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dots => "dots",
            Self::Dashes => "dashes",
            Self::Triangles => "triangles",
            Self::Waves => "waves",
            Self::Squares => "squares",
            Self::Diamonds => "diamonds",
            Self::Crosses => "crosses",
            Self::PlusSigns => "plus-signs",
            Self::Stars => "stars",
            Self::Hearts => "hearts",
            Self::Chevrons => "chevrons",
            Self::Brackets => "brackets",
            Self::Slashes => "slashes",
            Self::Backslashes => "backslashes",
            Self::Pipes => "pipes",
            Self::Tildes => "tildes",
            Self::Carets => "carets",
        }
    }
}

/// Variant within a family: size, fill, spacing or orientation.
///
/// Not every variant applies to every family; the catalog only pairs each
/// family with the variants its drawing routine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Small,
    Medium,
    Large,
    Hollow,
    Alternating,
    Gradient,
    Spaced,
    Dense,
    Double,
    Triple,
    Short,
    Long,
    Thick,
    Thin,
    Dotted,
    Tapered,
    Up,
    Down,
    Filled,
    Arrows,
    Gentle,
    Steep,
    Zigzag,
    Sine,
    Rotated,
    Checkered,
    Stretched,
    Right,
    Left,
}

// ---------------------------------------------------------------------------
// AnchorPattern
// ---------------------------------------------------------------------------

/// One catalog entry: a named family/variant pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorPattern {
    name: &'static str,
    family: Family,
    variant: Option<Variant>,
}

impl AnchorPattern {
    const fn new(name: &'static str, family: Family, variant: Variant) -> Self {
        Self { name, family, variant: Some(variant) }
    }

    const fn single(family: Family) -> Self {
        Self { name: family.name(), family, variant: None }
    }

    /// Unique identifier, e.g. `"dots-hollow"`.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// The shape family.
    #[inline]
    #[must_use]
    pub const fn family(self) -> Family {
        self.family
    }

    /// The variant, or `None` for single-variant shapes.
    #[inline]
    #[must_use]
    pub const fn variant(self) -> Option<Variant> {
        self.variant
    }

    /// Look a pattern up by name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        PATTERNS.iter().find(|p| p.name == lower).copied()
    }

    /// Position of this pattern in [`PATTERNS`].
    #[must_use]
    pub fn index(self) -> usize {
        PATTERNS
            .iter()
            .position(|p| p.name == self.name)
            .unwrap_or_default()
    }
}

impl fmt::Debug for AnchorPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnchorPattern({})", self.name)
    }
}

impl fmt::Display for AnchorPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for AnchorPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Number of entries in [`PATTERNS`].
pub const PATTERN_COUNT: usize = 58;

/// The ordered pattern catalog.
pub static PATTERNS: [AnchorPattern; PATTERN_COUNT] = {
    use Family as F;
    use Variant as V;
    const fn p(name: &'static str, family: Family, variant: Variant) -> AnchorPattern {
        AnchorPattern::new(name, family, variant)
    }
    [
        // ── Dots ──────────────────────────────────────────────
        p("dots-small", F::Dots, V::Small),
        p("dots-medium", F::Dots, V::Medium),
        p("dots-large", F::Dots, V::Large),
        p("dots-hollow", F::Dots, V::Hollow),
        p("dots-alternating", F::Dots, V::Alternating),
        p("dots-gradient", F::Dots, V::Gradient),
        p("dots-spaced", F::Dots, V::Spaced),
        p("dots-dense", F::Dots, V::Dense),
        p("dots-double", F::Dots, V::Double),
        p("dots-triple", F::Dots, V::Triple),
        // ── Dashes ────────────────────────────────────────────
        p("dashes-short", F::Dashes, V::Short),
        p("dashes-medium", F::Dashes, V::Medium),
        p("dashes-long", F::Dashes, V::Long),
        p("dashes-thick", F::Dashes, V::Thick),
        p("dashes-thin", F::Dashes, V::Thin),
        p("dashes-double", F::Dashes, V::Double),
        p("dashes-dotted", F::Dashes, V::Dotted),
        p("dashes-spaced", F::Dashes, V::Spaced),
        p("dashes-dense", F::Dashes, V::Dense),
        p("dashes-tapered", F::Dashes, V::Tapered),
        // ── Triangles ─────────────────────────────────────────
        p("triangles-up", F::Triangles, V::Up),
        p("triangles-down", F::Triangles, V::Down),
        p("triangles-alternating", F::Triangles, V::Alternating),
        p("triangles-small", F::Triangles, V::Small),
        p("triangles-large", F::Triangles, V::Large),
        p("triangles-hollow", F::Triangles, V::Hollow),
        p("triangles-filled", F::Triangles, V::Filled),
        p("triangles-arrows", F::Triangles, V::Arrows),
        // ── Waves ─────────────────────────────────────────────
        p("waves-gentle", F::Waves, V::Gentle),
        p("waves-steep", F::Waves, V::Steep),
        p("waves-double", F::Waves, V::Double),
        p("waves-zigzag", F::Waves, V::Zigzag),
        p("waves-sine", F::Waves, V::Sine),
        // ── Squares ───────────────────────────────────────────
        p("squares-small", F::Squares, V::Small),
        p("squares-medium", F::Squares, V::Medium),
        p("squares-large", F::Squares, V::Large),
        p("squares-hollow", F::Squares, V::Hollow),
        p("squares-rotated", F::Squares, V::Rotated),
        p("squares-alternating", F::Squares, V::Alternating),
        p("squares-checkered", F::Squares, V::Checkered),
        // ── Diamonds ──────────────────────────────────────────
        p("diamonds-small", F::Diamonds, V::Small),
        p("diamonds-medium", F::Diamonds, V::Medium),
        p("diamonds-large", F::Diamonds, V::Large),
        p("diamonds-hollow", F::Diamonds, V::Hollow),
        p("diamonds-stretched", F::Diamonds, V::Stretched),
        p("diamonds-alternating", F::Diamonds, V::Alternating),
        // ── Single shapes ─────────────────────────────────────
        AnchorPattern::single(F::Crosses),
        AnchorPattern::single(F::PlusSigns),
        AnchorPattern::single(F::Stars),
        AnchorPattern::single(F::Hearts),
        p("chevrons-right", F::Chevrons, V::Right),
        p("chevrons-left", F::Chevrons, V::Left),
        AnchorPattern::single(F::Brackets),
        AnchorPattern::single(F::Slashes),
        AnchorPattern::single(F::Backslashes),
        AnchorPattern::single(F::Pipes),
        AnchorPattern::single(F::Tildes),
        AnchorPattern::single(F::Carets),
    ]
};

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
