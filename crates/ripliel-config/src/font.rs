//! Font choices for the serif reading mode.
//!
//! | Name             | Serif | Fallback | Lead face              |
//! |------------------|-------|----------|------------------------|
//! | `petit-medieval` | ✓     |          | Libre Clarendon        |
//! | `georgia`        | ✓     | ✓        | Georgia                |
//! | `times`          | ✓     | ✓        | Times New Roman        |
//! | `palatino`       | ✓     | ✓        | Palatino Linotype      |
//! | `garamond`       | ✓     |          | Garamond               |
//! | `baskerville`    | ✓     |          | Baskerville            |
//! | `system-serif`   |       | ✓        | (generic `serif` only) |

use serde::{Deserialize, Serialize};

/// The primary serif face applied to page text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SerifFont {
    #[default]
    PetitMedieval,
    Georgia,
    Times,
    Palatino,
    Garamond,
    Baskerville,
}

impl SerifFont {
    /// Storage name, e.g. `"petit-medieval"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PetitMedieval => "petit-medieval",
            Self::Georgia => "georgia",
            Self::Times => "times",
            Self::Palatino => "palatino",
            Self::Garamond => "garamond",
            Self::Baskerville => "baskerville",
        }
    }

    /// Font faces in preference order, without the generic family.
    #[must_use]
    pub const fn faces(self) -> &'static [&'static str] {
        match self {
            Self::PetitMedieval => &["Libre Clarendon", "Georgia", "Times New Roman", "Times"],
            Self::Georgia => &["Georgia", "Times New Roman", "Times"],
            Self::Times => &["Times New Roman", "Times", "Georgia"],
            Self::Palatino => &["Palatino Linotype", "Palatino", "Book Antiqua", "Georgia"],
            Self::Garamond => &["Garamond", "EB Garamond", "Georgia"],
            Self::Baskerville => &["Baskerville", "Libre Baskerville", "Georgia"],
        }
    }

    /// Parse from an exact storage name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().find(|f| f.name() == name).copied()
    }

    /// All serif choices.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::PetitMedieval,
            Self::Georgia,
            Self::Times,
            Self::Palatino,
            Self::Garamond,
            Self::Baskerville,
        ]
    }
}

/// The face tried when the primary serif face is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackFont {
    #[default]
    Georgia,
    Times,
    Palatino,
    SystemSerif,
}

impl FallbackFont {
    /// Storage name, e.g. `"system-serif"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Georgia => "georgia",
            Self::Times => "times",
            Self::Palatino => "palatino",
            Self::SystemSerif => "system-serif",
        }
    }

    /// Font faces, without the generic family. Empty for `system-serif`.
    #[must_use]
    pub const fn faces(self) -> &'static [&'static str] {
        match self {
            Self::Georgia => &["Georgia"],
            Self::Times => &["Times New Roman", "Times"],
            Self::Palatino => &["Palatino Linotype", "Palatino"],
            Self::SystemSerif => &[],
        }
    }

    /// Parse from an exact storage name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().find(|f| f.name() == name).copied()
    }

    /// All fallback choices.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Georgia, Self::Times, Self::Palatino, Self::SystemSerif]
    }
}

/// Build a CSS `font-family` value: the serif's own faces, then the
/// fallback faces, then generic `serif`. Duplicate faces keep their first
/// position.
#[must_use]
pub fn font_stack(serif: SerifFont, fallback: FallbackFont) -> String {
    let ordered = serif.faces().iter().chain(fallback.faces());

    let mut seen: Vec<&str> = Vec::new();
    for &face in ordered {
        if !seen.contains(&face) {
            seen.push(face);
        }
    }

    let mut parts: Vec<String> = seen.into_iter().map(quote_face).collect();
    parts.push("serif".to_string());
    parts.join(", ")
}

/// Quote a face name if it contains spaces.
fn quote_face(face: &str) -> String {
    if face.contains(' ') {
        format!("\"{face}\"")
    } else {
        face.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
