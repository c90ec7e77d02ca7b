//! The validated configuration and the validator that produces it.
//!
//! Settings arrive as an untyped JSON blob from whatever key-value store the
//! host provides. [`validate`] reads each known field, keeps it only when
//! its JSON type is right, and otherwise falls back to the default:
//!
//! | Key                | Type    | Default          | Accepted input                 |
//! |--------------------|---------|------------------|--------------------------------|
//! | `enabled`          | bool    | `true`           | JSON boolean                   |
//! | `sentenceInterval` | integer | `3`              | any JSON number, floored, 1–20 |
//! | `useSerifFont`     | bool    | `true`           | JSON boolean                   |
//! | `serifFont`        | enum    | `petit-medieval` | string naming a serif font     |
//! | `fallbackFont`     | enum    | `georgia`        | string naming a fallback font  |
//!
//! Unknown keys are ignored. A blob that is not an object validates to the
//! defaults.

use serde::Serialize;
use serde_json::Value;

use crate::font::{FallbackFont, SerifFont, font_stack};

/// Smallest accepted sentence interval.
pub const MIN_SENTENCE_INTERVAL: u32 = 1;

/// Largest accepted sentence interval.
pub const MAX_SENTENCE_INTERVAL: u32 = 20;

/// Sentence interval used when the blob has none.
pub const DEFAULT_SENTENCE_INTERVAL: u32 = 3;

/// Complete, in-range settings.
///
/// Serializes to the same camelCase blob it is validated from, so a
/// `Config` can be written straight back to a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Master switch for anchors and font replacement.
    pub enabled: bool,
    /// Sentences between anchored lines, in `1..=20`.
    pub sentence_interval: u32,
    /// Replace page fonts with the serif stack.
    pub use_serif_font: bool,
    pub serif_font: SerifFont,
    pub fallback_font: FallbackFont,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            sentence_interval: DEFAULT_SENTENCE_INTERVAL,
            use_serif_font: true,
            serif_font: SerifFont::default(),
            fallback_font: FallbackFont::default(),
        }
    }
}

impl Config {
    /// CSS `font-family` for the serif mode, or `None` when it is off.
    #[must_use]
    pub fn font_family(&self) -> Option<String> {
        self.use_serif_font
            .then(|| font_stack(self.serif_font, self.fallback_font))
    }

    /// This config as a JSON object blob.
    #[must_use]
    pub fn to_blob(&self) -> serde_json::Map<String, Value> {
        // A struct of plain fields always serializes to an object.
        match serde_json::to_value(self) {
            Ok(Value::Object(blob)) => blob,
            _ => serde_json::Map::new(),
        }
    }
}

/// Validate a loosely typed settings value into a complete [`Config`].
///
/// Never fails: wrong-typed, missing, or out-of-range fields fall back to
/// the defaults, and the sentence interval is always clamped to `1..=20`.
#[must_use]
pub fn validate(input: &Value) -> Config {
    let defaults = Config::default();
    let field = |key: &str| input.as_object().and_then(|obj| obj.get(key));

    let sentence_interval = field("sentenceInterval")
        .and_then(Value::as_f64)
        .map_or_else(
            || clamp_interval(f64::from(defaults.sentence_interval)),
            clamp_interval,
        );

    Config {
        enabled: field("enabled")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.enabled),
        sentence_interval,
        use_serif_font: field("useSerifFont")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.use_serif_font),
        serif_font: field("serifFont")
            .and_then(Value::as_str)
            .and_then(SerifFont::from_name)
            .unwrap_or(defaults.serif_font),
        fallback_font: field("fallbackFont")
            .and_then(Value::as_str)
            .and_then(FallbackFont::from_name)
            .unwrap_or(defaults.fallback_font),
    }
}

/// Floor `raw` and clamp it into the accepted interval range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_interval(raw: f64) -> u32 {
    if raw.is_nan() {
        return DEFAULT_SENTENCE_INTERVAL;
    }
    // Clamped to 1.0..=20.0 before the cast, so it cannot truncate.
    raw.floor().clamp(
        f64::from(MIN_SENTENCE_INTERVAL),
        f64::from(MAX_SENTENCE_INTERVAL),
    ) as u32
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn interval(v: Value) -> u32 {
        validate(&json!({ "sentenceInterval": v })).sentence_interval
    }

    // ── Defaults ─────────────────────────────────────────────────────────

    #[test]
    fn empty_object_is_defaults() {
        assert_eq!(validate(&json!({})), Config::default());
    }

    #[test]
    fn default_values() {
        let c = Config::default();
        assert!(c.enabled);
        assert_eq!(c.sentence_interval, 3);
        assert!(c.use_serif_font);
        assert_eq!(c.serif_font, SerifFont::PetitMedieval);
        assert_eq!(c.fallback_font, FallbackFont::Georgia);
    }

    #[test]
    fn non_object_is_defaults() {
        assert_eq!(validate(&Value::Null), Config::default());
        assert_eq!(validate(&json!([1, 2, 3])), Config::default());
        assert_eq!(validate(&json!("enabled")), Config::default());
    }

    // ── Booleans ─────────────────────────────────────────────────────────

    #[test]
    fn enabled_bool() {
        assert!(!validate(&json!({ "enabled": false })).enabled);
        assert!(validate(&json!({ "enabled": true })).enabled);
    }

    #[test]
    fn enabled_wrong_type_ignored() {
        assert!(validate(&json!({ "enabled": "yes" })).enabled);
        assert!(validate(&json!({ "enabled": 0 })).enabled);
        assert!(validate(&json!({ "enabled": null })).enabled);
    }

    #[test]
    fn use_serif_font_bool() {
        assert!(!validate(&json!({ "useSerifFont": false })).use_serif_font);
        assert!(validate(&json!({ "useSerifFont": "no" })).use_serif_font);
    }

    // ── Interval ─────────────────────────────────────────────────────────

    #[test]
    fn interval_in_range() {
        assert_eq!(interval(json!(5)), 5);
        assert_eq!(interval(json!(1)), 1);
        assert_eq!(interval(json!(20)), 20);
    }

    #[test]
    fn interval_clamped() {
        assert_eq!(interval(json!(0)), 1);
        assert_eq!(interval(json!(-5)), 1);
        assert_eq!(interval(json!(25)), 20);
        assert_eq!(interval(json!(1e300)), 20);
    }

    #[test]
    fn interval_floored() {
        assert_eq!(interval(json!(10.7)), 10);
        assert_eq!(interval(json!(10.5)), 10);
        assert_eq!(interval(json!(0.9)), 1);
    }

    #[test]
    fn interval_wrong_type_ignored() {
        assert_eq!(interval(json!("7")), 3);
        assert_eq!(interval(json!(null)), 3);
        assert_eq!(interval(json!([4])), 3);
    }

    #[test]
    fn clamp_handles_nan() {
        assert_eq!(clamp_interval(f64::NAN), DEFAULT_SENTENCE_INTERVAL);
    }

    // ── Fonts ────────────────────────────────────────────────────────────

    #[test]
    fn serif_font_known_name() {
        assert_eq!(validate(&json!({ "serifFont": "georgia" })).serif_font, SerifFont::Georgia);
        assert_eq!(validate(&json!({ "serifFont": "times" })).serif_font, SerifFont::Times);
    }

    #[test]
    fn serif_font_unknown_falls_back() {
        assert_eq!(validate(&json!({ "serifFont": "wingdings" })).serif_font, SerifFont::PetitMedieval);
        assert_eq!(validate(&json!({ "serifFont": 3 })).serif_font, SerifFont::PetitMedieval);
    }

    #[test]
    fn font_names_are_case_sensitive() {
        assert_eq!(validate(&json!({ "serifFont": "GEORGIA" })).serif_font, SerifFont::PetitMedieval);
        assert_eq!(validate(&json!({ "fallbackFont": "Times" })).fallback_font, FallbackFont::Georgia);
    }

    #[test]
    fn fallback_font_known_name() {
        assert_eq!(
            validate(&json!({ "fallbackFont": "system-serif" })).fallback_font,
            FallbackFont::SystemSerif
        );
    }

    #[test]
    fn unknown_keys_ignored() {
        assert_eq!(validate(&json!({ "theme": "dark", "extra": [1] })), Config::default());
    }

    #[test]
    fn full_blob() {
        let c = validate(&json!({
            "enabled": false,
            "sentenceInterval": 7,
            "useSerifFont": false,
            "serifFont": "baskerville",
            "fallbackFont": "times",
        }));
        assert_eq!(
            c,
            Config {
                enabled: false,
                sentence_interval: 7,
                use_serif_font: false,
                serif_font: SerifFont::Baskerville,
                fallback_font: FallbackFont::Times,
            }
        );
    }

    // ── Output ───────────────────────────────────────────────────────────

    #[test]
    fn font_family_off_when_disabled() {
        let c = Config { use_serif_font: false, ..Config::default() };
        assert_eq!(c.font_family(), None);
        assert!(Config::default().font_family().unwrap().starts_with("\"Libre Clarendon\""));
    }

    #[test]
    fn blob_validates_to_itself() {
        let c = Config {
            sentence_interval: 12,
            serif_font: SerifFont::Palatino,
            ..Config::default()
        };
        assert_eq!(validate(&Value::Object(c.to_blob())), c);
    }

    #[test]
    fn blob_uses_storage_names() {
        assert_eq!(
            Value::Object(Config::default().to_blob()),
            json!({
                "enabled": true,
                "sentenceInterval": 3,
                "useSerifFont": true,
                "serifFont": "petit-medieval",
                "fallbackFont": "georgia",
            })
        );
    }
}
