//! Hex color normalization.
//!
//! Raw swatch strings arrive in whatever shape the user or the remote theme
//! service produced: with or without a leading `#`, shorthand or full,
//! upper or lower case. [`normalize`] canonicalizes them to `#RRGGBB`
//! uppercase, or reports why it could not.

use crate::error::ThemeError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated, canonical `#RRGGBB` color with uppercase digits.
///
/// The only way to obtain one is through [`normalize`] (or `FromStr`), so
/// holding a `HexColor` proves the string has exactly six hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// The canonical form, e.g. `"#A1B2C3"`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The six digits without the leading `#`.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }

    /// Lowercase form used in generated stylesheets, e.g. `"#a1b2c3"`.
    pub fn to_lowercase(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Normalizes a raw color string to canonical `#RRGGBB` uppercase.
///
/// Accepts an optional leading `#` and surrounding whitespace. Three-digit
/// shorthand is expanded by doubling each digit (`abc` -> `#AABBCC`).
/// Anything that does not end up as exactly six hex digits is rejected.
pub fn normalize(raw: &str) -> Result<HexColor, ThemeError> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let count = digits.chars().count();

    let length_error = || ThemeError::HexLength {
        input: raw.to_string(),
        digits: count,
    };

    if !(3..=7).contains(&count) {
        return Err(length_error());
    }

    let expanded: String = match count {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(length_error()),
    };

    if let Some(found) = expanded.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ThemeError::HexDigit {
            input: raw.to_string(),
            found,
        });
    }

    Ok(HexColor(format!("#{}", expanded.to_ascii_uppercase())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_three_digit_shorthand() {
        assert_eq!(normalize("abc").unwrap().as_str(), "#AABBCC");
    }

    #[test]
    fn uppercases_six_digit_input() {
        assert_eq!(normalize("a1b2c3").unwrap().as_str(), "#A1B2C3");
    }

    #[test]
    fn accepts_leading_hash() {
        assert_eq!(normalize("#0f0").unwrap().as_str(), "#00FF00");
        assert_eq!(normalize("#c0ffee").unwrap().as_str(), "#C0FFEE");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize("  ff8800 ").unwrap().as_str(), "#FF8800");
    }

    #[test]
    fn rejects_empty_string() {
        assert!(matches!(
            normalize(""),
            Err(ThemeError::HexLength { digits: 0, .. })
        ));
    }

    #[test]
    fn rejects_too_long_input() {
        assert!(matches!(
            normalize("1234567890"),
            Err(ThemeError::HexLength { digits: 10, .. })
        ));
    }

    #[test]
    fn rejects_lengths_that_are_not_three_or_six() {
        for raw in ["12", "1234", "12345", "1234567", "#1234"] {
            assert!(
                matches!(normalize(raw), Err(ThemeError::HexLength { .. })),
                "expected length failure for {raw:?}"
            );
        }
    }

    #[test]
    fn rejects_non_hex_digits() {
        let err = normalize("zz0000").unwrap_err();
        assert_eq!(
            err,
            ThemeError::HexDigit {
                input: "zz0000".into(),
                found: 'z',
            }
        );
    }

    #[test]
    fn rejects_non_ascii_without_panicking() {
        assert!(normalize("ééé").is_err());
        assert!(normalize("#ab\u{00e9}").is_err());
    }

    #[test]
    fn digits_strips_hash() {
        assert_eq!(normalize("123456").unwrap().digits(), "123456");
    }

    #[test]
    fn lowercase_form_for_stylesheets() {
        assert_eq!(normalize("ABCDEF").unwrap().to_lowercase(), "#abcdef");
    }

    #[test]
    fn from_str_matches_normalize() {
        let parsed: HexColor = "fa0".parse().unwrap();
        assert_eq!(parsed, normalize("FFAA00").unwrap());
    }

    #[test]
    fn serializes_as_canonical_string() {
        let json = serde_json::to_string(&normalize("abc").unwrap()).unwrap();
        assert_eq!(json, "\"#AABBCC\"");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn six_hex_digits_always_normalize(raw in "#?[0-9a-fA-F]{6}") {
                let hex = normalize(&raw).unwrap();
                prop_assert_eq!(hex.as_str().len(), 7);
                prop_assert!(hex.as_str().starts_with('#'));
                prop_assert_eq!(hex.digits(), raw.trim_start_matches('#').to_ascii_uppercase());
            }

            #[test]
            fn normalization_is_idempotent(raw in "[0-9a-fA-F]{3}|[0-9a-fA-F]{6}") {
                let once = normalize(&raw).unwrap();
                let twice = normalize(once.as_str()).unwrap();
                prop_assert_eq!(once, twice);
            }

            #[test]
            fn arbitrary_input_never_panics(raw in "\\PC{0,12}") {
                let _ = normalize(&raw);
            }
        }
    }
}
