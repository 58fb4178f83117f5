//! Reference palette: the ordered table of named colors that swatches are
//! matched against.
//!
//! RGB and HSL for every entry are derived once, when the palette is built,
//! and never touched again. A palette is never empty and never contains two
//! entries with the same hex, so a lookup against it always has a winner.

use crate::color::{rgb_and_hsl, Hsl, Rgb};
use crate::error::ThemeError;
use crate::hex::{normalize, HexColor};
use crate::names::NAMED_COLORS;
use std::collections::HashSet;
use std::io::Read;

/// A named reference color with its precomputed RGB and HSL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    hex: HexColor,
    name: String,
    rgb: Rgb,
    hsl: Hsl,
}

impl ReferenceEntry {
    fn new(hex: HexColor, name: String) -> Self {
        let (rgb, hsl) = rgb_and_hsl(&hex);
        Self {
            hex,
            name,
            rgb,
            hsl,
        }
    }

    pub fn hex(&self) -> &HexColor {
        &self.hex
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }
}

/// An immutable, ordered, non-empty set of reference colors.
#[derive(Debug, Clone)]
pub struct ReferencePalette {
    entries: Vec<ReferenceEntry>,
}

impl ReferencePalette {
    /// Builds a palette from `(hex, name)` pairs, preserving their order.
    ///
    /// Hex values go through [`normalize`], so `"abc"`, `"#AABBCC"` and
    /// `"aabbcc"` are all accepted and considered the same color.
    ///
    /// Returns `ThemeError::EmptyPalette` for no pairs,
    /// `ThemeError::InvalidReference` for a bad hex or blank name, and
    /// `ThemeError::DuplicateReference` when a hex appears twice.
    pub fn new<I, H, N>(pairs: I) -> Result<Self, ThemeError>
    where
        I: IntoIterator<Item = (H, N)>,
        H: AsRef<str>,
        N: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for (raw_hex, name) in pairs {
            let raw_hex = raw_hex.as_ref();
            let hex = normalize(raw_hex).map_err(|e| ThemeError::InvalidReference {
                hex: raw_hex.to_string(),
                reason: e.to_string(),
            })?;
            let name = name.into();
            if name.trim().is_empty() {
                return Err(ThemeError::InvalidReference {
                    hex: raw_hex.to_string(),
                    reason: "name is blank".to_string(),
                });
            }
            if !seen.insert(hex.clone()) {
                return Err(ThemeError::DuplicateReference(hex.to_string()));
            }
            entries.push(ReferenceEntry::new(hex, name));
        }

        if entries.is_empty() {
            return Err(ThemeError::EmptyPalette);
        }
        tracing::debug!(entries = entries.len(), "built reference palette");
        Ok(Self { entries })
    }

    /// The built-in table of named colors.
    pub fn builtin() -> Self {
        Self::new(NAMED_COLORS.iter().copied())
            .expect("built-in named colors are valid and unique")
    }

    /// Parses a palette from a JSON array of `[hex, name]` pairs.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let pairs: Vec<(String, String)> =
            serde_json::from_str(json).map_err(|e| ThemeError::InvalidPalette(e.to_string()))?;
        Self::new(pairs)
    }

    /// Like [`ReferencePalette::from_json`], reading from any byte source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ThemeError> {
        let pairs: Vec<(String, String)> = serde_json::from_reader(reader)
            .map_err(|e| ThemeError::InvalidPalette(e.to_string()))?;
        Self::new(pairs)
    }

    /// Returns the number of reference colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if this palette has no colors. (Always false for valid palettes.)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReferenceEntry> {
        self.entries.iter()
    }

    /// The entry whose hex is exactly `hex`, if any.
    pub fn find_exact(&self, hex: &HexColor) -> Option<&ReferenceEntry> {
        self.entries.iter().find(|e| e.hex == *hex)
    }
}

impl<'a> IntoIterator for &'a ReferencePalette {
    type Item = &'a ReferenceEntry;
    type IntoIter = std::slice::Iter<'a, ReferenceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_preserves_order_and_normalizes_hex() {
        let palette = ReferencePalette::new([("fff", "White"), ("#000000", "Black")]).unwrap();
        let names: Vec<&str> = palette.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["White", "Black"]);
        assert_eq!(palette.entries()[0].hex().as_str(), "#FFFFFF");
    }

    #[test]
    fn derived_fields_match_hex() {
        let palette = ReferencePalette::new([("FF0000", "Red")]).unwrap();
        let red = &palette.entries()[0];
        assert_eq!(red.rgb(), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(
            red.hsl(),
            Hsl {
                h: 0,
                s: 255,
                l: 127
            }
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        let pairs: Vec<(&str, &str)> = Vec::new();
        assert_eq!(
            ReferencePalette::new(pairs).unwrap_err(),
            ThemeError::EmptyPalette
        );
    }

    #[test]
    fn duplicate_hex_is_rejected_case_insensitively() {
        let err = ReferencePalette::new([("abcdef", "One"), ("ABCDEF", "Two")]).unwrap_err();
        assert_eq!(err, ThemeError::DuplicateReference("#ABCDEF".into()));
    }

    #[test]
    fn shorthand_duplicate_is_rejected() {
        let err = ReferencePalette::new([("aabbcc", "One"), ("abc", "Two")]).unwrap_err();
        assert!(matches!(err, ThemeError::DuplicateReference(_)));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        let err = ReferencePalette::new([("12345", "Broken")]).unwrap_err();
        assert!(
            matches!(err, ThemeError::InvalidReference { ref hex, .. } if hex == "12345"),
            "got {err:?}"
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = ReferencePalette::new([("123456", "  ")]).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidReference { .. }));
    }

    #[test]
    fn from_json_reads_pairs() {
        let palette =
            ReferencePalette::from_json(r##"[["000000", "Black"], ["#FFFFFF", "White"]]"##)
                .unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.entries()[1].name(), "White");
    }

    #[test]
    fn from_json_rejects_wrong_shape() {
        let err = ReferencePalette::from_json(r#"{"black": "000000"}"#).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidPalette(_)));
    }

    #[test]
    fn from_json_rejects_empty_array() {
        assert_eq!(
            ReferencePalette::from_json("[]").unwrap_err(),
            ThemeError::EmptyPalette
        );
    }

    #[test]
    fn from_reader_matches_from_json() {
        let json = r#"[["C0FFEE", "Coffee"]]"#;
        let palette = ReferencePalette::from_reader(json.as_bytes()).unwrap();
        assert_eq!(palette.entries()[0].hex().as_str(), "#C0FFEE");
    }

    #[test]
    fn find_exact_uses_normalized_hex() {
        let palette = ReferencePalette::new([("000000", "Black"), ("FFFFFF", "White")]).unwrap();
        let hit = palette.find_exact(&normalize("fff").unwrap());
        assert_eq!(hit.map(|e| e.name()), Some("White"));
        assert!(palette.find_exact(&normalize("123").unwrap()).is_none());
    }

    #[test]
    fn builtin_is_large_and_non_empty() {
        let palette = ReferencePalette::builtin();
        assert!(!palette.is_empty());
        assert_eq!(palette.len(), NAMED_COLORS.len());
    }

    #[test]
    fn builtin_names_slug_to_identifier_safe_strings() {
        for entry in &ReferencePalette::builtin() {
            let slug = crate::matcher::machine_name(entry.name());
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{} slugs to {slug}",
                entry.name()
            );
        }
    }

    #[test]
    fn builtin_is_sorted_by_hex() {
        let palette = ReferencePalette::builtin();
        assert!(palette
            .entries()
            .windows(2)
            .all(|w| w[0].hex().as_str() < w[1].hex().as_str()));
    }

    #[test]
    fn palette_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReferencePalette>();
    }
}
