//! Swatch input and theme assembly.
//!
//! Swatches come either from a remote theme document or from a literal
//! comma-separated list. [`match_all`] names each of them in input order and
//! silently drops those whose hex cannot be normalized.

use crate::hex::normalize;
use crate::matcher::{match_color, MatchResult};
use crate::palette::ReferencePalette;
use serde::{Deserialize, Serialize};

/// Theme name used when none is supplied.
pub const DEFAULT_THEME_NAME: &str = "Colors";

/// A single raw input color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub hex: String,
}

impl Swatch {
    pub fn new(hex: impl Into<String>) -> Self {
        Self { hex: hex.into() }
    }

    /// Splits a literal list such as `"#fff, 336699,abc"` into swatches.
    ///
    /// Each item is trimmed and loses its `#`. Items are not validated here;
    /// that happens during matching.
    pub fn parse_list(list: &str) -> Vec<Swatch> {
        list.split(',')
            .map(|item| Swatch::new(item.trim().replace('#', "")))
            .collect()
    }
}

/// The remote theme document: a display name plus its swatches.
///
/// Fields other than `name` and `swatches[].hex` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub swatches: Vec<Swatch>,
}

impl ThemeDocument {
    /// The document's name, or [`DEFAULT_THEME_NAME`] when absent or blank.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(DEFAULT_THEME_NAME)
    }
}

/// Names every swatch against `palette`, preserving input order.
///
/// Swatches whose hex fails normalization are skipped.
pub fn match_all(palette: &ReferencePalette, swatches: &[Swatch]) -> Vec<MatchResult> {
    swatches
        .iter()
        .filter_map(|swatch| match normalize(&swatch.hex) {
            Ok(hex) => Some(match_color(palette, &hex)),
            Err(e) => {
                tracing::debug!(swatch = %swatch.hex, error = %e, "skipping swatch");
                None
            }
        })
        .collect()
}

/// A named, ordered list of matched colors ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: Vec<MatchResult>,
}

impl Theme {
    /// Matches `swatches` and pairs the results with `name`.
    pub fn assemble(
        name: impl Into<String>,
        palette: &ReferencePalette,
        swatches: &[Swatch],
    ) -> Self {
        let colors = match_all(palette, swatches);
        let theme = Self {
            name: name.into(),
            colors,
        };
        tracing::debug!(
            theme = %theme.name,
            swatches = swatches.len(),
            matched = theme.colors.len(),
            "assembled theme"
        );
        theme
    }

    /// Builds a theme from a remote document.
    pub fn from_document(document: &ThemeDocument, palette: &ReferencePalette) -> Self {
        Self::assemble(document.display_name(), palette, &document.swatches)
    }

    /// Number of input swatches that were dropped, given the original count.
    pub fn dropped(&self, input_len: usize) -> usize {
        input_len.saturating_sub(self.colors.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> ReferencePalette {
        ReferencePalette::new([
            ("000000", "Black"),
            ("FF0000", "Red"),
            ("0000FF", "Blue"),
            ("FFFFFF", "White"),
        ])
        .unwrap()
    }

    fn names(results: &[MatchResult]) -> Vec<&str> {
        results.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn preserves_input_order() {
        let swatches = [Swatch::new("fff"), Swatch::new("00f"), Swatch::new("000")];
        let results = match_all(&palette(), &swatches);
        assert_eq!(names(&results), ["White", "Blue", "Black"]);
    }

    #[test]
    fn drops_malformed_swatches_and_keeps_survivor_order() {
        let swatches = [
            Swatch::new("f00"),
            Swatch::new(""),
            Swatch::new("fff"),
            Swatch::new("1234567890"),
            Swatch::new("zzzzzz"),
            Swatch::new("000"),
        ];
        let results = match_all(&palette(), &swatches);
        assert_eq!(names(&results), ["Red", "White", "Black"]);
        assert!(results.len() < swatches.len());
    }

    #[test]
    fn duplicates_are_kept() {
        let swatches = [Swatch::new("fe0000"), Swatch::new("ff0000")];
        let results = match_all(&palette(), &swatches);
        assert_eq!(names(&results), ["Red", "Red"]);
        assert!(!results[0].exact_match);
        assert!(results[1].exact_match);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(match_all(&palette(), &[]).is_empty());
    }

    #[test]
    fn parse_list_strips_hashes_and_whitespace() {
        let swatches = Swatch::parse_list("#fff, 336699 ,abc");
        assert_eq!(
            swatches,
            [
                Swatch::new("fff"),
                Swatch::new("336699"),
                Swatch::new("abc")
            ]
        );
    }

    #[test]
    fn parse_list_keeps_empty_items_for_matching_to_drop() {
        let swatches = Swatch::parse_list("fff,,000");
        assert_eq!(swatches.len(), 3);
        assert_eq!(match_all(&palette(), &swatches).len(), 2);
    }

    #[test]
    fn document_ignores_unknown_fields() {
        let json = r#"{
            "id": 42,
            "name": "Sunset",
            "swatches": [
                {"hex": "FF0000", "mode": "rgb", "values": [1, 0, 0]},
                {"hex": "0000FF"}
            ]
        }"#;
        let doc: ThemeDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.display_name(), "Sunset");
        assert_eq!(doc.swatches, [Swatch::new("FF0000"), Swatch::new("0000FF")]);
    }

    #[test]
    fn document_without_name_uses_default() {
        let doc: ThemeDocument = serde_json::from_str(r#"{"swatches": []}"#).unwrap();
        assert_eq!(doc.display_name(), DEFAULT_THEME_NAME);

        let blank: ThemeDocument = serde_json::from_str(r#"{"name": " "}"#).unwrap();
        assert_eq!(blank.display_name(), DEFAULT_THEME_NAME);
    }

    #[test]
    fn theme_from_document_pairs_name_and_colors() {
        let doc: ThemeDocument =
            serde_json::from_str(r#"{"name": "Flag", "swatches": [{"hex": "f00"}, {"hex": "?"}]}"#)
                .unwrap();
        let theme = Theme::from_document(&doc, &palette());
        assert_eq!(theme.name, "Flag");
        assert_eq!(names(&theme.colors), ["Red"]);
        assert_eq!(theme.dropped(doc.swatches.len()), 1);
    }

    #[test]
    fn theme_serializes_to_json() {
        let theme = Theme::assemble("Mono", &palette(), &[Swatch::new("000")]);
        let json = serde_json::to_value(&theme).unwrap();
        assert_eq!(json["name"], "Mono");
        assert_eq!(json["colors"][0]["name"], "Black");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn survivors_follow_input_order(
                raws in proptest::collection::vec("[0-9a-f]{6}|[0-9a-f]{4}|[g-z]{3}", 0..12),
            ) {
                let palette = ReferencePalette::builtin();
                let swatches: Vec<Swatch> = raws.iter().map(Swatch::new).collect();
                let expected: Vec<MatchResult> = raws
                    .iter()
                    .filter_map(|r| normalize(r).ok())
                    .map(|hex| match_color(&palette, &hex))
                    .collect();
                prop_assert_eq!(match_all(&palette, &swatches), expected);
            }
        }
    }
}
