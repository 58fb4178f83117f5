//! Nearest-color lookup against a [`ReferencePalette`].
//!
//! A color that is byte-identical to a reference hex is an exact match.
//! Otherwise every entry is scored with
//!
//! ```text
//! distance = |rgb - rgb_ref|² + HSL_WEIGHT · |hsl - hsl_ref|²
//! ```
//!
//! and the lowest score wins. Ties go to the entry that comes first in
//! palette order, which keeps generated themes reproducible.

use crate::color::{rgb_and_hsl, Hsl, Rgb};
use crate::hex::HexColor;
use crate::palette::{ReferenceEntry, ReferencePalette};
use serde::Serialize;

/// Weight of the HSL term relative to the RGB term.
pub const HSL_WEIGHT: i64 = 2;

/// The reference color chosen for an input swatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Hex of the reference entry (not of the input).
    pub hex: HexColor,
    pub name: String,
    /// Identifier-safe slug of `name`.
    pub machine_name: String,
    pub exact_match: bool,
}

impl MatchResult {
    fn from_entry(entry: &ReferenceEntry, exact_match: bool) -> Self {
        Self {
            hex: entry.hex().clone(),
            name: entry.name().to_string(),
            machine_name: machine_name(entry.name()),
            exact_match,
        }
    }
}

/// Lowercases `name` and joins its whitespace-separated words with `-`.
///
/// `"Burnt Orange"` becomes `"burnt-orange"`.
pub fn machine_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Weighted distance between an input color and a reference entry.
pub fn distance(rgb: Rgb, hsl: Hsl, entry: &ReferenceEntry) -> i64 {
    rgb.distance_sq(entry.rgb()) + HSL_WEIGHT * hsl.distance_sq(entry.hsl())
}

/// Index of the smallest value; the earliest index wins ties.
fn first_min<I: IntoIterator<Item = i64>>(values: I) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (i, v) in values.into_iter().enumerate() {
        match best {
            Some((_, b)) if v >= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Finds the reference entry closest to `hex`.
pub fn match_color(palette: &ReferencePalette, hex: &HexColor) -> MatchResult {
    if let Some(entry) = palette.find_exact(hex) {
        tracing::debug!(input = %hex, name = entry.name(), "exact match");
        return MatchResult::from_entry(entry, true);
    }

    let (rgb, hsl) = rgb_and_hsl(hex);
    let winner = first_min(palette.iter().map(|e| distance(rgb, hsl, e)))
        .map(|i| &palette.entries()[i]);

    match winner {
        Some(entry) => {
            tracing::debug!(input = %hex, name = entry.name(), hex = %entry.hex(), "nearest match");
            MatchResult::from_entry(entry, false)
        }
        // ReferencePalette::new rejects empty palettes.
        None => unreachable!("reference palette is never empty"),
    }
}
