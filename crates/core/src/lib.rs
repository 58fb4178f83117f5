#![deny(unsafe_code)]
//! Core color naming engine for sass-theme.
//!
//! Turns arbitrary hex swatches into human-readable, identifier-safe names by
//! nearest-neighbor lookup against a reference palette of named colors:
//!
//! - [`hex`]: normalization of raw strings to canonical `#RRGGBB`
//! - [`color`]: RGB and HSL derivation on a shared 0..=255 scale
//! - [`palette`]: the immutable [`ReferencePalette`] (built-in or from JSON)
//! - [`matcher`]: exact or weighted-distance nearest match
//! - [`theme`]: swatch input, batch matching and [`Theme`] assembly
//! - [`scss`]: rendering a theme as SCSS variable declarations

pub mod color;
pub mod error;
pub mod hex;
pub mod matcher;
pub mod names;
pub mod palette;
pub mod scss;
pub mod theme;

pub use color::{Hsl, Rgb};
pub use error::ThemeError;
pub use hex::{normalize, HexColor};
pub use matcher::{machine_name, match_color, MatchResult};
pub use palette::{ReferenceEntry, ReferencePalette};
pub use theme::{match_all, Swatch, Theme, ThemeDocument, DEFAULT_THEME_NAME};
