//! Renders a [`Theme`] as a block of SCSS variable declarations.
//!
//! ```text
//! //-----------------------------------------------------------------------
//! //  Sunset
//! //-----------------------------------------------------------------------
//! $red: #ff0000;
//! $navy-blue: #000080;
//! ```
//!
//! The block ends with two blank lines so consecutive appends stay apart.

use crate::theme::Theme;
use std::fmt::Write;

/// Banner rule framing the theme name.
pub const RULE: &str =
    "//-----------------------------------------------------------------------";

/// Formats one declaration line, without the trailing newline.
pub fn declaration(machine_name: &str, hex: &str) -> String {
    format!("${machine_name}: {};", hex.to_ascii_lowercase())
}

pub fn render(theme: &Theme) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    // Writing to a String cannot fail.
    let _ = writeln!(out, "//  {}", theme.name);
    out.push_str(RULE);
    out.push('\n');
    for color in &theme.colors {
        out.push_str(&declaration(&color.machine_name, color.hex.as_str()));
        out.push('\n');
    }
    out.push_str("\n\n");
    out
}
