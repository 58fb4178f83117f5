//! Error types for the sass-theme core.

use thiserror::Error;

/// Errors produced while normalizing colors or building a reference palette.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// The input did not have 3 or 6 hex digits (after an optional `#`).
    #[error("invalid hex color '{input}': expected 3 or 6 digits, got {digits}")]
    HexLength { input: String, digits: usize },

    /// The input had the right length but contained a non-hex character.
    #[error("invalid hex color '{input}': '{found}' is not a hex digit")]
    HexDigit { input: String, found: char },

    /// A palette was constructed with no entries.
    #[error("reference palette is empty")]
    EmptyPalette,

    /// Two palette entries share the same hex value.
    #[error("duplicate reference color: {0}")]
    DuplicateReference(String),

    /// A palette entry's hex could not be normalized to 6 digits.
    #[error("invalid reference color '{hex}': {reason}")]
    InvalidReference { hex: String, reason: String },

    /// A palette document could not be decoded.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_length_includes_input_and_count() {
        let err = ThemeError::HexLength {
            input: "12345".into(),
            digits: 5,
        };
        let msg = format!("{err}");
        assert!(msg.contains("12345"), "missing input in: {msg}");
        assert!(msg.contains('5'), "missing digit count in: {msg}");
    }

    #[test]
    fn hex_digit_includes_offending_char() {
        let err = ThemeError::HexDigit {
            input: "#GG0000".into(),
            found: 'G',
        };
        let msg = format!("{err}");
        assert!(msg.contains("#GG0000"), "missing input in: {msg}");
        assert!(msg.contains("'G'"), "missing char in: {msg}");
    }

    #[test]
    fn empty_palette_displays_readable_message() {
        let msg = format!("{}", ThemeError::EmptyPalette);
        assert!(msg.contains("empty"), "got: {msg}");
    }

    #[test]
    fn duplicate_reference_includes_hex() {
        let msg = format!("{}", ThemeError::DuplicateReference("#000000".into()));
        assert!(msg.contains("#000000"), "got: {msg}");
    }

    #[test]
    fn invalid_reference_includes_hex_and_reason() {
        let err = ThemeError::InvalidReference {
            hex: "xyz".into(),
            reason: "bad digits".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("xyz"), "missing hex in: {msg}");
        assert!(msg.contains("bad digits"), "missing reason in: {msg}");
    }

    #[test]
    fn theme_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ThemeError>();
    }

    #[test]
    fn theme_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ThemeError>();
    }
}
