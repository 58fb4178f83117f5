//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: theme error (bad or empty reference palette)
//! - 11: I/O error (reading the palette, appending the output file)
//! - 12: input error (missing API key or theme id)
//! - 13: serialization error
//! - 14: network error (transport failure, non-2xx response)

use sass_theme_core::ThemeError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A core error (invalid reference palette).
    Theme(ThemeError),
    /// An I/O error (palette read, file append).
    Io(String),
    /// A user input error (missing API key or theme id).
    Input(String),
    /// A serialization error (JSON decode or output failure).
    Serialization(String),
    /// The theme service could not be reached or answered with an error status.
    Network(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Theme(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
            CliError::Network(_) => 14,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Theme(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
            CliError::Network(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<ThemeError> for CliError {
    fn from(e: ThemeError) -> Self {
        CliError::Theme(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            CliError::Serialization(format!("invalid theme document: {e}"))
        } else {
            CliError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_error_exit_code_is_10() {
        let err = CliError::Theme(ThemeError::EmptyPalette);
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        let err = CliError::Io("write failed".into());
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        let err = CliError::Input("no api key".into());
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        let err = CliError::Serialization("json fail".into());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn network_error_exit_code_is_14() {
        let err = CliError::Network("status 403".into());
        assert_eq!(err.exit_code(), 14);
    }

    #[test]
    fn from_theme_error_keeps_message() {
        let cli_err = CliError::from(ThemeError::DuplicateReference("#ABCDEF".into()));
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("#ABCDEF"));
    }

    #[test]
    fn from_io_error_routes_to_cli_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let cli_err = CliError::from(io_err);
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("read-only"));
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
