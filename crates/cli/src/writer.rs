//! Appends a rendered theme to the target stylesheet.

use crate::error::CliError;
use sass_theme_core::{scss, Theme};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Renders `theme` and appends it to `path`, creating the file if needed.
pub fn append_theme(path: &Path, theme: &Theme) -> Result<(), CliError> {
    let block = scss::render(theme);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::Io(format!("cannot open {}: {e}", path.display())))?;
    file.write_all(block.as_bytes())
        .map_err(|e| CliError::Io(format!("cannot write {}: {e}", path.display())))?;
    tracing::info!(path = %path.display(), colors = theme.colors.len(), "appended theme");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sass_theme_core::{ReferencePalette, Swatch};

    fn theme(name: &str, hexes: &[&str]) -> Theme {
        let palette = ReferencePalette::new([("000000", "Black"), ("FFFFFF", "White")]).unwrap();
        let swatches: Vec<Swatch> = hexes.iter().map(|h| Swatch::new(*h)).collect();
        Theme::assemble(name, &palette, &swatches)
    }

    #[test]
    fn creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_colors.scss");

        append_theme(&path, &theme("Mono", &["111", "eee"])).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("//  Mono\n"));
        assert!(written.contains("$black: #000000;\n$white: #ffffff;\n"));
    }

    #[test]
    fn appends_after_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_colors.scss");
        std::fs::write(&path, "$keep: #123456;\n").unwrap();

        append_theme(&path, &theme("First", &["000"])).unwrap();
        append_theme(&path, &theme("Second", &["fff"])).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("$keep: #123456;\n"));
        let first = written.find("//  First").unwrap();
        let second = written.find("//  Second").unwrap();
        assert!(first < second);
        assert!(written.ends_with("$white: #ffffff;\n\n\n"));
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("_colors.scss");
        let err = append_theme(&path, &theme("X", &["000"])).unwrap_err();
        assert_eq!(err.exit_code(), 11);
    }
}
