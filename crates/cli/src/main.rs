#![deny(unsafe_code)]
//! CLI binary for sass-theme.
//!
//! Usage:
//! - `sass-theme <FILE> <THEME_ID> --apikey <KEY>`: fetch a public theme and
//!   append its named colors to FILE
//! - `sass-theme <FILE> --colors <HEX,HEX,...>`: name a literal list instead

mod error;
mod fetch;
mod logging;
mod writer;

use clap::{ArgAction, Parser};
use error::CliError;
use sass_theme_core::{scss, ReferencePalette, Swatch, Theme, DEFAULT_THEME_NAME};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "sass-theme",
    about = "Name theme colors and append them to a stylesheet as SCSS variables"
)]
struct Cli {
    /// Stylesheet to append to (created if missing).
    file: PathBuf,

    /// Remote theme id. Not needed with --colors.
    theme_id: Option<String>,

    /// API key for the theme service.
    #[arg(long = "apikey", env = "SASS_THEME_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Comma-separated hex colors to name instead of fetching a theme.
    #[arg(long, value_name = "HEX,HEX,...")]
    colors: Option<String>,

    /// Theme name for the banner (defaults to the remote name, or "Colors").
    #[arg(long)]
    name: Option<String>,

    /// JSON file of [hex, name] pairs to use instead of the built-in palette.
    #[arg(long, value_name = "PATH")]
    palette: Option<PathBuf>,

    /// Base URL of the theme service.
    #[arg(long, env = "SASS_THEME_API_URL", default_value = fetch::DEFAULT_API_URL)]
    api_url: String,

    /// Print the generated block instead of appending it.
    #[arg(long)]
    dry_run: bool,

    /// Output as JSON instead of human-readable text.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Where the swatches come from.
#[derive(Debug, PartialEq, Eq)]
enum Source {
    Literal(String),
    Remote { theme_id: String, api_key: String },
}

fn resolve_source(cli: &Cli) -> Result<Source, CliError> {
    if let Some(colors) = &cli.colors {
        return Ok(Source::Literal(colors.clone()));
    }
    let api_key = cli
        .api_key
        .clone()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| CliError::Input("no API key specified, pass --apikey".into()))?;
    let theme_id = cli
        .theme_id
        .clone()
        .ok_or_else(|| CliError::Input("no theme id specified, run --help".into()))?;
    Ok(Source::Remote { theme_id, api_key })
}

fn load_palette(path: Option<&Path>) -> Result<ReferencePalette, CliError> {
    match path {
        None => Ok(ReferencePalette::builtin()),
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
            let palette = ReferencePalette::from_reader(BufReader::new(file))?;
            tracing::info!(path = %path.display(), entries = palette.len(), "loaded custom palette");
            Ok(palette)
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let palette = load_palette(cli.palette.as_deref())?;

    let (name, swatches) = match resolve_source(&cli)? {
        Source::Literal(list) => (
            cli.name
                .clone()
                .unwrap_or_else(|| DEFAULT_THEME_NAME.to_string()),
            Swatch::parse_list(&list),
        ),
        Source::Remote { theme_id, api_key } => {
            let http = fetch::build_http_client();
            let document = fetch::fetch_theme(&http, &cli.api_url, &theme_id, &api_key).await?;
            let name = cli
                .name
                .clone()
                .unwrap_or_else(|| document.display_name().to_string());
            (name, document.swatches)
        }
    };

    let theme = Theme::assemble(name, &palette, &swatches);
    let dropped = theme.dropped(swatches.len());
    if dropped > 0 {
        tracing::warn!(dropped, "skipped swatches with malformed hex");
    }

    let rendered = scss::render(&theme);
    if !cli.dry_run {
        writer::append_theme(&cli.file, &theme)?;
    }

    if cli.json {
        let info = serde_json::json!({
            "theme": theme,
            "file": cli.file.display().to_string(),
            "dropped": dropped,
            "written": !cli.dry_run,
            "output": if cli.dry_run { Some(rendered) } else { None },
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else if cli.dry_run {
        print!("{rendered}");
    } else {
        eprintln!("Added `{}` to {}", theme.name, cli.file.display());
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli).await {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sass-theme").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn colors_flag_bypasses_remote() {
        let cli = parse(&["out.scss", "--colors", "fff,000"]);
        assert_eq!(
            resolve_source(&cli).unwrap(),
            Source::Literal("fff,000".into())
        );
    }

    #[test]
    fn remote_requires_api_key() {
        let mut cli = parse(&["out.scss", "12345"]);
        cli.api_key = None;
        let err = resolve_source(&cli).unwrap_err();
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("API key"));
    }

    #[test]
    fn remote_requires_theme_id() {
        let cli = parse(&["out.scss", "--apikey", "k"]);
        let err = resolve_source(&cli).unwrap_err();
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("theme id"));
    }

    #[test]
    fn remote_source_carries_id_and_key() {
        let cli = parse(&["out.scss", "12345", "--apikey", "k"]);
        assert_eq!(
            resolve_source(&cli).unwrap(),
            Source::Remote {
                theme_id: "12345".into(),
                api_key: "k".into()
            }
        );
    }

    #[test]
    fn file_path_is_required() {
        assert!(Cli::try_parse_from(["sass-theme"]).is_err());
    }

    #[test]
    fn verbose_flag_counts() {
        let cli = parse(&["out.scss", "-vv", "--colors", "fff"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn builtin_palette_when_no_path() {
        let palette = load_palette(None).unwrap();
        assert!(!palette.is_empty());
    }

    #[test]
    fn custom_palette_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.json");
        std::fs::write(&path, r#"[["000000", "Ink"], ["FFFFFF", "Paper"]]"#).unwrap();
        let palette = load_palette(Some(&path)).unwrap();
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn missing_palette_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_palette(Some(&dir.path().join("missing.json"))).unwrap_err();
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn empty_palette_file_is_theme_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.json");
        std::fs::write(&path, "[]").unwrap();
        let err = load_palette(Some(&path)).unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }

    #[tokio::test]
    async fn literal_colors_are_appended() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("_colors.scss");
        let palette = dir.path().join("palette.json");
        std::fs::write(&palette, r#"[["000000", "Ink"], ["FFFFFF", "Paper White"]]"#).unwrap();

        let cli = parse(&[
            file.to_str().unwrap(),
            "--colors",
            "#111,zzz,eeeeee",
            "--palette",
            palette.to_str().unwrap(),
            "--name",
            "Print",
        ]);
        run(cli).await.unwrap();

        let written = std::fs::read_to_string(&file).unwrap();
        assert_eq!(
            written,
            format!(
                "{rule}\n//  Print\n{rule}\n$ink: #000000;\n$paper-white: #ffffff;\n\n\n",
                rule = scss::RULE
            )
        );
    }

    #[tokio::test]
    async fn dry_run_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("_colors.scss");
        let cli = parse(&[file.to_str().unwrap(), "--colors", "ff0000", "--dry-run"]);
        run(cli).await.unwrap();
        assert!(!file.exists());
    }
}
