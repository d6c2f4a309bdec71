//! Board export: Markdown document plus optional hand-off to a print command

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tokio::process::Command;

use brandcraft_core::prelude::*;
use brandcraft_core::BrandIdentity;

use crate::config::{ExportSettings, PrintCommand};

/// Print programs tried, in order, for `print_command = "auto"`
const AUTO_PRINT_PROGRAMS: [&str; 2] = ["lp", "lpr"];

/// Result of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub path: PathBuf,
    /// Program the file was handed to, if any
    pub printed_with: Option<String>,
}

/// Render the result board as Markdown.
///
/// Sections follow the on-screen board: headline, mission, voice, tags
/// and palette.
pub fn render_markdown(identity: &BrandIdentity) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# {}", identity.name);
    let _ = writeln!(out);
    let _ = writeln!(out, "> \"{}\"", identity.tagline);
    let _ = writeln!(out);

    out.push_str("## Brand Mission\n\n");
    let _ = writeln!(out, "{}\n", identity.description);

    out.push_str("## Voice & Tone\n\n");
    let _ = writeln!(out, "{}\n", identity.voice);

    if !identity.keywords.is_empty() {
        out.push_str("## Tags\n\n");
        let _ = writeln!(out, "{}\n", identity.tag_line());
    }

    out.push_str("## Palette\n\n");
    out.push_str("| # | Name | Hex |\n");
    out.push_str("|---|------|-----|\n");
    for (i, swatch) in identity.colors.iter().enumerate() {
        let _ = writeln!(
            out,
            "| {} | {} | `{}` |",
            i + 1,
            swatch.name.to_uppercase(),
            swatch.hex
        );
    }

    out
}

/// File name for an export: `brandcraft-<name>-<timestamp>.md`
pub fn export_file_name(identity: &BrandIdentity, at: DateTime<Local>) -> String {
    let slug: String = identity
        .name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    let slug = if slug.is_empty() { "board".to_string() } else { slug };

    format!("brandcraft-{}-{}.md", slug, at.format("%Y%m%d-%H%M%S"))
}

/// Write the Markdown board into `directory`, creating it if needed
pub fn write_board(identity: &BrandIdentity, directory: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(directory)
        .map_err(|e| Error::export(format!("cannot create {}: {}", directory.display(), e)))?;

    let path = directory.join(export_file_name(identity, Local::now()));
    std::fs::write(&path, render_markdown(identity))
        .map_err(|e| Error::export(format!("cannot write {}: {}", path.display(), e)))?;

    info!("Exported board to {}", path.display());
    Ok(path)
}

/// Resolve the configured print command to an argv prefix.
///
/// `Auto` picks the first of `lp`/`lpr` found on PATH; `None` means
/// printing is disabled or no printer program exists.
pub fn resolve_print_command(command: &PrintCommand) -> Option<Vec<String>> {
    match command {
        PrintCommand::Disabled => None,
        PrintCommand::Auto => AUTO_PRINT_PROGRAMS
            .iter()
            .find(|program| which::which(program).is_ok())
            .map(|program| vec![program.to_string()]),
        PrintCommand::Custom(argv) if argv.is_empty() => None,
        PrintCommand::Custom(argv) => Some(argv.clone()),
    }
}

/// Run `argv` with `path` appended and wait for it to exit
pub async fn print_file(argv: &[String], path: &Path) -> Result<()> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| Error::export("empty print command"))?;

    let output = Command::new(program)
        .args(args)
        .arg(path)
        .output()
        .await
        .map_err(|e| Error::export(format!("failed to run {}: {}", program, e)))?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(Error::export(format!(
            "{} exited with {}: {}",
            program,
            output.status,
            stderr.trim()
        )))
    }
}

/// Write the board and hand it to the print command, if one is configured
pub async fn export_board(
    identity: &BrandIdentity,
    settings: &ExportSettings,
) -> Result<ExportOutcome> {
    let path = write_board(identity, &settings.directory_path())?;

    let printed_with = match resolve_print_command(&settings.print_command()) {
        Some(argv) => {
            print_file(&argv, &path).await?;
            argv.first().cloned()
        }
        None => {
            if settings.print_command() == PrintCommand::Auto {
                warn!("No print program found on PATH; board exported only");
            }
            None
        }
    };

    Ok(ExportOutcome { path, printed_with })
}
