//! Command-line interface for wtpanes.
//!
//! Parses arguments using clap and provides the [`Cli`] struct containing
//! all user-specified options.

use crate::generate::Format;
use crate::panel::MAX_PANELS;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for wtpanes.
///
/// # Examples
///
/// ```bash
/// # Print the wt command for a built-in template
/// wtpanes -t fullstack
///
/// # Action document for a panel file
/// wtpanes -f panels.json -o json
///
/// # Check a panel file without generating anything
/// wtpanes -f panels.toml --check
///
/// # Start a new panel file with three default panels
/// wtpanes --new 3 > panels.json
/// ```
#[derive(Parser, Debug)]
#[command(name = "wtpanes")]
#[command(version)]
#[command(about = "Windows Terminal multi-panel setup generator")]
#[command(long_about = "wtpanes compiles a list of panels into a Windows Terminal launch.\n\n\
    Describe up to six panels (title, directory, commands, color, profile, split)\n\
    in a JSON or TOML file, or pick a template, then print a PowerShell `wt`\n\
    command, a Windows Terminal action document, or a batch script.")]
pub struct Cli {
    /// Panel document to read (JSON, or TOML for `.toml` files).
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Template to use as input.
    ///
    /// Built-in templates can be overridden under `[templates.<id>]`.
    #[arg(short, long, value_name = "ID", conflicts_with = "file")]
    pub template: Option<String>,

    /// Output format: powershell, json or batch.
    #[arg(short = 'o', long, value_name = "NAME")]
    pub format: Option<String>,

    /// Print every output format.
    #[arg(short, long)]
    pub all: bool,

    /// Only validate the panels.
    #[arg(short, long)]
    pub check: bool,

    /// Print the layout preview.
    #[arg(short, long)]
    pub preview: bool,

    /// Print the panels as a sanitized panel document.
    #[arg(long)]
    pub export: bool,

    /// Print a panel document with COUNT default panels (1 to 6).
    #[arg(long, value_name = "COUNT", value_parser = parse_panel_count)]
    pub new: Option<usize>,

    /// List templates and profiles.
    #[arg(short, long)]
    pub list: bool,

    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The format name requested on the command line, or the configured default.
    ///
    /// The name is returned unparsed so unknown names reach the generator.
    pub fn format_name(&self, default: Format) -> String {
        self.format
            .clone()
            .unwrap_or_else(|| default.name().to_string())
    }
}

/// Parse a panel count in `1..=MAX_PANELS`.
fn parse_panel_count(s: &str) -> Result<usize, String> {
    let count: usize = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (1..=MAX_PANELS).contains(&count) {
        Ok(count)
    } else {
        Err(format!("panel count must be between 1 and {}", MAX_PANELS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["wtpanes", "-t", "devops", "-o", "batch", "-p"]);
        assert_eq!(cli.template.as_deref(), Some("devops"));
        assert!(cli.preview);
        assert_eq!(cli.format_name(Format::Json), "batch");
    }

    #[test]
    fn test_format_falls_back_to_default() {
        let cli = Cli::parse_from(["wtpanes", "--new", "2"]);
        assert_eq!(cli.new, Some(2));
        assert_eq!(cli.format_name(Format::Json), "json");
    }

    #[test]
    fn test_new_count_range() {
        assert_eq!(Cli::parse_from(["wtpanes", "--new", "6"]).new, Some(6));
        for bad in ["0", "7", "9", "x"] {
            assert!(Cli::try_parse_from(["wtpanes", "--new", bad]).is_err(), "{}", bad);
        }
    }

    #[test]
    fn test_file_and_template_conflict() {
        assert!(Cli::try_parse_from(["wtpanes", "-f", "a.json", "-t", "devops"]).is_err());
    }
}
