//! User configuration for wtpanes.
//!
//! The config file is optional. It can set defaults, register extra shell
//! profiles and define templates:
//!
//! - `defaults`, `profiles` and `templates` are the only top-level keys
//!
//! # Config Format
//!
//! ```toml
//! [defaults]
//! format = "json"
//! profile = "PowerShell"
//! directory = 'C:\Projects'
//!
//! [profiles]
//! "Fish" = "wsl -d Debian fish"
//!
//! [templates.api]
//! name = "API work"
//! panels = [
//!     { title = "Server", directory = 'C:\api', color = "#4ecdc4", profile = "PowerShell", commands = "cargo run" },
//!     { title = "Logs", directory = 'C:\api', color = "#ff6b6b", profile = "PowerShell", split = "horizontal", size = 0.3 },
//! ]
//! ```

use crate::generate::{Format, Generator};
use crate::profile::{DEFAULT_PROFILE, ProfileTable};
use crate::templates::{DEFAULT_DIRECTORY, Template, TemplateCatalog};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Global default settings applied when not overridden.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    /// Output format when `--format` is not given.
    pub format: Option<Format>,
    /// Profile for scaffolded panels.
    pub profile: Option<String>,
    /// Directory for scaffolded panels.
    pub directory: Option<String>,
}

impl Defaults {
    /// Configured format, falling back to PowerShell.
    pub fn format(&self) -> Format {
        self.format.unwrap_or(Format::PowerShell)
    }

    /// Configured profile, falling back to [`DEFAULT_PROFILE`].
    pub fn profile(&self) -> &str {
        self.profile.as_deref().unwrap_or(DEFAULT_PROFILE)
    }

    /// Configured directory, falling back to [`DEFAULT_DIRECTORY`].
    pub fn directory(&self) -> &str {
        self.directory.as_deref().unwrap_or(DEFAULT_DIRECTORY)
    }
}

/// Top-level configuration structure.
///
/// Parsed from `~/.config/wtpanes/config.toml` (or XDG equivalent).
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Global default settings.
    #[serde(default)]
    pub defaults: Defaults,
    /// Extra profile name -> launch token entries.
    #[serde(default)]
    pub profiles: BTreeMap<String, String>,
    /// User templates keyed by identifier.
    #[serde(default)]
    pub templates: BTreeMap<String, Template>,
}

impl Config {
    /// Parse config from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `toml::de::Error` if the TOML is malformed, carries unknown
    /// keys, or doesn't match the expected structure.
    pub fn from_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Default profile table with the configured profiles merged in.
    pub fn profile_table(&self) -> ProfileTable {
        ProfileTable::default().extend(self.profiles.clone())
    }

    /// Generator using [`Config::profile_table`].
    pub fn generator(&self) -> Generator {
        Generator::new(self.profile_table())
    }

    /// Built-in templates with the user templates merged over them.
    pub fn catalog(&self) -> TemplateCatalog {
        TemplateCatalog::builtin().merged(self.templates.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::Split;

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.defaults.format(), Format::PowerShell);
        assert_eq!(config.defaults.profile(), "PowerShell");
        assert_eq!(config.defaults.directory(), r"C:\");
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_str(
            r##"
[defaults]
format = "batch"
directory = 'D:\work'

[profiles]
"Fish" = "wsl -d Debian fish"

[templates.api]
name = "API work"
panels = [
    { title = "Server", directory = 'C:\api', color = "#4ecdc4", profile = "Fish" },
    { title = "Logs", directory = 'C:\api', color = "#ff6b6b", split = "horizontal", size = 0.3 },
]
"##,
        )
        .unwrap();

        assert_eq!(config.defaults.format(), Format::Batch);
        assert_eq!(config.defaults.directory(), r"D:\work");
        assert_eq!(config.profile_table().token("Fish"), "wsl -d Debian fish");
        assert_eq!(config.profile_table().token("Ubuntu"), "wsl -d Ubuntu");

        let catalog = config.catalog();
        let api = catalog.get("api").unwrap();
        assert_eq!(api.panels[1].split, Some(Split::Horizontal));
        assert!(catalog.get("fullstack").is_some());

        let out = config.generator().powershell(&api.panels);
        assert!(out.contains(" wsl -d Debian fish `; split-pane"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_str("[dev.frontend]\ncmd = \"npm\"\n").is_err());
        assert!(Config::from_str("[defaults]\nlayout = \"tiled\"\n").is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Config::from_str("[defaults]\nformat = \"yaml\"\n").is_err());
    }
}
