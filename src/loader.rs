//! Config file discovery and loading.
//!
//! Handles finding the config file across different platforms and loading it.
//! The search order is:
//!
//! 1. `$XDG_CONFIG_HOME/wtpanes/config.toml`
//! 2. `~/.config/wtpanes/config.toml`
//! 3. Platform default (e.g., `%APPDATA%` on Windows)
//!
//! A missing config file is not an error: built-in defaults apply.

use crate::config::Config;
use crate::document;
use crate::error::{Result, WtError};
use crate::panel::Panel;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const APP_DIR: &str = "wtpanes";
const CONFIG_FILE: &str = "config.toml";

/// Determine the config file path.
///
/// Checks locations in order of preference:
/// 1. `$XDG_CONFIG_HOME/wtpanes/config.toml` (if XDG_CONFIG_HOME is set)
/// 2. `~/.config/wtpanes/config.toml`
/// 3. Platform default via `dirs::config_dir()`
///
/// If no existing config is found, returns the platform default location.
///
/// # Errors
///
/// Returns [`WtError::NoConfigDir`] if no config directory can be determined.
pub fn default_config_path() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join(APP_DIR).join(CONFIG_FILE);
        if path.exists() {
            return Ok(path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        let path = home.join(".config").join(APP_DIR).join(CONFIG_FILE);
        if path.exists() {
            return Ok(path);
        }
    }

    let config_dir = dirs::config_dir().ok_or(WtError::NoConfigDir)?;
    Ok(config_dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load and parse a config file from the given path.
///
/// # Errors
///
/// - [`WtError::ConfigNotFound`] if the file doesn't exist
/// - [`WtError::IoError`] if reading fails
/// - [`WtError::ParseError`] if TOML parsing fails
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(WtError::ConfigNotFound(path.to_path_buf()));
    }
    debug!(path = %path.display(), "loading config");
    let contents = std::fs::read_to_string(path)?;
    let config = Config::from_str(&contents)?;
    Ok(config)
}

/// Load config from the default path, or defaults if there is none.
pub fn load_default_config() -> Result<Config> {
    let path = default_config_path()?;
    if !path.exists() {
        info!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    load_config(&path)
}

/// Read a panel document from disk.
///
/// Files ending in `.toml` are parsed as TOML; everything else as JSON.
/// See [`crate::document`] for the accepted shapes.
pub fn load_panels(path: &Path) -> Result<Vec<Panel>> {
    let contents = std::fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    debug!(path = %path.display(), toml = is_toml, "loading panels");
    if is_toml {
        document::parse_toml(&contents)
    } else {
        document::parse_json(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_config_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(matches!(load_config(&path), Err(WtError::ConfigNotFound(_))));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[defaults\n").unwrap();
        assert!(matches!(load_config(&path), Err(WtError::ParseError(_))));
    }

    #[test]
    fn test_load_config_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[profiles]\nNu = \"nu\"\n").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.profile_table().token("Nu"), "nu");
    }

    #[test]
    fn test_load_panels_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("setup.TOML");
        fs::write(
            &toml_path,
            "[[panels]]\ntitle = \"A\"\ndirectory = 'C:\\a'\ncolor = \"#fff\"\n",
        )
        .unwrap();
        let panels = load_panels(&toml_path).unwrap();
        assert_eq!(panels[0].directory, r"C:\a");

        let json_path = dir.path().join("setup.json");
        fs::write(&json_path, r#"[{"title": "B", "directory": "C:\\b"}]"#).unwrap();
        let panels = load_panels(&json_path).unwrap();
        assert_eq!(panels[0].title, "B");
        assert_eq!(panels[0].directory, r"C:\b");
    }

    #[test]
    fn test_load_panels_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_panels(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(WtError::IoError(_))));
    }
}
