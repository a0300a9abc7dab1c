//! Panel list validation.
//!
//! [`validate`] checks a panel list against the structural and per-field
//! rules and returns every violation it finds as a human-readable message.
//! An empty result means the list is valid. Nothing here fails: bad user
//! input is data, not an error.
//!
//! Callers are expected to run validation before treating generated output
//! as authoritative.

use crate::panel::{MAX_PANELS, MAX_SPLIT_SIZE, MIN_SPLIT_SIZE, Panel};
use regex::Regex;
use std::sync::LazyLock;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("hex color pattern is valid")
});

static DRIVE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]:\\").expect("drive path pattern is valid"));

/// Message for a list with no panels.
pub const EMPTY_LIST: &str = "At least one panel is required";

/// Message for a list longer than [`MAX_PANELS`].
pub const TOO_MANY_PANELS: &str = "Maximum 6 panels are supported";

/// Validate a panel list, collecting every violation.
///
/// Rules, in order:
/// 1. An empty list yields a single error and nothing else is checked.
/// 2. More than [`MAX_PANELS`] entries is reported, and per-panel checks still run.
/// 3. Each panel needs a non-blank title, a directory of an accepted shape
///    and a hex color.
/// 4. Every panel after the first needs a split direction, and a size, if
///    present, within `[0.1, 0.9]`.
///
/// # Examples
///
/// ```
/// use wtpanes::panel::Panel;
/// use wtpanes::validate::validate;
///
/// let panel = Panel::anchor("", r"C:\a", "#fff", "PowerShell");
/// assert_eq!(validate(&[panel]), vec!["Panel 1: Title is required".to_string()]);
/// ```
pub fn validate(panels: &[Panel]) -> Vec<String> {
    let mut errors = Vec::new();

    if panels.is_empty() {
        errors.push(EMPTY_LIST.to_string());
        return errors;
    }

    if panels.len() > MAX_PANELS {
        errors.push(TOO_MANY_PANELS.to_string());
    }

    for (index, panel) in panels.iter().enumerate() {
        validate_panel(index, panel, &mut errors);
    }

    errors
}

fn validate_panel(index: usize, panel: &Panel, errors: &mut Vec<String>) {
    let n = index + 1;

    if panel.title.trim().is_empty() {
        errors.push(format!("Panel {}: Title is required", n));
    }

    if panel.directory.trim().is_empty() {
        errors.push(format!("Panel {}: Directory is required", n));
    } else if !is_valid_windows_path(&panel.directory) {
        errors.push(format!("Panel {}: Invalid Windows path format", n));
    }

    if !is_valid_hex_color(&panel.color) {
        errors.push(format!("Panel {}: Valid color is required", n));
    }

    if index > 0 {
        if panel.split.is_none() {
            errors.push(format!("Panel {}: Valid split direction is required", n));
        }

        if let Some(size) = panel.size {
            if !(MIN_SPLIT_SIZE..=MAX_SPLIT_SIZE).contains(&size) {
                errors.push(format!(
                    "Panel {}: Size must be between {} and {}",
                    n, MIN_SPLIT_SIZE, MAX_SPLIT_SIZE
                ));
            }
        }
    }
}

/// Check the accepted directory shapes.
///
/// Accepts a drive-letter absolute path (`C:\...`), a UNC path (`\\server\share`)
/// or a relative path starting with `./` or `../`.
pub fn is_valid_windows_path(path: &str) -> bool {
    DRIVE_PATH.is_match(path)
        || path.starts_with(r"\\")
        || path.starts_with("./")
        || path.starts_with("../")
}

/// Check for a `#rgb` or `#rrggbb` color.
pub fn is_valid_hex_color(color: &str) -> bool {
    HEX_COLOR.is_match(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::Split;

    fn valid_list(n: usize) -> Vec<Panel> {
        (0..n)
            .map(|i| {
                let p = Panel::anchor(&format!("P{}", i), r"C:\work", "#4ecdc4", "PowerShell");
                if i == 0 { p } else { p.splitting(Split::Vertical, 0.5) }
            })
            .collect()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(validate(&[]), vec![EMPTY_LIST.to_string()]);
    }

    #[test]
    fn test_valid_list() {
        assert!(validate(&valid_list(1)).is_empty());
        assert!(validate(&valid_list(6)).is_empty());
    }

    #[test]
    fn test_too_many_panels_keeps_checking() {
        let mut panels = valid_list(7);
        panels[6].title = " ".into();
        let errors = validate(&panels);
        assert_eq!(
            errors,
            vec![
                TOO_MANY_PANELS.to_string(),
                "Panel 7: Title is required".to_string()
            ]
        );
    }

    #[test]
    fn test_only_title_error() {
        let panel = Panel::anchor("", r"C:\a", "#fff", "PowerShell");
        assert_eq!(validate(&[panel]), vec!["Panel 1: Title is required"]);
    }

    #[test]
    fn test_directory_required_vs_invalid() {
        let mut panels = valid_list(2);
        panels[0].directory = "  ".into();
        panels[1].directory = "/usr/local".into();
        assert_eq!(
            validate(&panels),
            vec![
                "Panel 1: Directory is required",
                "Panel 2: Invalid Windows path format"
            ]
        );
    }

    #[test]
    fn test_color_rules() {
        let mut panels = valid_list(1);
        for bad in ["", "fff", "#ffff", "#ggg", "#1234567"] {
            panels[0].color = bad.into();
            assert_eq!(validate(&panels), vec!["Panel 1: Valid color is required"]);
        }
        panels[0].color = "#ABCDEF".into();
        assert!(validate(&panels).is_empty());
    }

    #[test]
    fn test_split_and_size_rules() {
        let mut panels = valid_list(3);
        panels[1].split = None;
        panels[2].size = Some(0.95);
        assert_eq!(
            validate(&panels),
            vec![
                "Panel 2: Valid split direction is required",
                "Panel 3: Size must be between 0.1 and 0.9"
            ]
        );

        panels[1].split = Some(Split::Horizontal);
        panels[2].size = None;
        assert!(validate(&panels).is_empty());
    }

    #[test]
    fn test_size_bounds_are_inclusive() {
        let mut panels = valid_list(2);
        for ok in [MIN_SPLIT_SIZE, MAX_SPLIT_SIZE] {
            panels[1].size = Some(ok);
            assert!(validate(&panels).is_empty(), "{}", ok);
        }
        for bad in [0.0999, 0.9001] {
            panels[1].size = Some(bad);
            assert_eq!(
                validate(&panels),
                vec!["Panel 2: Size must be between 0.1 and 0.9"],
                "{}",
                bad
            );
        }
    }

    #[test]
    fn test_zero_and_nan_size_flagged() {
        let mut panels = valid_list(2);
        panels[1].size = Some(0.0);
        assert_eq!(validate(&panels).len(), 1);
        panels[1].size = Some(f64::NAN);
        assert_eq!(validate(&panels).len(), 1);
    }

    #[test]
    fn test_first_panel_split_fields_ignored() {
        let mut panels = valid_list(1);
        panels[0].size = Some(1.0);
        panels[0].split = Some(Split::Vertical);
        assert!(validate(&panels).is_empty());
    }

    #[test]
    fn test_path_shapes() {
        assert!(is_valid_windows_path(r"C:\"));
        assert!(is_valid_windows_path(r"d:\Projects\app"));
        assert!(is_valid_windows_path(r"\\server\share"));
        assert!(is_valid_windows_path("./src"));
        assert!(is_valid_windows_path("../sibling"));
        assert!(!is_valid_windows_path("C:"));
        assert!(!is_valid_windows_path("C:/Projects"));
        assert!(!is_valid_windows_path("src"));
        assert!(!is_valid_windows_path(r"\single"));
    }
}
