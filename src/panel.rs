//! The panel record: one terminal tab or pane definition.
//!
//! A panel list is an ordered sequence. The first panel opens a new tab;
//! every later panel splits off from the layout accumulated before it, so
//! the split target is implied by position rather than stored.
//!
//! # Document Format
//!
//! ```toml
//! [[panels]]
//! title = "Frontend"
//! directory = 'C:\Projects\web'
//! commands = "npm run dev"
//! color = "#4ecdc4"
//! profile = "PowerShell"
//!
//! [[panels]]
//! title = "API"
//! directory = 'C:\Projects\api'
//! color = "#ff6b6b"
//! profile = "PowerShell"
//! split = "vertical"
//! size = 0.4
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Maximum number of panels a single setup supports.
pub const MAX_PANELS: usize = 6;

/// The neutral tab color. Panels using it get no explicit tab color.
pub const DEFAULT_COLOR: &str = "#64748b";

/// Size assumed for a split panel whose `size` is absent.
pub const DEFAULT_SPLIT_SIZE: f64 = 0.5;

/// Conventional size of the first (anchor) panel.
pub const ANCHOR_SIZE: f64 = 1.0;

/// Smallest accepted size for a split panel.
pub const MIN_SPLIT_SIZE: f64 = 0.1;

/// Largest accepted size for a split panel.
pub const MAX_SPLIT_SIZE: f64 = 0.9;

/// Orientation of a split relative to the layout before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    /// Side-by-side panes (Windows Terminal `-V`).
    Vertical,
    /// Stacked panes (Windows Terminal `-H`).
    Horizontal,
}

impl Split {
    /// Name used in action documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Vertical => "vertical",
            Split::Horizontal => "horizontal",
        }
    }

    /// Command-line flag for `wt split-pane`.
    pub fn flag(&self) -> &'static str {
        match self {
            Split::Vertical => "-V",
            Split::Horizontal => "-H",
        }
    }
}

/// A single terminal tab/pane definition.
///
/// Missing or null text fields deserialize as empty strings, and an
/// unrecognized split as no split, so the validator, not the parser,
/// reports them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Panel {
    /// Tab title.
    #[serde(default, deserialize_with = "text_or_empty")]
    pub title: String,
    /// Starting directory (drive path, UNC path, or `./`/`../` relative).
    #[serde(default, deserialize_with = "text_or_empty")]
    pub directory: String,
    /// Startup commands, possibly multi-line. Empty means none.
    #[serde(default, deserialize_with = "text_or_empty")]
    pub commands: String,
    /// Tab color as `#rgb` or `#rrggbb`.
    #[serde(default, deserialize_with = "text_or_empty")]
    pub color: String,
    /// Shell profile name, resolved through a [`crate::profile::ProfileTable`].
    #[serde(default, deserialize_with = "text_or_empty")]
    pub profile: String,
    /// Split orientation. `None` for the first panel.
    #[serde(
        default,
        deserialize_with = "known_split",
        skip_serializing_if = "Option::is_none"
    )]
    pub split: Option<Split>,
    /// Fraction of the available space claimed after splitting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn known_split<'de, D>(deserializer: D) -> Result<Option<Split>, D::Error>
where
    D: Deserializer<'de>,
{
    let split = match Option::<String>::deserialize(deserializer)?.as_deref() {
        None => None,
        Some("vertical") => Some(Split::Vertical),
        Some("horizontal") => Some(Split::Horizontal),
        Some(other) => {
            debug!(split = other, "ignoring unrecognized split direction");
            None
        }
    };
    Ok(split)
}

impl Panel {
    /// Create the anchor panel of a list.
    pub fn anchor(title: &str, directory: &str, color: &str, profile: &str) -> Self {
        Self {
            title: title.to_string(),
            directory: directory.to_string(),
            commands: String::new(),
            color: color.to_string(),
            profile: profile.to_string(),
            split: None,
            size: Some(ANCHOR_SIZE),
        }
    }

    /// Turn this panel into a split panel with the given orientation and size.
    pub fn splitting(mut self, split: Split, size: f64) -> Self {
        self.split = Some(split);
        self.size = Some(size);
        self
    }

    /// Set the startup commands.
    pub fn with_commands(mut self, commands: &str) -> Self {
        self.commands = commands.to_string();
        self
    }

    /// Size used for generation, defaulting an absent size to 0.5.
    pub fn effective_size(&self) -> f64 {
        self.size.unwrap_or(DEFAULT_SPLIT_SIZE)
    }

    /// Whether the size differs from the 0.5 default and must be emitted.
    pub fn has_custom_size(&self) -> bool {
        (self.effective_size() - DEFAULT_SPLIT_SIZE).abs() > f64::EPSILON
    }

    /// Whether the color is set and differs from [`DEFAULT_COLOR`].
    pub fn has_custom_color(&self) -> bool {
        !self.color.is_empty() && !self.color.eq_ignore_ascii_case(DEFAULT_COLOR)
    }

    /// Whether the panel carries non-blank startup commands.
    pub fn has_commands(&self) -> bool {
        !self.commands.trim().is_empty()
    }

    /// Normalize a panel before it is stored or exported.
    ///
    /// Text fields are trimmed, an empty color or profile gets its default,
    /// and the split fields are forced into shape for the panel's position.
    pub fn sanitized(&self, index: usize) -> Self {
        let color = match self.color.trim() {
            "" => DEFAULT_COLOR.to_string(),
            c => c.to_string(),
        };
        let profile = match self.profile.trim() {
            "" => crate::profile::DEFAULT_PROFILE.to_string(),
            p => p.to_string(),
        };
        let (split, size) = if index == 0 {
            (None, Some(ANCHOR_SIZE))
        } else {
            let size = self.effective_size();
            let size = if size.is_nan() {
                DEFAULT_SPLIT_SIZE
            } else {
                size.clamp(MIN_SPLIT_SIZE, MAX_SPLIT_SIZE)
            };
            (Some(self.split.unwrap_or(Split::Vertical)), Some(size))
        };

        Self {
            title: self.title.trim().to_string(),
            directory: self.directory.trim().to_string(),
            commands: self.commands.trim().to_string(),
            color,
            profile,
            split,
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tokens() {
        assert_eq!(Split::Vertical.flag(), "-V");
        assert_eq!(Split::Horizontal.flag(), "-H");
        assert_eq!(Split::Horizontal.as_str(), "horizontal");
    }

    #[test]
    fn test_effective_size_defaults() {
        let p = Panel::default();
        assert_eq!(p.effective_size(), 0.5);
        assert!(!p.has_custom_size());

        let p = Panel::default().splitting(Split::Vertical, 0.3);
        assert!(p.has_custom_size());
    }

    #[test]
    fn test_custom_color() {
        let mut p = Panel::default();
        assert!(!p.has_custom_color());
        p.color = "#64748B".into();
        assert!(!p.has_custom_color());
        p.color = "#fff".into();
        assert!(p.has_custom_color());
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let p: Panel = serde_json::from_str(r#"{"title": "A", "split": "horizontal"}"#).unwrap();
        assert_eq!(p.title, "A");
        assert_eq!(p.directory, "");
        assert_eq!(p.split, Some(Split::Horizontal));
        assert_eq!(p.size, None);
    }

    #[test]
    fn test_deserialize_null_and_unknown_values() {
        let p: Panel = serde_json::from_str(
            r#"{"title": null, "directory": null, "color": null, "profile": null, "split": "diagonal", "size": null}"#,
        )
        .unwrap();
        assert_eq!(p.title, "");
        assert_eq!(p.color, "");
        assert_eq!(p.split, None);
        assert_eq!(p.size, None);

        let p: Panel = serde_json::from_str(r#"{"split": null}"#).unwrap();
        assert_eq!(p.split, None);
    }

    #[test]
    fn test_sanitized_first_and_split() {
        let first = Panel {
            title: "  Main ".into(),
            split: Some(Split::Horizontal),
            size: Some(0.3),
            ..Panel::default()
        };
        let s = first.sanitized(0);
        assert_eq!(s.title, "Main");
        assert_eq!(s.split, None);
        assert_eq!(s.size, Some(1.0));
        assert_eq!(s.color, DEFAULT_COLOR);
        assert_eq!(s.profile, "PowerShell");

        let second = Panel { size: Some(1.0), ..Panel::default() };
        let s = second.sanitized(1);
        assert_eq!(s.split, Some(Split::Vertical));
        assert_eq!(s.size, Some(0.9));
    }
}
