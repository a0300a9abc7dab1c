//! Panel document import and export.
//!
//! Accepted import shapes, checked in this order:
//!
//! | Shape | Example |
//! |---|---|
//! | bare array | `[{...}, {...}]` |
//! | template export | `{"template": {"panels": [...]}}` |
//! | configuration export | `{"configuration": {"panels": [...]}}` |
//! | plain document | `{"panels": [...]}` |
//! | action document | `{"command": {"action": "multipleActions", "actions": [...]}}` |
//!
//! The action document is the one [`crate::generate::Generator::json_action`]
//! produces; its command lines are decoded back into directories and
//! commands. Import only checks shape. Whether the panels are acceptable is
//! up to [`crate::validate::validate`].

use crate::error::{Result, WtError};
use crate::escape;
use crate::generate::ACTION_SHELL;
use crate::panel::{ANCHOR_SIZE, DEFAULT_COLOR, DEFAULT_SPLIT_SIZE, Panel, Split};
use crate::profile::DEFAULT_PROFILE;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Version written into exported documents.
pub const EXPORT_VERSION: &str = "1.0";

#[derive(Serialize)]
struct ExportDocument<'a> {
    version: &'a str,
    panels: Vec<Panel>,
}

/// Parse a JSON panel document.
pub fn parse_json(input: &str) -> Result<Vec<Panel>> {
    let value: Value = serde_json::from_str(input)?;
    from_value(value)
}

/// Parse a TOML panel document (`[[panels]]` tables).
pub fn parse_toml(input: &str) -> Result<Vec<Panel>> {
    let value: toml::Value = toml::from_str(input)?;
    from_value(serde_json::to_value(value)?)
}

/// Extract panels from any accepted document shape.
///
/// # Errors
///
/// - [`WtError::PanelsNotArray`] if a `panels` key holds something else
/// - [`WtError::UnsupportedDocument`] if no shape matches
/// - [`WtError::JsonError`] if a panel entry has the wrong field types
pub fn from_value(value: Value) -> Result<Vec<Panel>> {
    if value.is_array() {
        debug!("importing bare panel array");
        return panels_array(value);
    }

    let Value::Object(mut root) = value else {
        return Err(WtError::UnsupportedDocument(
            "expected an array or an object".into(),
        ));
    };

    for wrapper in ["template", "configuration"] {
        if let Some(panels) = root.get_mut(wrapper).and_then(|w| w.get_mut("panels")) {
            debug!(wrapper, "importing wrapped panel list");
            return panels_array(panels.take());
        }
    }

    if let Some(panels) = root.remove("panels") {
        debug!("importing panel document");
        return panels_array(panels);
    }

    if let Some(command) = root.get("command") {
        debug!("importing action document");
        return decode_actions(command);
    }

    Err(WtError::UnsupportedDocument(
        "no panels, template, configuration or command key".into(),
    ))
}

fn panels_array(value: Value) -> Result<Vec<Panel>> {
    if !value.is_array() {
        return Err(WtError::PanelsNotArray);
    }
    Ok(serde_json::from_value(value)?)
}

fn decode_actions(command: &Value) -> Result<Vec<Panel>> {
    let kind = command.get("action").and_then(Value::as_str);
    if kind != Some("multipleActions") {
        return Err(WtError::UnsupportedDocument(format!(
            "command action {:?} is not multipleActions",
            kind.unwrap_or_default()
        )));
    }

    let actions = command
        .get("actions")
        .and_then(Value::as_array)
        .ok_or_else(|| WtError::UnsupportedDocument("actions must be an array".into()))?;

    let mut panels = Vec::new();
    for action in actions {
        match action.get("action").and_then(Value::as_str) {
            Some("newTab") if panels.is_empty() => panels.push(decode_pane(action, false)?),
            Some("splitPane") if !panels.is_empty() => panels.push(decode_pane(action, true)?),
            Some("moveFocus") => {}
            Some(other) => {
                return Err(WtError::UnsupportedDocument(format!(
                    "unexpected action '{}'",
                    other
                )));
            }
            None => return Err(WtError::UnsupportedDocument("action without a type".into())),
        }
    }

    Ok(panels)
}

fn decode_pane(action: &Value, is_split: bool) -> Result<Panel> {
    let text = |key: &str| action.get(key).and_then(Value::as_str);

    let starting_directory = text("startingDirectory");
    let (directory, commands) = match text("commandline") {
        Some(line) => split_payload(&decode_commandline(line)?, starting_directory.is_some())?,
        None => (
            starting_directory
                .map(escape::denormalize_windows_path)
                .unwrap_or_default(),
            String::new(),
        ),
    };

    let (split, size) = if is_split {
        let split = match action.get("split") {
            Some(value) => serde_json::from_value(value.clone())?,
            None => Split::Vertical,
        };
        let size = action
            .get("size")
            .and_then(Value::as_f64)
            .unwrap_or(DEFAULT_SPLIT_SIZE);
        (Some(split), Some(size))
    } else {
        (None, Some(ANCHOR_SIZE))
    };

    Ok(Panel {
        title: text("tabTitle").unwrap_or_default().to_string(),
        directory,
        commands,
        color: text("tabColor").unwrap_or(DEFAULT_COLOR).to_string(),
        profile: DEFAULT_PROFILE.to_string(),
        split,
        size,
    })
}

/// Undo `pwsh -Command "<escaped payload>"`.
fn decode_commandline(line: &str) -> Result<String> {
    line.strip_prefix(ACTION_SHELL)
        .and_then(|rest| rest.strip_prefix(" \""))
        .and_then(|rest| rest.strip_suffix('"'))
        .map(escape::unescape_json_string)
        .ok_or_else(|| {
            WtError::UnsupportedDocument(format!("unrecognized commandline: {}", line))
        })
}

/// Split `cd '<dir>'; <commands>` back into directory and commands.
fn split_payload(payload: &str, has_directory: bool) -> Result<(String, String)> {
    if !has_directory {
        return Ok((String::new(), escape::unescape_single_quoted(payload)));
    }

    let malformed = || WtError::UnsupportedDocument(format!("unrecognized payload: {}", payload));
    let quoted = payload.strip_prefix("cd ").ok_or_else(malformed)?;
    let (directory, rest) = escape::take_single_quoted(quoted).ok_or_else(malformed)?;

    let commands = if rest.is_empty() {
        String::new()
    } else {
        let commands = rest.strip_prefix("; ").ok_or_else(malformed)?;
        escape::unescape_single_quoted(commands)
    };

    Ok((directory, commands))
}

/// Export a panel list as a `{ "version", "panels" }` JSON document.
///
/// Panels are sanitized first; see [`Panel::sanitized`].
pub fn export_json(panels: &[Panel]) -> Result<String> {
    let document = ExportDocument {
        version: EXPORT_VERSION,
        panels: panels
            .iter()
            .enumerate()
            .map(|(index, panel)| panel.sanitized(index))
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}
