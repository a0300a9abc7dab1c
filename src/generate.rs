//! Output generation from a panel list.
//!
//! The [`Generator`] turns one panel list into any of three artifacts:
//!
//! - **PowerShell command**: a single `` wt new-tab ... `; split-pane ... `` line
//! - **Action document**: a Windows Terminal `multipleActions` JSON action
//! - **Batch script**: a `.bat` wrapper that checks for `wt` and launches it
//!
//! Generation never fails. An empty list yields a fixed placeholder for
//! each format; anything else is assumed to have passed
//! [`crate::validate::validate`] first.

use crate::escape;
use crate::panel::{Panel, Split};
use crate::profile::ProfileTable;
use crate::validate;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Placeholder emitted by the PowerShell generator for an empty list.
pub const EMPTY_POWERSHELL: &str = "# No panels configured";

/// Placeholder emitted by the batch generator for an empty list.
pub const EMPTY_BATCH: &str = "@echo off\necho No panels configured\npause";

/// Executable name of the terminal host.
pub const HOST: &str = "wt";

/// Separator between `wt` subcommands, escaped for PowerShell.
pub const SUBCOMMAND_SEPARATOR: &str = "`;";

/// Shell invoked by every action document command line.
pub const ACTION_SHELL: &str = "pwsh -Command";

/// Icon of a generated action document.
pub const ACTION_ICON: &str = "🚀";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Single-line `wt` command for PowerShell.
    PowerShell,
    /// Windows Terminal action document.
    Json,
    /// Batch script wrapping the `wt` command.
    Batch,
}

impl Format {
    /// Every format, in display order.
    pub const ALL: [Format; 3] = [Format::PowerShell, Format::Json, Format::Batch];

    /// Identifier accepted on the command line and in config.
    pub fn name(&self) -> &'static str {
        match self {
            Format::PowerShell => "powershell",
            Format::Json => "json",
            Format::Batch => "batch",
        }
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            Format::PowerShell => "PowerShell Command",
            Format::Json => "Windows Terminal Action",
            Format::Batch => "Batch File",
        }
    }

    /// File extension for saving the artifact.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::PowerShell => "ps1",
            Format::Json => "json",
            Format::Batch => "bat",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "powershell" => Ok(Format::PowerShell),
            "json" => Ok(Format::Json),
            "batch" => Ok(Format::Batch),
            other => Err(other.to_string()),
        }
    }
}

/// All three artifacts for one panel list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutputs {
    /// PowerShell command line.
    pub powershell: String,
    /// Action document.
    pub json: String,
    /// Batch script.
    pub batch: String,
}

impl GeneratedOutputs {
    /// Artifact for a given format.
    pub fn get(&self, format: Format) -> &str {
        match format {
            Format::PowerShell => &self.powershell,
            Format::Json => &self.json,
            Format::Batch => &self.batch,
        }
    }
}

/// Stateless generator holding the profile registry.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    profiles: ProfileTable,
}

impl Generator {
    /// Create a generator resolving profiles through `profiles`.
    pub fn new(profiles: ProfileTable) -> Self {
        Self { profiles }
    }

    /// The profile registry in use.
    pub fn profiles(&self) -> &ProfileTable {
        &self.profiles
    }

    /// Validation passthrough; see [`crate::validate::validate`].
    pub fn validate(&self, panels: &[Panel]) -> Vec<String> {
        validate::validate(panels)
    }

    /// Generate one format.
    pub fn generate(&self, format: Format, panels: &[Panel]) -> String {
        debug!(%format, panels = panels.len(), "generating output");
        match format {
            Format::PowerShell => self.powershell(panels),
            Format::Json => self.json_action(panels),
            Format::Batch => self.batch(panels),
        }
    }

    /// Generate a format given by name.
    ///
    /// Unknown names produce an explicit placeholder instead of output.
    pub fn generate_named(&self, format: &str, panels: &[Panel]) -> String {
        match format.parse::<Format>() {
            Ok(format) => self.generate(format, panels),
            Err(name) => format!("# Unknown output format: {}", name),
        }
    }

    /// Generate every format at once.
    pub fn generate_all(&self, panels: &[Panel]) -> GeneratedOutputs {
        GeneratedOutputs {
            powershell: self.powershell(panels),
            json: self.json_action(panels),
            batch: self.batch(panels),
        }
    }

    /// Build the `wt` command line.
    ///
    /// The first panel becomes a `new-tab` clause and every later panel a
    /// `split-pane` clause after the `` `; `` separator.
    pub fn powershell(&self, panels: &[Panel]) -> String {
        if panels.is_empty() {
            return EMPTY_POWERSHELL.to_string();
        }
        format!("{} {}", HOST, self.host_arguments(panels))
    }

    /// The `wt` arguments, without the executable name.
    fn host_arguments(&self, panels: &[Panel]) -> String {
        panels
            .iter()
            .enumerate()
            .map(|(index, panel)| self.clause(index, panel))
            .collect::<Vec<_>>()
            .join(&format!(" {} ", SUBCOMMAND_SEPARATOR))
    }

    fn clause(&self, index: usize, panel: &Panel) -> String {
        let mut cmd = String::from(if index == 0 { "new-tab" } else { "split-pane" });

        if !panel.title.is_empty() {
            cmd.push_str(&format!(
                " --title \"{}\" --suppressApplicationTitle",
                escape::escape_powershell_string(&panel.title)
            ));
        }

        if !panel.directory.is_empty() {
            cmd.push_str(&format!(
                " --startingDirectory \"{}\"",
                escape::escape_powershell_path(&panel.directory)
            ));
        }

        if index > 0 {
            cmd.push(' ');
            cmd.push_str(panel.split.unwrap_or(Split::Vertical).flag());
            if panel.has_custom_size() {
                cmd.push_str(&format!(" --size {}", panel.effective_size()));
            }
        }

        if panel.has_custom_color() {
            cmd.push_str(&format!(" --tabColor \"{}\"", panel.color));
        }

        cmd.push(' ');
        cmd.push_str(self.profiles.token(&panel.profile));

        if panel.has_commands() {
            cmd.push_str(&format!(
                " -Command \"{}\"",
                escape::escape_powershell_string(&escape::join_command_lines(&panel.commands))
            ));
        }

        cmd
    }

    /// Build the Windows Terminal action document, pretty-printed with two
    /// space indentation.
    pub fn json_action(&self, panels: &[Panel]) -> String {
        let document = match panels.split_first() {
            None => json!({
                "command": {
                    "action": "newTab",
                    "tabTitle": "Empty Configuration"
                },
                "name": "Empty Setup",
                "icon": "⚠️"
            }),
            Some((first, rest)) => {
                let mut actions = Vec::with_capacity(panels.len() + 1);
                actions.push(Value::Object(pane_action(first, false)));
                for panel in rest {
                    actions.push(Value::Object(pane_action(panel, true)));
                }
                actions.push(json!({ "action": "moveFocus", "direction": "first" }));

                json!({
                    "command": {
                        "action": "multipleActions",
                        "actions": actions
                    },
                    "name": action_name(panels),
                    "icon": ACTION_ICON
                })
            }
        };

        format!("{:#}", document)
    }

    /// Build the batch script.
    pub fn batch(&self, panels: &[Panel]) -> String {
        if panels.is_empty() {
            return EMPTY_BATCH.to_string();
        }

        let arguments =
            escape::escape_batch(&escape::flatten_continuations(&self.host_arguments(panels)));

        let mut script = String::from("@echo off\n");
        script.push_str(":: Windows Terminal Multi-Panel Setup\n");
        script.push_str(":: Generated by wtpanes\n\n");
        script.push_str("echo Starting Windows Terminal with multi-panel setup...\n\n");
        script.push_str(&format!("where {} >nul 2>nul\n", HOST));
        script.push_str("if %errorlevel% neq 0 (\n");
        script.push_str(&format!(
            "    echo Error: Windows Terminal ^({}^) not found in PATH\n",
            HOST
        ));
        script.push_str("    echo Please install Windows Terminal from Microsoft Store\n");
        script.push_str("    pause\n");
        script.push_str("    exit /b 1\n");
        script.push_str(")\n\n");
        script.push_str(&format!("start \"\" {} {}\n\n", HOST, arguments));
        script.push_str("echo Windows Terminal launched successfully!\n");
        script.push_str("timeout /t 2 >nul\n");
        script
    }
}

/// One `newTab` action, or a `splitPane` action when `is_split` is set.
fn pane_action(panel: &Panel, is_split: bool) -> Map<String, Value> {
    let mut action = Map::new();

    if is_split {
        action.insert("action".into(), json!("splitPane"));
        let direction = panel.split.unwrap_or(Split::Vertical);
        action.insert("split".into(), json!(direction.as_str()));
        if panel.has_custom_size() {
            action.insert("size".into(), json!(panel.effective_size()));
        }
    } else {
        action.insert("action".into(), json!("newTab"));
    }

    let payload = shell_payload(&panel.directory, &panel.commands);
    action.insert(
        "commandline".into(),
        json!(format!(
            "{} \"{}\"",
            ACTION_SHELL,
            escape::escape_json_string(&payload)
        )),
    );

    if !panel.directory.is_empty() {
        action.insert(
            "startingDirectory".into(),
            json!(escape::normalize_windows_path(&panel.directory)),
        );
    }

    if !panel.title.is_empty() {
        action.insert("tabTitle".into(), json!(panel.title));
    }

    if panel.has_custom_color() {
        action.insert("tabColor".into(), json!(panel.color));
    }

    action.insert("suppressApplicationTitle".into(), json!(true));
    action
}

/// Compose the PowerShell payload: `cd '<dir>'; <commands>`.
///
/// Both parts are single-quote escaped; either may be absent.
pub fn shell_payload(directory: &str, commands: &str) -> String {
    let mut payload = String::new();

    if !directory.is_empty() {
        payload.push_str(&format!("cd '{}'", escape::escape_single_quoted(directory)));
    }

    if !commands.trim().is_empty() {
        if !payload.is_empty() {
            payload.push_str("; ");
        }
        payload.push_str(&escape::escape_single_quoted(commands));
    }

    payload
}

/// Name of the generated action.
///
/// A single panel uses its own title. Otherwise up to three titles that are
/// not generic `Panel N` placeholders are joined with ` + `.
pub fn action_name(panels: &[Panel]) -> String {
    if let [only] = panels {
        return if only.title.is_empty() {
            "Single Panel Setup".to_string()
        } else {
            only.title.clone()
        };
    }

    let titles: Vec<&str> = panels
        .iter()
        .map(|p| p.title.as_str())
        .filter(|t| !t.is_empty() && !t.starts_with("Panel "))
        .take(3)
        .collect();

    if titles.is_empty() {
        return format!("{} Panel Setup", panels.len());
    }

    let mut name = titles.join(" + ");
    if panels.len() > 3 {
        name.push_str(" + more");
    }
    name
}
