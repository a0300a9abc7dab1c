//! # wtpanes
//!
//! A Windows Terminal multi-panel setup generator.
//!
//! wtpanes takes an ordered list of up to six panels and compiles it into a
//! launch artifact for Windows Terminal. Each panel has a title, a working
//! directory, startup commands, a tab color, a shell profile, and a split
//! direction and size. The first panel opens the tab and every later panel
//! splits off the layout built so far.
//!
//! ## Features
//!
//! - **Validation**: every rule violation is collected as a message, nothing panics
//! - **Three outputs**: a PowerShell `wt` command, a `multipleActions` action
//!   document, and a batch script
//! - **Layout preview**: a grid description of where each panel ends up
//! - **Templates**: built-in presets plus user templates from config
//! - **Import/export**: panel documents in JSON or TOML, including the action
//!   documents wtpanes itself produces
//!
//! ## Quick Example
//!
//! ```
//! use wtpanes::{Generator, Panel, Split};
//!
//! let panels = vec![
//!     Panel::anchor("Web", r"C:\app", "#4ecdc4", "PowerShell").with_commands("npm run dev"),
//!     Panel::anchor("Logs", r"C:\app", "#64748b", "Git Bash").splitting(Split::Horizontal, 0.3),
//! ];
//!
//! let generator = Generator::default();
//! assert!(generator.validate(&panels).is_empty());
//!
//! let command = generator.powershell(&panels);
//! assert!(command.starts_with("wt new-tab --title \"Web\""));
//! assert!(command.ends_with("-H --size 0.3 bash"));
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into these modules:
//!
//! - [`panel`]: The panel record and its defaults
//! - [`validate`]: Panel list validation
//! - [`escape`]: Per-grammar string escaping and the matching decoders
//! - [`profile`]: Profile name to launch token registry
//! - [`generate`]: The three output generators
//! - [`layout`]: Layout geometry for previews
//! - [`templates`]: Preset panel lists and default panels
//! - [`document`]: Panel document import and export
//! - [`config`]: TOML configuration parsing and data structures
//! - [`loader`]: Config file discovery and loading
//! - [`cli`]: Command-line argument parsing with clap
//! - [`error`]: Error types

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod escape;
pub mod generate;
pub mod layout;
pub mod loader;
pub mod panel;
pub mod profile;
pub mod templates;
pub mod validate;

pub use config::Config;
pub use error::{Result, WtError};
pub use generate::{Format, GeneratedOutputs, Generator};
pub use layout::{GridLayout, LayoutVariant, compute_layout};
pub use panel::{Panel, Split};
pub use profile::ProfileTable;
pub use templates::{Template, TemplateCatalog};
pub use validate::validate;
