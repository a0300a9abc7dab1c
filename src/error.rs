//! Error types for wtpanes.
//!
//! All errors in wtpanes are represented by [`WtError`]. Validation problems in
//! user-supplied panels are *not* errors at the library level: the validator
//! returns them as a list of messages. [`WtError::InvalidPanels`] only exists
//! so the binary can refuse to generate output for an invalid list.

use std::path::PathBuf;
use thiserror::Error;

/// All possible errors that can occur in wtpanes.
#[derive(Error, Debug)]
pub enum WtError {
    /// Config file does not exist at the given path.
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Could not determine the user's config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// Failed to read a file from disk.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing failed.
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// JSON parsing or serialization failed.
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A document carried a `panels` key that is not an array.
    #[error("Panels must be an array")]
    PanelsNotArray,

    /// The document matched none of the accepted import shapes.
    #[error("Unsupported document format: {0}")]
    UnsupportedDocument(String),

    /// Requested template does not exist in the catalog.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Neither a panel file nor a template was given.
    #[error("No panels given (use --file or --template)")]
    NoInput,

    /// The panel list failed validation.
    #[error("Invalid panel configuration: {}", .0.join("; "))]
    InvalidPanels(Vec<String>),
}

/// Convenient Result type alias for wtpanes operations.
pub type Result<T> = std::result::Result<T, WtError>;
