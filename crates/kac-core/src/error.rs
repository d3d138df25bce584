//! Error types for kac

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using KacError
pub type Result<T> = std::result::Result<T, KacError>;

/// Main error type for kac operations
#[derive(Debug, Error)]
pub enum KacError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while parsing generic changelog text.
///
/// Line numbers are 1-based positions in the text handed to the parser.
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// A release line whose version token is outside the grammar
    #[error("Malformed release line {line}: '{content}'")]
    MalformedRelease { line: usize, content: String },

    /// A date token that is not a real calendar date
    #[error("Invalid release date on line {line}: '{value}'")]
    InvalidDate { line: usize, value: String },

    /// A bracketed group line that cannot be parsed
    #[error("Malformed group line {line}: '{content}'")]
    MalformedGroup { line: usize, content: String },

    /// No formatter or dialect registered under this name
    #[error("Unknown changelog format: {0}")]
    UnknownFormat(String),
}

impl KacError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
