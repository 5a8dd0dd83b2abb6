//! Error types for lexlight
//!
//! The styling and bracket engines are total over their inputs and never
//! fail. Errors only come from the outer layers: language files, the
//! configuration file, and terminal output.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for lexlight operations
pub type Result<T> = std::result::Result<T, LexlightError>;

/// Lexlight error types
#[derive(Error, Debug)]
pub enum LexlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{}: invalid TOML: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("language '{language}': {reason}")]
    Definition { language: String, reason: String },

    #[error("invalid filename pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("{0}")]
    Message(String),
}

impl LexlightError {
    /// Build a definition error for a named language
    pub fn definition(language: &str, reason: impl Into<String>) -> Self {
        LexlightError::Definition {
            language: language.to_string(),
            reason: reason.into(),
        }
    }
}
