/*!
 * Error types for the glossary builder.
 *
 * This module contains custom error types for the different stages of a build,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing the glossary document
#[derive(Error, Debug)]
pub enum GlossaryError {
    /// The document could not be turned into JSON
    #[error("Failed to serialize glossary document: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The output file could not be written
    #[error("Failed to write glossary to {path:?}: {source}")]
    Write {
        /// Destination that was being written
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },
}

/// Errors found while validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required string field is blank
    #[error("Configuration field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// A language code is not a known ISO 639 code
    #[error("Invalid language code in {field}: {code}")]
    InvalidLanguage {
        /// Field holding the code
        field: &'static str,
        /// The rejected code
        code: String,
    },

    /// The same target language is listed twice
    #[error("Duplicate target language: {0}")]
    DuplicateLanguage(String),

    /// No target languages at all
    #[error("At least one target language is required")]
    NoTargetLanguages,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from building or writing the glossary
    #[error("Glossary error: {0}")]
    Glossary(#[from] GlossaryError),

    /// Error from configuration validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
