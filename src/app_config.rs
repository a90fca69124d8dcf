use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;
use crate::file_utils::FileManager;
use crate::glossary::{Category, DEFAULT_TARGET_LANGUAGES};
use crate::language_utils;

/// Application configuration module
/// This module handles the builder configuration: where the glossary is
/// written, which category heads it, and which languages each term is
/// scaffolded with. Every field has a default, so running without a config
/// file produces the standard finance glossary.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Destination file for the glossary document
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Category id and display names
    #[serde(default)]
    pub category: Category,

    /// Language codes added to every term's `target` mapping, in order
    #[serde(default = "default_target_languages")]
    pub target_languages: Vec<String>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("industries").join("financial.json")
}

fn default_target_languages() -> Vec<String> {
    DEFAULT_TARGET_LANGUAGES.iter().map(|code| code.to_string()).collect()
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = FileManager::read_to_string(path)?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyField("output_path"));
        }

        if self.category.id.trim().is_empty() {
            return Err(ConfigError::EmptyField("category.id"));
        }

        for code in self.category.name.codes() {
            check_language_code("category.name", code)?;
        }

        if self.target_languages.is_empty() {
            return Err(ConfigError::NoTargetLanguages);
        }

        for (index, code) in self.target_languages.iter().enumerate() {
            check_language_code("target_languages", code)?;

            // "zh" and "chi" name the same language
            if self.target_languages[..index]
                .iter()
                .any(|earlier| language_utils::language_codes_match(earlier, code))
            {
                return Err(ConfigError::DuplicateLanguage(code.clone()));
            }
        }

        Ok(())
    }
}

// Codes are written verbatim as JSON keys, so they must already be trimmed
// and lowercase as well as valid ISO 639 codes.
fn check_language_code(field: &'static str, code: &str) -> Result<(), ConfigError> {
    let canonical = code.trim().to_lowercase();
    if canonical != code || language_utils::validate_language_code(code).is_err() {
        return Err(ConfigError::InvalidLanguage {
            field,
            code: code.to_string(),
        });
    }
    Ok(())
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output_path: default_output_path(),
            category: Category::default(),
            target_languages: default_target_languages(),
            log_level: LogLevel::default(),
        }
    }
}
