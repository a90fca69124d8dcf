/*!
 * Common test utilities for the glossary builder test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use glossary_builder::GlossaryDocument;
use glossary_builder::app_config::Config;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Default configuration writing into the given file
pub fn config_with_output(output_path: PathBuf) -> Config {
    Config {
        output_path,
        ..Config::default()
    }
}

/// Owned term list from string literals
pub fn terms(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Parses a written glossary file back into a document
pub fn read_document(path: &Path) -> Result<GlossaryDocument> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
