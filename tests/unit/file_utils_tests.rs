/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::path::{Path, PathBuf};

use glossary_builder::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "terms.json", "{}")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::file_exists(temp_dir.path()));

    Ok(())
}

/// Test that dir_exists distinguishes directories from missing paths
#[test]
fn test_dir_exists_withVariousPaths_shouldDetectDirectories() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    assert!(FileManager::dir_exists(temp_dir.path()));
    assert!(!FileManager::dir_exists(temp_dir.path().join("missing")));

    Ok(())
}

/// Test that parent_dir falls back to the current directory for bare names
#[test]
fn test_parent_dir_withBareFileName_shouldReturnCurrentDir() {
    assert_eq!(FileManager::parent_dir("financial.json"), PathBuf::from("."));
    assert_eq!(
        FileManager::parent_dir(Path::new("industries/financial.json")),
        PathBuf::from("industries")
    );
}

/// Test that read_to_string returns file content correctly
#[test]
fn test_read_to_string_withValidFile_shouldReturnContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "note.txt", "金融")?;

    assert_eq!(FileManager::read_to_string(&test_file)?, "金融");
    assert!(FileManager::read_to_string(temp_dir.path().join("missing.txt")).is_err());

    Ok(())
}

/// Test that file_size reports the byte length
#[test]
fn test_file_size_withKnownContent_shouldReturnByteLength() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "size.txt", "金融")?;

    assert_eq!(FileManager::file_size(&test_file)?, 6);

    Ok(())
}
