/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use std::path::PathBuf;

use glossary_builder::app_config::{Config, LogLevel};
use glossary_builder::errors::ConfigError;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.output_path, PathBuf::from("industries").join("financial.json"));
    assert_eq!(config.category.id, "financial");
    assert_eq!(config.category.name.get("en"), Some("Finance"));
    assert_eq!(config.category.name.get("zh"), Some("金融"));
    assert_eq!(
        config.target_languages,
        vec!["zh", "ja", "ko", "fr", "de", "es", "it", "pt", "ru"]
    );
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.category.id = "  ".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::EmptyField("category.id"))));
    config.category.id = "financial".to_string();

    config.output_path = PathBuf::new();
    assert!(matches!(config.validate(), Err(ConfigError::EmptyField("output_path"))));
    config.output_path = PathBuf::from("financial.json");

    config.target_languages = Vec::new();
    assert!(matches!(config.validate(), Err(ConfigError::NoTargetLanguages)));

    config.target_languages = vec!["zh".to_string(), "xx".to_string()];
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidLanguage { field: "target_languages", .. })
    ));

    // Same language in two code forms
    config.target_languages = vec!["zh".to_string(), "chi".to_string()];
    assert!(matches!(config.validate(), Err(ConfigError::DuplicateLanguage(code)) if code == "chi"));

    config.target_languages = vec!["de".to_string()];
    config.category.name.insert("qq", "Nope");
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidLanguage { field: "category.name", .. })
    ));
}

/// Test that a partial config file keeps defaults for missing fields
#[test]
fn test_from_file_withPartialConfig_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = common::create_test_file(
        temp_dir.path(),
        "glossary.json",
        r#"{ "output_path": "out/fin.json", "log_level": "debug" }"#,
    )?;

    let config = Config::from_file(&config_path)?;

    assert_eq!(config.output_path, PathBuf::from("out/fin.json"));
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.category.id, "financial");
    assert_eq!(config.target_languages.len(), 9);

    Ok(())
}

/// Test that the category name keeps its key order from the file
#[test]
fn test_from_file_withCustomCategory_shouldKeepNameOrder() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = common::create_test_file(
        temp_dir.path(),
        "glossary.json",
        r#"{ "category": { "id": "legal", "name": { "zh": "法律", "en": "Legal" } }, "target_languages": ["fr"] }"#,
    )?;

    let config = Config::from_file(&config_path)?;

    assert_eq!(config.category.id, "legal");
    assert_eq!(config.category.name.codes().collect::<Vec<_>>(), vec!["zh", "en"]);
    assert_eq!(config.target_languages, vec!["fr"]);
    assert!(config.validate().is_ok());

    Ok(())
}

/// Test that malformed JSON is reported as an error
#[test]
fn test_from_file_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = common::create_test_file(temp_dir.path(), "broken.json", "{ not json")?;

    assert!(Config::from_file(&config_path).is_err());

    Ok(())
}

/// Test mapping of log levels onto log filters
#[test]
fn test_logLevel_toLevelFilter_shouldMatchVariant() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Info.to_level_filter(), log::LevelFilter::Info);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}

/// Test that padded or upper-case codes are rejected since they become JSON keys verbatim
#[test]
fn test_config_validation_withNonCanonicalCodes_shouldRejectThem() {
    let mut config = Config::default();

    config.target_languages = vec![" ZH ".to_string(), "ger".to_string()];
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidLanguage { field: "target_languages", ref code }) if code == " ZH "
    ));

    config.target_languages = vec!["DE".to_string()];
    assert!(matches!(config.validate(), Err(ConfigError::InvalidLanguage { .. })));

    config.target_languages = vec!["zh".to_string(), "ger".to_string()];
    assert!(config.validate().is_ok());

    config.category.name.insert("En ", "Finance");
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidLanguage { field: "category.name", .. })
    ));
}

/// Test that a three-letter code matching an earlier two-letter code is a duplicate
#[test]
fn test_config_validation_withSameLanguageTwoForms_shouldReportDuplicate() {
    let mut config = Config::default();
    config.target_languages = vec!["de".to_string(), "fr".to_string(), "deu".to_string()];

    assert!(matches!(config.validate(), Err(ConfigError::DuplicateLanguage(code)) if code == "deu"));
}
