/*!
 * # Glossary Builder
 *
 * A Rust library for generating translation glossary scaffolds from a list
 * of domain terms.
 *
 * ## Features
 *
 * - Built-in finance terminology list (Investopedia dictionary terms)
 * - Trimming, deduplication and code-point ordering of terms
 * - Abbreviation extraction from the first parenthesized span of a term
 * - Empty translation slots for a configurable set of target languages
 * - Stable, human-readable JSON output with unescaped non-ASCII text
 * - ISO 639-1 and ISO 639-2 language code validation
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `glossary`: Glossary document handling:
 *   - `glossary::model`: Document and term record types
 *   - `glossary::builder`: Term normalization and record construction
 *   - `glossary::writer`: JSON rendering and file output
 * - `terms`: The built-in finance term list
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod glossary;
pub mod language_utils;
pub mod terms;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{BuildSummary, Controller};
pub use errors::{AppError, ConfigError, GlossaryError};
pub use glossary::{Category, GlossaryBuilder, GlossaryDocument, LanguageMap, TermRecord};
pub use language_utils::{get_language_name, language_codes_match, normalize_to_part2t};
pub use terms::FINANCIAL_TERMS;
