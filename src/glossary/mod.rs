/*!
 * Glossary document model, construction and output.
 *
 * - `model`: serializable document types
 * - `builder`: term normalization and record construction
 * - `writer`: JSON rendering and file output
 */

// Re-export main types for easier usage
pub use self::builder::{GlossaryBuilder, build_document, build_record, extract_abbreviation, normalize};
pub use self::model::{Category, DEFAULT_TARGET_LANGUAGES, GlossaryDocument, LanguageMap, TermRecord};
pub use self::writer::{to_json, write_document};

// Submodules
pub mod builder;
pub mod model;
pub mod writer;
