/*!
 * Glossary construction from raw term strings.
 *
 * The build runs in three steps:
 * - `normalize` trims, deduplicates and sorts the source list
 * - `build_record` turns one term into a `TermRecord`, pulling out an
 *   abbreviation from the first parenthesized span
 * - `build_document` wraps the records under a `Category`
 */

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

use crate::glossary::model::{
    Category, DEFAULT_TARGET_LANGUAGES, GlossaryDocument, LanguageMap, TermRecord,
};

// First `(` followed by at least one non-`)` character and the next `)`.
// Nested or repeated groups are not balanced: the first match wins.
static ABBREVIATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^)]+)\)").expect("abbreviation pattern is valid"));

/// Trim, drop blanks, deduplicate and sort terms in code-point order.
pub fn normalize<S: AsRef<str>>(terms: &[S]) -> Vec<String> {
    terms
        .iter()
        .map(|term| term.as_ref().trim())
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Interior of the first parenthesized span in `term`, if any.
pub fn extract_abbreviation(term: &str) -> Option<&str> {
    ABBREVIATION_PATTERN
        .captures(term)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Build one record; blank terms produce nothing.
pub fn build_record<S: AsRef<str>>(term: &str, target_languages: &[S]) -> Option<TermRecord> {
    let source = term.trim();
    if source.is_empty() {
        return None;
    }

    Some(TermRecord {
        source: source.to_string(),
        target: LanguageMap::scaffold(target_languages),
        description: String::new(),
        abbreviation: extract_abbreviation(source).map(str::to_string),
    })
}

/// Wrap ordered records under the category's id and name.
pub fn build_document(category: &Category, records: Vec<TermRecord>) -> GlossaryDocument {
    GlossaryDocument {
        id: category.id.clone(),
        name: category.name.clone(),
        terms: records,
    }
}

/// Builds glossary documents for one category and language set.
#[derive(Debug, Clone)]
pub struct GlossaryBuilder {
    category: Category,
    target_languages: Vec<String>,
}

impl GlossaryBuilder {
    /// Create a builder for the given category and target languages.
    pub fn new(category: Category, target_languages: Vec<String>) -> Self {
        Self {
            category,
            target_languages,
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn target_languages(&self) -> &[String] {
        &self.target_languages
    }

    /// Records for already-normalized terms, in input order.
    pub fn build_records<S: AsRef<str>>(&self, terms: &[S]) -> Vec<TermRecord> {
        terms
            .iter()
            .filter_map(|term| build_record(term.as_ref(), &self.target_languages))
            .collect()
    }

    /// Normalize `terms` and build the complete document.
    pub fn build<S: AsRef<str>>(&self, terms: &[S]) -> GlossaryDocument {
        let normalized = normalize(terms);
        build_document(&self.category, self.build_records(&normalized))
    }
}

impl Default for GlossaryBuilder {
    fn default() -> Self {
        Self::new(
            Category::financial(),
            DEFAULT_TARGET_LANGUAGES
                .iter()
                .map(|code| code.to_string())
                .collect(),
        )
    }
}
