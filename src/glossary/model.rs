/*!
 * Glossary document model.
 *
 * These types mirror the JSON layout of a glossary category file. Language
 * keyed fields use `LanguageMap`, which keeps insertion order so a document
 * always serializes with the same key order.
 */

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Language codes every term is scaffolded with, in output order.
pub const DEFAULT_TARGET_LANGUAGES: [&str; 9] =
    ["zh", "ja", "ko", "fr", "de", "es", "it", "pt", "ru"];

/// Insertion-ordered mapping from language code to text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageMap {
    entries: Vec<(String, String)>,
}

impl LanguageMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map with every code present and mapped to an empty string.
    pub fn scaffold<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        codes
            .into_iter()
            .map(|code| (code.as_ref().to_string(), String::new()))
            .collect()
    }

    /// Set the text for a language. An existing code keeps its position.
    pub fn insert(&mut self, code: &str, text: &str) {
        match self.entries.iter_mut().find(|(existing, _)| existing == code) {
            Some((_, value)) => *value = text.to_string(),
            None => self.entries.push((code.to_string(), text.to_string())),
        }
    }

    /// Get the text for a language.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == code)
            .map(|(_, value)| value.as_str())
    }

    /// Language codes in insertion order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }

    /// `(code, text)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, value)| (code.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LanguageMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (code, text) in iter {
            let code: String = code.into();
            let text: String = text.into();
            map.insert(&code, &text);
        }
        map
    }
}

impl Serialize for LanguageMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (code, text) in &self.entries {
            map.serialize_entry(code, text)?;
        }
        map.end()
    }
}

struct LanguageMapVisitor;

impl<'de> Visitor<'de> for LanguageMapVisitor {
    type Value = LanguageMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of language codes to strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = LanguageMap::new();
        while let Some((code, text)) = access.next_entry::<String, String>()? {
            map.insert(&code, &text);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for LanguageMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LanguageMapVisitor)
    }
}

/// One glossary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermRecord {
    /// Term as authored, trimmed
    pub source: String,

    /// Translations keyed by language code, empty until filled in
    pub target: LanguageMap,

    /// Free-text description, empty until filled in
    pub description: String,

    /// Interior of the first parenthesized span in `source`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
}

/// Identifier and display names heading a glossary document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: LanguageMap,
}

impl Category {
    /// The finance category: `financial`, named "Finance" / "金融".
    pub fn financial() -> Self {
        Self {
            id: "financial".to_string(),
            name: [("en", "Finance"), ("zh", "金融")].into_iter().collect(),
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::financial()
    }
}

/// A complete glossary category file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlossaryDocument {
    pub id: String,
    pub name: LanguageMap,
    pub terms: Vec<TermRecord>,
}

impl GlossaryDocument {
    /// Number of terms carrying an abbreviation.
    pub fn abbreviation_count(&self) -> usize {
        self.terms
            .iter()
            .filter(|term| term.abbreviation.is_some())
            .count()
    }

    /// Look up a term by its source text.
    pub fn find(&self, source: &str) -> Option<&TermRecord> {
        self.terms
            .binary_search_by(|term| term.source.as_str().cmp(source))
            .ok()
            .map(|index| &self.terms[index])
    }
}
