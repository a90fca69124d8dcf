/*!
 * Serialization of glossary documents.
 *
 * Output is pretty-printed JSON with two-space indentation. Non-ASCII text
 * is written as-is rather than escaped, and no trailing newline is added.
 */

use std::fs;
use std::path::Path;

use crate::errors::GlossaryError;
use crate::glossary::model::GlossaryDocument;

/// Render a document as indented JSON.
pub fn to_json(document: &GlossaryDocument) -> Result<String, GlossaryError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Write a document to `path`, replacing any existing file.
///
/// The parent directory must already exist; it is never created here.
pub fn write_document<P: AsRef<Path>>(document: &GlossaryDocument, path: P) -> Result<(), GlossaryError> {
    let path = path.as_ref();
    let json = to_json(document)?;

    fs::write(path, json).map_err(|source| GlossaryError::Write {
        path: path.to_path_buf(),
        source,
    })
}
