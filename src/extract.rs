//! Record extraction: one raw corpus line in, normalized observations out.
//!
//! The exporter terminates every record line with a separator artifact (a
//! trailing comma) that has to go before structural decoding. A line is
//! atomic: it contributes either all of its observations or none, so an
//! unresolvable language code drops the line's hashtags along with it.

use serde::Deserialize;
use thiserror::Error;

use crate::lang;

/// Per-line extraction failure. Never fatal: the caller skips the line and
/// the scan continues.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed JSON record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown language code '{0}'")]
    UnknownLanguage(String),
}

#[derive(Debug, Deserialize)]
struct Record {
    doc: Doc,
}

#[derive(Debug, Deserialize)]
struct Doc {
    entities: Entities,
    metadata: Metadata,
}

#[derive(Debug, Deserialize)]
struct Entities {
    hashtags: Vec<HashtagEntity>,
}

#[derive(Debug, Deserialize)]
struct HashtagEntity {
    text: String,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    iso_language_code: String,
}

/// Everything one successfully parsed line contributes to the counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineObservations {
    /// Lower-cased, `#`-prefixed hashtag values, one per hashtag entity.
    pub hashtags: Vec<String>,
    /// Canonical display name of the record's declared language.
    pub language: String,
}

/// Parse one raw input line into its observations.
pub fn extract(line: &str) -> Result<LineObservations, ParseError> {
    let record: Record = serde_json::from_str(strip_separator(line))?;

    let code = &record.doc.metadata.iso_language_code;
    let language = lang::resolve(code)
        .ok_or_else(|| ParseError::UnknownLanguage(code.clone()))?
        .to_string();

    let hashtags = record
        .doc
        .entities
        .hashtags
        .iter()
        .map(|entity| format!("#{}", entity.text.to_lowercase()))
        .collect();

    Ok(LineObservations { hashtags, language })
}

/// Trim trailing whitespace, then the record separator if the exporter left
/// one. Clean JSONL input passes through untouched.
fn strip_separator(line: &str) -> &str {
    let trimmed = line.trim_end();
    trimmed.strip_suffix(',').unwrap_or(trimmed)
}
