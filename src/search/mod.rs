//! Types consumed from the external search engine.
//!
//! Searching and indexing happen elsewhere. Per matching plugin, the
//! engine hands back a map from field name to the matched word and its
//! character offsets in that field's text; a results file pairs each
//! plugin record with its match map.
//!
//! Map keys are `"name"`, `"summary"`, `"description_text"`, or an
//! author's name (the engine keys author matches by the author, not by a
//! field path).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::Plugin;
use crate::snippet::Span;

/// Errors that can occur when loading a results file.
#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("Results file not found at {0}")]
    ResultsNotFound(PathBuf),

    #[error("Failed to read results: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse results: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// A single engine match: the matched word plus its inclusive character
/// offsets within the field's text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMatch {
    #[serde(rename = "match")]
    pub word: String,
    pub start: usize,
    pub end: usize,
}

impl FieldMatch {
    /// The match location as a windowing span.
    #[must_use]
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// Per-plugin matches keyed by field name.
pub type MatchMap = BTreeMap<String, FieldMatch>;

/// One search hit: a plugin record plus the engine's match offsets for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hit {
    pub plugin: Plugin,
    #[serde(default)]
    pub matches: MatchMap,
}

/// A search-results file: a JSON array of hits, in engine ranking order.
#[derive(Debug, Clone)]
pub struct Results {
    pub hits: Vec<Hit>,
}

impl Results {
    /// Load a results file produced by the search engine.
    ///
    /// # Errors
    ///
    /// Returns `ResultsError::ResultsNotFound` if the file doesn't exist.
    /// Returns `ResultsError::ReadError` if the file cannot be read.
    /// Returns `ResultsError::ParseError` if the JSON is invalid.
    pub fn load(path: &Path) -> Result<Self, ResultsError> {
        if !path.exists() {
            return Err(ResultsError::ResultsNotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        let hits: Vec<Hit> = serde_json::from_str(&contents)?;

        Ok(Self { hits })
    }
}
