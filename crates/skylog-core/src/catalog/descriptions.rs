//! Description reference data
//!
//! Human-readable descriptions for message types and fields, loaded once
//! at startup from a flat JSON object keyed by `"TYPE"` and
//! `"TYPE.FIELD"`. A missing file or key is never an error: the catalog
//! just shows empty text.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur loading the description index
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Read-only lookup of message-type and field descriptions
#[derive(Debug, Clone, Default)]
pub struct DescriptionIndex {
    entries: HashMap<String, String>,
}

impl DescriptionIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an index from a JSON object of string keys to string values
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Load an index from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Load an index from a JSON file, falling back to an empty index if
    /// the file is missing or malformed
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_file(&path) {
            Ok(index) => index,
            Err(e) => {
                tracing::warn!(
                    "could not load descriptions from {}: {e}",
                    path.as_ref().display()
                );
                Self::default()
            }
        }
    }

    /// Look up a description; absent keys read as empty text
    pub fn describe(&self, key: &str) -> &str {
        self.entries.get(key).map_or("", String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no descriptions are loaded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
