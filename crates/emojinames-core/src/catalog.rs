//! Catalog document (data.json)
//!
//! A JSON array of categories, each holding `[file, sequence, name]`
//! triples. Consumers index into the triples positionally, so the shape of
//! this document must not change.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// One catalogued emoji
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "(String, String, String)", from = "(String, String, String)")]
pub struct CatalogEntry {
    /// Image file name (base name only)
    pub file: String,

    /// Sequence as concatenated numeric character references, VS16 omitted
    pub sequence: String,

    /// Resolved display name
    pub name: String,
}

impl CatalogEntry {
    pub fn new(file: impl Into<String>, sequence: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            sequence: sequence.into(),
            name: name.into(),
        }
    }
}

impl From<CatalogEntry> for (String, String, String) {
    fn from(entry: CatalogEntry) -> Self {
        (entry.file, entry.sequence, entry.name)
    }
}

impl From<(String, String, String)> for CatalogEntry {
    fn from((file, sequence, name): (String, String, String)) -> Self {
        Self { file, sequence, name }
    }
}

/// A category and its entries, in metadata order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCategory {
    /// Category (emoji group) name
    pub category: String,

    /// Entries in group order
    pub emojis: Vec<CatalogEntry>,
}

impl CatalogCategory {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            emojis: Vec::new(),
        }
    }
}

/// JSON layout for the written document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// No whitespace at all
    #[default]
    Compact,

    /// Two-space indentation
    Pretty,
}

impl OutputStyle {
    pub fn from_pretty_flag(pretty: bool) -> Self {
        if pretty {
            Self::Pretty
        } else {
            Self::Compact
        }
    }
}

/// The complete catalog, serialized as a bare array of categories
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub categories: Vec<CatalogCategory>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category (order is preserved)
    pub fn push(&mut self, category: CatalogCategory) {
        self.categories.push(category);
    }

    /// Number of categories
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total number of entries across all categories
    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.emojis.len()).sum()
    }

    /// Find a category by name
    pub fn category(&self, name: &str) -> Option<&CatalogCategory> {
        self.categories.iter().find(|c| c.category == name)
    }

    /// Serialize to JSON
    pub fn to_json(&self, style: OutputStyle) -> Result<String, serde_json::Error> {
        match style {
            OutputStyle::Compact => serde_json::to_string(self),
            OutputStyle::Pretty => serde_json::to_string_pretty(self),
        }
    }

    /// Parse a previously written document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Save to file
    pub fn save_to_file(&self, path: &Path, style: OutputStyle) -> Result<(), std::io::Error> {
        let json = self
            .to_json(style)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }
}
