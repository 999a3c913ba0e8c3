//! The versioned golden dataset file.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use assay_core::{Provenance, TestCase};
use assay_traits::StoreError;

/// Current golden dataset document version.
const DATASET_VERSION: u32 = 1;

/// Human-reviewable golden dataset document, split by provenance.
///
/// Engineers author the `synthetic` half by hand; the curation pipeline
/// writes the `production` half. The file is pretty-printed JSON intended
/// to live in version control next to the baselines it feeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenDatasetFile {
    /// Document format version.
    pub version: u32,
    /// When the document was last written.
    pub generated_at: DateTime<Utc>,
    /// Hand-authored test cases.
    pub synthetic: Vec<TestCase>,
    /// Curated, anonymized production test cases.
    pub production: Vec<TestCase>,
}

impl Default for GoldenDatasetFile {
    fn default() -> Self {
        Self::new()
    }
}

impl GoldenDatasetFile {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: DATASET_VERSION,
            generated_at: Utc::now(),
            synthetic: Vec::new(),
            production: Vec::new(),
        }
    }

    /// Loads a document from disk.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IoError` when the file cannot be read and
    /// `StoreError::ParseError` when it is not a valid dataset document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| StoreError::IoError(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&content)
            .map_err(|e| StoreError::ParseError(format!("{}: {e}", path.display())))
    }

    /// Writes the document to disk as pretty-printed JSON, refreshing
    /// `generated_at`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SerializationError` or `StoreError::IoError`.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        self.generated_at = Utc::now();
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;
        let path = path.as_ref();
        std::fs::write(path, content)
            .map_err(|e| StoreError::IoError(format!("{}: {e}", path.display())))
    }

    /// Replaces the production half with freshly curated cases.
    pub fn set_production(&mut self, cases: Vec<TestCase>) {
        debug_assert!(cases
            .iter()
            .all(|c| c.provenance == Provenance::Production));
        self.production = cases;
    }

    /// All cases in reproducible order: synthetic first, then production.
    #[must_use]
    pub fn ordered_cases(&self) -> Vec<TestCase> {
        self.synthetic
            .iter()
            .chain(self.production.iter())
            .cloned()
            .collect()
    }
}
