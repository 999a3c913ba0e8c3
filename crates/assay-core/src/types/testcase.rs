//! Golden dataset test cases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::CalculationInput;

/// Test case identifier.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TestCaseId(pub String);

impl TestCaseId {
    /// Create a new test case ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TestCaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TestCaseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TestCaseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Where a test case came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Hand-authored by engineers.
    Synthetic,
    /// Produced by curating captured production records.
    Production,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Synthetic => write!(f, "synthetic"),
            Provenance::Production => write!(f, "production"),
        }
    }
}

/// One entry in the golden dataset.
///
/// Immutable once written; the id is assigned at curation (or authoring)
/// time and is stable for the life of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Stable test case identifier.
    pub id: TestCaseId,
    /// Human-readable description of the instrument characteristics.
    pub description: String,
    /// The calculation input to replay.
    pub input: CalculationInput,
    /// Provenance of the case.
    pub provenance: Provenance,
    /// Free-form category tags.
    pub tags: Vec<String>,
    /// When the case was created.
    pub created_at: DateTime<Utc>,
}
