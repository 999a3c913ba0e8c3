//! Canonical snapshot projection.
//!
//! A snapshot is the comparison-ready projection of one analytics result:
//! test case metadata and inputs (for self-documentation) plus the subset of
//! result fields that must stay stable across engine versions. The volatile
//! calculation timestamp is never projected; the engine version tag is
//! carried as informational context and excluded from [`Snapshot::matches`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use assay_core::{AnalyticsResult, CalculationInput, Provenance, TestCase, TestCaseId};

/// The stable subset of an analytics result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotResult {
    /// Yield to maturity, in percent.
    pub yield_to_maturity: Decimal,
    /// Modified duration, in years.
    pub modified_duration: Decimal,
    /// Macaulay duration, in years.
    pub macaulay_duration: Decimal,
    /// Convexity.
    pub convexity: Decimal,
    /// Accrued interest since the last coupon.
    pub accrued_interest: Decimal,
    /// Clean price.
    pub clean_price: Decimal,
    /// Dirty price.
    pub dirty_price: Decimal,
}

impl From<&AnalyticsResult> for SnapshotResult {
    fn from(result: &AnalyticsResult) -> Self {
        Self {
            yield_to_maturity: result.yield_to_maturity,
            modified_duration: result.modified_duration,
            macaulay_duration: result.macaulay_duration,
            convexity: result.convexity,
            accrued_interest: result.accrued_interest,
            clean_price: result.clean_price,
            dirty_price: result.dirty_price,
        }
    }
}

/// Comparison projection for one test case.
///
/// Persisted baseline snapshots are the regression oracle: structural
/// equality of this projection (minus the informational engine version)
/// decides match or mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Id of the test case this snapshot belongs to.
    pub test_case_id: TestCaseId,
    /// Test case description, carried for self-documentation.
    pub description: String,
    /// Test case provenance.
    pub provenance: Provenance,
    /// Test case tags.
    pub tags: Vec<String>,
    /// The input the result was computed from.
    pub input: CalculationInput,
    /// The stable result fields.
    pub result: SnapshotResult,
    /// Which engine produced the result. Informational only; a differing
    /// engine version does not by itself fail a comparison.
    pub engine_version: String,
}

impl Snapshot {
    /// Projects a test case and its freshly computed result into a snapshot.
    #[must_use]
    pub fn capture(test_case: &TestCase, result: &AnalyticsResult) -> Self {
        Self {
            test_case_id: test_case.id.clone(),
            description: test_case.description.clone(),
            provenance: test_case.provenance,
            tags: test_case.tags.clone(),
            input: test_case.input.clone(),
            result: SnapshotResult::from(result),
            engine_version: result.engine_version.clone(),
        }
    }

    /// Structural equality of the comparison projection.
    ///
    /// Everything is compared except `engine_version`.
    #[must_use]
    pub fn matches(&self, other: &Snapshot) -> bool {
        self.test_case_id == other.test_case_id
            && self.description == other.description
            && self.provenance == other.provenance
            && self.tags == other.tags
            && self.input == other.input
            && self.result == other.result
    }
}
