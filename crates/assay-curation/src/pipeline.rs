//! End-to-end curation pipeline.

use std::sync::Arc;

use tracing::info;

use assay_core::{AssayError, AssayResult, TestCase, TestCaseId, CALCULATION_EVENT};
use assay_traits::RecordSource;

use crate::anonymizer::Anonymizer;
use crate::curator::DatasetCurator;

/// Fetches captured records, curates a bounded diverse subset, and
/// anonymizes each selected record into a production test case.
///
/// One pipeline run owns one anonymizer instance, so synthetic identifiers
/// restart at `ANON000001` for every run and test case ids are assigned
/// sequentially (`prod-001`, `prod-002`, ...).
pub struct CurationPipeline {
    source: Arc<dyn RecordSource>,
    curator: DatasetCurator,
}

impl CurationPipeline {
    /// Creates a pipeline over a record source.
    #[must_use]
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self {
            source,
            curator: DatasetCurator::new(),
        }
    }

    /// Produces at most `max_count` production test cases.
    ///
    /// # Errors
    ///
    /// Returns `AssayError::Dataset` when the record source fails. Failed
    /// calculation records are filtered out before curation, so the
    /// anonymization precondition cannot trip here.
    pub fn run(&self, max_count: usize) -> AssayResult<Vec<TestCase>> {
        let records = self
            .source
            .fetch_records(CALCULATION_EVENT)
            .map_err(|e| AssayError::dataset(format!("record source failed: {e}")))?;
        let total = records.len();

        let successes: Vec<_> = records.into_iter().filter(|r| r.success).collect();
        let curated = self.curator.curate(&successes, max_count);

        let mut anonymizer = Anonymizer::new();
        let mut cases = Vec::with_capacity(curated.len());
        for (index, record) in curated.iter().enumerate() {
            let id = TestCaseId::new(format!("prod-{:03}", index + 1));
            cases.push(anonymizer.anonymize(record, id)?);
        }

        info!(
            captured = total,
            successful = successes.len(),
            curated = cases.len(),
            "curation pipeline produced test cases"
        );
        Ok(cases)
    }
}
