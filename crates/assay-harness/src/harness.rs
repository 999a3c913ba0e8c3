//! The snapshot regression harness.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info};

use assay_core::{AssayError, AssayResult, TestCase, TestCaseId};
use assay_engine::CalculationRecorder;
use assay_traits::{BaselineStore, RecordSink, Snapshot, StoreError};

use crate::dataset::GoldenDataset;

/// Operation name stamped on records the harness emits.
const RUN_OPERATION: &str = "regression-run";

/// Harness tuning.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Upper bound on test cases in flight at once during [`RegressionHarness::run_all`].
    pub parallelism: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self { parallelism: 4 }
    }
}

/// Cooperative cancellation handle for a harness run.
///
/// Cancelling stops the scheduling of further test cases; cases already in
/// flight complete normally, so no partially written baseline is left
/// behind.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    /// Creates a flag in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Result of comparing one test case against its baseline.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// No baseline existed; the received snapshot was persisted as the new
    /// baseline (first-run semantics).
    New {
        /// The snapshot that became the baseline.
        received: Snapshot,
    },
    /// Received snapshot structurally equals the stored baseline.
    Match {
        /// The stored baseline (equal to the received projection).
        baseline: Snapshot,
    },
    /// Received snapshot differs from the stored baseline. The store is
    /// left untouched; an operator reviews and either fixes the engine or
    /// accepts the change.
    Mismatch {
        /// The stored baseline.
        baseline: Snapshot,
        /// The freshly computed snapshot.
        received: Snapshot,
    },
    /// The engine failed on this test case's input. Distinct from a
    /// mismatch by contract.
    EngineError {
        /// The engine's error message.
        message: String,
    },
    /// The case was never scheduled because the run was cancelled.
    Skipped,
}

/// One test case's outcome within a run.
#[derive(Debug, Clone)]
pub struct CaseResult {
    /// The test case id.
    pub test_case_id: TestCaseId,
    /// What happened.
    pub outcome: Outcome,
}

/// Aggregated outcomes of one harness run, in dataset order.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Per-case outcomes.
    pub results: Vec<CaseResult>,
}

impl RunReport {
    fn count(&self, predicate: impl Fn(&Outcome) -> bool) -> usize {
        self.results.iter().filter(|r| predicate(&r.outcome)).count()
    }

    /// Cases baselined for the first time.
    #[must_use]
    pub fn new_count(&self) -> usize {
        self.count(|o| matches!(o, Outcome::New { .. }))
    }

    /// Cases matching their baseline.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Match { .. }))
    }

    /// Cases differing from their baseline.
    #[must_use]
    pub fn mismatch_count(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Mismatch { .. }))
    }

    /// Cases where the engine itself failed.
    #[must_use]
    pub fn engine_error_count(&self) -> usize {
        self.count(|o| matches!(o, Outcome::EngineError { .. }))
    }

    /// Cases skipped due to cancellation.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped))
    }

    /// True when nothing regressed: no mismatches and no engine errors.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.mismatch_count() == 0 && self.engine_error_count() == 0
    }
}

/// Runs golden-dataset test cases against the engine and compares snapshots
/// with a persisted baseline store.
pub struct RegressionHarness {
    recorder: CalculationRecorder,
    store: Arc<dyn BaselineStore>,
    config: HarnessConfig,
}

impl RegressionHarness {
    /// Creates a harness with default configuration.
    #[must_use]
    pub fn new(sink: Arc<dyn RecordSink>, store: Arc<dyn BaselineStore>) -> Self {
        Self {
            recorder: CalculationRecorder::new(sink),
            store,
            config: HarnessConfig::default(),
        }
    }

    /// Overrides the configuration.
    #[must_use]
    pub fn with_config(mut self, config: HarnessConfig) -> Self {
        self.config = config;
        self
    }

    /// Invokes the engine (through the recorder) for one test case and
    /// builds the canonical comparison projection.
    ///
    /// Does not read or mutate the baseline store.
    ///
    /// # Errors
    ///
    /// Propagates the engine's error when the calculation fails.
    pub fn run(&self, test_case: &TestCase) -> AssayResult<Snapshot> {
        let result = self.recorder.calculate(RUN_OPERATION, &test_case.input)?;
        Ok(Snapshot::capture(test_case, &result))
    }

    /// Compares one test case against its stored baseline.
    ///
    /// In the unbaselined state the received snapshot is persisted and the
    /// outcome is [`Outcome::New`]; in the baselined state the stored
    /// baseline is never mutated here.
    ///
    /// # Errors
    ///
    /// Returns `AssayError::BaselineStoreUnavailable` when the store cannot
    /// be read or written; the surrounding run aborts rather than treating
    /// cases as new.
    pub fn compare(&self, test_case: &TestCase) -> AssayResult<Outcome> {
        let received = match self.run(test_case) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                debug!(test_case = %test_case.id, error = %err, "engine failed during run");
                return Ok(Outcome::EngineError {
                    message: err.to_string(),
                });
            }
        };

        match self.store.read(&test_case.id).map_err(store_failure)? {
            None => {
                self.store
                    .write(&test_case.id, &received)
                    .map_err(store_failure)?;
                Ok(Outcome::New { received })
            }
            Some(baseline) => {
                if baseline.matches(&received) {
                    Ok(Outcome::Match { baseline })
                } else {
                    Ok(Outcome::Mismatch { baseline, received })
                }
            }
        }
    }

    /// Explicit operator action: overwrite the stored baseline with the
    /// received snapshot.
    ///
    /// Idempotent; accepting the same snapshot twice leaves the stored
    /// baseline identical to a single call. Never invoked automatically by
    /// [`RegressionHarness::compare`].
    ///
    /// # Errors
    ///
    /// Returns `AssayError::BaselineStoreUnavailable` when the write fails.
    pub fn accept(&self, id: &TestCaseId, received: &Snapshot) -> AssayResult<()> {
        self.store.write(id, received).map_err(store_failure)?;
        info!(test_case = %id, "baseline accepted");
        Ok(())
    }

    /// Compares every test case in the dataset, in dataset order, with at
    /// most `parallelism` cases in flight at once.
    ///
    /// Each case is processed by exactly one worker; baselines for
    /// different ids live in independent store records, so concurrent
    /// first-run writes never race. Cancellation stops scheduling new
    /// cases; the remainder report [`Outcome::Skipped`].
    ///
    /// # Errors
    ///
    /// Aborts with `AssayError::BaselineStoreUnavailable` on the first
    /// store failure.
    pub fn run_all(
        &self,
        dataset: &GoldenDataset,
        cancel: &CancellationFlag,
    ) -> AssayResult<RunReport> {
        let width = self.config.parallelism.max(1);
        let mut report = RunReport {
            results: Vec::with_capacity(dataset.len()),
        };

        for chunk in dataset.cases().chunks(width) {
            let chunk_results: Vec<AssayResult<CaseResult>> = chunk
                .par_iter()
                .map(|case| {
                    if cancel.is_cancelled() {
                        return Ok(CaseResult {
                            test_case_id: case.id.clone(),
                            outcome: Outcome::Skipped,
                        });
                    }
                    let outcome = self.compare(case)?;
                    Ok(CaseResult {
                        test_case_id: case.id.clone(),
                        outcome,
                    })
                })
                .collect();

            for result in chunk_results {
                report.results.push(result?);
            }
        }

        info!(
            total = report.results.len(),
            new = report.new_count(),
            matched = report.match_count(),
            mismatched = report.mismatch_count(),
            engine_errors = report.engine_error_count(),
            skipped = report.skipped_count(),
            "regression run complete"
        );
        Ok(report)
    }
}

fn store_failure(err: StoreError) -> AssayError {
    AssayError::baseline_store_unavailable(err.to_string())
}
