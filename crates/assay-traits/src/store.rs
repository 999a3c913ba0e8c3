//! Baseline store trait.

use assay_core::TestCaseId;

use crate::error::StoreError;
use crate::snapshot::Snapshot;

/// Persisted key-value mapping from test case id to last-accepted snapshot.
///
/// Keyed 1:1 - each test case id maps to one independent baseline record, so
/// concurrent writes for *different* ids never race. The harness treats any
/// error from this trait as fatal for the run: a store that cannot be read
/// must abort the run rather than let every test case silently report as new.
pub trait BaselineStore: Send + Sync {
    /// Reads the baseline snapshot for a test case, if one exists.
    fn read(&self, id: &TestCaseId) -> Result<Option<Snapshot>, StoreError>;

    /// Writes (or overwrites) the baseline snapshot for a test case.
    fn write(&self, id: &TestCaseId, snapshot: &Snapshot) -> Result<(), StoreError>;
}
