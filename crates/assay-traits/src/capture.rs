//! Record capture traits.
//!
//! The recorder emits one [`CalculationRecord`](assay_core::CalculationRecord)
//! per engine invocation through a [`RecordSink`]; some searchable store
//! captures them, and the curation pipeline later pulls them back out through
//! a [`RecordSource`]. Any message queue, log store, or flat file can play
//! either role.

use assay_core::CalculationRecord;

use crate::error::StoreError;

/// A source of previously captured calculation records.
///
/// Implementations return a finite, ordered list. Curation is deterministic
/// given identical record order, so implementations should preserve whatever
/// stable ordering the backing store provides.
pub trait RecordSource: Send + Sync {
    /// Fetches records whose event classifier equals `filter_tag`.
    fn fetch_records(&self, filter_tag: &str) -> Result<Vec<CalculationRecord>, StoreError>;
}

/// A sink the recorder emits calculation records into.
///
/// Emission is fire-and-forget relative to the calculation path: the
/// recorder reports sink failures but never propagates them to the caller
/// of the calculation.
pub trait RecordSink: Send + Sync {
    /// Emits one record.
    fn emit(&self, record: &CalculationRecord) -> Result<(), StoreError>;
}

/// A sink that discards every record.
///
/// For tests and for running the engine without a capture transport.
pub struct NullRecordSink;

impl RecordSink for NullRecordSink {
    fn emit(&self, _record: &CalculationRecord) -> Result<(), StoreError> {
        Ok(())
    }
}
