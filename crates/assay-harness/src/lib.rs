//! # Assay Harness
//!
//! Snapshot-based regression harness: runs the calculation engine over the
//! golden dataset, projects each result into a canonical [`Snapshot`], and
//! compares it against the named baseline in a persisted store.
//!
//! Per test case the harness is a two-state machine - *unbaselined* (no
//! stored snapshot) and *baselined*. The first comparison of an unbaselined
//! case persists the received snapshot and reports [`Outcome::New`];
//! subsequent comparisons report [`Outcome::Match`] or
//! [`Outcome::Mismatch`] without touching the store. Moving a changed
//! baseline forward is always an explicit [`RegressionHarness::accept`]
//! call, never an automatic side effect of comparison.
//!
//! A mismatch is a *reported result*, not a harness defect; an engine
//! failure surfaces as its own outcome rather than being coerced into a
//! mismatch.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod dataset;
mod harness;

pub use assay_traits::{Snapshot, SnapshotResult};
pub use dataset::GoldenDataset;
pub use harness::{
    CancellationFlag, CaseResult, HarnessConfig, Outcome, RegressionHarness, RunReport,
};
