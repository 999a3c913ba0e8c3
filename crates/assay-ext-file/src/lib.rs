//! # Assay Ext File
//!
//! File-based implementations of the Assay external capabilities.
//!
//! This crate provides default implementations for testing, CI, and
//! single-machine use:
//!
//! - [`JsonRecordSource`]: captured calculation records from a JSON file
//! - [`FileBaselineStore`]: one pretty-printed JSON baseline file per test
//!   case id under a root directory
//! - [`MemoryBaselineStore`]: in-memory store for tests and ephemeral runs
//! - [`GoldenDatasetFile`]: the versioned, human-reviewable golden dataset
//!   document split by provenance
//!
//! For production capture transports, implement the `assay-traits` traits
//! over the real log/search backend.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod baseline_store;
mod dataset_file;
mod record_source;

pub use baseline_store::{FileBaselineStore, MemoryBaselineStore};
pub use dataset_file::GoldenDatasetFile;
pub use record_source::JsonRecordSource;
