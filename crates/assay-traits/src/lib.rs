//! # Assay Traits
//!
//! Trait definitions for the Assay regression pipeline.
//!
//! The pipeline core is a pure library; it consumes exactly two external
//! capabilities, defined here so any transport or persistence technology
//! can satisfy them:
//!
//! - [`capture`]: fetching previously captured calculation records
//!   ([`RecordSource`]) and emitting new ones ([`RecordSink`])
//! - [`store`]: reading and writing named baseline snapshots
//!   ([`BaselineStore`])
//!
//! The canonical [`snapshot::Snapshot`] projection lives here too, so storage
//! extensions can depend on it without pulling in the harness.
//!
//! Implementations are EXTENSIONS (files, databases, log stores); the traits
//! themselves carry no runtime dependencies.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod capture;
pub mod error;
pub mod snapshot;
pub mod store;

// Re-export commonly used types
pub use capture::{NullRecordSink, RecordSink, RecordSource};
pub use error::StoreError;
pub use snapshot::{Snapshot, SnapshotResult};
pub use store::BaselineStore;
