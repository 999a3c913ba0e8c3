//! # Assay Curation
//!
//! Turns a large pool of captured calculation records into a bounded,
//! diverse, privacy-safe set of golden-dataset test cases.
//!
//! Two stages, both deterministic given identical input ordering:
//!
//! - [`DatasetCurator`]: stratified sampling across price level, coupon
//!   level, and maturity horizon
//! - [`Anonymizer`]: replaces sensitive identifiers with sequential
//!   synthetic ones and derives a description plus a tag set from the
//!   record's characteristics
//!
//! [`CurationPipeline`] ties a record source, the curator, and a
//! per-run anonymizer into the end-to-end flow.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod anonymizer;
mod curator;
mod pipeline;

pub use anonymizer::Anonymizer;
pub use curator::DatasetCurator;
pub use pipeline::CurationPipeline;
