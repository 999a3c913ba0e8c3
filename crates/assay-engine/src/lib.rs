//! # Assay Engine
//!
//! Deterministic bond-analytics calculation engine and the recorder that
//! captures every invocation as a structured record.
//!
//! The engine is a total, pure function from [`CalculationInput`] to
//! [`AnalyticsResult`]: given identical input and identical engine version,
//! the rounded output is byte-for-byte identical. The formulas are
//! deliberately simplified placeholders for a real analytics library - the
//! pipeline's value is regression *stability*, not financial accuracy, so
//! the stated formulas are preserved exactly rather than corrected.
//!
//! [`CalculationInput`]: assay_core::CalculationInput
//! [`AnalyticsResult`]: assay_core::AnalyticsResult

#![warn(missing_docs)]
#![warn(clippy::all)]

mod engine;
mod recorder;

pub use engine::{AnalyticsEngine, ENGINE_VERSION};
pub use recorder::CalculationRecorder;
