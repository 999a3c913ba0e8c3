//! Error types for the Assay pipeline.
//!
//! This module defines the error types used throughout Assay,
//! providing structured error handling with context.
//!
//! Two outcomes are deliberately *not* errors and have no variant here: an
//! under-filled curation bucket (curation proceeds with reduced coverage)
//! and a snapshot mismatch (a reported regression result requiring human
//! review).

use thiserror::Error;

/// A specialized Result type for Assay operations.
pub type AssayResult<T> = Result<T, AssayError>;

/// The main error type for Assay operations.
#[derive(Error, Debug, Clone)]
pub enum AssayError {
    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Invalid calculation input, surfaced to the caller and never retried.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of what's invalid.
        reason: String,
    },

    /// Error inside an analytics calculation.
    #[error("Calculation error: {reason}")]
    Calculation {
        /// Description of what went wrong.
        reason: String,
    },

    /// Attempt to anonymize a record that did not represent a successful
    /// calculation. Callers must filter to successful records first.
    #[error("Anonymization precondition failed: {reason}")]
    AnonymizationPrecondition {
        /// Description of the violated precondition.
        reason: String,
    },

    /// The recorder could not emit a calculation record. Reported but never
    /// allowed to fail the calling calculation.
    #[error("Recording failure: {reason}")]
    RecordingFailure {
        /// Description of the failure.
        reason: String,
    },

    /// The baseline store could not be read or written. Fatal for a harness
    /// run; the run aborts rather than treating every test case as new.
    #[error("Baseline store unavailable: {reason}")]
    BaselineStoreUnavailable {
        /// Description of the failure.
        reason: String,
    },

    /// Invalid golden dataset content (duplicate ids, unreadable file).
    #[error("Dataset error: {reason}")]
    Dataset {
        /// Description of the error.
        reason: String,
    },
}

impl AssayError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a calculation error.
    #[must_use]
    pub fn calculation(reason: impl Into<String>) -> Self {
        Self::Calculation {
            reason: reason.into(),
        }
    }

    /// Creates an anonymization precondition error.
    #[must_use]
    pub fn anonymization_precondition(reason: impl Into<String>) -> Self {
        Self::AnonymizationPrecondition {
            reason: reason.into(),
        }
    }

    /// Creates a recording failure error.
    #[must_use]
    pub fn recording_failure(reason: impl Into<String>) -> Self {
        Self::RecordingFailure {
            reason: reason.into(),
        }
    }

    /// Creates a baseline store error.
    #[must_use]
    pub fn baseline_store_unavailable(reason: impl Into<String>) -> Self {
        Self::BaselineStoreUnavailable {
            reason: reason.into(),
        }
    }

    /// Creates a dataset error.
    #[must_use]
    pub fn dataset(reason: impl Into<String>) -> Self {
        Self::Dataset {
            reason: reason.into(),
        }
    }
}
