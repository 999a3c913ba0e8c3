//! Captured calculation records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AnalyticsResult, CalculationInput};

/// Fixed event classifier stamped on every calculation record.
///
/// The capture transport filters on this value to separate calculation
/// records from general application logs. Stable across the system's
/// lifetime; changing it orphans previously captured records.
pub const CALCULATION_EVENT: &str = "bond-analytics-calculation";

/// One captured engine invocation, success or failure.
///
/// Append-only: the recorder emits exactly one record per invocation and
/// nothing ever mutates it afterwards. This is the unit the dataset curator
/// ingests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// Correlation identifier assigned by the recorder.
    pub correlation_id: String,
    /// Event classifier; always [`CALCULATION_EVENT`] for records produced
    /// by this pipeline.
    pub event: String,
    /// Name of the operation that was invoked.
    pub operation: String,
    /// The full calculation input.
    pub input: CalculationInput,
    /// The analytics result. Absent when the calculation failed.
    pub result: Option<AnalyticsResult>,
    /// Whether the calculation succeeded.
    pub success: bool,
    /// Error message when the calculation failed.
    pub error: Option<String>,
    /// When the record was emitted.
    pub recorded_at: DateTime<Utc>,
}

impl CalculationRecord {
    /// Builds a success record embedding the analytics result.
    #[must_use]
    pub fn success(
        correlation_id: impl Into<String>,
        operation: impl Into<String>,
        input: CalculationInput,
        result: AnalyticsResult,
    ) -> Self {
        Self {
            correlation_id: correlation_id.into(),
            event: CALCULATION_EVENT.to_string(),
            operation: operation.into(),
            input,
            result: Some(result),
            success: true,
            error: None,
            recorded_at: Utc::now(),
        }
    }

    /// Builds a failure record embedding the error message.
    #[must_use]
    pub fn failure(
        correlation_id: impl Into<String>,
        operation: impl Into<String>,
        input: CalculationInput,
        error: impl Into<String>,
    ) -> Self {
        Self {
            correlation_id: correlation_id.into(),
            event: CALCULATION_EVENT.to_string(),
            operation: operation.into(),
            input,
            result: None,
            success: false,
            error: Some(error.into()),
            recorded_at: Utc::now(),
        }
    }
}
