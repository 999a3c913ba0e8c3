//! Calculation recorder.
//!
//! Wraps the engine so that every invocation, success or failure, emits
//! exactly one structured [`CalculationRecord`] tagged with the fixed event
//! classifier. Recording is fire-and-forget relative to the calculation
//! path: a sink failure is reported through `tracing` and swallowed, never
//! surfaced to the caller of the calculation.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use assay_core::{AnalyticsResult, AssayResult, CalculationInput, CalculationRecord};
use assay_traits::RecordSink;

use crate::engine::AnalyticsEngine;

/// Engine wrapper that captures one record per invocation.
pub struct CalculationRecorder {
    engine: AnalyticsEngine,
    sink: Arc<dyn RecordSink>,
}

impl CalculationRecorder {
    /// Creates a recorder around a fresh engine.
    #[must_use]
    pub fn new(sink: Arc<dyn RecordSink>) -> Self {
        Self {
            engine: AnalyticsEngine::new(),
            sink,
        }
    }

    /// Access to the wrapped engine.
    #[must_use]
    pub fn engine(&self) -> &AnalyticsEngine {
        &self.engine
    }

    /// Runs the calculation and emits its record.
    ///
    /// The return value is exactly what the engine produced; emission
    /// happens after the outcome is known and cannot alter it.
    ///
    /// # Errors
    ///
    /// Propagates the engine's error unchanged on calculation failure.
    pub fn calculate(
        &self,
        operation: &str,
        input: &CalculationInput,
    ) -> AssayResult<AnalyticsResult> {
        let correlation_id = Uuid::new_v4().to_string();
        let outcome = self.engine.calculate(input);

        let record = match &outcome {
            Ok(result) => CalculationRecord::success(
                correlation_id.clone(),
                operation,
                input.clone(),
                result.clone(),
            ),
            Err(err) => CalculationRecord::failure(
                correlation_id.clone(),
                operation,
                input.clone(),
                err.to_string(),
            ),
        };

        debug!(
            correlation_id = %correlation_id,
            operation,
            instrument = %input.terms.identifier,
            success = record.success,
            "calculation recorded"
        );

        if let Err(err) = self.sink.emit(&record) {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "failed to emit calculation record"
            );
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay_core::{BondTerms, Date, CALCULATION_EVENT};
    use assay_traits::StoreError;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    struct CapturingSink {
        records: Mutex<Vec<CalculationRecord>>,
    }

    impl CapturingSink {
        fn new() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
            }
        }
    }

    impl RecordSink for CapturingSink {
        fn emit(&self, record: &CalculationRecord) -> Result<(), StoreError> {
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    struct FailingSink;

    impl RecordSink for FailingSink {
        fn emit(&self, _record: &CalculationRecord) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("transport down".to_string()))
        }
    }

    fn valid_input() -> CalculationInput {
        let maturity = Date::from_ymd(2029, 6, 15).unwrap();
        let terms = BondTerms::new("US912828XG20", dec!(5.0), maturity).unwrap();
        CalculationInput::new(terms, dec!(100), Date::from_ymd(2024, 6, 15).unwrap()).unwrap()
    }

    fn invalid_input() -> CalculationInput {
        let maturity = Date::from_ymd(2024, 6, 15).unwrap();
        let terms = BondTerms::new("US912828XG20", dec!(5.0), maturity).unwrap();
        CalculationInput::new(terms, dec!(100), Date::from_ymd(2029, 6, 15).unwrap()).unwrap()
    }

    #[test]
    fn test_success_emits_one_record_with_result() {
        let sink = Arc::new(CapturingSink::new());
        let recorder = CalculationRecorder::new(sink.clone());

        let result = recorder.calculate("calculate", &valid_input());
        assert!(result.is_ok());

        let records = sink.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert!(record.success);
        assert!(record.result.is_some());
        assert!(record.error.is_none());
        assert_eq!(record.event, CALCULATION_EVENT);
        assert_eq!(record.operation, "calculate");
        assert!(!record.correlation_id.is_empty());
    }

    #[test]
    fn test_failure_emits_one_record_without_result() {
        let sink = Arc::new(CapturingSink::new());
        let recorder = CalculationRecorder::new(sink.clone());

        let result = recorder.calculate("calculate", &invalid_input());
        assert!(result.is_err());

        let records = sink.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert!(!record.success);
        assert!(record.result.is_none());
        assert!(record.error.as_deref().unwrap_or_default().contains("settlement"));
    }

    #[test]
    fn test_sink_failure_does_not_affect_result() {
        let recorder = CalculationRecorder::new(Arc::new(FailingSink));
        let result = recorder.calculate("calculate", &valid_input());
        assert!(result.is_ok());
    }

    #[test]
    fn test_distinct_correlation_ids() {
        let sink = Arc::new(CapturingSink::new());
        let recorder = CalculationRecorder::new(sink.clone());
        recorder.calculate("calculate", &valid_input()).unwrap();
        recorder.calculate("calculate", &valid_input()).unwrap();

        let records = sink.records.lock().unwrap();
        assert_ne!(records[0].correlation_id, records[1].correlation_id);
    }
}
