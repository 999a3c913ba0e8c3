//! File-based record source.

use std::path::{Path, PathBuf};

use assay_core::CalculationRecord;
use assay_traits::{RecordSource, StoreError};

/// Captured calculation records from a JSON file.
///
/// The file holds a JSON array of records, typically exported from the
/// log/search backend that captured the recorder's emissions. File order is
/// preserved so curation stays reproducible from the same export.
pub struct JsonRecordSource {
    file_path: PathBuf,
}

impl JsonRecordSource {
    /// Creates a source over a records file.
    #[must_use]
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSource for JsonRecordSource {
    fn fetch_records(&self, filter_tag: &str) -> Result<Vec<CalculationRecord>, StoreError> {
        if !self.file_path.exists() {
            return Ok(Vec::new()); // Empty source
        }

        let content = std::fs::read_to_string(&self.file_path)
            .map_err(|e| StoreError::IoError(format!("{}: {e}", self.file_path.display())))?;
        let records: Vec<CalculationRecord> = serde_json::from_str(&content)
            .map_err(|e| StoreError::ParseError(format!("{}: {e}", self.file_path.display())))?;

        Ok(records
            .into_iter()
            .filter(|record| record.event == filter_tag)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay_core::{BondTerms, CalculationInput, Date, CALCULATION_EVENT};
    use rust_decimal_macros::dec;

    fn record(id: &str, event: &str) -> CalculationRecord {
        let settlement = Date::from_ymd(2024, 6, 15).unwrap();
        let terms = BondTerms::new("BOND-1", dec!(5), settlement.add_years(5).unwrap()).unwrap();
        let input = CalculationInput::new(terms, dec!(100), settlement).unwrap();
        let mut record = CalculationRecord::failure(id, "calculate", input, "unused");
        record.event = event.to_string();
        record
    }

    #[test]
    fn test_missing_file_is_empty_source() {
        let source = JsonRecordSource::new("/nonexistent/records.json");
        assert!(source.fetch_records(CALCULATION_EVENT).unwrap().is_empty());
    }

    #[test]
    fn test_filters_by_event_and_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        let records = vec![
            record("r1", CALCULATION_EVENT),
            record("r2", "unrelated-log-line"),
            record("r3", CALCULATION_EVENT),
        ];
        std::fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

        let source = JsonRecordSource::new(&path);
        let fetched = source.fetch_records(CALCULATION_EVENT).unwrap();
        let ids: Vec<_> = fetched.iter().map(|r| r.correlation_id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r3"]);
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        std::fs::write(&path, "[{ truncated").unwrap();

        let source = JsonRecordSource::new(&path);
        assert!(matches!(
            source.fetch_records(CALCULATION_EVENT),
            Err(StoreError::ParseError(_))
        ));
    }
}
