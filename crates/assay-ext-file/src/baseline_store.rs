//! Baseline store implementations.

use std::fs;
use std::path::{Path, PathBuf};

use dashmap::DashMap;

use assay_core::TestCaseId;
use assay_traits::{BaselineStore, Snapshot, StoreError};

/// One JSON file per test case id under a root directory.
///
/// Each id maps to an independent file, so concurrent writes for different
/// test cases never touch the same path. Files are pretty-printed so
/// baseline diffs stay reviewable in version control.
pub struct FileBaselineStore {
    root: PathBuf,
}

impl FileBaselineStore {
    /// Creates the store, creating the root directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` when the directory cannot be
    /// created.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| {
            StoreError::Unavailable(format!(
                "cannot create baseline directory {}: {e}",
                root.display()
            ))
        })?;
        Ok(Self { root })
    }

    /// The file a test case id maps to.
    ///
    /// Ids are sanitized to filesystem-safe names; anything outside
    /// alphanumerics, dash, and underscore becomes an underscore.
    #[must_use]
    pub fn path_for(&self, id: &TestCaseId) -> PathBuf {
        let safe: String = id
            .as_str()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{safe}.json"))
    }
}

impl BaselineStore for FileBaselineStore {
    fn read(&self, id: &TestCaseId) -> Result<Option<Snapshot>, StoreError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .map_err(|e| StoreError::IoError(format!("{}: {e}", path.display())))?;
        let snapshot = serde_json::from_str(&content)
            .map_err(|e| StoreError::ParseError(format!("{}: {e}", path.display())))?;
        Ok(Some(snapshot))
    }

    fn write(&self, id: &TestCaseId, snapshot: &Snapshot) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(snapshot)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;
        let path = self.path_for(id);
        fs::write(&path, content)
            .map_err(|e| StoreError::IoError(format!("{}: {e}", path.display())))
    }
}

/// In-memory baseline store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryBaselineStore {
    baselines: DashMap<TestCaseId, Snapshot>,
}

impl MemoryBaselineStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored baselines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.baselines.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }
}

impl BaselineStore for MemoryBaselineStore {
    fn read(&self, id: &TestCaseId) -> Result<Option<Snapshot>, StoreError> {
        Ok(self.baselines.get(id).map(|entry| entry.value().clone()))
    }

    fn write(&self, id: &TestCaseId, snapshot: &Snapshot) -> Result<(), StoreError> {
        self.baselines.insert(id.clone(), snapshot.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay_core::{BondTerms, CalculationInput, Date, Provenance, TestCase};
    use assay_traits::SnapshotResult;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn snapshot(id: &str) -> Snapshot {
        let settlement = Date::from_ymd(2024, 6, 15).unwrap();
        let terms =
            BondTerms::new("ANON000001", dec!(5), settlement.add_years(5).unwrap()).unwrap();
        let case = TestCase {
            id: TestCaseId::new(id),
            description: "par bond".to_string(),
            input: CalculationInput::new(terms, dec!(100), settlement).unwrap(),
            provenance: Provenance::Production,
            tags: vec!["anonymized".to_string()],
            created_at: Utc::now(),
        };
        Snapshot {
            test_case_id: case.id.clone(),
            description: case.description.clone(),
            provenance: case.provenance,
            tags: case.tags.clone(),
            input: case.input.clone(),
            result: SnapshotResult {
                yield_to_maturity: dec!(5.0),
                modified_duration: dec!(4.2),
                macaulay_duration: dec!(4.3),
                convexity: dec!(27.5),
                accrued_interest: dec!(0),
                clean_price: dec!(100),
                dirty_price: dec!(100),
            },
            engine_version: "bondmath-1.0.0".to_string(),
        }
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBaselineStore::new(dir.path().join("baselines")).unwrap();
        let id = TestCaseId::new("prod-001");

        assert!(store.read(&id).unwrap().is_none());
        let snapshot = snapshot("prod-001");
        store.write(&id, &snapshot).unwrap();
        let loaded = store.read(&id).unwrap().unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_file_store_sanitizes_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBaselineStore::new(dir.path()).unwrap();
        let id = TestCaseId::new("case/with:odd chars");
        let path = store.path_for(&id);
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "case_with_odd_chars.json"
        );

        store.write(&id, &snapshot("x")).unwrap();
        assert!(store.read(&id).unwrap().is_some());
    }

    #[test]
    fn test_file_store_corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBaselineStore::new(dir.path()).unwrap();
        let id = TestCaseId::new("prod-001");
        fs::write(store.path_for(&id), "{ not json").unwrap();

        let err = store.read(&id).unwrap_err();
        assert!(matches!(err, StoreError::ParseError(_)));
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryBaselineStore::new();
        let id = TestCaseId::new("prod-001");
        assert!(store.read(&id).unwrap().is_none());

        let snapshot = snapshot("prod-001");
        store.write(&id, &snapshot).unwrap();
        assert_eq!(store.read(&id).unwrap().unwrap(), snapshot);
        assert_eq!(store.len(), 1);
    }
}
