//! The golden dataset: the curated regression corpus.

use std::collections::HashMap;

use assay_core::{AssayError, AssayResult, TestCase, TestCaseId};

/// Insertion-ordered, id-unique collection of test cases.
///
/// Iteration order is the insertion order, so a regression run visits test
/// cases reproducibly. Test cases are immutable once inserted.
#[derive(Debug, Clone, Default)]
pub struct GoldenDataset {
    cases: Vec<TestCase>,
    index: HashMap<TestCaseId, usize>,
}

impl GoldenDataset {
    /// Creates an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dataset from a list of cases.
    ///
    /// # Errors
    ///
    /// Returns `AssayError::Dataset` on a duplicate test case id.
    pub fn from_cases(cases: impl IntoIterator<Item = TestCase>) -> AssayResult<Self> {
        let mut dataset = Self::new();
        for case in cases {
            dataset.insert(case)?;
        }
        Ok(dataset)
    }

    /// Appends a test case.
    ///
    /// # Errors
    ///
    /// Returns `AssayError::Dataset` when a case with the same id already
    /// exists.
    pub fn insert(&mut self, case: TestCase) -> AssayResult<()> {
        if self.index.contains_key(&case.id) {
            return Err(AssayError::dataset(format!(
                "duplicate test case id: {}",
                case.id
            )));
        }
        self.index.insert(case.id.clone(), self.cases.len());
        self.cases.push(case);
        Ok(())
    }

    /// Looks up a test case by id.
    #[must_use]
    pub fn get(&self, id: &TestCaseId) -> Option<&TestCase> {
        self.index.get(id).map(|&i| &self.cases[i])
    }

    /// The cases in insertion order.
    #[must_use]
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Iterates cases in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TestCase> {
        self.cases.iter()
    }

    /// Number of cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the dataset is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl IntoIterator for GoldenDataset {
    type Item = TestCase;
    type IntoIter = std::vec::IntoIter<TestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.into_iter()
    }
}
