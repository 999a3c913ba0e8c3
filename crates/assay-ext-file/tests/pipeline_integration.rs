//! End-to-end flow: capture records, curate a golden dataset, then run the
//! regression harness against file-backed baselines.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use assay_core::{
    BondTerms, CalculationInput, CalculationRecord, Date, Provenance, TestCase, TestCaseId,
};
use assay_curation::CurationPipeline;
use assay_engine::CalculationRecorder;
use assay_ext_file::{FileBaselineStore, GoldenDatasetFile, JsonRecordSource};
use assay_harness::{CancellationFlag, GoldenDataset, RegressionHarness};
use assay_traits::{NullRecordSink, RecordSink, StoreError};

/// Collects emitted records like the real capture transport would.
struct CollectingSink {
    records: Mutex<Vec<CalculationRecord>>,
}

impl RecordSink for CollectingSink {
    fn emit(&self, record: &CalculationRecord) -> Result<(), StoreError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

fn input(identifier: &str, coupon: Decimal, price: Decimal, years: i32) -> CalculationInput {
    let settlement = Date::from_ymd(2024, 6, 15).unwrap();
    let maturity = settlement.add_years(years).unwrap();
    let terms = BondTerms::new(identifier, coupon, maturity).unwrap();
    CalculationInput::new(terms, price, settlement).unwrap()
}

fn synthetic_case() -> TestCase {
    TestCase {
        id: TestCaseId::new("syn-001"),
        description: "hand-authored par bond".to_string(),
        input: input("SYN-PAR", dec!(5), dec!(100), 5),
        provenance: Provenance::Synthetic,
        tags: vec!["par".to_string()],
        created_at: Utc::now(),
    }
}

#[test]
fn capture_curate_and_regress_end_to_end() {
    let work_dir = tempfile::tempdir().unwrap();

    // Stage 1: the application calculates; the recorder captures.
    let sink = Arc::new(CollectingSink {
        records: Mutex::new(Vec::new()),
    });
    let recorder = CalculationRecorder::new(sink.clone());

    let prices = [dec!(85), dec!(95), dec!(100), dec!(105), dec!(115)];
    let coupons = [dec!(1.5), dec!(3.5), dec!(5), dec!(6.5), dec!(8)];
    for i in 0..30 {
        let identifier = format!("LIVE-{i:03}");
        let input = input(&identifier, coupons[i % 5], prices[(i / 5) % 5], 1 + (i % 12) as i32);
        recorder.calculate("calculate", &input).unwrap();
    }
    // One failing call is captured too, and later filtered by curation.
    let bad_settlement = Date::from_ymd(2040, 1, 1).unwrap();
    let bad_terms = BondTerms::new("LIVE-BAD", dec!(5), Date::from_ymd(2030, 1, 1).unwrap()).unwrap();
    let bad = CalculationInput::new(bad_terms, dec!(100), bad_settlement).unwrap();
    assert!(recorder.calculate("calculate", &bad).is_err());

    let captured = sink.records.lock().unwrap().clone();
    assert_eq!(captured.len(), 31);
    let records_path = work_dir.path().join("captured_records.json");
    std::fs::write(&records_path, serde_json::to_string(&captured).unwrap()).unwrap();

    // Stage 2: curation produces the production half of the golden dataset.
    let pipeline = CurationPipeline::new(Arc::new(JsonRecordSource::new(&records_path)));
    let production = pipeline.run(10).unwrap();
    assert!(!production.is_empty());
    assert!(production.len() <= 10);
    assert!(production
        .iter()
        .all(|c| c.input.terms.identifier.starts_with("ANON")));

    let dataset_path = work_dir.path().join("golden_dataset.json");
    let mut dataset_file = GoldenDatasetFile::new();
    dataset_file.synthetic.push(synthetic_case());
    dataset_file.set_production(production);
    dataset_file.save(&dataset_path).unwrap();

    // Stage 3: the harness replays the dataset against file baselines.
    let loaded = GoldenDatasetFile::load(&dataset_path).unwrap();
    let dataset = GoldenDataset::from_cases(loaded.ordered_cases()).unwrap();
    let store = Arc::new(FileBaselineStore::new(work_dir.path().join("baselines")).unwrap());
    let harness = RegressionHarness::new(Arc::new(NullRecordSink), store.clone());

    let first = harness.run_all(&dataset, &CancellationFlag::new()).unwrap();
    assert_eq!(first.new_count(), dataset.len());
    assert!(first.is_clean());

    // Unchanged engine, unchanged dataset: every baselined case matches.
    let second = harness.run_all(&dataset, &CancellationFlag::new()).unwrap();
    assert_eq!(second.match_count(), dataset.len());
    assert_eq!(second.new_count(), 0);
    assert!(second.is_clean());

    // The baselines are ordinary files, one per test case.
    let baseline_files = std::fs::read_dir(work_dir.path().join("baselines"))
        .unwrap()
        .count();
    assert_eq!(baseline_files, dataset.len());
}
