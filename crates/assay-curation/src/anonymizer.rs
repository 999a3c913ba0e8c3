//! Anonymization of curated records into shareable test cases.

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use assay_core::{
    AssayError, AssayResult, CalculationInput, CalculationRecord, Provenance, TestCase, TestCaseId,
};

/// Converts successful calculation records into privacy-safe test cases.
///
/// Owns the mapping from record to test case and exclusively assigns the
/// synthetic identifiers: the n-th call on one instance yields
/// `ANON` plus the zero-padded six-digit call number. The counter is scoped
/// to the instance (one anonymization run), not globally persisted, which
/// keeps anonymization reproducible and testable in isolation.
#[derive(Debug, Default)]
pub struct Anonymizer {
    counter: u64,
}

impl Anonymizer {
    /// Creates an anonymizer with a fresh counter.
    #[must_use]
    pub fn new() -> Self {
        Self { counter: 0 }
    }

    /// Converts one successful record into a test case.
    ///
    /// # Errors
    ///
    /// Returns `AssayError::AnonymizationPrecondition` when the record did
    /// not represent a successful calculation; callers must filter to
    /// successes first.
    pub fn anonymize(
        &mut self,
        record: &CalculationRecord,
        test_case_id: TestCaseId,
    ) -> AssayResult<TestCase> {
        if !record.success {
            return Err(AssayError::anonymization_precondition(format!(
                "record {} is not a successful calculation",
                record.correlation_id
            )));
        }

        self.counter += 1;
        let synthetic_id = format!("ANON{:06}", self.counter);

        let mut input = record.input.clone();
        input.terms = input.terms.with_identifier(synthetic_id);

        let description = describe(&input);
        let tags = derive_tags(&input);

        Ok(TestCase {
            id: test_case_id,
            description,
            input,
            provenance: Provenance::Production,
            tags,
            created_at: Utc::now(),
        })
    }
}

/// One-sentence description from three independent descriptors.
fn describe(input: &CalculationInput) -> String {
    let price = input.market_price;
    let price_type = if price < dec!(98) {
        "discount"
    } else if price > dec!(102) {
        "premium"
    } else {
        "par"
    };

    let coupon = input.terms.coupon_rate;
    let yield_type = if coupon < dec!(4) {
        "low"
    } else if coupon > dec!(6) {
        "high"
    } else {
        "medium"
    };

    let years = input.years_to_maturity();
    let duration_type = if years < dec!(2) {
        "short-term"
    } else if years < dec!(5) {
        "medium-term"
    } else if years < dec!(10) {
        "intermediate"
    } else {
        "long-term"
    };

    format!("{price_type} bond with {yield_type} coupon, {duration_type} maturity")
}

/// Category tag set from the record's characteristics.
///
/// Thresholds are fixed constants; they must stay in lockstep with the
/// values the captured production records were classified under.
fn derive_tags(input: &CalculationInput) -> Vec<String> {
    let mut tags = vec!["anonymized".to_string()];

    let price = input.market_price;
    let intensity = if price < dec!(90) {
        "deep-discount"
    } else if price < dec!(98) {
        "discount"
    } else if price < dec!(102) {
        "near-par"
    } else if price < dec!(110) {
        "premium"
    } else {
        "deep-premium"
    };
    tags.push(intensity.to_string());

    let coupon = input.terms.coupon_rate;
    if coupon < dec!(3) {
        tags.push("low-coupon".to_string());
    } else if coupon > dec!(7) {
        tags.push("high-coupon".to_string());
    }

    let years = input.years_to_maturity();
    if years < dec!(2) {
        tags.push("short-duration".to_string());
    } else if years > dec!(10) {
        tags.push("long-duration".to_string());
    }

    if input.terms.day_count.is_actual_actual() {
        tags.push("actual-daycount".to_string());
    }

    tags
}
