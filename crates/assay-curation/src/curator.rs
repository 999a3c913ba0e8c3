//! Stratified selection of captured records.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use assay_core::CalculationRecord;

/// Number of buckets on each stratification dimension.
const BUCKET_COUNT: usize = 5;

/// Price level relative to a face-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum PriceBucket {
    DeepDiscount,
    Discount,
    Par,
    Premium,
    DeepPremium,
}

impl PriceBucket {
    fn classify(price: Decimal) -> Self {
        if price < dec!(90) {
            PriceBucket::DeepDiscount
        } else if price < dec!(98) {
            PriceBucket::Discount
        } else if price < dec!(102) {
            PriceBucket::Par
        } else if price < dec!(110) {
            PriceBucket::Premium
        } else {
            PriceBucket::DeepPremium
        }
    }
}

/// Coupon level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum CouponBucket {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl CouponBucket {
    fn classify(coupon_rate: Decimal) -> Self {
        if coupon_rate < dec!(2) {
            CouponBucket::VeryLow
        } else if coupon_rate < dec!(4) {
            CouponBucket::Low
        } else if coupon_rate < dec!(6) {
            CouponBucket::Medium
        } else if coupon_rate < dec!(8) {
            CouponBucket::High
        } else {
            CouponBucket::VeryHigh
        }
    }
}

/// Maturity horizon in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum MaturityBucket {
    VeryShort,
    Short,
    Medium,
    Long,
    VeryLong,
}

impl MaturityBucket {
    fn classify(years: Decimal) -> Self {
        if years < dec!(2) {
            MaturityBucket::VeryShort
        } else if years < dec!(5) {
            MaturityBucket::Short
        } else if years < dec!(10) {
            MaturityBucket::Medium
        } else if years < dec!(20) {
            MaturityBucket::Long
        } else {
            MaturityBucket::VeryLong
        }
    }
}

/// Selects a bounded, diverse subset of captured calculation records.
///
/// Selection is deterministic given identical input ordering: within any
/// bucket the first-seen record wins, and no randomness is involved, so a
/// curation run is reproducible from the same record pool.
///
/// Coverage breadth is advisory. When the pool is sparse some buckets stay
/// empty and the output under-fills; that is expected, not an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetCurator;

impl DatasetCurator {
    /// Creates a curator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Selects up to `max_count` records from `records`.
    ///
    /// When the pool already fits the budget it is returned unchanged,
    /// order preserved. Otherwise three additive stratified passes run:
    ///
    /// 1. up to `max_count / 5` records per price bucket;
    /// 2. at most one still-unselected record per coupon bucket;
    /// 3. at most one still-unselected record per maturity bucket;
    ///
    /// stopping as soon as the budget is reached. The output never contains
    /// duplicates and never contains a record absent from the input.
    #[must_use]
    pub fn curate(
        &self,
        records: &[CalculationRecord],
        max_count: usize,
    ) -> Vec<CalculationRecord> {
        if records.len() <= max_count {
            return records.to_vec();
        }

        let mut selected: Vec<CalculationRecord> = Vec::with_capacity(max_count);
        let mut selected_ids: HashSet<&str> = HashSet::with_capacity(max_count);

        // Pass one: spread the budget evenly across price buckets.
        let per_bucket = max_count / BUCKET_COUNT;
        let mut price_counts: HashMap<PriceBucket, usize> = HashMap::new();
        for record in records {
            if selected.len() >= max_count {
                break;
            }
            let bucket = PriceBucket::classify(record.input.market_price);
            let count = price_counts.entry(bucket).or_insert(0);
            if *count < per_bucket {
                *count += 1;
                selected_ids.insert(record.correlation_id.as_str());
                selected.push(record.clone());
            }
        }

        // Pass two: one representative per coupon bucket from the remainder.
        let mut coupon_covered: HashSet<CouponBucket> = HashSet::new();
        for record in records {
            if selected.len() >= max_count {
                break;
            }
            if selected_ids.contains(record.correlation_id.as_str()) {
                continue;
            }
            let bucket = CouponBucket::classify(record.input.terms.coupon_rate);
            if coupon_covered.insert(bucket) {
                selected_ids.insert(record.correlation_id.as_str());
                selected.push(record.clone());
            }
        }

        // Pass three: one representative per maturity bucket.
        let mut maturity_covered: HashSet<MaturityBucket> = HashSet::new();
        for record in records {
            if selected.len() >= max_count {
                break;
            }
            if selected_ids.contains(record.correlation_id.as_str()) {
                continue;
            }
            let bucket = MaturityBucket::classify(record.input.years_to_maturity());
            if maturity_covered.insert(bucket) {
                selected_ids.insert(record.correlation_id.as_str());
                selected.push(record.clone());
            }
        }

        selected.truncate(max_count);
        debug!(
            pool = records.len(),
            selected = selected.len(),
            max_count,
            "curated record subset"
        );
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay_core::{BondTerms, CalculationInput, Date};
    use std::collections::HashSet as StdHashSet;

    fn record(id: &str, coupon: Decimal, price: Decimal, years: i32) -> CalculationRecord {
        let settlement = Date::from_ymd(2024, 6, 15).unwrap();
        let maturity = settlement.add_years(years).unwrap();
        let terms = BondTerms::new(format!("BOND-{id}"), coupon, maturity).unwrap();
        let input = CalculationInput::new(terms, price, settlement).unwrap();
        CalculationRecord::failure(id, "calculate", input, "unused")
    }

    fn diverse_pool(n: usize) -> Vec<CalculationRecord> {
        // Cycle prices, coupons, and maturities independently so every
        // bucket on every dimension shows up in a large pool.
        let prices = [dec!(85), dec!(95), dec!(100), dec!(105), dec!(115)];
        let coupons = [dec!(1), dec!(3), dec!(5), dec!(7), dec!(9)];
        let years = [1, 3, 7, 15, 25];
        (0..n)
            .map(|i| {
                record(
                    &format!("rec-{i:04}"),
                    coupons[i % 5],
                    prices[(i / 5) % 5],
                    years[(i / 25) % 5],
                )
            })
            .collect()
    }

    #[test]
    fn test_small_pool_returned_unchanged() {
        let pool = diverse_pool(8);
        let out = DatasetCurator::new().curate(&pool, 10);
        assert_eq!(out.len(), 8);
        let ids: Vec<_> = out.iter().map(|r| r.correlation_id.clone()).collect();
        let expected: Vec<_> = pool.iter().map(|r| r.correlation_id.clone()).collect();
        assert_eq!(ids, expected); // order preserved
    }

    #[test]
    fn test_never_exceeds_max_count() {
        let pool = diverse_pool(500);
        let out = DatasetCurator::new().curate(&pool, 50);
        assert_eq!(out.len(), 50);
    }

    #[test]
    fn test_no_duplicates() {
        let pool = diverse_pool(300);
        let out = DatasetCurator::new().curate(&pool, 40);
        let unique: StdHashSet<_> = out.iter().map(|r| r.correlation_id.as_str()).collect();
        assert_eq!(unique.len(), out.len());
    }

    #[test]
    fn test_only_input_records_selected() {
        let pool = diverse_pool(200);
        let pool_ids: StdHashSet<_> = pool.iter().map(|r| r.correlation_id.clone()).collect();
        let out = DatasetCurator::new().curate(&pool, 30);
        assert!(out.iter().all(|r| pool_ids.contains(&r.correlation_id)));
    }

    #[test]
    fn test_deterministic_given_same_order() {
        let pool = diverse_pool(400);
        let curator = DatasetCurator::new();
        let a: Vec<_> = curator
            .curate(&pool, 60)
            .iter()
            .map(|r| r.correlation_id.clone())
            .collect();
        let b: Vec<_> = curator
            .curate(&pool, 60)
            .iter()
            .map(|r| r.correlation_id.clone())
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_price_bucket_spread() {
        // 100 records, 20 in each price bucket; budget 25 gives 5 per bucket.
        let pool = diverse_pool(100);
        let out = DatasetCurator::new().curate(&pool, 25);
        let mut per_bucket: HashMap<PriceBucket, usize> = HashMap::new();
        for record in &out {
            *per_bucket
                .entry(PriceBucket::classify(record.input.market_price))
                .or_insert(0) += 1;
        }
        assert_eq!(per_bucket.len(), 5);
        assert!(per_bucket.values().all(|&c| c == 5));
    }

    #[test]
    fn test_fill_passes_extend_sparse_pass_one() {
        // Budget below the bucket count: pass one selects nothing
        // (per-bucket quota is zero) and the fill passes take over.
        let pool = diverse_pool(100);
        let out = DatasetCurator::new().curate(&pool, 3);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_underfill_when_pool_is_uniform() {
        // Every record identical in every dimension: pass one caps one
        // bucket, fill passes add at most one record each per dimension.
        let pool: Vec<_> = (0..50)
            .map(|i| record(&format!("same-{i}"), dec!(5), dec!(100), 10))
            .collect();
        let out = DatasetCurator::new().curate(&pool, 30);
        // One bucket quota (30/5 = 6) plus one coupon fill plus one
        // maturity fill.
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(PriceBucket::classify(dec!(89.99)), PriceBucket::DeepDiscount);
        assert_eq!(PriceBucket::classify(dec!(90)), PriceBucket::Discount);
        assert_eq!(PriceBucket::classify(dec!(98)), PriceBucket::Par);
        assert_eq!(PriceBucket::classify(dec!(102)), PriceBucket::Premium);
        assert_eq!(PriceBucket::classify(dec!(110)), PriceBucket::DeepPremium);

        assert_eq!(CouponBucket::classify(dec!(2)), CouponBucket::Low);
        assert_eq!(CouponBucket::classify(dec!(8)), CouponBucket::VeryHigh);

        assert_eq!(MaturityBucket::classify(dec!(1.5)), MaturityBucket::VeryShort);
        assert_eq!(MaturityBucket::classify(dec!(20)), MaturityBucket::VeryLong);
    }
}
