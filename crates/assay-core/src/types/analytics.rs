//! Analytics result type and rounding policy.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places every computed analytics field is rounded to.
///
/// Rounding is applied exactly once, on the final value of each output
/// field, so that repeated runs produce bit-identical comparison data
/// across platforms.
pub const RESULT_PRECISION: u32 = 6;

/// Rounds a computed value to the pipeline's fixed precision.
///
/// Midpoint values round to even, matching the behavior of the decimal
/// runtime the captured records were produced with.
#[must_use]
pub fn round_result(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RESULT_PRECISION, RoundingStrategy::MidpointNearestEven)
}

/// The fixed-shape output of one analytics calculation.
///
/// Produced fresh on every invocation and never mutated. All numeric fields
/// are rounded to [`RESULT_PRECISION`] decimal places. `calculated_at` is
/// volatile and excluded from snapshot comparisons; `engine_version` is
/// informational context whose change signals a library upgrade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsResult {
    /// Yield to maturity, in percent.
    pub yield_to_maturity: Decimal,
    /// Modified duration, in years.
    pub modified_duration: Decimal,
    /// Macaulay duration, in years.
    pub macaulay_duration: Decimal,
    /// Convexity.
    pub convexity: Decimal,
    /// Accrued interest since the last coupon.
    pub accrued_interest: Decimal,
    /// Clean price (the quoted market price).
    pub clean_price: Decimal,
    /// Dirty price (clean price plus accrued interest).
    pub dirty_price: Decimal,
    /// When this result was computed. Volatile; never compared.
    pub calculated_at: DateTime<Utc>,
    /// Identifies the calculation library/version that produced the result.
    pub engine_version: String,
}
