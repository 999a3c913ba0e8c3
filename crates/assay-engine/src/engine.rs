//! The analytics calculation engine.

use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use assay_core::types::round_result;
use assay_core::{AnalyticsResult, AssayError, AssayResult, CalculationInput};

/// Version tag stamped on every result.
///
/// Load-bearing for the regression pipeline: any change to this constant
/// signals a calculation library upgrade. It rides along on snapshots as
/// informational context but is not itself a pass/fail field.
pub const ENGINE_VERSION: &str = "bondmath-1.0.0";

/// Schedule basis for the simplified coupon-period accrual.
const ACCRUAL_BASIS_DAYS: Decimal = dec!(365);

/// Fixed year length used to convert a day difference to years.
const DAYS_PER_YEAR: Decimal = dec!(365.25);

/// Deterministic bond-analytics engine.
///
/// Stateless; construct once and share freely. Two invocations with
/// identical input yield identical rounded output (the calculation
/// timestamp aside, which is volatile by contract).
///
/// # Example
///
/// ```rust
/// use assay_core::{BondTerms, CalculationInput, Date};
/// use assay_engine::AnalyticsEngine;
/// use rust_decimal_macros::dec;
///
/// let maturity = Date::from_ymd(2029, 6, 15).unwrap();
/// let terms = BondTerms::new("US0000000001", dec!(5.0), maturity).unwrap();
/// let settlement = Date::from_ymd(2024, 6, 15).unwrap();
/// let input = CalculationInput::new(terms, dec!(100), settlement).unwrap();
///
/// let result = AnalyticsEngine::new().calculate(&input).unwrap();
/// assert!((result.yield_to_maturity - dec!(5.0)).abs() < dec!(0.5));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    /// Creates an engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Computes the full analytics shape for one input.
    ///
    /// All validation happens before any arithmetic; rounding is applied
    /// once, on the final value of each output field.
    ///
    /// # Errors
    ///
    /// Returns `AssayError::InvalidInput` when the settlement date falls on
    /// or after maturity, or when face value, frequency, or price fail
    /// positivity. Returns `AssayError::Calculation` when the approximated
    /// yield is too negative for the discounting step.
    pub fn calculate(&self, input: &CalculationInput) -> AssayResult<AnalyticsResult> {
        let terms = &input.terms;
        let face = terms.face_value;
        let price = input.market_price;
        let frequency = Decimal::from(terms.frequency);

        if face <= Decimal::ZERO {
            return Err(AssayError::invalid_input("face value must be positive"));
        }
        if terms.frequency == 0 {
            return Err(AssayError::invalid_input(
                "payment frequency must be positive",
            ));
        }
        if price <= Decimal::ZERO {
            return Err(AssayError::invalid_input("market price must be positive"));
        }

        let days_to_maturity = input.settlement.days_between(&terms.maturity);
        let years = Decimal::from(days_to_maturity) / DAYS_PER_YEAR;
        if years <= Decimal::ZERO {
            return Err(AssayError::invalid_input(format!(
                "settlement date {} must precede maturity date {}",
                input.settlement, terms.maturity
            )));
        }

        let annual_coupon = face * terms.coupon_rate / Decimal::ONE_HUNDRED;

        // Closed-form bond-yield approximation, expressed as a percentage.
        let ytm = (annual_coupon + (face - price) / years) / ((face + price) / dec!(2))
            * Decimal::ONE_HUNDRED;

        let accrued = accrued_interest(annual_coupon, frequency, days_to_maturity);
        let (macaulay, modified) =
            durations(ytm, years, frequency, annual_coupon, face, price)?;
        let convexity = years * (years + Decimal::ONE / frequency);

        let clean_price = price;
        let dirty_price = clean_price + accrued;

        Ok(AnalyticsResult {
            yield_to_maturity: round_result(ytm),
            modified_duration: round_result(modified),
            macaulay_duration: round_result(macaulay),
            convexity: round_result(convexity),
            accrued_interest: round_result(accrued),
            clean_price: round_result(clean_price),
            dirty_price: round_result(dirty_price),
            calculated_at: Utc::now(),
            engine_version: ENGINE_VERSION.to_string(),
        })
    }
}

/// Simplified day-count fraction of one coupon period.
///
/// Coupon periods are anchored on the maturity date over a 365-day schedule
/// basis. When the settlement falls exactly on a period boundary the accrual
/// is zero.
fn accrued_interest(annual_coupon: Decimal, frequency: Decimal, days_to_maturity: i64) -> Decimal {
    let period_days = ACCRUAL_BASIS_DAYS / frequency;
    let remainder = Decimal::from(days_to_maturity) % period_days;
    if remainder.is_zero() {
        return Decimal::ZERO;
    }
    let accrued_days = period_days - remainder;
    (annual_coupon / frequency) * accrued_days / period_days
}

/// Macaulay and modified duration via discrete per-period discounting at the
/// approximated yield.
fn durations(
    ytm: Decimal,
    years: Decimal,
    frequency: Decimal,
    annual_coupon: Decimal,
    face: Decimal,
    price: Decimal,
) -> AssayResult<(Decimal, Decimal)> {
    let periods = (years * frequency)
        .round()
        .to_i64()
        .ok_or_else(|| AssayError::calculation("period count out of range"))?
        .max(1);

    let period_yield = ytm / Decimal::ONE_HUNDRED / frequency;
    let growth = Decimal::ONE + period_yield;
    if growth <= Decimal::ZERO {
        return Err(AssayError::calculation(format!(
            "approximated yield {ytm} is too negative for discounting"
        )));
    }

    let period_coupon = annual_coupon / frequency;
    let mut discount = Decimal::ONE;
    let mut weighted = Decimal::ZERO;
    for t in 1..=periods {
        discount /= growth;
        weighted += Decimal::from(t) * period_coupon * discount;
    }
    // discount is now (1+y)^-n; add the principal contribution.
    weighted += Decimal::from(periods) * face * discount;

    let macaulay = weighted / price / frequency;
    let modified = macaulay / growth;
    Ok((macaulay, modified))
}
