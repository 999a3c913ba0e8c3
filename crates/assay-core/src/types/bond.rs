//! Bond terms and calculation input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::daycounts::DayCountConvention;
use crate::error::{AssayError, AssayResult};
use crate::types::Date;

/// The fixed terms identifying one bond instrument.
///
/// Immutable once constructed. After anonymization the identifier is an
/// opaque synthetic string; before anonymization it may be a real security
/// identifier and must be treated as sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondTerms {
    /// Instrument identifier (opaque after anonymization).
    pub identifier: String,
    /// Annual coupon rate as a percentage (5.0 means 5%). Non-negative.
    pub coupon_rate: Decimal,
    /// Maturity date.
    pub maturity: Date,
    /// Face value. Positive; defaults to 100.
    pub face_value: Decimal,
    /// Coupon payments per year. Positive; defaults to 2.
    pub frequency: u32,
    /// Day count convention the instrument was captured with.
    pub day_count: DayCountConvention,
}

impl BondTerms {
    /// Creates bond terms with default face value (100), semi-annual
    /// frequency, and 30/360 US day count.
    ///
    /// # Errors
    ///
    /// Returns `AssayError::InvalidInput` if the coupon rate is negative.
    pub fn new(
        identifier: impl Into<String>,
        coupon_rate: Decimal,
        maturity: Date,
    ) -> AssayResult<Self> {
        let terms = Self {
            identifier: identifier.into(),
            coupon_rate,
            maturity,
            face_value: Decimal::ONE_HUNDRED,
            frequency: 2,
            day_count: DayCountConvention::default(),
        };
        terms.validate()?;
        Ok(terms)
    }

    /// Sets the face value.
    ///
    /// # Errors
    ///
    /// Returns `AssayError::InvalidInput` if the face value is not positive.
    pub fn with_face_value(mut self, face_value: Decimal) -> AssayResult<Self> {
        self.face_value = face_value;
        self.validate()?;
        Ok(self)
    }

    /// Sets the payment frequency per year.
    ///
    /// # Errors
    ///
    /// Returns `AssayError::InvalidInput` if the frequency is zero.
    pub fn with_frequency(mut self, frequency: u32) -> AssayResult<Self> {
        self.frequency = frequency;
        self.validate()?;
        Ok(self)
    }

    /// Sets the day count convention.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Returns a copy of these terms under a different identifier.
    ///
    /// Used by the anonymizer to replace sensitive identifiers.
    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    fn validate(&self) -> AssayResult<()> {
        if self.coupon_rate < Decimal::ZERO {
            return Err(AssayError::invalid_input(format!(
                "coupon rate must be non-negative, got {}",
                self.coupon_rate
            )));
        }
        if self.face_value <= Decimal::ZERO {
            return Err(AssayError::invalid_input(format!(
                "face value must be positive, got {}",
                self.face_value
            )));
        }
        if self.frequency == 0 {
            return Err(AssayError::invalid_input(
                "payment frequency must be positive",
            ));
        }
        Ok(())
    }
}

/// The full deterministic input to the analytics engine.
///
/// Settlement/maturity ordering is deliberately *not* validated here: a
/// captured record may carry an input the engine rejected, and the record
/// must still round-trip through curation. The engine enforces the ordering
/// as its own failure condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// The instrument being analyzed.
    pub terms: BondTerms,
    /// Observed market price. Positive.
    pub market_price: Decimal,
    /// Settlement date for the calculation.
    pub settlement: Date,
}

impl CalculationInput {
    /// Creates a calculation input.
    ///
    /// # Errors
    ///
    /// Returns `AssayError::InvalidInput` if the market price is not positive.
    pub fn new(terms: BondTerms, market_price: Decimal, settlement: Date) -> AssayResult<Self> {
        if market_price <= Decimal::ZERO {
            return Err(AssayError::invalid_input(format!(
                "market price must be positive, got {market_price}"
            )));
        }
        Ok(Self {
            terms,
            market_price,
            settlement,
        })
    }

    /// Years from settlement to maturity on an actual/365.25 basis.
    ///
    /// Negative or zero when settlement falls on or after maturity.
    #[must_use]
    pub fn years_to_maturity(&self) -> Decimal {
        let days = self.settlement.days_between(&self.terms.maturity);
        Decimal::from(days) / Decimal::new(36525, 2)
    }
}
