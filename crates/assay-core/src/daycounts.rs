//! Day count conventions carried on bond terms.
//!
//! The regression pipeline tracks the convention an instrument was captured
//! with so that curated test cases remain self-describing, and so the
//! anonymizer can classify actual/actual-style instruments. The placeholder
//! analytics engine itself accrues on a fixed-basis schedule; the convention
//! is instrument identity, not an accrual strategy.
//!
//! # Supported Conventions
//!
//! - [`DayCountConvention::Thirty360US`]: 30/360 US - US corporate bonds
//! - [`DayCountConvention::Act360`]: Actual/360 - Money market convention
//! - [`DayCountConvention::Act365Fixed`]: Actual/365 Fixed - UK Gilts
//! - [`DayCountConvention::ActActIsda`]: Actual/Actual ISDA - government bonds

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumeration of the day count conventions the pipeline understands.
///
/// Serialized as the market-style string (`"30/360 US"`, `"ACT/360"`, …) so
/// golden dataset files stay human-reviewable.
///
/// # Example
///
/// ```rust
/// use assay_core::daycounts::DayCountConvention;
///
/// let convention: DayCountConvention = "ACT/ACT".parse().unwrap();
/// assert!(convention.is_actual_actual());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayCountConvention {
    /// 30/360 US (Bond Basis) - US corporate, agency, municipal bonds
    #[default]
    Thirty360US,

    /// Actual/360 - Money market instruments, FRNs
    Act360,

    /// Actual/365 Fixed - UK Gilts, AUD/NZD markets
    Act365Fixed,

    /// Actual/Actual ISDA - government bonds, swaps
    ActActIsda,
}

impl DayCountConvention {
    /// Returns the market-style name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Thirty360US => "30/360 US",
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Act365Fixed => "ACT/365F",
            DayCountConvention::ActActIsda => "ACT/ACT ISDA",
        }
    }

    /// Returns true for actual/actual-style conventions.
    ///
    /// Used by the anonymizer when deriving the tag set for a test case.
    #[must_use]
    pub fn is_actual_actual(&self) -> bool {
        matches!(self, DayCountConvention::ActActIsda)
    }

    /// Returns all supported conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Thirty360US,
            DayCountConvention::Act360,
            DayCountConvention::Act365Fixed,
            DayCountConvention::ActActIsda,
        ]
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = DayCountParseError;

    /// Parses a day count convention from a string.
    ///
    /// Supports market-style names ("30/360 US", "ACT/360"), enum-style
    /// names ("Thirty360US"), and common aliases ("BOND", "ACTUAL/ACTUAL").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        let normalized = normalized.trim();

        match normalized {
            "30/360" | "30/360 US" | "30U/360" | "BOND" | "THIRTY360US" | "30/360US" => {
                Ok(DayCountConvention::Thirty360US)
            }

            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),

            "ACT/365" | "ACT/365F" | "ACT/365 FIXED" | "ACTUAL/365" | "ACT365FIXED"
            | "ACT365" => Ok(DayCountConvention::Act365Fixed),

            "ACT/ACT" | "ACT/ACT ISDA" | "ACTUAL/ACTUAL" | "ACTUAL/ACTUAL ISDA"
            | "ACTACTISDA" | "ACTACT" => Ok(DayCountConvention::ActActIsda),

            _ => Err(DayCountParseError(s.to_string())),
        }
    }
}

impl From<DayCountConvention> for String {
    fn from(c: DayCountConvention) -> Self {
        c.name().to_string()
    }
}

impl TryFrom<String> for DayCountConvention {
    type Error = DayCountParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Error type for parsing day count conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCountParseError(pub String);

impl fmt::Display for DayCountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown day count convention: '{}'", self.0)
    }
}

impl std::error::Error for DayCountParseError {}
