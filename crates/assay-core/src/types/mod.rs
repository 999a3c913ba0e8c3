//! Domain types for the regression pipeline.

mod analytics;
mod bond;
mod date;
mod record;
mod testcase;

pub use analytics::{round_result, AnalyticsResult, RESULT_PRECISION};
pub use bond::{BondTerms, CalculationInput};
pub use date::Date;
pub use record::{CalculationRecord, CALCULATION_EVENT};
pub use testcase::{Provenance, TestCase, TestCaseId};
