//! # Assay Core
//!
//! Core types and errors for the Assay regression-testing pipeline.
//!
//! This crate provides the foundational building blocks used throughout Assay:
//!
//! - **Types**: Domain types like `Date`, `BondTerms`, `CalculationInput`,
//!   `AnalyticsResult`, `CalculationRecord`, and `TestCase`
//! - **Day Count Conventions**: The convention vocabulary carried on bond terms
//! - **Errors**: Structured error handling for every stage of the pipeline
//!
//! ## Design Philosophy
//!
//! - **Determinism First**: Every comparison-relevant value is a fixed-precision
//!   `Decimal` rounded once at a documented boundary
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Explicit Over Implicit**: Invalid inputs are rejected at construction,
//!   never silently defaulted
//!
//! ## Example
//!
//! ```rust
//! use assay_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let maturity = Date::from_ymd(2029, 6, 15).unwrap();
//! let terms = BondTerms::new("US0000000001", dec!(5.0), maturity).unwrap();
//! let settlement = Date::from_ymd(2024, 6, 15).unwrap();
//! let input = CalculationInput::new(terms, dec!(100), settlement).unwrap();
//! assert_eq!(input.market_price, dec!(100));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::DayCountConvention;
    pub use crate::error::{AssayError, AssayResult};
    pub use crate::types::{
        round_result, AnalyticsResult, BondTerms, CalculationInput, CalculationRecord, Date,
        Provenance, TestCase, TestCaseId, CALCULATION_EVENT, RESULT_PRECISION,
    };
}

// Re-export commonly used types at crate root
pub use daycounts::DayCountConvention;
pub use error::{AssayError, AssayResult};
pub use types::{
    AnalyticsResult, BondTerms, CalculationInput, CalculationRecord, Date, Provenance, TestCase,
    TestCaseId, CALCULATION_EVENT,
};
