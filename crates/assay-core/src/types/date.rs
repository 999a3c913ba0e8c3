//! Date type for financial calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AssayError, AssayResult};

/// A calendar date for financial calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing
/// financial-specific operations and ensuring type safety.
///
/// # Example
///
/// ```rust
/// use assay_core::types::Date;
///
/// let settlement = Date::from_ymd(2024, 6, 15).unwrap();
/// let maturity = Date::from_ymd(2029, 6, 15).unwrap();
/// assert_eq!(settlement.days_between(&maturity), 1826);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `AssayError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> AssayResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| AssayError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `AssayError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> AssayResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| AssayError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of years to the date.
    ///
    /// If the resulting day would be invalid (Feb 29 in a non-leap year),
    /// it rolls back to Feb 28.
    ///
    /// # Errors
    ///
    /// Returns `AssayError::InvalidDate` if the result is out of range.
    pub fn add_years(&self, years: i32) -> AssayResult<Self> {
        let new_year = self.year() + years;
        Self::from_ymd(new_year, self.month(), self.day())
            .or_else(|_| Self::from_ymd(new_year, self.month(), 28))
    }

    /// Calculates the number of calendar days between two dates.
    ///
    /// Positive if `other` is after `self`, negative otherwise.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date(d)
    }
}

impl std::str::FromStr for Date {
    type Err = AssayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd_valid() {
        let date = Date::from_ymd(2024, 6, 15).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_from_ymd_invalid() {
        assert!(Date::from_ymd(2024, 2, 30).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
    }

    #[test]
    fn test_parse_iso() {
        let date = Date::parse("2029-06-15").unwrap();
        assert_eq!(date, Date::from_ymd(2029, 6, 15).unwrap());
        assert!(Date::parse("15/06/2029").is_err());
    }

    #[test]
    fn test_days_between() {
        let a = Date::from_ymd(2024, 6, 15).unwrap();
        let b = Date::from_ymd(2024, 7, 15).unwrap();
        assert_eq!(a.days_between(&b), 30);
        assert_eq!(b.days_between(&a), -30);
    }

    #[test]
    fn test_days_between_across_leap_day() {
        let a = Date::from_ymd(2024, 2, 1).unwrap();
        let b = Date::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(a.days_between(&b), 29);
    }

    #[test]
    fn test_add_years_feb29() {
        let leap = Date::from_ymd(2024, 2, 29).unwrap();
        let next = leap.add_years(1).unwrap();
        assert_eq!(next, Date::from_ymd(2025, 2, 28).unwrap());
    }

    #[test]
    fn test_display_iso() {
        let date = Date::from_ymd(2024, 1, 5).unwrap();
        assert_eq!(date.to_string(), "2024-01-05");
    }

    #[test]
    fn test_serde_transparent() {
        let date = Date::from_ymd(2029, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2029-06-15\"");
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
