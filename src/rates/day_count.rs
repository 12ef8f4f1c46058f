//! Day-count conventions for turning calendar dates into year fractions.
//!
//! Derivative and option contracts store a calendar expiration date; the
//! closed-form pricers work in year fractions. [`year_fraction`] bridges the
//! two under the conventions this library quotes in.

use chrono::NaiveDate;

/// Supported day-count conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCountConvention {
    /// Actual day count over a 360-day year.
    Act360,
    /// Actual day count over a 365-day year.
    Act365Fixed,
}

/// Computes the year fraction between two dates under a day-count convention.
///
/// Edge cases:
/// - If `start == end`, returns `0.0`.
/// - If `start > end`, the result is negative and antisymmetric, so an
///   `as_of` date past a contract's expiry yields a non-positive time to
///   maturity.
///
/// # Examples
/// ```rust
/// use chrono::NaiveDate;
/// use openvalor::rates::{year_fraction, DayCountConvention};
///
/// let s = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let e = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
/// let yf = year_fraction(s, e, DayCountConvention::Act365Fixed);
/// assert!((yf - 1.0).abs() < 1.0e-8);
/// assert_eq!(yf, -year_fraction(e, s, DayCountConvention::Act365Fixed));
/// ```
pub fn year_fraction(start: NaiveDate, end: NaiveDate, convention: DayCountConvention) -> f64 {
    if start == end {
        return 0.0;
    }
    if start > end {
        return -year_fraction(end, start, convention);
    }

    match convention {
        DayCountConvention::Act360 => (end - start).num_days() as f64 / 360.0,
        DayCountConvention::Act365Fixed => (end - start).num_days() as f64 / 365.0,
    }
}
