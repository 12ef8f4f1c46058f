//! Linear derivative contract (futures, forwards, swaps).

use chrono::NaiveDate;

use crate::core::{Instrument, PricingError};
use crate::rates::{year_fraction, DayCountConvention};

/// A linear derivative position: futures, forwards, and similar contracts
/// whose notional value is the quoted price scaled by a contract multiplier.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use openvalor::core::Instrument;
/// use openvalor::instruments::Derivative;
///
/// let expiry = NaiveDate::from_ymd_opt(2026, 12, 18).unwrap();
/// let fut = Derivative::new("FUT-DAX", 1.0, 15_600.0, expiry, 25.0);
/// assert_eq!(fut.current_value(), 390_000.0);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Derivative {
    /// Ticker symbol.
    pub ticker: String,
    /// Contracts held; signed, fractional allowed.
    pub quantity: f64,
    /// Quoted per-unit market price.
    pub market_price: f64,
    /// Contract maturity date.
    pub expiry: NaiveDate,
    /// Contract-size multiplier converting the quoted price into notional
    /// value. Expected > 0.
    pub multiplier: f64,
}

impl Derivative {
    /// Builds a derivative position.
    pub fn new(
        ticker: impl Into<String>,
        quantity: f64,
        market_price: f64,
        expiry: NaiveDate,
        multiplier: f64,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            quantity,
            market_price,
            expiry,
            multiplier,
        }
    }

    /// Validates instrument fields.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] when the quantity or price is
    /// not finite, or the multiplier is not finite and strictly positive.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.quantity.is_finite() {
            return Err(PricingError::InvalidInput(
                "derivative quantity must be finite".to_string(),
            ));
        }
        if !self.market_price.is_finite() {
            return Err(PricingError::InvalidInput(
                "derivative market price must be finite".to_string(),
            ));
        }
        if !self.multiplier.is_finite() || self.multiplier <= 0.0 {
            return Err(PricingError::InvalidInput(
                "derivative multiplier must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Year fraction from `as_of` to the contract expiry under Act/365F.
    ///
    /// Negative once `as_of` is past expiry, which routes option pricing to
    /// the intrinsic-value branch.
    pub fn time_to_expiry(&self, as_of: NaiveDate) -> f64 {
        year_fraction(as_of, self.expiry, DayCountConvention::Act365Fixed)
    }
}

impl Instrument for Derivative {
    fn instrument_type(&self) -> &str {
        "derivative"
    }

    fn ticker(&self) -> &str {
        &self.ticker
    }

    fn quantity(&self) -> f64 {
        self.quantity
    }

    fn market_price(&self) -> f64 {
        self.market_price
    }

    fn current_value(&self) -> f64 {
        self.quantity * self.market_price * self.multiplier
    }
}
