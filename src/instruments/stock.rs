//! Equity position.

use crate::core::{Instrument, PricingError};

/// An equity holding: a signed, possibly fractional number of shares at a
/// per-unit market price.
///
/// # Examples
/// ```
/// use openvalor::core::Instrument;
/// use openvalor::instruments::Stock;
///
/// let shares = Stock::new("SAN", 1000.0, 3.80, true);
/// assert_eq!(shares.current_value(), 3800.0);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stock {
    /// Ticker symbol.
    pub ticker: String,
    /// Units held; signed, fractional allowed.
    pub quantity: f64,
    /// Per-unit market price.
    pub market_price: f64,
    /// Whether the issuer distributes dividends.
    pub pays_dividends: bool,
}

impl Stock {
    /// Builds an equity position.
    pub fn new(
        ticker: impl Into<String>,
        quantity: f64,
        market_price: f64,
        pays_dividends: bool,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            quantity,
            market_price,
            pays_dividends,
        }
    }

    /// Validates instrument fields.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] when the quantity or price is
    /// not finite.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.quantity.is_finite() {
            return Err(PricingError::InvalidInput(
                "stock quantity must be finite".to_string(),
            ));
        }
        if !self.market_price.is_finite() {
            return Err(PricingError::InvalidInput(
                "stock market price must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

impl Instrument for Stock {
    fn instrument_type(&self) -> &str {
        "stock"
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
        self.quantity * self.market_price
    }
}
