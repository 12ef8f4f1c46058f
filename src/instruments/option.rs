//! Option contract definition.
//!
//! [`OptionContract`] composes a [`Derivative`] (quoted price, expiry,
//! contract multiplier) with a strike and a Call/Put side, and exposes a
//! theoretical fair value under Black-Scholes alongside the market-price
//! valuation every position supports.

use chrono::NaiveDate;

use crate::core::{Instrument, OptionType, PricingError};
use crate::instruments::Derivative;
use crate::pricing::european::black_scholes_price;

/// An option position.
///
/// The embedded [`Derivative`] carries the fields an option shares with any
/// leveraged contract, so an `OptionContract` is usable wherever a derivative
/// is expected via [`OptionContract::contract`].
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use openvalor::core::{Instrument, OptionType};
/// use openvalor::instruments::OptionContract;
///
/// let expiry = NaiveDate::from_ymd_opt(2026, 6, 19).unwrap();
/// let call = OptionContract::call("CALL-TSLA", 10.0, 25.0, expiry, 100.0, 250.0);
/// assert_eq!(call.option_type, OptionType::Call);
/// assert_eq!(call.current_value(), 25_000.0);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OptionContract {
    /// Shared derivative fields: ticker, quantity, quoted price, expiry,
    /// contract multiplier.
    pub contract: Derivative,
    /// Exercise price. Expected > 0.
    pub strike: f64,
    /// Call or put.
    pub option_type: OptionType,
}

impl OptionContract {
    /// Builds an option position.
    pub fn new(
        ticker: impl Into<String>,
        quantity: f64,
        market_price: f64,
        expiry: NaiveDate,
        multiplier: f64,
        strike: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            contract: Derivative::new(ticker, quantity, market_price, expiry, multiplier),
            strike,
            option_type,
        }
    }

    /// Builds a call option position.
    pub fn call(
        ticker: impl Into<String>,
        quantity: f64,
        market_price: f64,
        expiry: NaiveDate,
        multiplier: f64,
        strike: f64,
    ) -> Self {
        Self::new(
            ticker,
            quantity,
            market_price,
            expiry,
            multiplier,
            strike,
            OptionType::Call,
        )
    }

    /// Builds a put option position.
    pub fn put(
        ticker: impl Into<String>,
        quantity: f64,
        market_price: f64,
        expiry: NaiveDate,
        multiplier: f64,
        strike: f64,
    ) -> Self {
        Self::new(
            ticker,
            quantity,
            market_price,
            expiry,
            multiplier,
            strike,
            OptionType::Put,
        )
    }

    /// Validates instrument fields.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] when the embedded derivative
    /// fields are invalid or the strike is not finite and strictly positive.
    pub fn validate(&self) -> Result<(), PricingError> {
        self.contract.validate()?;
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(PricingError::InvalidInput(
                "option strike must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Theoretical fair value of the whole contract under Black-Scholes,
    /// using the quoted market price as spot.
    ///
    /// The per-unit closed-form price is scaled by the contract multiplier.
    /// At or past expiry (`time_to_expiry <= 0`) the contract settles to its
    /// per-unit intrinsic value and the multiplier is not applied; callers
    /// wanting scaled settlement values must multiply explicitly.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] when spot or strike is
    /// non-positive, or volatility is non-positive while the contract is
    /// still live.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use openvalor::instruments::OptionContract;
    ///
    /// let expiry = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
    /// let call = OptionContract::call("CALL-AMZN", 20.0, 5.0, expiry, 100.0, 3000.0);
    /// let fair = call.theoretical_value(0.04, 0.25, 0.5).unwrap();
    /// assert!(fair >= 0.0);
    /// ```
    pub fn theoretical_value(
        &self,
        risk_free_rate: f64,
        volatility: f64,
        time_to_expiry: f64,
    ) -> Result<f64, PricingError> {
        let per_unit = black_scholes_price(
            self.option_type,
            self.contract.market_price,
            self.strike,
            risk_free_rate,
            volatility,
            time_to_expiry,
        )?;
        if time_to_expiry <= 0.0 {
            // Expired contracts settle to per-unit intrinsic value; the
            // contract multiplier is not applied on this branch.
            return Ok(per_unit);
        }
        Ok(per_unit * self.contract.multiplier)
    }

    /// Like [`OptionContract::theoretical_value`], deriving the time to
    /// maturity from the contract expiry under Act/365F.
    pub fn theoretical_value_at(
        &self,
        as_of: NaiveDate,
        risk_free_rate: f64,
        volatility: f64,
    ) -> Result<f64, PricingError> {
        let t = self.contract.time_to_expiry(as_of);
        self.theoretical_value(risk_free_rate, volatility, t)
    }

    /// Per-unit intrinsic value at the quoted market price.
    pub fn intrinsic_value(&self) -> f64 {
        (self.option_type.sign() * (self.contract.market_price - self.strike)).max(0.0)
    }
}

impl Instrument for OptionContract {
    fn instrument_type(&self) -> &str {
        "option"
    }

    fn ticker(&self) -> &str {
        &self.contract.ticker
    }

    fn quantity(&self) -> f64 {
        self.contract.quantity
    }

    fn market_price(&self) -> f64 {
        self.contract.market_price
    }

    fn current_value(&self) -> f64 {
        self.contract.current_value()
    }
}
