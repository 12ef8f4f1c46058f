//! European option pricing under Black-Scholes-Merton.
//!
//! The closed form prices a call as `S·N(d1) − K·e^(−rT)·N(d2)` and a put as
//! `K·e^(−rT)·N(−d2) − S·N(−d1)`, with `N` the standard normal CDF from
//! [`crate::math`]. Contracts at or past expiry settle to intrinsic value.
//!
//! Degenerate inputs (non-positive spot or strike, non-positive volatility
//! on a live contract, non-finite parameters) are rejected with
//! [`PricingError::InvalidInput`] instead of flowing through the logs and
//! square roots as NaN.

use crate::core::{OptionType, PricingError};
use crate::math::normal_cdf;

#[inline]
fn intrinsic(option_type: OptionType, spot: f64, strike: f64) -> f64 {
    (option_type.sign() * (spot - strike)).max(0.0)
}

#[inline]
fn d1_d2(spot: f64, strike: f64, rate: f64, vol: f64, expiry: f64) -> (f64, f64) {
    let sig_sqrt_t = vol * expiry.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * vol * vol) * expiry) / sig_sqrt_t;
    (d1, d1 - sig_sqrt_t)
}

fn validate_inputs(spot: f64, strike: f64, rate: f64, vol: f64, expiry: f64) -> Result<(), PricingError> {
    if !spot.is_finite() || spot <= 0.0 {
        return Err(PricingError::InvalidInput(
            "spot must be finite and > 0".to_string(),
        ));
    }
    if !strike.is_finite() || strike <= 0.0 {
        return Err(PricingError::InvalidInput(
            "strike must be finite and > 0".to_string(),
        ));
    }
    if !rate.is_finite() {
        return Err(PricingError::InvalidInput(
            "rate must be finite".to_string(),
        ));
    }
    if !vol.is_finite() {
        return Err(PricingError::InvalidInput(
            "volatility must be finite".to_string(),
        ));
    }
    if !expiry.is_finite() {
        return Err(PricingError::InvalidInput(
            "expiry must be finite".to_string(),
        ));
    }
    Ok(())
}

/// Black-Scholes-Merton per-unit option price.
///
/// Parameters:
/// - `option_type`: call or put payoff direction.
/// - `spot`: current price of the underlying.
/// - `strike`: exercise price.
/// - `rate`: continuously compounded risk-free rate.
/// - `vol`: annualized volatility.
/// - `expiry`: time to maturity in years.
///
/// Edge cases:
/// - `expiry <= 0` returns intrinsic value, `max(0, S−K)` for calls and
///   `max(0, K−S)` for puts; volatility is not consulted on this branch.
///
/// # Errors
/// Returns [`PricingError::InvalidInput`] when `spot <= 0`, `strike <= 0`,
/// any parameter is non-finite, or `vol <= 0` while `expiry > 0`.
///
/// # Examples
/// ```rust
/// use openvalor::core::OptionType;
/// use openvalor::pricing::european::black_scholes_price;
///
/// let call = black_scholes_price(OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0).unwrap();
/// let put = black_scholes_price(OptionType::Put, 100.0, 100.0, 0.05, 0.20, 1.0).unwrap();
/// assert!(call > 10.0 && call < 11.0);
/// assert!(call > put);
/// ```
pub fn black_scholes_price(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> Result<f64, PricingError> {
    validate_inputs(spot, strike, rate, vol, expiry)?;

    if expiry <= 0.0 {
        return Ok(intrinsic(option_type, spot, strike));
    }
    if vol <= 0.0 {
        return Err(PricingError::InvalidInput(
            "volatility must be > 0 for a live contract".to_string(),
        ));
    }

    let (d1, d2) = d1_d2(spot, strike, rate, vol, expiry);
    let df = (-rate * expiry).exp();
    let price = match option_type {
        OptionType::Call => spot * normal_cdf(d1) - strike * df * normal_cdf(d2),
        OptionType::Put => strike * df * normal_cdf(-d2) - spot * normal_cdf(-d1),
    };
    Ok(price)
}
