//! Core domain types, the instrument capability trait, and the library-wide
//! error taxonomy.

pub mod serialization;

pub use serialization::{
    AccountSnapshot, PortfolioSnapshot, from_json, from_msgpack, to_json_pretty, to_msgpack,
};

/// Plain-vanilla option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionType {
    /// Call option payoff profile.
    Call,
    /// Put option payoff profile.
    Put,
}

impl OptionType {
    /// Returns +1.0 for calls and -1.0 for puts.
    pub fn sign(self) -> f64 {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }
}

/// Common trait implemented by every position a portfolio can hold.
///
/// Current value is a pure function of the stored fields: quantity times
/// market price for equities, additionally scaled by the contract multiplier
/// for derivatives and options.
pub trait Instrument: std::fmt::Debug {
    /// Returns a short type identifier for diagnostics and snapshots.
    fn instrument_type(&self) -> &str;

    /// Ticker symbol of the holding.
    fn ticker(&self) -> &str;

    /// Number of units held. Signed; fractional quantities are allowed.
    fn quantity(&self) -> f64;

    /// Current per-unit market price.
    fn market_price(&self) -> f64;

    /// Total market value of the position.
    fn current_value(&self) -> f64;
}

/// Errors surfaced by valuation and pricing entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Input validation error.
    InvalidInput(String),
    /// Numerical issue (overflow, invalid state, etc.).
    NumericalError(String),
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::NumericalError(msg) => write!(f, "numerical error: {msg}"),
        }
    }
}

impl std::error::Error for PricingError {}
