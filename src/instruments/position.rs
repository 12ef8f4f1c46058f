//! Closed position variant dispatching the valuation capability.

use crate::core::{Instrument, OptionType, PricingError};
use crate::instruments::{Derivative, OptionContract, Stock};

/// A portfolio holding: an equity, a linear derivative, or an option.
///
/// The variant tag replaces runtime type inspection: analytics that need
/// "is a derivative but not an option" match on the tag rather than
/// downcasting. Options count as derivatives in every derivative-wide
/// predicate.
///
/// # Examples
/// ```
/// use openvalor::core::Instrument;
/// use openvalor::instruments::{Position, Stock};
///
/// let position = Position::from(Stock::new("SAN", 1000.0, 3.80, true));
/// assert_eq!(position.current_value(), 3800.0);
/// assert!(!position.is_derivative());
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "position_type", content = "payload", rename_all = "snake_case")]
pub enum Position {
    /// Equity holding.
    Stock(Stock),
    /// Linear derivative (future, forward, swap).
    Derivative(Derivative),
    /// Option contract.
    Option(OptionContract),
}

impl Position {
    /// True for derivatives and options alike.
    pub fn is_derivative(&self) -> bool {
        matches!(self, Self::Derivative(_) | Self::Option(_))
    }

    /// True only for linear derivatives, excluding options.
    pub fn is_pure_derivative(&self) -> bool {
        matches!(self, Self::Derivative(_))
    }

    /// The stock payload, if this position is an equity.
    pub fn as_stock(&self) -> Option<&Stock> {
        match self {
            Self::Stock(stock) => Some(stock),
            _ => None,
        }
    }

    /// The linear-derivative payload, excluding options.
    pub fn as_pure_derivative(&self) -> Option<&Derivative> {
        match self {
            Self::Derivative(derivative) => Some(derivative),
            _ => None,
        }
    }

    /// The option payload, if this position is an option.
    pub fn as_option(&self) -> Option<&OptionContract> {
        match self {
            Self::Option(option) => Some(option),
            _ => None,
        }
    }

    /// The option payload when it matches the requested side.
    pub fn as_option_of_type(&self, option_type: OptionType) -> Option<&OptionContract> {
        self.as_option()
            .filter(|option| option.option_type == option_type)
    }

    /// Validates the underlying instrument fields.
    pub fn validate(&self) -> Result<(), PricingError> {
        match self {
            Self::Stock(stock) => stock.validate(),
            Self::Derivative(derivative) => derivative.validate(),
            Self::Option(option) => option.validate(),
        }
    }
}

impl Instrument for Position {
    fn instrument_type(&self) -> &str {
        match self {
            Self::Stock(stock) => stock.instrument_type(),
            Self::Derivative(derivative) => derivative.instrument_type(),
            Self::Option(option) => option.instrument_type(),
        }
    }

    fn ticker(&self) -> &str {
        match self {
            Self::Stock(stock) => stock.ticker(),
            Self::Derivative(derivative) => derivative.ticker(),
            Self::Option(option) => option.ticker(),
        }
    }

    fn quantity(&self) -> f64 {
        match self {
            Self::Stock(stock) => stock.quantity(),
            Self::Derivative(derivative) => derivative.quantity(),
            Self::Option(option) => option.quantity(),
        }
    }

    fn market_price(&self) -> f64 {
        match self {
            Self::Stock(stock) => stock.market_price(),
            Self::Derivative(derivative) => derivative.market_price(),
            Self::Option(option) => option.market_price(),
        }
    }

    fn current_value(&self) -> f64 {
        match self {
            Self::Stock(stock) => stock.current_value(),
            Self::Derivative(derivative) => derivative.current_value(),
            Self::Option(option) => option.current_value(),
        }
    }
}

impl From<Stock> for Position {
    fn from(stock: Stock) -> Self {
        Self::Stock(stock)
    }
}

impl From<Derivative> for Position {
    fn from(derivative: Derivative) -> Self {
        Self::Derivative(derivative)
    }
}

impl From<OptionContract> for Position {
    fn from(option: OptionContract) -> Self {
        Self::Option(option)
    }
}
