//! Position containers: [`Portfolio`] and [`ClientAccount`].

pub mod account;

pub use account::ClientAccount;

use crate::core::{Instrument, OptionType};
use crate::instruments::Position;

/// Ordered container of positions with portfolio-level aggregation.
///
/// Positions are append-only and keep insertion order, so reports are
/// deterministic; the aggregate figures themselves do not depend on order.
///
/// # Examples
/// ```
/// use openvalor::instruments::Stock;
/// use openvalor::portfolio::Portfolio;
///
/// let mut portfolio = Portfolio::new();
/// portfolio.add_position(Stock::new("SAN", 1000.0, 3.80, true).into());
/// assert_eq!(portfolio.total_valuation(), 3800.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    positions: Vec<Position>,
}

impl Portfolio {
    /// Creates an empty portfolio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a portfolio holding `positions` in the given order.
    pub fn from_positions(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    /// Appends a position. Removal is not supported.
    pub fn add_position(&mut self, position: Position) {
        self.positions.push(position);
    }

    /// Held positions in insertion order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of held positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when no positions are held.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Sum of the current market value of all positions.
    pub fn total_valuation(&self) -> f64 {
        self.positions.iter().map(Position::current_value).sum()
    }

    /// Arithmetic mean of per-unit market prices, not value-weighted.
    ///
    /// Returns `0.0` for an empty portfolio.
    pub fn average_market_price(&self) -> f64 {
        if self.positions.is_empty() {
            return 0.0;
        }
        let total: f64 = self.positions.iter().map(Position::market_price).sum();
        total / self.positions.len() as f64
    }

    /// Detects a straddle: at least one call option and at least one put
    /// option held simultaneously, regardless of strikes, expiries, or
    /// quantities.
    pub fn has_straddle_strategy(&self) -> bool {
        let mut has_call = false;
        let mut has_put = false;

        for position in &self.positions {
            if let Some(option) = position.as_option() {
                match option.option_type {
                    OptionType::Call => has_call = true,
                    OptionType::Put => has_put = true,
                }
                if has_call && has_put {
                    return true;
                }
            }
        }
        false
    }
}
