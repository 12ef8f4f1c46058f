//! Client account: cash balance plus an optionally assigned portfolio.

use crate::core::PricingError;
use crate::portfolio::Portfolio;

/// A client account holding liquid cash and at most one portfolio.
///
/// Accounts without an assigned portfolio are inactive; their net worth is
/// the cash balance alone. Assignment happens at most once — the account
/// exclusively owns its portfolio from then on.
///
/// # Examples
/// ```
/// use openvalor::instruments::Stock;
/// use openvalor::portfolio::{ClientAccount, Portfolio};
///
/// let mut account = ClientAccount::new("CH01-STOCKS", 10_000.0);
/// let mut portfolio = Portfolio::new();
/// portfolio.add_position(Stock::new("SAN", 1000.0, 3.80, true).into());
/// account.assign_portfolio(portfolio).unwrap();
/// assert_eq!(account.net_worth(), 13_800.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientAccount {
    /// Account identifier (IBAN or internal id).
    pub id: String,
    /// Liquid capital available.
    pub cash_balance: f64,
    portfolio: Option<Portfolio>,
}

impl ClientAccount {
    /// Creates an account with no portfolio assigned.
    pub fn new(id: impl Into<String>, cash_balance: f64) -> Self {
        Self {
            id: id.into(),
            cash_balance,
            portfolio: None,
        }
    }

    /// Assigns the account's portfolio. One-time operation.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] when a portfolio is already
    /// assigned.
    pub fn assign_portfolio(&mut self, portfolio: Portfolio) -> Result<(), PricingError> {
        if self.portfolio.is_some() {
            return Err(PricingError::InvalidInput(format!(
                "account {} already has a portfolio assigned",
                self.id
            )));
        }
        self.portfolio = Some(portfolio);
        Ok(())
    }

    /// The assigned portfolio, if any.
    pub fn portfolio(&self) -> Option<&Portfolio> {
        self.portfolio.as_ref()
    }

    /// True when no portfolio has been assigned.
    pub fn is_inactive(&self) -> bool {
        self.portfolio.is_none()
    }

    /// Total assets: cash plus portfolio market value.
    pub fn net_worth(&self) -> f64 {
        let holdings = self
            .portfolio
            .as_ref()
            .map_or(0.0, Portfolio::total_valuation);
        self.cash_balance + holdings
    }
}
