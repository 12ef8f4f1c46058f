//! Snapshot payloads for portfolios and accounts.
//!
//! These types define stable serde payloads used to transport the state of a
//! book at a point in time: a portfolio's positions or a whole account with
//! its cash balance. They are wire payloads only; this library has no
//! storage layer.
//!
//! # Examples
//! ```rust
//! use openvalor::core::{to_json_pretty, from_json, AccountSnapshot};
//! use openvalor::instruments::Stock;
//! use openvalor::portfolio::{ClientAccount, Portfolio};
//!
//! let mut account = ClientAccount::new("CH01-STOCKS", 10_000.0);
//! let mut portfolio = Portfolio::new();
//! portfolio.add_position(Stock::new("SAN", 1000.0, 3.80, true).into());
//! account.assign_portfolio(portfolio).unwrap();
//!
//! let snapshot = AccountSnapshot::capture(&account, "2026-08-07T09:00:00Z");
//! let json = to_json_pretty(&snapshot).expect("json serialization");
//! let decoded: AccountSnapshot = from_json(&json).expect("json deserialization");
//! assert_eq!(decoded, snapshot);
//! ```

use serde::de::DeserializeOwned;

use crate::instruments::Position;
use crate::portfolio::{ClientAccount, Portfolio};

/// Portfolio state captured at a point in time.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PortfolioSnapshot {
    /// RFC3339 timestamp string (UTC recommended).
    pub as_of: String,
    /// Held positions in insertion order.
    pub positions: Vec<Position>,
}

impl PortfolioSnapshot {
    /// Captures the portfolio's positions under the given timestamp.
    pub fn capture(portfolio: &Portfolio, as_of: impl Into<String>) -> Self {
        Self {
            as_of: as_of.into(),
            positions: portfolio.positions().to_vec(),
        }
    }

    /// Rebuilds a live portfolio from the captured positions.
    pub fn restore(&self) -> Portfolio {
        Portfolio::from_positions(self.positions.clone())
    }
}

/// Account state captured at a point in time.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AccountSnapshot {
    /// Account identifier.
    pub account_id: String,
    /// RFC3339 timestamp string (UTC recommended).
    pub as_of: String,
    /// Liquid capital at capture time.
    pub cash_balance: f64,
    /// Captured portfolio; `None` for inactive accounts.
    pub portfolio: Option<PortfolioSnapshot>,
}

impl AccountSnapshot {
    /// Captures an account and, when assigned, its portfolio.
    pub fn capture(account: &ClientAccount, as_of: impl Into<String>) -> Self {
        let as_of = as_of.into();
        Self {
            account_id: account.id.clone(),
            as_of: as_of.clone(),
            cash_balance: account.cash_balance,
            portfolio: account
                .portfolio()
                .map(|portfolio| PortfolioSnapshot::capture(portfolio, as_of.clone())),
        }
    }
}

/// Serializes any payload to pretty-printed JSON.
pub fn to_json_pretty<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Deserializes a payload from JSON.
pub fn from_json<T: DeserializeOwned>(payload: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(payload)
}

/// Serializes any payload to MessagePack with named fields.
pub fn to_msgpack<T: serde::Serialize>(value: &T) -> Result<Vec<u8>, rmp_serde::encode::Error> {
    rmp_serde::to_vec_named(value)
}

/// Deserializes a payload from MessagePack.
pub fn from_msgpack<T: DeserializeOwned>(payload: &[u8]) -> Result<T, rmp_serde::decode::Error> {
    rmp_serde::from_slice(payload)
}
