//! OpenValor is a portfolio valuation and analytics library for positions in
//! equities, linear derivatives, and options held inside client accounts.
//!
//! The crate combines a closed position model (every holding is a
//! [`instruments::Position`] variant dispatching a single current-value
//! capability), closed-form Black-Scholes theoretical pricing for options,
//! and a set of pure cross-account analytics: net worth reporting, dividend
//! screening, straddle detection, hedging ratios, and leverage screens.
//!
//! Design notes:
//! - All valuation is a pure function of the stored fields; the core does no
//!   I/O and holds no hidden state. Reporting front ends own the account
//!   collection and call the read-only queries in [`analytics`].
//! - Degenerate pricing inputs (non-positive spot/strike, zero volatility on
//!   a live contract) fail with [`core::PricingError::InvalidInput`] instead
//!   of silently producing NaN.
//! - Contracts at or past expiry settle to per-unit intrinsic value.
//!
//! # Quick Start
//! Value a position polymorphically:
//! ```rust
//! use openvalor::core::Instrument;
//! use openvalor::instruments::{Position, Stock};
//!
//! let position: Position = Stock::new("SAN", 1000.0, 3.80, true).into();
//! assert_eq!(position.current_value(), 3800.0);
//! ```
//!
//! Price an option's theoretical fair value:
//! ```rust
//! use chrono::NaiveDate;
//! use openvalor::instruments::OptionContract;
//!
//! let expiry = NaiveDate::from_ymd_opt(2027, 8, 7).unwrap();
//! let call = OptionContract::call("CALL-TSLA", 10.0, 100.0, expiry, 100.0, 100.0);
//! let fair = call.theoretical_value(0.05, 0.20, 1.0).unwrap();
//! assert!(fair > 1000.0 && fair < 1100.0);
//! ```
//!
//! Aggregate a client account:
//! ```rust
//! use openvalor::instruments::Stock;
//! use openvalor::portfolio::{ClientAccount, Portfolio};
//!
//! let mut account = ClientAccount::new("CH01-STOCKS", 10_000.0);
//! let mut portfolio = Portfolio::new();
//! portfolio.add_position(Stock::new("SAN", 1000.0, 3.80, true).into());
//! account.assign_portfolio(portfolio).unwrap();
//! assert_eq!(account.net_worth(), 13_800.0);
//! ```
//!
//! Run a cross-account query:
//! ```rust
//! use openvalor::analytics;
//! use openvalor::portfolio::ClientAccount;
//!
//! let book = vec![ClientAccount::new("UK04-EMPTY", 0.0)];
//! assert_eq!(analytics::inactive_accounts(&book).len(), 1);
//! assert!(analytics::hedging_ratio(&book).is_none());
//! ```

pub mod analytics;
pub mod core;
pub mod instruments;
pub mod math;
pub mod portfolio;
pub mod pricing;
pub mod rates;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::core::{Instrument, OptionType, PricingError};
    pub use crate::instruments::{Derivative, OptionContract, Position, Stock};
    pub use crate::portfolio::{ClientAccount, Portfolio};
    pub use crate::rates::{DayCountConvention, year_fraction};
}
