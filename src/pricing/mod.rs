//! Closed-form pricing routines.

pub mod european;

pub use crate::core::OptionType;
pub use european::black_scholes_price;
