//! Cross-account analytics.
//!
//! Pure, read-only queries over a slice of client accounts. Iteration order
//! follows the input slice and each account's position insertion order, so
//! results are deterministic; nothing here mutates the book.

use crate::core::OptionType;
use crate::instruments::{Derivative, OptionContract, Stock};
use crate::portfolio::ClientAccount;

/// Net worth per account, in input order.
pub fn net_worth_report(accounts: &[ClientAccount]) -> Vec<(&str, f64)> {
    accounts
        .iter()
        .map(|account| (account.id.as_str(), account.net_worth()))
        .collect()
}

/// Every dividend-paying stock position, with its owning account id.
pub fn dividend_paying_stocks(accounts: &[ClientAccount]) -> Vec<(&str, &Stock)> {
    held_positions(accounts)
        .filter_map(|(id, position)| position.as_stock().map(|stock| (id, stock)))
        .filter(|(_, stock)| stock.pays_dividends)
        .collect()
}

/// The call option with the highest strike across all accounts.
///
/// Ties keep the first call encountered in iteration order. `None` when no
/// call options exist.
pub fn highest_strike_call(accounts: &[ClientAccount]) -> Option<&OptionContract> {
    let mut winner: Option<&OptionContract> = None;
    for (_, position) in held_positions(accounts) {
        if let Some(call) = position.as_option_of_type(OptionType::Call) {
            if winner.map_or(true, |best| call.strike > best.strike) {
                winner = Some(call);
            }
        }
    }
    winner
}

/// Linear derivative positions (options excluded) whose contract multiplier
/// exceeds `min_multiplier`.
pub fn leveraged_pure_derivatives(
    accounts: &[ClientAccount],
    min_multiplier: f64,
) -> Vec<&Derivative> {
    held_positions(accounts)
        .filter_map(|(_, position)| position.as_pure_derivative())
        .filter(|derivative| derivative.multiplier > min_multiplier)
        .collect()
}

/// Accounts with no portfolio assigned.
pub fn inactive_accounts(accounts: &[ClientAccount]) -> Vec<&ClientAccount> {
    accounts
        .iter()
        .filter(|account| account.is_inactive())
        .collect()
}

/// Share of option positions among all derivative positions, in percent.
///
/// Options count as derivatives. `None` when no derivative positions exist.
pub fn hedging_ratio(accounts: &[ClientAccount]) -> Option<f64> {
    let mut derivatives = 0_usize;
    let mut options = 0_usize;

    for (_, position) in held_positions(accounts) {
        if position.is_derivative() {
            derivatives += 1;
        }
        if position.as_option().is_some() {
            options += 1;
        }
    }

    if derivatives == 0 {
        return None;
    }
    Some(options as f64 / derivatives as f64 * 100.0)
}

/// Average per-unit market price for each account with a portfolio.
pub fn average_prices_by_portfolio(accounts: &[ClientAccount]) -> Vec<(&str, f64)> {
    accounts
        .iter()
        .filter_map(|account| {
            account
                .portfolio()
                .map(|portfolio| (account.id.as_str(), portfolio.average_market_price()))
        })
        .collect()
}

/// Accounts whose portfolio holds a straddle (at least one call and one put).
pub fn straddle_accounts(accounts: &[ClientAccount]) -> Vec<&ClientAccount> {
    accounts
        .iter()
        .filter(|account| {
            account
                .portfolio()
                .is_some_and(|portfolio| portfolio.has_straddle_strategy())
        })
        .collect()
}

fn held_positions(
    accounts: &[ClientAccount],
) -> impl Iterator<Item = (&str, &crate::instruments::Position)> {
    accounts.iter().flat_map(|account| {
        account
            .portfolio()
            .into_iter()
            .flat_map(|portfolio| portfolio.positions())
            .map(move |position| (account.id.as_str(), position))
    })
}
