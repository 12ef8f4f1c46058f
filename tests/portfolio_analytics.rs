//! End-to-end account and analytics scenarios.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use openvalor::analytics;
use openvalor::core::Instrument;
use openvalor::instruments::{Derivative, OptionContract, Stock};
use openvalor::portfolio::{ClientAccount, Portfolio};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn single_stock_account_net_worth() {
    let mut account = ClientAccount::new("CH01-STOCKS", 10_000.0);
    let mut portfolio = Portfolio::new();
    portfolio.add_position(Stock::new("SAN", 1000.0, 3.80, true).into());
    account.assign_portfolio(portfolio).unwrap();

    assert_relative_eq!(account.net_worth(), 13_800.0, epsilon = 1.0e-9);
}

#[test]
fn straddle_portfolio_detection_and_max_strike() {
    let mut account = ClientAccount::new("CH02-HEDGE", 500_000.0);
    let mut portfolio = Portfolio::new();
    portfolio.add_position(
        OptionContract::call("CALL-TSLA", 10.0, 25.0, date(2026, 6, 19), 100.0, 250.0).into(),
    );
    portfolio.add_position(
        OptionContract::put("PUT-TSLA", 10.0, 18.0, date(2026, 6, 19), 100.0, 200.0).into(),
    );
    account.assign_portfolio(portfolio).unwrap();

    assert!(account.portfolio().unwrap().has_straddle_strategy());

    let book = vec![account];
    let winner = analytics::highest_strike_call(&book).unwrap();
    assert_eq!(winner.contract.ticker, "CALL-TSLA");
    assert_relative_eq!(winner.strike, 250.0, epsilon = 1.0e-12);
}

#[test]
fn hedging_ratio_with_one_option_of_two_derivatives() {
    let mut account = ClientAccount::new("CH02-HEDGE", 0.0);
    let mut portfolio = Portfolio::new();
    portfolio
        .add_position(Derivative::new("FUT-DAX", 1.0, 15_600.0, date(2026, 12, 18), 25.0).into());
    portfolio.add_position(
        OptionContract::call("CALL-TSLA", 10.0, 25.0, date(2026, 6, 19), 100.0, 250.0).into(),
    );
    account.assign_portfolio(portfolio).unwrap();

    let book = vec![account];
    assert_relative_eq!(analytics::hedging_ratio(&book).unwrap(), 50.0, epsilon = 1.0e-9);
}

#[test]
fn inactive_account_net_worth_is_cash() {
    let account = ClientAccount::new("UK04-EMPTY", 0.0);
    assert_eq!(account.net_worth(), 0.0);

    let book = vec![account];
    let inactive = analytics::inactive_accounts(&book);
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].id, "UK04-EMPTY");
}

#[test]
fn full_book_report() {
    // Conservative investor.
    let mut stocks = ClientAccount::new("CH01-STOCKS", 10_000.0);
    let mut p1 = Portfolio::new();
    p1.add_position(Stock::new("SAN", 1000.0, 3.80, true).into());
    p1.add_position(Stock::new("AMZN", 10.0, 130.0, false).into());
    stocks.assign_portfolio(p1).unwrap();

    // Hedge fund running a straddle next to an index future.
    let mut hedge = ClientAccount::new("CH02-HEDGE", 500_000.0);
    let mut p2 = Portfolio::new();
    p2.add_position(Derivative::new("FUT-DAX", 1.0, 15_600.0, date(2026, 12, 18), 25.0).into());
    p2.add_position(
        OptionContract::call("CALL-TSLA", 10.0, 25.0, date(2026, 6, 19), 100.0, 250.0).into(),
    );
    p2.add_position(
        OptionContract::put("PUT-TSLA", 10.0, 18.0, date(2026, 6, 19), 100.0, 200.0).into(),
    );
    hedge.assign_portfolio(p2).unwrap();

    // Speculator holding a deep out-of-the-money call.
    let mut gamma = ClientAccount::new("US03-HIGH-GAMMA", 20_000.0);
    let mut p3 = Portfolio::new();
    p3.add_position(
        OptionContract::call("CALL-AMZN", 20.0, 5.0, date(2026, 3, 20), 100.0, 3000.0).into(),
    );
    gamma.assign_portfolio(p3).unwrap();

    let inactive = ClientAccount::new("UK04-EMPTY", 0.0);

    let book = vec![stocks, hedge, gamma, inactive];

    // Net worth per account, in input order.
    let report = analytics::net_worth_report(&book);
    assert_eq!(report.len(), 4);
    assert_relative_eq!(report[0].1, 10_000.0 + 3800.0 + 1300.0, epsilon = 1.0e-9);
    assert_relative_eq!(
        report[1].1,
        500_000.0 + 390_000.0 + 25_000.0 + 18_000.0,
        epsilon = 1.0e-9
    );
    assert_relative_eq!(report[2].1, 20_000.0 + 10_000.0, epsilon = 1.0e-9);
    assert_relative_eq!(report[3].1, 0.0, epsilon = 1.0e-12);

    // Dividend screen.
    let dividends = analytics::dividend_paying_stocks(&book);
    assert_eq!(dividends.len(), 1);
    assert_eq!(dividends[0], ("CH01-STOCKS", &Stock::new("SAN", 1000.0, 3.80, true)));

    // Highest strike across the whole book.
    let winner = analytics::highest_strike_call(&book).unwrap();
    assert_eq!(winner.contract.ticker, "CALL-AMZN");
    assert_relative_eq!(winner.strike, 3000.0, epsilon = 1.0e-12);

    // Leverage screen excludes options.
    let leveraged = analytics::leveraged_pure_derivatives(&book, 10.0);
    assert_eq!(leveraged.len(), 1);
    assert_eq!(leveraged[0].ticker, "FUT-DAX");

    // FUT-DAX, CALL-TSLA, PUT-TSLA, CALL-AMZN -> 3 options of 4 derivatives.
    assert_relative_eq!(analytics::hedging_ratio(&book).unwrap(), 75.0, epsilon = 1.0e-9);

    // Average market prices per active portfolio.
    let averages = analytics::average_prices_by_portfolio(&book);
    assert_eq!(averages.len(), 3);
    assert_relative_eq!(averages[0].1, (3.80 + 130.0) / 2.0, epsilon = 1.0e-12);
    assert_relative_eq!(
        averages[1].1,
        (15_600.0 + 25.0 + 18.0) / 3.0,
        epsilon = 1.0e-9
    );

    // Straddle alert fires only for the hedge fund.
    let flagged = analytics::straddle_accounts(&book);
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].id, "CH02-HEDGE");
}

#[test]
fn valuation_is_deterministic_over_insertion_order() {
    let mut portfolio = Portfolio::new();
    portfolio.add_position(Stock::new("SAN", 1000.0, 3.80, true).into());
    portfolio.add_position(Derivative::new("FUT", 2.0, 50.0, date(2026, 12, 18), 10.0).into());

    let tickers: Vec<&str> = portfolio.positions().iter().map(|p| p.ticker()).collect();
    assert_eq!(tickers, vec!["SAN", "FUT"]);
    assert_relative_eq!(portfolio.total_valuation(), 3800.0 + 1000.0, epsilon = 1.0e-9);
}
