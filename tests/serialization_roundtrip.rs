//! JSON and MessagePack round-trips for the snapshot payloads.

use std::fmt::Debug;

use chrono::NaiveDate;
use openvalor::core::{AccountSnapshot, PortfolioSnapshot};
use openvalor::instruments::{Derivative, OptionContract, Position, Stock};
use openvalor::portfolio::{ClientAccount, Portfolio};
use serde::de::DeserializeOwned;
use serde::Serialize;

fn assert_roundtrip<T>(value: &T)
where
    T: Serialize + DeserializeOwned + PartialEq + Debug,
{
    let json = serde_json::to_vec_pretty(value).expect("json serialize");
    let from_json: T = serde_json::from_slice(&json).expect("json deserialize");
    assert_eq!(from_json, *value, "json roundtrip mismatch");

    let msgpack = rmp_serde::to_vec_named(value).expect("msgpack serialize");
    let from_msgpack: T = rmp_serde::from_slice(&msgpack).expect("msgpack deserialize");
    assert_eq!(from_msgpack, *value, "msgpack roundtrip mismatch");
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_positions() -> Vec<Position> {
    vec![
        Stock::new("SAN", 1000.0, 3.80, true).into(),
        Stock::new("AMZN", 10.5, 130.0, false).into(),
        Derivative::new("FUT-DAX", -1.0, 15_600.0, date(2026, 12, 18), 25.0).into(),
        OptionContract::call("CALL-TSLA", 10.0, 25.0, date(2026, 6, 19), 100.0, 250.0).into(),
        OptionContract::put("PUT-TSLA", 10.0, 18.0, date(2026, 6, 19), 100.0, 200.0).into(),
    ]
}

#[test]
fn positions_roundtrip() {
    for position in sample_positions() {
        assert_roundtrip(&position);
    }
}

#[test]
fn portfolio_snapshot_roundtrip() {
    let portfolio = Portfolio::from_positions(sample_positions());
    let snapshot = PortfolioSnapshot::capture(&portfolio, "2026-08-07T09:00:00Z");
    assert_roundtrip(&snapshot);
    assert_eq!(snapshot.restore(), portfolio);
}

#[test]
fn account_snapshot_roundtrip() {
    let mut account = ClientAccount::new("CH02-HEDGE", 500_000.0);
    account
        .assign_portfolio(Portfolio::from_positions(sample_positions()))
        .unwrap();
    assert_roundtrip(&AccountSnapshot::capture(&account, "2026-08-07T09:00:00Z"));

    let inactive = ClientAccount::new("UK04-EMPTY", 0.0);
    assert_roundtrip(&AccountSnapshot::capture(&inactive, "2026-08-07T09:00:00Z"));
}

#[test]
fn position_json_is_tagged_by_variant() {
    let position: Position = Stock::new("SAN", 1000.0, 3.80, true).into();
    let json = serde_json::to_value(&position).expect("json serialize");
    assert_eq!(json["position_type"], "stock");
    assert_eq!(json["payload"]["ticker"], "SAN");
}
