//! Integration tests: aligned price table → records → ranked report.
//!
//! Five synthetic tickers, 250 consecutive daily closes each, increasing by
//! one per day. All expectations are closed-form.

use chrono::NaiveDate;
use lowrank_core::data::{align_closes, LookbackWindow, PriceProvider, PriceTable, StaticProvider};
use lowrank_core::domain::PricePoint;
use lowrank_core::{compute_records, MetricsError, RankedReport};
use std::collections::HashMap;

const DAYS: usize = 250;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
}

fn mock_prices() -> Vec<(&'static str, Vec<f64>)> {
    [
        ("AAAA", 150.0),
        ("AAAB", 300.0),
        ("AAAC", 1000.0),
        ("AAAD", 2000.0),
        ("AAAE", 250.0),
    ]
    .into_iter()
    .map(|(t, base)| (t, (0..DAYS).map(|i| base + i as f64).collect()))
    .collect()
}

fn mock_table() -> PriceTable {
    let input: HashMap<String, Vec<PricePoint>> = mock_prices()
        .into_iter()
        .map(|(t, closes)| {
            let points = closes
                .iter()
                .enumerate()
                .map(|(i, &c)| PricePoint::new(start() + chrono::Duration::days(i as i64), c))
                .collect();
            (t.to_string(), points)
        })
        .collect();
    align_closes(input)
}

fn tickers() -> Vec<String> {
    mock_prices().into_iter().map(|(t, _)| t.to_string()).collect()
}

#[test]
fn records_match_closed_form() {
    let records = compute_records(&tickers(), &mock_table()).unwrap();
    assert_eq!(records.len(), 5);

    for (ticker, prices) in mock_prices() {
        let record = records.get(ticker).unwrap();
        let current = prices[DAYS - 1];
        let low = prices[0];
        let trailing: f64 = prices[DAYS - 200..].iter().sum();

        assert_eq!(record.current_price, current);
        assert_eq!(record.high_52_week, current);
        assert_eq!(record.low_52_week, low);
        assert_eq!(record.current_pct_from_low, (current - low) / low * 100.0);
        assert_eq!(record.moving_average_200d, Some(trailing / 200.0));
    }
}

#[test]
fn records_keep_input_order() {
    let records = compute_records(&tickers(), &mock_table()).unwrap();
    let order: Vec<&str> = records.symbols().collect();
    assert_eq!(order, vec!["AAAA", "AAAB", "AAAC", "AAAD", "AAAE"]);
}

#[test]
fn ranked_report_puts_lowest_pct_first() {
    let records = compute_records(&tickers(), &mock_table()).unwrap();
    let report = RankedReport::build(&records, 25, start());

    // pct = 249 / base * 100, so the highest base is closest to its low
    let order: Vec<&str> = report.rows.iter().map(|r| r.ticker.as_str()).collect();
    assert_eq!(order, vec!["AAAD", "AAAC", "AAAB", "AAAE", "AAAA"]);
}

#[test]
fn missing_ticker_aborts() {
    let mut requested = tickers();
    requested.push("ZZZZ".into());
    let err = compute_records(&requested, &mock_table()).unwrap_err();
    assert_eq!(err, MetricsError::MissingTicker("ZZZZ".into()));
}

#[test]
fn static_provider_round_trip() {
    let provider = StaticProvider::new(mock_table());
    let window = LookbackWindow::one_year(start() + chrono::Duration::days(DAYS as i64));
    let table = provider.fetch_closes(&tickers(), window).unwrap();
    assert_eq!(table.dates.len(), DAYS);
    assert_eq!(provider.name(), "static");
}

#[test]
fn short_history_has_no_moving_average() {
    let mut input = HashMap::new();
    input.insert(
        "NEW.SA".to_string(),
        (0..50)
            .map(|i| PricePoint::new(start() + chrono::Duration::days(i), 10.0 + i as f64))
            .collect(),
    );
    let records = compute_records(&["NEW.SA".to_string()], &align_closes(input)).unwrap();
    let record = records.get("NEW.SA").unwrap();
    assert_eq!(record.ticker, "NEW");
    assert_eq!(record.moving_average_200d, None);
    assert_eq!(record.current_price, 59.0);
}
