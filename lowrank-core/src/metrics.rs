//! Metrics engine: price series in, one StockRecord per ticker out.

use crate::data::PriceTable;
use crate::domain::{display_ticker, PriceSeries, RecordSet, StockRecord};
use crate::indicators::Sma;
use thiserror::Error;
use tracing::info;

/// Per-ticker data faults. Any of these aborts the run.
#[derive(Debug, Error, PartialEq)]
pub enum MetricsError {
    #[error("ticker '{0}' is missing from the fetched price data")]
    MissingTicker(String),

    #[error("ticker '{0}' has no price history")]
    EmptySeries(String),

    #[error("ticker '{0}' has a 52-week low of zero; distance from low is undefined")]
    ZeroLow(String),
}

/// Compute the record for one ticker's series.
pub fn compute_record(symbol: &str, series: &PriceSeries) -> Result<StockRecord, MetricsError> {
    let closes = series.closes();
    let current_price = *closes
        .last()
        .ok_or_else(|| MetricsError::EmptySeries(symbol.to_string()))?;

    let high_52_week = closes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let low_52_week = closes.iter().copied().fold(f64::INFINITY, f64::min);

    if low_52_week == 0.0 {
        return Err(MetricsError::ZeroLow(symbol.to_string()));
    }
    let current_pct_from_low = (current_price - low_52_week) / low_52_week * 100.0;

    Ok(StockRecord {
        ticker: display_ticker(symbol),
        current_price,
        high_52_week,
        low_52_week,
        current_pct_from_low,
        moving_average_200d: Sma::default().last_value(&closes),
    })
}

/// Compute records for `tickers`, in order, from a fetched price table.
pub fn compute_records(tickers: &[String], prices: &PriceTable) -> Result<RecordSet, MetricsError> {
    let mut records = RecordSet::new();
    for symbol in tickers {
        let series = prices
            .series(symbol)
            .ok_or_else(|| MetricsError::MissingTicker(symbol.clone()))?;
        records.insert(symbol.clone(), compute_record(symbol, &series)?);
    }

    info!("Successfully processed data for {} stocks.", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(closes: &[f64]) -> PriceSeries {
        PriceSeries::from_closes(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(), closes)
    }

    #[test]
    fn basic_record() {
        let record = compute_record("SPY", &series(&[100.0, 80.0, 120.0, 90.0])).unwrap();
        assert_eq!(record.ticker, "SPY");
        assert_eq!(record.current_price, 90.0);
        assert_eq!(record.high_52_week, 120.0);
        assert_eq!(record.low_52_week, 80.0);
        assert_eq!(record.current_pct_from_low, (90.0 - 80.0) / 80.0 * 100.0);
        assert_eq!(record.moving_average_200d, None);
    }

    #[test]
    fn constant_series_is_zero_pct() {
        let record = compute_record("FLAT", &series(&[50.0; 10])).unwrap();
        assert_eq!(record.current_pct_from_low, 0.0);
        assert_eq!(record.high_52_week, record.low_52_week);
    }

    #[test]
    fn moving_average_needs_200_points() {
        let closes: Vec<f64> = (1..=199).map(|i| i as f64).collect();
        assert_eq!(compute_record("X", &series(&closes)).unwrap().moving_average_200d, None);

        let closes: Vec<f64> = (1..=200).map(|i| i as f64).collect();
        assert_eq!(
            compute_record("X", &series(&closes)).unwrap().moving_average_200d,
            Some(100.5)
        );
    }

    #[test]
    fn zero_low_is_an_error() {
        let err = compute_record("ZERO", &series(&[3.0, 0.0, 2.0])).unwrap_err();
        assert_eq!(err, MetricsError::ZeroLow("ZERO".into()));
    }

    #[test]
    fn empty_series_is_an_error() {
        let err = compute_record("NONE", &PriceSeries::default()).unwrap_err();
        assert_eq!(err, MetricsError::EmptySeries("NONE".into()));
    }

    #[test]
    fn suffix_stripped_in_record() {
        let record = compute_record("PETR4.SA", &series(&[30.0, 31.0])).unwrap();
        assert_eq!(record.ticker, "PETR4");
    }
}
