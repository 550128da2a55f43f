//! Multi-symbol time alignment.
//!
//! Given closes for multiple symbols, align them to a common timeline.
//! Missing days get NaN (no forward-fill).

use crate::domain::{PricePoint, PriceSeries};
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

/// Closes for multiple symbols on a common timeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    /// The common date axis (sorted ascending).
    pub dates: Vec<NaiveDate>,
    /// Closes per symbol. Each inner Vec has the same length as `dates`.
    pub closes: HashMap<String, Vec<f64>>,
}

impl PriceTable {
    /// The series for `symbol` with missing days removed.
    pub fn series(&self, symbol: &str) -> Option<PriceSeries> {
        let closes = self.closes.get(symbol)?;
        let points = self
            .dates
            .iter()
            .zip(closes)
            .map(|(&date, &close)| PricePoint::new(date, close))
            .collect();
        Some(PriceSeries::new(points).without_voids())
    }
}

/// Align multiple symbols to a common timeline.
///
/// For each date in the union of all symbols' dates, each symbol either
/// has a real close or gets NaN.
pub fn align_closes(symbol_points: HashMap<String, Vec<PricePoint>>) -> PriceTable {
    let mut all_dates = BTreeSet::new();
    for points in symbol_points.values() {
        for p in points {
            all_dates.insert(p.date);
        }
    }
    let dates: Vec<NaiveDate> = all_dates.into_iter().collect();

    let mut closes: HashMap<String, Vec<f64>> = HashMap::with_capacity(symbol_points.len());
    for (symbol, points) in &symbol_points {
        let by_date: HashMap<NaiveDate, f64> = points.iter().map(|p| (p.date, p.close)).collect();
        let aligned = dates
            .iter()
            .map(|date| by_date.get(date).copied().unwrap_or(f64::NAN))
            .collect();
        closes.insert(symbol.clone(), aligned);
    }

    PriceTable { dates, closes }
}
