//! PriceSeries: the daily closing-price history of one ticker.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }

    /// Returns true if the close is missing (NaN from alignment).
    pub fn is_void(&self) -> bool {
        self.close.is_nan()
    }
}

/// Chronological (oldest first) closing prices for one ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series, sorting the points by date.
    pub fn new(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self { points }
    }

    /// Build a series from consecutive calendar days starting at `start`.
    pub fn from_closes(start: NaiveDate, closes: &[f64]) -> Self {
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint::new(start + chrono::Duration::days(i as i64), close))
            .collect();
        Self { points }
    }

    /// Copy of this series with void points removed.
    pub fn without_voids(&self) -> Self {
        Self {
            points: self.points.iter().copied().filter(|p| !p.is_void()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }
}
