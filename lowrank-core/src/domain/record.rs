//! StockRecord: derived statistics for one ticker, and the ordered set of them.

use serde::{Deserialize, Serialize};

/// Per-ticker statistics computed from one year of closes.
///
/// Immutable once built by the metrics engine. `moving_average_200d` is
/// `None` when the series holds fewer than 200 points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub ticker: String,
    pub current_price: f64,
    pub high_52_week: f64,
    pub low_52_week: f64,
    pub current_pct_from_low: f64,
    pub moving_average_200d: Option<f64>,
}

/// Records keyed by requested symbol, iterated in insertion order.
///
/// Ranking stability depends on this order, so a plain `HashMap` is not
/// enough here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    entries: Vec<(String, StockRecord)>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record for `symbol`. A replaced record keeps
    /// its original position.
    pub fn insert(&mut self, symbol: impl Into<String>, record: StockRecord) {
        let symbol = symbol.into();
        match self.entries.iter_mut().find(|(s, _)| *s == symbol) {
            Some(entry) => entry.1 = record,
            None => self.entries.push((symbol, record)),
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&StockRecord> {
        self.entries
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, r)| r)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(s, _)| s.as_str())
    }

    pub fn records(&self) -> impl Iterator<Item = &StockRecord> {
        self.entries.iter().map(|(_, r)| r)
    }
}

impl FromIterator<(String, StockRecord)> for RecordSet {
    fn from_iter<I: IntoIterator<Item = (String, StockRecord)>>(iter: I) -> Self {
        let mut set = RecordSet::new();
        for (symbol, record) in iter {
            set.insert(symbol, record);
        }
        set
    }
}
