//! Ranking by proximity to the 52-week low.

use crate::domain::{RecordSet, StockRecord};
use chrono::NaiveDate;
use tracing::info;

/// Records sorted ascending by `current_pct_from_low`.
///
/// The sort is stable: ties keep the record set's insertion order.
pub fn rank(records: &RecordSet) -> Vec<StockRecord> {
    info!("Sorting stock data.");
    let mut ranked: Vec<StockRecord> = records.records().cloned().collect();
    ranked.sort_by(|a, b| a.current_pct_from_low.total_cmp(&b.current_pct_from_low));
    ranked
}

/// The first `min(n, len)` records.
pub fn top_n(mut ranked: Vec<StockRecord>, n: usize) -> Vec<StockRecord> {
    ranked.truncate(n);
    ranked
}

/// Top-N ranked records for one run date; what the renderers consume.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedReport {
    pub date: NaiveDate,
    pub rows: Vec<StockRecord>,
}

impl RankedReport {
    /// Rank `records` and keep the first `n`.
    pub fn build(records: &RecordSet, n: usize, date: NaiveDate) -> Self {
        Self {
            date,
            rows: top_n(rank(records), n),
        }
    }

    /// True when there is nothing to report.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
