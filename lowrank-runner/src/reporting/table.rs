//! Formatted report table shared by all renderers.
//!
//! Presentation rules: prices rounded to 2 decimals, distance from the low to
//! 1 decimal with a percent sign, a 0-based rank column with an empty header,
//! and `N/A` where the 200-day average is not available.

use chrono::NaiveDate;
use lowrank_core::domain::StockRecord;
use lowrank_core::RankedReport;

/// Column headers, index column first.
pub const COLUMNS: [&str; 7] = [
    "",
    "ticker",
    "current_price",
    "high_52_week",
    "low_52_week",
    "current_pct_from_low",
    "moving_average_200d",
];

/// Cell text for a missing moving average.
pub const NOT_AVAILABLE: &str = "N/A";

/// Stem of every dated report file.
pub const FILE_STEM: &str = "stocks_52w_low";

/// Report rows as display strings.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub date: NaiveDate,
    pub header: Vec<String>,
    /// One Vec per row, `header.len()` cells each. Cell 0 is the rank index.
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn from_report(report: &RankedReport) -> Self {
        let rows = report
            .rows
            .iter()
            .enumerate()
            .map(|(i, record)| format_row(i, record))
            .collect();
        Self {
            date: report.date,
            header: COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest cell (header included) per column, in characters.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }
        widths
    }
}

fn format_row(index: usize, record: &StockRecord) -> Vec<String> {
    vec![
        index.to_string(),
        record.ticker.clone(),
        format_price(record.current_price),
        format_price(record.high_52_week),
        format_price(record.low_52_week),
        format_pct(record.current_pct_from_low),
        format_moving_average(record.moving_average_200d),
    ]
}

/// Round to 2 decimals: scale by 100, round half to even, scale back.
fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    let mut rounded = scaled.round();
    // `round` breaks exact ties away from zero
    if (rounded - scaled).abs() == 0.5 {
        rounded = 2.0 * (scaled / 2.0).round();
    }
    rounded / 100.0
}

pub fn format_price(value: f64) -> String {
    format!("{:.2}", round2(value))
}

/// The distance is rounded to 2 decimals before the 1-decimal display.
pub fn format_pct(value: f64) -> String {
    format!("{:.1}%", round2(value))
}

pub fn format_moving_average(value: Option<f64>) -> String {
    match value {
        Some(v) => format_price(v),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// `stocks_52w_low_<YYYY-MM-DD>.<ext>`
pub fn report_filename(date: NaiveDate, ext: &str) -> String {
    format!("{FILE_STEM}_{}.{ext}", date.format("%Y-%m-%d"))
}
