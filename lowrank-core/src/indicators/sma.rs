//! Simple Moving Average (SMA).
//!
//! Mean of the trailing `period` closes. Undefined (None) until the series
//! holds at least `period` values.

/// Window of the long-term moving average reported per ticker.
pub const MOVING_AVERAGE_PERIOD: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "SMA period must be >= 1");
        Self { period }
    }

    /// SMA at the last value of `closes`.
    ///
    /// Returns None if there are fewer than `period` values or any value in
    /// the trailing window is NaN.
    pub fn last_value(&self, closes: &[f64]) -> Option<f64> {
        if closes.len() < self.period {
            return None;
        }
        let window = &closes[closes.len() - self.period..];
        if window.iter().any(|v| v.is_nan()) {
            return None;
        }
        Some(window.iter().sum::<f64>() / self.period as f64)
    }
}

impl Default for Sma {
    fn default() -> Self {
        Self::new(MOVING_AVERAGE_PERIOD)
    }
}
