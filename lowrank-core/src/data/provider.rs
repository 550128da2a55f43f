//! Price provider trait and structured error types.
//!
//! The PriceProvider trait abstracts over data sources so the pipeline can run
//! against Yahoo Finance in production and an in-memory table in tests.

use super::align::PriceTable;
use chrono::NaiveDate;
use thiserror::Error;

/// Structured error types for data operations.
///
/// `SymbolNotFound` is the only per-symbol failure; every other variant means
/// the batched request as a whole failed.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by provider (HTTP {status})")]
    RateLimited { status: u16 },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("authentication required: {0}")]
    AuthenticationRequired(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("data error: {0}")]
    Other(String),
}

impl DataError {
    /// True if the error concerns a single symbol rather than the whole batch.
    pub fn is_per_symbol(&self) -> bool {
        matches!(self, DataError::SymbolNotFound { .. })
    }
}

/// Inclusive date range covered by a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookbackWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl LookbackWindow {
    /// Trailing one-year window ending at `today`.
    pub fn one_year(today: NaiveDate) -> Self {
        Self {
            start: today - chrono::Duration::days(365),
            end: today,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Trait for price providers (Yahoo Finance, in-memory fixtures).
///
/// One call fetches every requested symbol; implementations may split the
/// request internally but the caller sees a single aligned table.
pub trait PriceProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily closes for all `symbols` over `window`.
    fn fetch_closes(
        &self,
        symbols: &[String],
        window: LookbackWindow,
    ) -> Result<PriceTable, DataError>;
}

/// Provider that serves a pre-built table. Never touches the network.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    table: PriceTable,
}

impl StaticProvider {
    pub fn new(table: PriceTable) -> Self {
        Self { table }
    }
}

impl PriceProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch_closes(
        &self,
        _symbols: &[String],
        _window: LookbackWindow,
    ) -> Result<PriceTable, DataError> {
        Ok(self.table.clone())
    }
}
