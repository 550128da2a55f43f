//! Display normalization for ticker symbols.

/// Exchange suffix removed for display (B3, São Paulo).
pub const EXCHANGE_SUFFIX: &str = ".SA";

/// Strip one trailing exchange suffix, if present.
pub fn display_ticker(symbol: &str) -> String {
    symbol
        .strip_suffix(EXCHANGE_SUFFIX)
        .unwrap_or(symbol)
        .to_string()
}
