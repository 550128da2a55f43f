//! Data acquisition: ticker lists, price providers, timeline alignment.

pub mod align;
pub mod provider;
pub mod tickers;
pub mod yahoo;

pub use align::{align_closes, PriceTable};
pub use provider::{DataError, LookbackWindow, PriceProvider, StaticProvider};
pub use tickers::{parse_tickers, read_tickers, TickerListError};
pub use yahoo::YahooProvider;
