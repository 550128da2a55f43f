//! Domain types for the 52-week-low ranker

pub mod record;
pub mod series;
pub mod ticker;

pub use record::{RecordSet, StockRecord};
pub use series::{PricePoint, PriceSeries};
pub use ticker::display_ticker;
