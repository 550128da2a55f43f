//! lowrank core — domain types, price data, metrics and ranking.
//!
//! This crate holds everything between a ticker list and a ranked table:
//! - Domain types (price series, stock records, ordered record sets)
//! - Ticker list reading and the batched price provider trait
//! - Yahoo Finance provider and multi-symbol timeline alignment
//! - Metrics engine (52-week high/low, distance from low, 200-day SMA)
//! - Stable ranking and top-N selection

pub mod data;
pub mod domain;
pub mod indicators;
pub mod metrics;
pub mod rank;

pub use metrics::{compute_record, compute_records, MetricsError};
pub use rank::{rank, top_n, RankedReport};
