//! lowrank runner — run configuration, pipeline and report rendering.
//!
//! This crate builds on `lowrank-core` to provide:
//! - `RunConfig` and the output format choice
//! - The single-run pipeline (tickers → fetch → records → ranked report)
//! - Text, HTML and PNG renderers over one formatted table

pub mod config;
pub mod reporting;
pub mod runner;

pub use config::{ConfigError, OutputFormat, RunConfig, DEFAULT_TOP};
pub use reporting::{RenderError, ReportTable};
pub use runner::{build_report, run, RunError, RunOutcome};
