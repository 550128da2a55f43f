//! The single-run pipeline.
//!
//! Read tickers, fetch one year of closes in a single batched call, compute
//! records, rank, keep the top N, render. Any error aborts the run before
//! output is produced.

use crate::config::{ConfigError, OutputFormat, RunConfig};
use crate::reporting::{render_text, write_html, write_png, RenderError, ReportTable};
use chrono::NaiveDate;
use lowrank_core::data::{
    read_tickers, DataError, LookbackWindow, PriceProvider, PriceTable, TickerListError,
};
use lowrank_core::{compute_records, MetricsError, RankedReport};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tickers(#[from] TickerListError),

    #[error("downloading data: {0}")]
    Fetch(#[from] DataError),

    #[error("data error: {0}")]
    Data(#[from] MetricsError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Text table, to be printed on stdout.
    Printed(String),
    /// Path of the HTML or PNG file written.
    Written(PathBuf),
}

/// Compute, rank and truncate: the pure middle of the pipeline.
pub fn build_report(
    tickers: &[String],
    prices: &PriceTable,
    top: usize,
    date: NaiveDate,
) -> Result<RankedReport, MetricsError> {
    let records = compute_records(tickers, prices)?;
    info!("Creating report from {} records.", records.len());
    let report = RankedReport::build(&records, top, date);
    if report.is_empty() {
        info!("Empty report");
    }
    Ok(report)
}

/// Execute one run end to end.
pub fn run(config: &RunConfig, provider: &dyn PriceProvider) -> Result<RunOutcome, RunError> {
    config.validate()?;

    let tickers = read_tickers(&config.tickers_file)?;

    info!("Downloading stock data from {}.", provider.name());
    let window = LookbackWindow::one_year(config.today);
    let prices = provider.fetch_closes(&tickers, window)?;

    let report = build_report(&tickers, &prices, config.top, config.today)?;
    let table = ReportTable::from_report(&report);

    let outcome = match config.output {
        OutputFormat::Text => RunOutcome::Printed(render_text(&table)),
        OutputFormat::Html => RunOutcome::Written(write_html(&table, &config.output_dir)?),
        OutputFormat::Image => RunOutcome::Written(write_png(&table, &config.output_dir)?),
    };
    Ok(outcome)
}
