//! lowrank CLI — rank stocks by their proximity to the 52-week low.
//!
//! Reads a ticker list, fetches one year of daily closes from Yahoo Finance,
//! and prints (or saves as HTML / PNG) the tickers closest to their low.
//!
//! Usage examples:
//! - `lowrank --file stocks.txt`
//! - `lowrank --file stocks.txt --output image`
//! - `lowrank --file stocks.txt --top 10 --output html`

use anyhow::Result;
use clap::Parser;
use lowrank_core::data::YahooProvider;
use lowrank_runner::{run, OutputFormat, RunConfig, RunOutcome, DEFAULT_TOP};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lowrank",
    about = "Rank stocks based on their proximity to the 52-week low."
)]
struct Cli {
    /// File with the list of stock symbols. One per line.
    #[arg(long)]
    file: PathBuf,

    /// Number of stocks to display.
    #[arg(long, default_value_t = DEFAULT_TOP)]
    top: usize,

    /// Output format: 'text' displays on screen, 'image' saves a .png, 'html' saves a .html.
    #[arg(long, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Directory for the dated .png / .html file.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Debug flag: info-level logging on stderr.
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = RunConfig {
        top: cli.top,
        output: cli.output,
        output_dir: cli.output_dir,
        ..RunConfig::new(cli.file)
    };

    let provider = YahooProvider::new()?;

    match run(&config, &provider)? {
        RunOutcome::Printed(text) => println!("{text}"),
        RunOutcome::Written(path) => tracing::info!("Report written to {}", path.display()),
    }

    Ok(())
}

/// Info level with `--debug`, errors only otherwise. Always on stderr.
fn init_logging(debug: bool) {
    let level = if debug { "info" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .init();
}
