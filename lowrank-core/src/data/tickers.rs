//! Ticker list files: one symbol per line, blank lines ignored.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum TickerListError {
    #[error("File {} not found.", .0.display())]
    NotFound(PathBuf),

    #[error("No tickers read from the file {}.", .0.display())]
    Empty(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read the ticker list at `path`.
///
/// Symbols are passed through as written (trimmed); invalid symbols surface
/// later as provider errors.
pub fn read_tickers(path: &Path) -> Result<Vec<String>, TickerListError> {
    info!("Reading tickers from file {}.", path.display());

    if !path.exists() {
        return Err(TickerListError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|source| TickerListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let tickers = parse_tickers(&content);
    if tickers.is_empty() {
        return Err(TickerListError::Empty(path.to_path_buf()));
    }

    info!("Read {} tickers from file {}.", tickers.len(), path.display());
    Ok(tickers)
}

/// Split file content into trimmed, non-blank symbols.
pub fn parse_tickers(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
