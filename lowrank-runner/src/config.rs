//! Run configuration, built from command-line arguments.

use chrono::NaiveDate;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Default number of rows in the report.
pub const DEFAULT_TOP: usize = 25;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("--top must be a positive integer, got {0}")]
    InvalidTop(usize),

    #[error("unknown output format '{0}'. Valid: text, image, html")]
    UnknownOutput(String),
}

/// Report rendering backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain-text table on stdout.
    #[default]
    Text,
    /// PNG table image.
    Image,
    /// HTML table file.
    Html,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "image" => Ok(OutputFormat::Image),
            "html" => Ok(OutputFormat::Html),
            other => Err(ConfigError::UnknownOutput(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Image => "image",
            OutputFormat::Html => "html",
        };
        f.write_str(name)
    }
}

/// Everything one run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Ticker list, one symbol per line.
    pub tickers_file: PathBuf,
    /// Number of rows to report.
    pub top: usize,
    pub output: OutputFormat,
    /// Directory for dated HTML/PNG files.
    pub output_dir: PathBuf,
    /// Run date: end of the lookback window and the date in file names.
    pub today: NaiveDate,
}

impl RunConfig {
    /// Config with defaults for everything but the ticker file.
    pub fn new(tickers_file: impl Into<PathBuf>) -> Self {
        Self {
            tickers_file: tickers_file.into(),
            top: DEFAULT_TOP,
            output: OutputFormat::default(),
            output_dir: PathBuf::from("."),
            today: chrono::Local::now().date_naive(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top == 0 {
            return Err(ConfigError::InvalidTop(self.top));
        }
        Ok(())
    }
}
