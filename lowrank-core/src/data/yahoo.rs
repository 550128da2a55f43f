//! Yahoo Finance price provider.
//!
//! Fetches daily closes for many symbols at once from Yahoo's spark API.
//! Yahoo Finance has no official API and is subject to unannounced format
//! changes; a format change surfaces as `ResponseFormatChanged`.
//!
//! No retries: any failure aborts the batch.

use super::align::{align_closes, PriceTable};
use super::provider::{DataError, LookbackWindow, PriceProvider};
use crate::domain::PricePoint;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{info, warn};

const SPARK_URL: &str = "https://query1.finance.yahoo.com/v7/finance/spark";

/// Yahoo rejects spark requests with more symbols than this.
pub const MAX_SYMBOLS_PER_REQUEST: usize = 20;

/// Yahoo Finance v7 spark API response.
#[derive(Debug, Deserialize)]
struct SparkResponse {
    spark: SparkBody,
}

#[derive(Debug, Deserialize)]
struct SparkBody {
    result: Option<Vec<SparkResult>>,
    error: Option<SparkError>,
}

#[derive(Debug, Deserialize)]
struct SparkError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct SparkResult {
    symbol: String,
    #[serde(default)]
    response: Option<Vec<SparkData>>,
}

#[derive(Debug, Deserialize)]
struct SparkData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    close: Vec<Option<f64>>,
}

/// Yahoo Finance price provider.
pub struct YahooProvider {
    client: reqwest::blocking::Client,
    chunk_size: usize,
}

impl YahooProvider {
    pub fn new() -> Result<Self, DataError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .map_err(|e| DataError::Other(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            chunk_size: MAX_SYMBOLS_PER_REQUEST,
        })
    }

    /// Execute one spark request for up to `chunk_size` symbols.
    fn fetch_chunk(&self, symbols: &[String]) -> Result<String, DataError> {
        let joined = symbols.join(",");
        let resp = self
            .client
            .get(SPARK_URL)
            .query(&[("symbols", joined.as_str()), ("range", "1y"), ("interval", "1d")])
            .send()
            .map_err(|e| DataError::NetworkUnreachable(e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(DataError::AuthenticationRequired(
                "Yahoo Finance requires authentication".into(),
            ));
        }
        if status == reqwest::StatusCode::FORBIDDEN
            || status == reqwest::StatusCode::TOO_MANY_REQUESTS
        {
            return Err(DataError::RateLimited {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            return Err(DataError::Other(format!("HTTP {status} for {joined}")));
        }

        resp.text().map_err(|e| {
            DataError::ResponseFormatChanged(format!("failed to read response for {joined}: {e}"))
        })
    }
}

/// Parse a spark response body into per-symbol points inside `window`.
///
/// Symbols Yahoo returns without data are left out; the caller decides
/// whether a missing symbol is fatal.
pub fn parse_spark(
    symbols: &[String],
    body: &str,
    window: LookbackWindow,
) -> Result<HashMap<String, Vec<PricePoint>>, DataError> {
    let resp: SparkResponse = serde_json::from_str(body)
        .map_err(|e| DataError::ResponseFormatChanged(format!("invalid spark JSON: {e}")))?;

    let results = match (resp.spark.result, resp.spark.error) {
        (Some(results), _) => results,
        (None, Some(err)) if err.code == "Not Found" && symbols.len() == 1 => {
            return Err(DataError::SymbolNotFound {
                symbol: symbols[0].clone(),
            });
        }
        (None, Some(err)) => {
            return Err(DataError::ResponseFormatChanged(format!(
                "{}: {}",
                err.code, err.description
            )));
        }
        (None, None) => {
            return Err(DataError::ResponseFormatChanged(
                "empty result with no error".into(),
            ));
        }
    };

    let mut out = HashMap::with_capacity(results.len());
    for result in results {
        let Some(data) = result.response.and_then(|r| r.into_iter().next()) else {
            warn!("no price data returned for {}", result.symbol);
            continue;
        };
        let Some(timestamps) = data.timestamp else {
            warn!("no timestamps returned for {}", result.symbol);
            continue;
        };
        let quote = data.indicators.quote.into_iter().next().ok_or_else(|| {
            DataError::ResponseFormatChanged(format!("no quote data for {}", result.symbol))
        })?;

        let mut points = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            let date = chrono::DateTime::from_timestamp(ts, 0)
                .map(|dt| dt.naive_utc().date())
                .ok_or_else(|| {
                    DataError::ResponseFormatChanged(format!("invalid timestamp: {ts}"))
                })?;
            // Null closes are holidays or halted sessions
            let Some(close) = quote.close.get(i).copied().flatten() else {
                continue;
            };
            if window.contains(date) {
                points.push(PricePoint::new(date, close));
            }
        }
        out.insert(result.symbol, points);
    }

    Ok(out)
}

impl PriceProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    fn fetch_closes(
        &self,
        symbols: &[String],
        window: LookbackWindow,
    ) -> Result<PriceTable, DataError> {
        merge_chunks(symbols, self.chunk_size, window, |chunk| {
            info!("Requesting {} symbols from {}.", chunk.len(), self.name());
            self.fetch_chunk(chunk)
        })
    }
}

/// Split `symbols` into chunks of `chunk_size`, fetch each body with
/// `fetch`, and align the parsed points of every chunk into one table.
///
/// The first failing chunk aborts the whole batch.
pub fn merge_chunks<F>(
    symbols: &[String],
    chunk_size: usize,
    window: LookbackWindow,
    mut fetch: F,
) -> Result<PriceTable, DataError>
where
    F: FnMut(&[String]) -> Result<String, DataError>,
{
    let mut all_points: HashMap<String, Vec<PricePoint>> = HashMap::new();
    for chunk in symbols.chunks(chunk_size.max(1)) {
        let body = fetch(chunk)?;
        all_points.extend(parse_spark(chunk, &body, window)?);
    }
    Ok(align_closes(all_points))
}
