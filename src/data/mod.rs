// Market data access (single-shot klines REST)
pub mod binance;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::Interval;

#[async_trait]
pub trait FetchCandles {
    /// Fetch one bounded window of recent candles, oldest first.
    /// Implementations perform exactly one request per call: no retry loop,
    /// no cache. Any failure is an Err the caller degrades to a retryable
    /// "not ready" outcome.
    async fn fetch_candles(
        &self,
        symbol: &str,
        interval: Interval,
        limit: i32,
    ) -> Result<Vec<RawKline>>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

// Re-export commonly used types
pub use binance::{BinanceKlineSource, RawKline};
