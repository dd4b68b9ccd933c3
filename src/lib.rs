// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod pipeline;
pub mod utils;

// Re-export commonly used types
pub use data::{BinanceKlineSource, FetchCandles, RawKline};
pub use domain::{Candle, Instrument, Interval, MomentumSignal, TrendSignal};
pub use models::{CandleSeries, IndicatorSet, MarketSnapshot, SignalState};
pub use pipeline::{PipelineError, PipelineOutcome, PipelineRequest, run_pipeline};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Instrument label to analyse (e.g. BTC-USD)
    #[arg(long, default_value = "BTC-USD")]
    pub instrument: String,

    /// Candle interval code (1m, 15m, 1h, 4h, 1d)
    #[arg(long, default_value_t = Interval::default())]
    pub interval: Interval,

    /// Number of recent candles to fetch (capped at 100)
    #[arg(long, default_value_t = config::BINANCE.limits.default_klines_limit)]
    pub limit: i32,

    /// Compact display: leave the volatility bands out of the rendered report
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Emit the run outcome as JSON instead of the text report
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Cli {
    /// The pipeline inputs this invocation selects.
    pub fn to_request(&self) -> PipelineRequest {
        PipelineRequest {
            instrument_label: self.instrument.clone(),
            interval: self.interval,
            limit: self.limit,
            compact: self.compact,
        }
    }
}
