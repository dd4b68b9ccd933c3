//! The market-data-to-signal pipeline: normalize → fetch → build series →
//! indicators → classify. One call, one fresh result; nothing is shared or
//! reused between runs, so concurrent runs cannot interfere.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::{classify, compute_indicator_set};
use crate::config::BINANCE;
use crate::data::FetchCandles;
use crate::domain::{Instrument, Interval};
use crate::models::{CandleSeries, MarketSnapshot};

/// One pipeline invocation's inputs, passed in explicitly (no process-wide
/// selection state).
#[derive(Debug, Clone)]
pub struct PipelineRequest {
    pub instrument_label: String,
    pub interval: Interval,
    pub limit: i32,
    /// Display-density switch: when set, the snapshot tells the renderer to
    /// drop the band lines. Bands are computed either way.
    pub compact: bool,
}

impl Default for PipelineRequest {
    fn default() -> Self {
        Self {
            instrument_label: Instrument::default().label().to_string(),
            interval: Interval::default(),
            limit: BINANCE.limits.default_klines_limit,
            compact: false,
        }
    }
}

// Custom error type for pipeline failures, for better error messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineError {
    /// The requested label is not in the supported set. Not retryable.
    InvalidInstrument(String),
    /// The fetch failed or returned nothing usable. Retryable: the caller
    /// re-runs the pipeline when the user refreshes.
    DataUnavailable(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PipelineError::InvalidInstrument(label) => {
                write!(
                    f,
                    "unsupported instrument '{}' (supported: {})",
                    label,
                    Instrument::supported_labels()
                )
            }
            PipelineError::DataUnavailable(cause) => {
                write!(f, "market data unavailable: {}", cause)
            }
        }
    }
}

impl Error for PipelineError {}

/// What a run produced: a full snapshot, or a named reason there isn't one.
/// Callers must handle both branches; there is no silently-empty success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PipelineOutcome {
    Ready(MarketSnapshot),
    NotReady(PipelineError),
}

/// Run the pipeline once against `source`. Fetch failures come back as
/// `NotReady(DataUnavailable)` rather than an Err: a missing window of data
/// is an expected operating state, cleared by a user-triggered refresh.
pub async fn run_pipeline(source: &dyn FetchCandles, request: &PipelineRequest) -> PipelineOutcome {
    // 1. Normalize the label. Unsupported input fails fast, nothing is fetched.
    let Some(instrument) = Instrument::from_label(&request.instrument_label) else {
        log::warn!("rejected unsupported instrument label '{}'", request.instrument_label);
        return PipelineOutcome::NotReady(PipelineError::InvalidInstrument(
            request.instrument_label.clone(),
        ));
    };
    let symbol = instrument.canonical_symbol();

    // 2. Fetch one bounded window. The limit cap bounds payload size and
    //    downstream computation.
    let limit = if request.limit > BINANCE.limits.klines_limit_cap {
        log::warn!(
            "limit {} exceeds the cap, clamping to {}",
            request.limit,
            BINANCE.limits.klines_limit_cap
        );
        BINANCE.limits.klines_limit_cap
    } else {
        request.limit
    };

    let klines = match source.fetch_candles(&symbol, request.interval, limit).await {
        Ok(klines) => klines,
        Err(e) => {
            log::warn!("⚠️ {} fetch via {} failed: {:#}", symbol, source.signature(), e);
            return PipelineOutcome::NotReady(PipelineError::DataUnavailable(format!("{e:#}")));
        }
    };
    if klines.is_empty() {
        log::warn!("⚠️ {} fetch returned no rows", symbol);
        return PipelineOutcome::NotReady(PipelineError::DataUnavailable(
            "empty response".to_string(),
        ));
    }

    // 3. Build the series in source order.
    let series = CandleSeries::from(klines);

    // 4. Indicator passes (independent, run in parallel).
    let indicators = compute_indicator_set(&series);

    // 5. Classify the latest point.
    let signals = classify(
        series.last_close(),
        indicators.latest_trend_avg(),
        indicators.latest_momentum(),
    );

    #[cfg(debug_assertions)]
    log::info!(
        "{} {} -> {} rows, trend {}, momentum {}",
        instrument,
        request.interval,
        series.len(),
        signals.trend,
        signals.momentum
    );

    PipelineOutcome::Ready(MarketSnapshot {
        instrument,
        interval: request.interval,
        series,
        indicators,
        signals,
        show_bands: !request.compact,
    })
}
