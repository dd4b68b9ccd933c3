use serde::{Deserialize, Serialize};

use crate::data::binance::RawKline;
use crate::domain::candle::Candle;

// ============================================================================
// CandleSeries: time-indexed candle columns for one (instrument, interval)
// ============================================================================

/// Columnar candle series, ascending open time, one entry per column per row.
/// Price/volume cells are Option<f64>: a None marks a field the source sent
/// in an unparsable form. Rows with missing cells stay in the series; the
/// indicator passes treat them as gaps.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CandleSeries {
    pub open_timestamps_ms: Vec<i64>,

    // Prices
    pub open_prices: Vec<Option<f64>>,
    pub high_prices: Vec<Option<f64>>,
    pub low_prices: Vec<Option<f64>>,
    pub close_prices: Vec<Option<f64>>,

    // Volumes
    pub base_asset_volumes: Vec<Option<f64>>,
}

impl From<Vec<RawKline>> for CandleSeries {
    fn from(klines: Vec<RawKline>) -> Self {
        let mut series = CandleSeries {
            open_timestamps_ms: Vec::with_capacity(klines.len()),
            open_prices: Vec::with_capacity(klines.len()),
            high_prices: Vec::with_capacity(klines.len()),
            low_prices: Vec::with_capacity(klines.len()),
            close_prices: Vec::with_capacity(klines.len()),
            base_asset_volumes: Vec::with_capacity(klines.len()),
        };

        let mut rows_with_gaps = 0_usize;
        for kline in klines {
            if kline.has_gap() {
                rows_with_gaps += 1;
            }
            series.open_timestamps_ms.push(kline.open_timestamp_ms);
            series.open_prices.push(kline.open_price);
            series.high_prices.push(kline.high_price);
            series.low_prices.push(kline.low_price);
            series.close_prices.push(kline.close_price);
            series.base_asset_volumes.push(kline.base_asset_volume);
        }

        if rows_with_gaps > 0 {
            log::warn!(
                "⚠️ {} of {} rows have unparsable price fields; indicators will treat them as gaps",
                rows_with_gaps,
                series.len()
            );
        }

        // Rows arrive oldest-first within a single response; we keep source order
        debug_assert!(
            series
                .open_timestamps_ms
                .windows(2)
                .all(|pair| pair[0] < pair[1]),
            "open timestamps must be strictly increasing"
        );
        debug_assert!(
            series.open_prices.len() == series.len()
                && series.high_prices.len() == series.len()
                && series.low_prices.len() == series.len()
                && series.close_prices.len() == series.len()
                && series.base_asset_volumes.len() == series.len(),
            "every column must be exactly one entry per row"
        );

        series
    }
}

impl CandleSeries {
    pub fn len(&self) -> usize {
        self.open_timestamps_ms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open_timestamps_ms.is_empty()
    }

    /// The row at `idx` as a Candle, if every price field of that row parsed.
    pub fn candle(&self, idx: usize) -> Option<Candle> {
        if idx >= self.len() {
            return None;
        }
        Some(Candle::new(
            self.open_timestamps_ms[idx],
            self.open_prices[idx]?,
            self.high_prices[idx]?,
            self.low_prices[idx]?,
            self.close_prices[idx]?,
            self.base_asset_volumes[idx].unwrap_or(0.0),
        ))
    }

    pub fn closes(&self) -> &[Option<f64>] {
        &self.close_prices
    }

    /// Close of the most recent row (None when the series is empty or the
    /// last close did not parse).
    pub fn last_close(&self) -> Option<f64> {
        self.close_prices.last().copied().flatten()
    }

    pub fn last_timestamp_ms(&self) -> Option<i64> {
        self.open_timestamps_ms.last().copied()
    }
}
