use itertools::izip;
use serde::{Deserialize, Serialize};

use crate::domain::{Instrument, Interval, MomentumSignal, TrendSignal};
use crate::models::indicators::IndicatorSet;
use crate::models::series::CandleSeries;
use crate::utils::time_utils::epoch_ms_to_utc;

/// How many series rows the text report prints
const REPORT_TAIL_ROWS: usize = 10;

// ============================================================================
// SignalState: labels + backing numerics from the latest point
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SignalState {
    pub trend: TrendSignal,
    pub momentum: MomentumSignal,

    // The raw values the labels were derived from (None = undefined)
    pub latest_close: Option<f64>,
    pub latest_trend_avg: Option<f64>,
    pub latest_momentum: Option<f64>,

    /// Oscillator rounded into 0..=100 for progress-style display
    pub momentum_gauge: Option<u8>,
}

// ============================================================================
// MarketSnapshot: everything one pipeline run hands to the presentation side
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    pub instrument: Instrument,
    pub interval: Interval,
    pub series: CandleSeries,
    pub indicators: IndicatorSet,
    pub signals: SignalState,

    /// Display-density switch: bands are always computed, this only controls
    /// whether the rendered output includes them
    pub show_bands: bool,
}

impl MarketSnapshot {
    /// Render the human-readable report the CLI prints. Band columns are
    /// dropped when `show_bands` is off; the underlying values stay in
    /// `indicators` either way.
    pub fn render_report(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{} ({}) {} — {} candles, last open {}\n\n",
            self.instrument,
            self.instrument.canonical_symbol(),
            self.interval,
            self.series.len(),
            self.series
                .last_timestamp_ms()
                .map(epoch_ms_to_utc)
                .unwrap_or_default(),
        ));

        if self.show_bands {
            out.push_str(&format!(
                "{:>18} {:>14} {:>14} {:>14} {:>14}\n",
                "time", "close", "trend-avg", "band-lower", "band-upper"
            ));
        } else {
            out.push_str(&format!("{:>18} {:>14} {:>14}\n", "time", "close", "trend-avg"));
        }

        let skip = self.series.len().saturating_sub(REPORT_TAIL_ROWS);
        let rows = izip!(
            &self.series.open_timestamps_ms,
            &self.series.close_prices,
            &self.indicators.trend_avg,
            &self.indicators.band_lower,
            &self.indicators.band_upper,
        )
        .skip(skip);

        for (ts, close, trend_avg, band_lower, band_upper) in rows {
            if self.show_bands {
                out.push_str(&format!(
                    "{:>18} {:>14} {:>14} {:>14} {:>14}\n",
                    epoch_ms_to_utc(*ts),
                    fmt_cell(*close),
                    fmt_cell(*trend_avg),
                    fmt_cell(*band_lower),
                    fmt_cell(*band_upper),
                ));
            } else {
                out.push_str(&format!(
                    "{:>18} {:>14} {:>14}\n",
                    epoch_ms_to_utc(*ts),
                    fmt_cell(*close),
                    fmt_cell(*trend_avg),
                ));
            }
        }

        out.push('\n');
        out.push_str(&format!("Trend:    {}\n", self.signals.trend.description()));
        match self.signals.momentum_gauge {
            Some(gauge) => out.push_str(&format!(
                "Momentum: {} [{}] {}/100\n",
                self.signals.momentum.description(),
                gauge_bar(gauge),
                gauge
            )),
            None => out.push_str(&format!("Momentum: {}\n", self.signals.momentum.description())),
        }

        out
    }
}

fn fmt_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => fmt_price(v),
        None => "-".to_string(),
    }
}

// Sub-1.0 prices (SHIB territory) need the extra decimals to show anything
fn fmt_price(value: f64) -> String {
    if value >= 1.0 {
        format!("{value:.2}")
    } else {
        format!("{value:.8}")
    }
}

fn gauge_bar(gauge: u8) -> String {
    let filled = (gauge as usize) / 10;
    (0..10).map(|slot| if slot < filled { '█' } else { '░' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_bands(show_bands: bool) -> MarketSnapshot {
        let series = CandleSeries {
            open_timestamps_ms: vec![1_700_000_000_000, 1_700_000_900_000],
            open_prices: vec![Some(99.0), Some(101.0)],
            high_prices: vec![Some(102.0), Some(104.0)],
            low_prices: vec![Some(98.0), Some(100.0)],
            close_prices: vec![Some(101.0), Some(103.0)],
            base_asset_volumes: vec![Some(5.0), Some(6.0)],
        };
        let indicators = IndicatorSet {
            trend_avg: vec![None, Some(100.0)],
            momentum: vec![None, Some(55.0)],
            band_center: vec![None, Some(102.0)],
            band_upper: vec![None, Some(106.0)],
            band_lower: vec![None, Some(98.0)],
        };
        let signals = SignalState {
            trend: TrendSignal::Bullish,
            momentum: MomentumSignal::Neutral,
            latest_close: Some(103.0),
            latest_trend_avg: Some(100.0),
            latest_momentum: Some(55.0),
            momentum_gauge: Some(55),
        };
        MarketSnapshot {
            instrument: Instrument::Btc,
            interval: Interval::Minute15,
            series,
            indicators,
            signals,
            show_bands,
        }
    }

    #[test]
    fn test_report_includes_bands_by_default() {
        let report = snapshot_with_bands(true).render_report();
        assert!(report.contains("band-upper"), "full report lists the band columns");
        assert!(report.contains("106.00"));
        assert!(report.contains("Bullish"));
    }

    #[test]
    fn test_compact_report_hides_bands_but_snapshot_keeps_them() {
        let snapshot = snapshot_with_bands(false);
        let report = snapshot.render_report();
        assert!(!report.contains("band-upper"), "compact report drops the band columns");
        assert_eq!(
            snapshot.indicators.band_upper[1],
            Some(106.0),
            "bands are still computed and carried in the snapshot"
        );
    }

    #[test]
    fn test_undefined_cells_render_as_placeholder() {
        assert_eq!(fmt_cell(None), "-");
        assert_eq!(fmt_cell(Some(103.0)), "103.00");
        assert_eq!(fmt_cell(Some(0.00001234)), "0.00001234", "sub-unit prices keep their digits");
    }

    #[test]
    fn test_gauge_bar_fills_proportionally() {
        assert_eq!(gauge_bar(0), "░░░░░░░░░░");
        assert_eq!(gauge_bar(55), "█████░░░░░");
        assert_eq!(gauge_bar(100), "██████████");
    }

    #[test]
    fn test_snapshot_serializes_to_json_and_back() {
        let snapshot = snapshot_with_bands(true);
        let json = serde_json::to_string(&snapshot).expect("snapshot serializes");
        let parsed: MarketSnapshot = serde_json::from_str(&json).expect("snapshot deserializes");
        assert_eq!(parsed, snapshot);
    }
}
