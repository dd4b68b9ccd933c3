//! Indicator passes over the close column.
//!
//! Each pass is pure and independent: it reads `&[Option<f64>]` and returns
//! a column of the same length. A None input cell is a gap; gaps make the
//! surrounding output undefined instead of aborting the pass (windowed
//! passes skip any window touching a gap, recursive passes reset and re-warm
//! on the closes after it).

use rayon::join;

use crate::config::ANALYSIS;
use crate::models::{CandleSeries, IndicatorSet};
use crate::utils::maths_utils::{mean, population_std_dev};

/// Exponential moving average of the closes.
///
/// The first defined value (at index `window - 1`) is the simple average of
/// the first `window` closes; from there the standard recurrence applies
/// with `k = 2 / (window + 1)`. The seed convention matters for numeric
/// parity with charting references and is covered by tests.
pub fn exponential_moving_average(closes: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    debug_assert!(window > 0);
    let mut out = vec![None; closes.len()];
    let k = 2.0 / (window as f64 + 1.0);

    let mut warmup: Vec<f64> = Vec::with_capacity(window);
    let mut prev: Option<f64> = None;

    for (idx, close) in closes.iter().enumerate() {
        let Some(close) = close else {
            // Gap: this point stays undefined and the recurrence restarts
            prev = None;
            warmup.clear();
            continue;
        };
        match prev {
            Some(prev_avg) => {
                let next = close * k + prev_avg * (1.0 - k);
                out[idx] = Some(next);
                prev = Some(next);
            }
            None => {
                warmup.push(*close);
                if warmup.len() == window {
                    let seed = mean(&warmup);
                    out[idx] = Some(seed);
                    prev = Some(seed);
                    warmup.clear();
                }
            }
        }
    }

    out
}

/// Wilder-smoothed relative strength index over the closes.
///
/// The first `window` points are undefined: the oscillator needs `window`
/// price changes, seeded with their simple averages, then smoothed with
/// `avg = (avg * (window - 1) + value) / window`. Zero average loss maps to
/// 100 (all-gains saturation).
pub fn relative_strength_index(closes: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    debug_assert!(window > 0);
    let mut out = vec![None; closes.len()];
    let span = window as f64;

    let mut prev_close: Option<f64> = None;
    let mut warmup_gains: Vec<f64> = Vec::with_capacity(window);
    let mut warmup_losses: Vec<f64> = Vec::with_capacity(window);
    let mut smoothed: Option<(f64, f64)> = None; // (avg_gain, avg_loss)

    for (idx, close) in closes.iter().enumerate() {
        let Some(close) = close else {
            // Gap: no change is computable across it, so restart the warm-up
            prev_close = None;
            warmup_gains.clear();
            warmup_losses.clear();
            smoothed = None;
            continue;
        };
        if let Some(prev) = prev_close {
            let change = close - prev;
            let gain = change.max(0.0);
            let loss = (-change).max(0.0);
            match smoothed {
                Some((avg_gain, avg_loss)) => {
                    let avg_gain = (avg_gain * (span - 1.0) + gain) / span;
                    let avg_loss = (avg_loss * (span - 1.0) + loss) / span;
                    smoothed = Some((avg_gain, avg_loss));
                    out[idx] = Some(rsi_from_averages(avg_gain, avg_loss));
                }
                None => {
                    warmup_gains.push(gain);
                    warmup_losses.push(loss);
                    if warmup_gains.len() == window {
                        let avg_gain = mean(&warmup_gains);
                        let avg_loss = mean(&warmup_losses);
                        smoothed = Some((avg_gain, avg_loss));
                        out[idx] = Some(rsi_from_averages(avg_gain, avg_loss));
                        warmup_gains.clear();
                        warmup_losses.clear();
                    }
                }
            }
        }
        prev_close = Some(*close);
    }

    out
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// The three aligned band columns produced by [`bollinger_bands`].
pub struct BollingerColumns {
    pub center: Vec<Option<f64>>,
    pub upper: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Bollinger bands: simple moving average centerline ± `width` population
/// standard deviations over the same window. Undefined for the first
/// `window - 1` points and for every window containing a gap.
pub fn bollinger_bands(closes: &[Option<f64>], window: usize, width: f64) -> BollingerColumns {
    debug_assert!(window > 0);
    let mut bands = BollingerColumns {
        center: vec![None; closes.len()],
        upper: vec![None; closes.len()],
        lower: vec![None; closes.len()],
    };

    let mut buf: Vec<f64> = Vec::with_capacity(window);
    for (offset, candidate_window) in closes.windows(window).enumerate() {
        let idx = offset + window - 1;
        if candidate_window.iter().any(|close| close.is_none()) {
            continue;
        }
        buf.clear();
        buf.extend(candidate_window.iter().flatten());

        let center = mean(&buf);
        let deviation = width * population_std_dev(&buf, center);
        bands.center[idx] = Some(center);
        bands.upper[idx] = Some(center + deviation);
        bands.lower[idx] = Some(center - deviation);
    }

    bands
}

/// Run all three passes over the series closes. The passes share nothing
/// mutable, so they run in parallel.
pub fn compute_indicator_set(series: &CandleSeries) -> IndicatorSet {
    let closes = series.closes();

    let (trend_avg, (momentum, bands)) = join(
        || exponential_moving_average(closes, ANALYSIS.trend.window),
        || {
            join(
                || relative_strength_index(closes, ANALYSIS.momentum.window),
                || bollinger_bands(closes, ANALYSIS.bands.window, ANALYSIS.bands.width),
            )
        },
    );

    IndicatorSet {
        trend_avg,
        momentum,
        band_center: bands.center,
        band_upper: bands.upper,
        band_lower: bands.lower,
    }
}
