use serde::{Deserialize, Serialize};

// ============================================================================
// IndicatorSet: per-point derived values, aligned 1:1 with the series
// ============================================================================

/// One Option<f64> per series row per column. None marks a point where the
/// indicator is not computable: the warm-up prefix, or a window touched by a
/// gap in the close column. Never conflated with 0.0.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct IndicatorSet {
    pub trend_avg: Vec<Option<f64>>,
    pub momentum: Vec<Option<f64>>,
    pub band_center: Vec<Option<f64>>,
    pub band_upper: Vec<Option<f64>>,
    pub band_lower: Vec<Option<f64>>,
}

impl IndicatorSet {
    pub fn len(&self) -> usize {
        self.trend_avg.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trend_avg.is_empty()
    }

    /// Trend average at the most recent point, if defined.
    pub fn latest_trend_avg(&self) -> Option<f64> {
        self.trend_avg.last().copied().flatten()
    }

    /// Oscillator value at the most recent point, if defined.
    pub fn latest_momentum(&self) -> Option<f64> {
        self.momentum.last().copied().flatten()
    }
}
