//! Analysis and computation configuration

/// Settings for the trend average (exponential moving average of closes)
pub struct TrendSettings {
    // Number of closes blended into the average. The first window-1 points
    // of any series have no defined value.
    pub window: usize,
}

/// Settings for the momentum oscillator (Wilder-smoothed RSI)
pub struct MomentumSettings {
    // Number of price changes averaged; the first `window` points are undefined
    pub window: usize,
    // Classification thresholds on the 0..100 oscillator scale
    pub oversold: f64,
    pub overbought: f64,
}

/// Settings for the volatility bands (moving average ± width * std dev)
pub struct BandSettings {
    pub window: usize,
    // Band offset in standard deviations
    pub width: f64,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    pub trend: TrendSettings,
    pub momentum: MomentumSettings,
    pub bands: BandSettings,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    trend: TrendSettings { window: 200 },

    momentum: MomentumSettings {
        window: 14,
        oversold: 30.0,
        overbought: 70.0,
    },

    bands: BandSettings {
        window: 20,
        width: 2.0,
    },
};
