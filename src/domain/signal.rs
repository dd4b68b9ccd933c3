use std::fmt;

use serde::{Deserialize, Serialize};

/// Trend direction derived from the latest close vs the trend average.
/// Undetermined covers the warm-up case (average not yet computable).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TrendSignal {
    Bullish,
    Bearish,
    Undetermined,
}

impl TrendSignal {
    /// Get a human-readable description of this signal
    pub fn description(&self) -> &'static str {
        match self {
            TrendSignal::Bullish => "📈 Bullish — price above trend average",
            TrendSignal::Bearish => "📉 Bearish — price below trend average",
            TrendSignal::Undetermined => "trend undetermined (not enough history)",
        }
    }
}

impl fmt::Display for TrendSignal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TrendSignal::Bullish => write!(f, "Bullish"),
            TrendSignal::Bearish => write!(f, "Bearish"),
            TrendSignal::Undetermined => write!(f, "Undetermined"),
        }
    }
}

/// Momentum bucket derived from the latest oscillator value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum MomentumSignal {
    Oversold,
    Neutral,
    Overbought,
    Undetermined,
}

impl MomentumSignal {
    /// Get a human-readable description of this signal
    pub fn description(&self) -> &'static str {
        match self {
            MomentumSignal::Oversold => "🟢 Oversold — momentum below the lower threshold",
            MomentumSignal::Overbought => "🔴 Overbought — momentum above the upper threshold",
            MomentumSignal::Neutral => "momentum neutral",
            MomentumSignal::Undetermined => "momentum undetermined (not enough history)",
        }
    }
}

impl fmt::Display for MomentumSignal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MomentumSignal::Oversold => write!(f, "Oversold"),
            MomentumSignal::Neutral => write!(f, "Neutral"),
            MomentumSignal::Overbought => write!(f, "Overbought"),
            MomentumSignal::Undetermined => write!(f, "Undetermined"),
        }
    }
}
