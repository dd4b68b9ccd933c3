use crate::config::ANALYSIS;
use crate::domain::{MomentumSignal, TrendSignal};
use crate::models::SignalState;

/// Classify the latest point. Pure threshold function, no hysteresis: the
/// same inputs always produce the same state. Any undefined input maps to
/// Undetermined for its label rather than a default numeric comparison.
pub fn classify(
    latest_close: Option<f64>,
    latest_trend_avg: Option<f64>,
    latest_momentum: Option<f64>,
) -> SignalState {
    let trend = match (latest_close, latest_trend_avg) {
        (Some(close), Some(trend_avg)) => {
            if close > trend_avg {
                TrendSignal::Bullish
            } else {
                TrendSignal::Bearish
            }
        }
        _ => TrendSignal::Undetermined,
    };

    let momentum = match latest_momentum {
        Some(value) if value < ANALYSIS.momentum.oversold => MomentumSignal::Oversold,
        Some(value) if value > ANALYSIS.momentum.overbought => MomentumSignal::Overbought,
        Some(_) => MomentumSignal::Neutral,
        None => MomentumSignal::Undetermined,
    };

    SignalState {
        trend,
        momentum,
        latest_close,
        latest_trend_avg,
        latest_momentum,
        momentum_gauge: latest_momentum.map(|value| value.round().clamp(0.0, 100.0) as u8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_is_bullish_above_average_and_bearish_otherwise() {
        assert_eq!(classify(Some(101.0), Some(100.0), Some(50.0)).trend, TrendSignal::Bullish);
        assert_eq!(classify(Some(99.0), Some(100.0), Some(50.0)).trend, TrendSignal::Bearish);
        // Sitting exactly on the average is not above it
        assert_eq!(classify(Some(100.0), Some(100.0), Some(50.0)).trend, TrendSignal::Bearish);
    }

    #[test]
    fn test_undefined_inputs_yield_undetermined_labels() {
        let state = classify(Some(100.0), None, None);
        assert_eq!(state.trend, TrendSignal::Undetermined);
        assert_eq!(state.momentum, MomentumSignal::Undetermined);
        assert_eq!(state.momentum_gauge, None);

        let state = classify(None, Some(100.0), Some(50.0));
        assert_eq!(state.trend, TrendSignal::Undetermined, "no close, no comparison");
        assert_eq!(state.momentum, MomentumSignal::Neutral, "momentum is classified on its own");
    }

    #[test]
    fn test_momentum_thresholds() {
        assert_eq!(classify(Some(1.0), Some(1.0), Some(29.9)).momentum, MomentumSignal::Oversold);
        assert_eq!(classify(Some(1.0), Some(1.0), Some(30.0)).momentum, MomentumSignal::Neutral);
        assert_eq!(classify(Some(1.0), Some(1.0), Some(70.0)).momentum, MomentumSignal::Neutral);
        assert_eq!(
            classify(Some(1.0), Some(1.0), Some(70.1)).momentum,
            MomentumSignal::Overbought
        );
    }

    #[test]
    fn test_classify_is_pure() {
        let first = classify(Some(123.4), Some(120.0), Some(64.2));
        let second = classify(Some(123.4), Some(120.0), Some(64.2));
        assert_eq!(first, second, "same triple in, same state out");
    }

    #[test]
    fn test_gauge_rounds_and_clamps() {
        assert_eq!(classify(None, None, Some(54.49)).momentum_gauge, Some(54));
        assert_eq!(classify(None, None, Some(54.5)).momentum_gauge, Some(55));
        assert_eq!(classify(None, None, Some(100.0)).momentum_gauge, Some(100));
        assert_eq!(classify(None, None, Some(0.0)).momentum_gauge, Some(0));
    }

    #[test]
    fn test_state_echoes_its_inputs() {
        let state = classify(Some(123.4), Some(120.0), Some(64.2));
        assert_eq!(state.latest_close, Some(123.4));
        assert_eq!(state.latest_trend_avg, Some(120.0));
        assert_eq!(state.latest_momentum, Some(64.2));
    }
}
