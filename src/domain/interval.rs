use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::utils::TimeUtils;

/// Candle granularities the pipeline supports. Fixed set, no arbitrary
/// durations.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum Interval {
    Minute1,
    #[default]
    Minute15,
    Hour1,
    Hour4,
    Day1,
}

impl Interval {
    /// The exchange-style shorthand code, e.g. "15m".
    pub fn code(&self) -> &'static str {
        match self {
            Interval::Minute1 => "1m",
            Interval::Minute15 => "15m",
            Interval::Hour1 => "1h",
            Interval::Hour4 => "4h",
            Interval::Day1 => "1d",
        }
    }

    /// Width of one candle bucket in epoch milliseconds.
    pub fn interval_ms(&self) -> i64 {
        match self {
            Interval::Minute1 => TimeUtils::MS_IN_MIN,
            Interval::Minute15 => TimeUtils::MS_IN_15_MIN,
            Interval::Hour1 => TimeUtils::MS_IN_H,
            Interval::Hour4 => TimeUtils::MS_IN_4_H,
            Interval::Day1 => TimeUtils::MS_IN_D,
        }
    }

    /// All supported codes, comma-separated (for error messages and help text).
    pub fn supported_codes() -> String {
        Interval::iter()
            .map(|interval| interval.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Interval::iter()
            .find(|interval| interval.code() == code)
            .ok_or_else(|| {
                format!(
                    "unsupported interval '{}' (supported: {})",
                    code,
                    Interval::supported_codes()
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_parses_back_to_its_interval() {
        for interval in Interval::iter() {
            assert_eq!(
                interval.code().parse::<Interval>(),
                Ok(interval),
                "code {} should parse back to its interval",
                interval.code()
            );
        }
    }

    #[test]
    fn test_unsupported_codes_are_rejected() {
        assert!("30m".parse::<Interval>().is_err(), "30m is not in the supported set");
        assert!("".parse::<Interval>().is_err());
        let err = "2h".parse::<Interval>().unwrap_err();
        assert!(err.contains("15m"), "error should list the supported codes: {err}");
    }

    #[test]
    fn test_interval_ms_matches_code() {
        assert_eq!(Interval::Minute15.interval_ms(), 15 * 60 * 1000);
        assert_eq!(Interval::Day1.interval_ms(), 24 * 60 * 60 * 1000);
    }

    #[test]
    fn test_default_interval_is_15m() {
        assert_eq!(Interval::default(), Interval::Minute15);
    }
}
