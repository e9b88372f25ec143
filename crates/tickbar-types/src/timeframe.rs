//! Candle aggregation timeframe definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Candle aggregation timeframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Timeframe {
    /// 1-second candles.
    #[serde(rename = "1s")]
    Second1,
    /// 1-minute candles.
    #[default]
    #[serde(rename = "1m")]
    Minute1,
    /// 5-minute candles.
    #[serde(rename = "5m")]
    Minute5,
    /// 15-minute candles.
    #[serde(rename = "15m")]
    Minute15,
    /// 1-hour candles.
    #[serde(rename = "1h")]
    Hour1,
    /// 4-hour candles.
    #[serde(rename = "4h")]
    Hour4,
    /// Daily candles.
    #[serde(rename = "1d")]
    Day1,
}

impl Timeframe {
    /// Returns the candle interval in seconds.
    #[must_use]
    pub const fn interval_secs(&self) -> i64 {
        match self {
            Self::Second1 => 1,
            Self::Minute1 => 60,
            Self::Minute5 => 300,
            Self::Minute15 => 900,
            Self::Hour1 => 3600,
            Self::Hour4 => 14400,
            Self::Day1 => 86400,
        }
    }

    /// Returns the bucket start for a timestamp in epoch seconds.
    ///
    /// Bucket keys are always multiples of [`interval_secs`](Self::interval_secs):
    /// `floor(timestamp / interval) * interval`.
    #[must_use]
    pub fn bucket_start(&self, timestamp_secs: f64) -> i64 {
        let interval = self.interval_secs();
        (timestamp_secs / interval as f64).floor() as i64 * interval
    }

    /// Returns how many candles of this timeframe fit in a 24-hour session.
    #[must_use]
    pub const fn candles_per_day(&self) -> i64 {
        86400 / self.interval_secs()
    }

    /// Returns the timeframe as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Second1 => "1s",
            Self::Minute1 => "1m",
            Self::Minute5 => "5m",
            Self::Minute15 => "15m",
            Self::Hour1 => "1h",
            Self::Hour4 => "4h",
            Self::Day1 => "1d",
        }
    }

    /// Returns all supported timeframes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Second1,
            Self::Minute1,
            Self::Minute5,
            Self::Minute15,
            Self::Hour1,
            Self::Hour4,
            Self::Day1,
        ]
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = TimeframeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1s" | "s1" | "second" | "second1" => Ok(Self::Second1),
            "1m" | "m1" | "minute" | "minute1" => Ok(Self::Minute1),
            "5m" | "m5" | "minute5" => Ok(Self::Minute5),
            "15m" | "m15" | "minute15" => Ok(Self::Minute15),
            "1h" | "h1" | "hour" | "hour1" => Ok(Self::Hour1),
            "4h" | "h4" | "hour4" => Ok(Self::Hour4),
            "1d" | "d1" | "day" | "day1" | "daily" => Ok(Self::Day1),
            _ => Err(TimeframeParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid timeframe string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeframeParseError(String);

impl std::fmt::Display for TimeframeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid timeframe '{}', expected one of: 1s, 1m, 5m, 15m, 1h, 4h, 1d",
            self.0
        )
    }
}

impl std::error::Error for TimeframeParseError {}
