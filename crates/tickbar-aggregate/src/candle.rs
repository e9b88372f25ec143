//! OHLCV candle data structure.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// OHLCV candle.
///
/// For a candle built from real trades, `low <= open, close <= high` and
/// `trades` counts the ticks in the bucket. For a gap-filled candle all four
/// prices are equal and `volume` and `trades` are zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Bucket start (UTC epoch seconds), a multiple of the interval.
    pub timestamp: i64,
    /// Opening price (first tick in the bucket by timestamp).
    pub open: f64,
    /// Highest price in the bucket.
    pub high: f64,
    /// Lowest price in the bucket.
    pub low: f64,
    /// Closing price (last tick in the bucket by timestamp).
    pub close: f64,
    /// Total traded size in the bucket.
    pub volume: f64,
    /// Number of ticks in the bucket.
    pub trades: u32,
}

impl Candle {
    /// Creates a new candle.
    #[must_use]
    pub const fn new(
        timestamp: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        trades: u32,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
            trades,
        }
    }

    /// Creates a flat zero-volume candle for a bucket with no trades.
    #[must_use]
    pub const fn flat(timestamp: i64, price: f64) -> Self {
        Self::new(timestamp, price, price, price, price, 0.0, 0)
    }

    /// Returns the bucket start as a naive UTC datetime.
    #[must_use]
    pub fn datetime(&self) -> NaiveDateTime {
        DateTime::from_timestamp(self.timestamp, 0)
            .expect("candle timestamp out of chrono range")
            .naive_utc()
    }

    /// Returns true if this candle was synthesized to fill a gap.
    #[must_use]
    pub fn is_gap_fill(&self) -> bool {
        self.trades == 0 && self.volume == 0.0
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the body size (|close - open|).
    #[must_use]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Returns true if this is a bullish (green) candle.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_candle() -> Candle {
        Candle::new(1_700_000_100, 101.0, 105.0, 99.0, 103.0, 250.0, 42)
    }

    #[test]
    fn test_flat_candle_invariants() {
        let candle = Candle::flat(60, 42.5);
        assert_eq!(candle.open, candle.high);
        assert_eq!(candle.high, candle.low);
        assert_eq!(candle.low, candle.close);
        assert_eq!(candle.volume, 0.0);
        assert_eq!(candle.trades, 0);
        assert!(candle.is_gap_fill());
    }

    #[test]
    fn test_real_candle_is_not_gap_fill() {
        assert!(!create_test_candle().is_gap_fill());
    }

    #[test]
    fn test_datetime_is_utc() {
        let candle = Candle::flat(1_700_000_100, 1.0);
        assert_eq!(
            candle.datetime().format("%Y-%m-%dT%H:%M:%S").to_string(),
            "2023-11-14T22:15:00"
        );
    }

    #[test]
    fn test_range_and_body() {
        let candle = create_test_candle();
        assert!((candle.range() - 6.0).abs() < 1e-10);
        assert!((candle.body() - 2.0).abs() < 1e-10);
        assert!(candle.is_bullish());
    }
}
