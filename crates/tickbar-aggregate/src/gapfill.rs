//! Two-pass gap-filling aggregation.

use std::collections::BTreeMap;

use tickbar_types::{Result, SessionSpec, SessionWindow, Tick, TickbarError, Timeframe};

use crate::Candle;

/// Gap-filling tick aggregator.
///
/// Buffers all ticks grouped by bucket, then walks every bucket of the
/// session window and emits one candle per bucket: a real candle where trades
/// exist, a flat zero-volume candle at the previous close elsewhere. Buckets
/// before the first trade are filled with the first trade's price. Ticks may
/// arrive in any order; each bucket is sorted by timestamp before its open
/// and close are taken.
#[derive(Debug)]
pub struct GapFillAggregator {
    timeframe: Timeframe,
    session: SessionSpec,
    buckets: BTreeMap<i64, Vec<Tick>>,
}

impl GapFillAggregator {
    /// Creates a new aggregator for the given timeframe and session policy.
    #[must_use]
    pub const fn new(timeframe: Timeframe, session: SessionSpec) -> Self {
        Self {
            timeframe,
            session,
            buckets: BTreeMap::new(),
        }
    }

    /// Returns the timeframe being aggregated to.
    #[must_use]
    pub const fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// Buffers a tick into its bucket.
    pub fn push(&mut self, tick: Tick) {
        let bucket = self.timeframe.bucket_start(tick.timestamp);
        self.buckets.entry(bucket).or_default().push(tick);
    }

    /// Returns the number of buffered ticks.
    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Emits candles for the session window containing the earliest tick.
    ///
    /// The window is derived from the session policy, not from the raw tick
    /// min/max range (see [`SessionSpec::window_containing`]).
    ///
    /// # Errors
    ///
    /// Returns [`TickbarError::EmptyInput`] if no ticks were buffered, since
    /// no session window can be derived without one.
    pub fn finish(self) -> Result<Vec<Candle>> {
        let min_ts = self
            .buckets
            .first_key_value()
            .map(|(_, ticks)| {
                ticks
                    .iter()
                    .map(|t| t.timestamp)
                    .fold(f64::MAX, f64::min)
            })
            .ok_or(TickbarError::EmptyInput)?;

        let window = self.session.window_containing(min_ts);
        self.finish_in_window(window)
    }

    /// Emits candles for every bucket of an explicit window, inclusive.
    ///
    /// The walk covers `bucket_start(window.start) ..= bucket_start(window.end)`
    /// stepping by the interval. Buffered ticks outside that range are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TickbarError::EmptyInput`] if no ticks were buffered.
    pub fn finish_in_window(self, window: SessionWindow) -> Result<Vec<Candle>> {
        let Self {
            timeframe,
            session: _,
            mut buckets,
        } = self;

        let (&first_bucket, first_ticks) =
            buckets.first_key_value().ok_or(TickbarError::EmptyInput)?;

        let interval = timeframe.interval_secs();
        let start = timeframe.bucket_start(window.start as f64);
        let end = timeframe.bucket_start(window.end as f64);

        // Fill price for buckets before the first trade, only needed when the
        // walk starts before the first non-empty bucket.
        let next_open = if first_bucket > start {
            first_ticks
                .iter()
                .min_by(|a, b| a.timestamp.total_cmp(&b.timestamp))
                .map(|t| t.price)
        } else {
            None
        };

        let mut candles = Vec::with_capacity(((end - start) / interval + 1).max(0) as usize);
        let mut last_close: Option<f64> = None;

        let mut bucket_ts = start;
        while bucket_ts <= end {
            if let Some(ticks) = buckets.remove(&bucket_ts) {
                let candle = candle_from_ticks(bucket_ts, ticks);
                last_close = Some(candle.close);
                candles.push(candle);
            } else if let Some(price) = last_close.or(next_open) {
                candles.push(Candle::flat(bucket_ts, price));
            }
            // Neither a previous close nor an upcoming trade: the whole
            // window is dataless up to here, emit nothing.
            bucket_ts += interval;
        }

        Ok(candles)
    }
}

/// Builds a real candle from a bucket's ticks.
fn candle_from_ticks(timestamp: i64, mut ticks: Vec<Tick>) -> Candle {
    // Stable sort: ticks with equal timestamps keep arrival order.
    ticks.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));

    let open = ticks[0].price;
    let close = ticks[ticks.len() - 1].price;
    let mut high = open;
    let mut low = open;
    let mut volume = 0.0;
    for tick in &ticks {
        high = high.max(tick.price);
        low = low.min(tick.price);
        volume += tick.size;
    }

    Candle::new(timestamp, open, high, low, close, volume, ticks.len() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn aggregator() -> GapFillAggregator {
        GapFillAggregator::new(Timeframe::Minute1, SessionSpec::default())
    }

    #[test]
    fn test_fills_interior_gaps_with_last_close() {
        let mut agg = aggregator();
        agg.push(Tick::new(10.0, 100.0, 1.0));
        agg.push(Tick::new(20.0, 102.0, 2.0));
        agg.push(Tick::new(310.0, 95.0, 1.5));

        let candles = agg
            .finish_in_window(SessionWindow { start: 0, end: 360 })
            .unwrap();

        // Buckets 0..=360 inclusive: real, 4 fills, real, trailing fill.
        assert_eq!(candles.len(), 7);
        assert_eq!(
            candles.iter().map(|c| c.timestamp).collect::<Vec<_>>(),
            vec![0, 60, 120, 180, 240, 300, 360]
        );

        assert!((candles[0].open - 100.0).abs() < 1e-10);
        assert!((candles[0].close - 102.0).abs() < 1e-10);
        assert_eq!(candles[0].trades, 2);

        for filled in &candles[1..5] {
            assert!(filled.is_gap_fill());
            assert!((filled.close - 102.0).abs() < 1e-10);
        }

        assert!((candles[5].close - 95.0).abs() < 1e-10);
        assert_eq!(candles[5].trades, 1);

        // Inclusive endpoint: bucket 360 reuses bucket 300's close.
        assert!(candles[6].is_gap_fill());
        assert!((candles[6].close - 95.0).abs() < 1e-10);
    }

    #[test]
    fn test_leading_gaps_use_next_open() {
        let mut agg = aggregator();
        agg.push(Tick::new(310.0, 95.0, 1.0));
        agg.push(Tick::new(305.0, 97.0, 1.0));

        let candles = agg
            .finish_in_window(SessionWindow { start: 0, end: 360 })
            .unwrap();

        assert_eq!(candles.len(), 7);
        // Leading fills use the earliest trade's price (97.0 at t=305).
        for filled in &candles[..5] {
            assert!(filled.is_gap_fill());
            assert!((filled.close - 97.0).abs() < 1e-10);
        }
        assert!((candles[5].open - 97.0).abs() < 1e-10);
        assert!((candles[5].close - 95.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let agg = aggregator();
        assert!(matches!(agg.finish(), Err(TickbarError::EmptyInput)));
    }

    #[test]
    fn test_unordered_ticks_within_bucket() {
        let mut agg = aggregator();
        agg.push(Tick::new(59.0, 103.0, 1.0));
        agg.push(Tick::new(1.0, 101.0, 1.0));
        agg.push(Tick::new(30.0, 99.0, 1.0));

        let candles = agg
            .finish_in_window(SessionWindow { start: 0, end: 59 })
            .unwrap();

        assert_eq!(candles.len(), 1);
        assert!((candles[0].open - 101.0).abs() < 1e-10);
        assert!((candles[0].close - 103.0).abs() < 1e-10);
        assert!((candles[0].high - 103.0).abs() < 1e-10);
        assert!((candles[0].low - 99.0).abs() < 1e-10);
        assert_eq!(candles[0].trades, 3);
    }

    #[test]
    fn test_ticks_beyond_window_are_ignored() {
        let mut agg = aggregator();
        agg.push(Tick::new(10.0, 100.0, 1.0));
        agg.push(Tick::new(500.0, 200.0, 1.0));

        let candles = agg
            .finish_in_window(SessionWindow { start: 0, end: 119 })
            .unwrap();

        assert_eq!(candles.len(), 2);
        assert!(candles.iter().all(|c| c.high < 200.0));
    }

    #[test]
    fn test_session_window_from_first_tick() {
        let first = Utc
            .with_ymd_and_hms(2025, 7, 1, 14, 30, 0)
            .unwrap()
            .timestamp() as f64;

        let mut agg = GapFillAggregator::new(Timeframe::Hour1, SessionSpec::default());
        agg.push(Tick::new(first, 50.0, 1.0));
        agg.push(Tick::new(first + 3600.0, 52.0, 1.0));

        let candles = agg.finish().unwrap();

        // 09:00 UTC through next day 08:00 UTC, one candle per hour.
        assert_eq!(candles.len(), 24);
        assert_eq!(
            candles[0].timestamp,
            Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap().timestamp()
        );

        // Leading gaps filled with the first trade's price, real candles at
        // 14:00 and 15:00, everything after holds the last close.
        assert!(candles[..5].iter().all(|c| c.is_gap_fill()));
        assert!((candles[0].close - 50.0).abs() < 1e-10);
        assert_eq!(candles[5].trades, 1);
        assert_eq!(candles[6].trades, 1);
        assert!(candles[7..].iter().all(|c| c.is_gap_fill()));
        assert!((candles[23].close - 52.0).abs() < 1e-10);
    }

    #[test]
    fn test_contiguous_bucket_stepping() {
        let mut agg = aggregator();
        agg.push(Tick::new(65.0, 100.0, 1.0));
        agg.push(Tick::new(305.0, 101.0, 1.0));

        let candles = agg
            .finish_in_window(SessionWindow { start: 0, end: 360 })
            .unwrap();

        for pair in candles.windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, 60);
        }
    }

    #[test]
    fn test_gap_filled_volume_and_flat_prices() {
        let mut agg = aggregator();
        agg.push(Tick::new(10.0, 100.0, 1.0));
        agg.push(Tick::new(200.0, 110.0, 1.0));

        let candles = agg
            .finish_in_window(SessionWindow { start: 0, end: 240 })
            .unwrap();

        for candle in candles.iter().filter(|c| c.is_gap_fill()) {
            assert_eq!(candle.volume, 0.0);
            assert_eq!(candle.trades, 0);
            assert_eq!(candle.open, candle.high);
            assert_eq!(candle.high, candle.low);
            assert_eq!(candle.low, candle.close);
        }
    }
}
