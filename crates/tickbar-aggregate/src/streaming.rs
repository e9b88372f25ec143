//! Single-pass streaming aggregation.

use tickbar_types::{Tick, Timeframe};

use crate::Candle;

/// Streaming tick aggregator.
///
/// Aggregates ticks into candles in a single pass with constant memory: one
/// open bucket at a time, emitted as soon as a tick for a different bucket
/// arrives, with the trailing bucket flushed by [`finish`](Self::finish).
///
/// Ticks must arrive in non-decreasing timestamp order. An out-of-order tick
/// is not detected: it closes the open candle and starts a new one keyed to
/// the earlier bucket, so the output is no longer in ascending bucket order.
#[derive(Debug)]
pub struct StreamingAggregator {
    timeframe: Timeframe,
    current: Option<CandleBuilder>,
}

impl StreamingAggregator {
    /// Creates a new aggregator for the given timeframe.
    #[must_use]
    pub const fn new(timeframe: Timeframe) -> Self {
        Self {
            timeframe,
            current: None,
        }
    }

    /// Returns the timeframe being aggregated to.
    #[must_use]
    pub const fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// Processes a tick, potentially emitting a completed candle.
    ///
    /// Returns `Some(candle)` when this tick opens a new bucket and thereby
    /// completes the previous one, `None` otherwise.
    pub fn process(&mut self, tick: Tick) -> Option<Candle> {
        let bucket = self.timeframe.bucket_start(tick.timestamp);

        match self.current.take() {
            Some(mut builder) if builder.timestamp == bucket => {
                // Same bucket, update it
                builder.update(&tick);
                self.current = Some(builder);
                None
            }
            Some(builder) => {
                // New bucket started, finish the old one
                let completed = builder.finish();
                self.current = Some(CandleBuilder::new(bucket, &tick));
                Some(completed)
            }
            None => {
                // First tick
                self.current = Some(CandleBuilder::new(bucket, &tick));
                None
            }
        }
    }

    /// Finishes aggregation, returning the still-open candle if any.
    #[must_use]
    pub fn finish(self) -> Option<Candle> {
        self.current.map(CandleBuilder::finish)
    }
}

/// Accumulator for the open bucket.
///
/// Seeded from the bucket's first tick, so high/low never start from numeric
/// sentinels and an empty builder cannot exist.
#[derive(Debug)]
struct CandleBuilder {
    timestamp: i64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
    trades: u32,
}

impl CandleBuilder {
    /// Creates a new builder from the bucket's first tick.
    fn new(timestamp: i64, tick: &Tick) -> Self {
        Self {
            timestamp,
            open: tick.price,
            high: tick.price,
            low: tick.price,
            close: tick.price,
            volume: tick.size,
            trades: 1,
        }
    }

    /// Updates the builder with a new tick from the same bucket.
    fn update(&mut self, tick: &Tick) {
        self.high = self.high.max(tick.price);
        self.low = self.low.min(tick.price);
        self.close = tick.price;
        self.volume += tick.size;
        self.trades += 1;
    }

    /// Finishes building and returns the candle.
    const fn finish(self) -> Candle {
        Candle::new(
            self.timestamp,
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
            self.trades,
        )
    }
}
