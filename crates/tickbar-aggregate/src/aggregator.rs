//! Unified aggregation interface.

use tickbar_types::{Result, SessionSpec, Tick, Timeframe};

use crate::{Candle, GapFillAggregator, StreamingAggregator};

/// Aggregation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Single-pass aggregation of an ordered tick stream; candles are emitted
    /// as soon as their bucket closes, nothing is synthesized for gaps.
    Streaming,
    /// Two-pass aggregation over a full session window; buckets without
    /// trades get flat zero-volume candles.
    #[default]
    GapFill,
}

impl Mode {
    /// Returns the mode as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Streaming => "streaming",
            Self::GapFill => "gap-fill",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tick aggregator with the strategy selected at construction time.
///
/// Both strategies share one driving loop: feed every tick to
/// [`process`](Self::process), write out any candle it returns, then drain
/// [`finish`](Self::finish). In streaming mode `process` emits candles as
/// buckets close and `finish` returns at most the trailing candle; in
/// gap-fill mode `process` only buffers and `finish` returns the whole
/// session walk.
#[derive(Debug)]
pub enum Aggregator {
    /// Single-pass streaming strategy.
    Streaming(StreamingAggregator),
    /// Two-pass gap-filling strategy.
    GapFill(GapFillAggregator),
}

impl Aggregator {
    /// Creates an aggregator for the given timeframe and mode.
    ///
    /// The session policy is only consulted in gap-fill mode.
    #[must_use]
    pub const fn new(timeframe: Timeframe, mode: Mode, session: SessionSpec) -> Self {
        match mode {
            Mode::Streaming => Self::Streaming(StreamingAggregator::new(timeframe)),
            Mode::GapFill => Self::GapFill(GapFillAggregator::new(timeframe, session)),
        }
    }

    /// Returns the timeframe being aggregated to.
    #[must_use]
    pub const fn timeframe(&self) -> Timeframe {
        match self {
            Self::Streaming(agg) => agg.timeframe(),
            Self::GapFill(agg) => agg.timeframe(),
        }
    }

    /// Processes a tick, potentially emitting a completed candle.
    pub fn process(&mut self, tick: Tick) -> Option<Candle> {
        match self {
            Self::Streaming(agg) => agg.process(tick),
            Self::GapFill(agg) => {
                agg.push(tick);
                None
            }
        }
    }

    /// Finishes aggregation, returning any remaining candles.
    ///
    /// # Errors
    ///
    /// Returns [`TickbarError::EmptyInput`](tickbar_types::TickbarError::EmptyInput)
    /// in gap-fill mode when no ticks were processed. Streaming mode yields an
    /// empty vector instead, since no bucket was ever opened.
    pub fn finish(self) -> Result<Vec<Candle>> {
        match self {
            Self::Streaming(agg) => Ok(agg.finish().into_iter().collect()),
            Self::GapFill(agg) => agg.finish(),
        }
    }
}

/// Converts a tick sequence into candles in one call.
///
/// Convenience wrapper over [`Aggregator`] for callers that do not need
/// streaming emission.
///
/// # Errors
///
/// Returns [`TickbarError::EmptyInput`](tickbar_types::TickbarError::EmptyInput)
/// in gap-fill mode when the sequence contains no ticks.
pub fn convert<I>(
    ticks: I,
    timeframe: Timeframe,
    mode: Mode,
    session: SessionSpec,
) -> Result<Vec<Candle>>
where
    I: IntoIterator<Item = Tick>,
{
    let mut aggregator = Aggregator::new(timeframe, mode, session);
    let mut candles = Vec::new();

    for tick in ticks {
        if let Some(candle) = aggregator.process(tick) {
            candles.push(candle);
        }
    }
    candles.extend(aggregator.finish()?);

    Ok(candles)
}
