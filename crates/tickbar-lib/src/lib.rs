//! Tick-to-OHLCV conversion with session gap filling.
//!
//! This is a facade crate that re-exports functionality from the tickbar
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use tickbar_lib::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let ticks = vec![
//!         Tick::new(100.2, 10.0, 1.0),
//!         Tick::new(100.9, 12.0, 2.0),
//!         Tick::new(161.0, 11.0, 1.0),
//!     ];
//!
//!     let candles = convert(
//!         ticks,
//!         Timeframe::Minute1,
//!         Mode::Streaming,
//!         SessionSpec::default(),
//!     )?;
//!
//!     assert_eq!(candles.len(), 2);
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tickbar/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use tickbar_types::*;

// Re-export aggregation
pub use tickbar_aggregate::{Aggregator, Candle, GapFillAggregator, Mode, StreamingAggregator, convert};

// Re-export CSV adapters
pub use tickbar_format::{CsvCandleWriter, CsvTickReader, ReadError};

/// Prelude module for convenient imports.
///
/// ```
/// use tickbar_lib::prelude::*;
/// ```
pub mod prelude {
    pub use tickbar_types::{
        Result, SessionSpec, SessionWindow, Tick, TickbarError, Timeframe, TimeframeParseError,
    };

    pub use tickbar_aggregate::{
        Aggregator, Candle, GapFillAggregator, Mode, StreamingAggregator, convert,
    };

    pub use tickbar_format::{CsvCandleWriter, CsvTickReader, ReadError};
}
