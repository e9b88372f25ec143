//! Tick-to-OHLCV aggregation for the tickbar converter.
//!
//! This crate provides two aggregation strategies behind one interface:
//!
//! - [`StreamingAggregator`] - single-pass, constant-memory aggregation for
//!   timestamp-ordered tick streams
//! - [`GapFillAggregator`] - two-pass aggregation that emits a candle for
//!   every bucket of a 24-hour session, filling trade-less buckets with flat
//!   zero-volume candles
//! - [`Aggregator`] - unified wrapper selecting a strategy by [`Mode`]

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tickbar/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod candle;
mod gapfill;
mod streaming;

pub use aggregator::{Aggregator, Mode, convert};
pub use candle::Candle;
pub use gapfill::GapFillAggregator;
pub use streaming::StreamingAggregator;
