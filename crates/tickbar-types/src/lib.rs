//! Core types for the tickbar tick-to-OHLCV converter.
//!
//! This crate provides the fundamental data structures used throughout tickbar:
//!
//! - [`Tick`] - A single trade with timestamp, price, and size
//! - [`Timeframe`] - Candle aggregation timeframe
//! - [`SessionSpec`] - Session alignment policy for gap filling
//! - [`TickbarError`] - Workspace-wide error type

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tickbar/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod session;
mod tick;
mod timeframe;

pub use error::{Result, TickbarError};
pub use session::{SessionSpec, SessionWindow};
pub use tick::{MILLIS_THRESHOLD, Tick, normalize_timestamp};
pub use timeframe::{Timeframe, TimeframeParseError};
