//! Trade tick representation and timestamp normalization.

use serde::{Deserialize, Serialize};

/// Raw timestamps above this value are interpreted as milliseconds.
///
/// The boundary case (a value exactly at the threshold) is undefined; input
/// data with timestamps near `1e10` seconds (~year 2286) is a precondition
/// violation, not something this crate validates.
pub const MILLIS_THRESHOLD: f64 = 1e10;

/// Normalizes a raw numeric timestamp to seconds since the Unix epoch.
///
/// Values above [`MILLIS_THRESHOLD`] are treated as milliseconds and divided
/// by 1000; everything else is already in seconds and returned unchanged.
#[must_use]
pub fn normalize_timestamp(raw: f64) -> f64 {
    if raw > MILLIS_THRESHOLD {
        raw / 1000.0
    } else {
        raw
    }
}

/// A single executed trade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Trade time in seconds since the Unix epoch (UTC).
    pub timestamp: f64,
    /// Trade price.
    pub price: f64,
    /// Trade quantity (non-negative).
    pub size: f64,
}

impl Tick {
    /// Creates a tick from an already-normalized timestamp.
    #[must_use]
    pub const fn new(timestamp: f64, price: f64, size: f64) -> Self {
        Self {
            timestamp,
            price,
            size,
        }
    }

    /// Creates a tick from a raw timestamp, normalizing milliseconds to
    /// seconds (see [`normalize_timestamp`]).
    #[must_use]
    pub fn from_raw(raw_timestamp: f64, price: f64, size: f64) -> Self {
        Self::new(normalize_timestamp(raw_timestamp), price, size)
    }
}
