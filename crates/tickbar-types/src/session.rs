//! Session-window alignment for gap filling.

use chrono::{DateTime, Days, Timelike};
use serde::{Deserialize, Serialize};

/// Session alignment policy.
///
/// Gap filling enumerates candles over a full 24-hour session rather than the
/// raw tick min/max range. The session boundary hour is provider-specific
/// (e.g. Bybit daily dumps roll at 09:00 UTC), so it is a policy value rather
/// than a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSpec {
    /// UTC hour at which the session rolls over (0-23).
    start_hour: u32,
}

impl Default for SessionSpec {
    fn default() -> Self {
        Self { start_hour: 9 }
    }
}

impl SessionSpec {
    /// Creates a session policy rolling over at the given UTC hour.
    ///
    /// # Panics
    ///
    /// Panics if `start_hour` is not in `0..24`.
    #[must_use]
    pub const fn new(start_hour: u32) -> Self {
        assert!(start_hour < 24, "session start hour must be 0-23");
        Self { start_hour }
    }

    /// Returns the UTC rollover hour.
    #[must_use]
    pub const fn start_hour(&self) -> u32 {
        self.start_hour
    }

    /// Returns the 24-hour session window containing the given timestamp.
    ///
    /// A timestamp whose UTC hour is before the rollover hour belongs to the
    /// session that started the previous day. The window spans
    /// `[start, start + 24h - 1s]` inclusive.
    #[must_use]
    pub fn window_containing(&self, timestamp_secs: f64) -> SessionWindow {
        let dt = DateTime::from_timestamp(timestamp_secs.floor() as i64, 0)
            .expect("timestamp out of chrono range");

        let session_day = if dt.hour() < self.start_hour {
            dt.date_naive() - Days::new(1)
        } else {
            dt.date_naive()
        };

        let start = session_day
            .and_hms_opt(self.start_hour, 0, 0)
            .expect("valid session start time")
            .and_utc()
            .timestamp();

        SessionWindow {
            start,
            end: start + 86400 - 1,
        }
    }
}

/// Inclusive 24-hour window over which gap-filled candles are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionWindow {
    /// Window start in epoch seconds (session rollover instant).
    pub start: i64,
    /// Window end in epoch seconds (last second of the session).
    pub end: i64,
}
