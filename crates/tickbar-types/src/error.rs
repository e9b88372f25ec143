//! Error types for tickbar.

use thiserror::Error;

use crate::TimeframeParseError;

/// Result type alias for tickbar operations.
pub type Result<T> = std::result::Result<T, TickbarError>;

/// Errors that can occur during tick-to-OHLCV conversion.
#[derive(Error, Debug)]
pub enum TickbarError {
    /// Unsupported timeframe string.
    #[error(transparent)]
    Timeframe(#[from] TimeframeParseError),

    /// No valid ticks were found in the input.
    ///
    /// Gap filling cannot compute a session window without at least one tick.
    #[error("no valid ticks found in input")]
    EmptyInput,

    /// Malformed input data.
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
