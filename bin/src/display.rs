//! Display utilities for the tickbar CLI.

use clap::ValueEnum;
use tickbar_lib::prelude::Mode;

/// Aggregation mode argument.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum ModeArg {
    /// Single pass over an ordered tick stream; no candles for gaps
    Streaming,
    /// One candle per bucket of the 24-hour session, flat candles for gaps
    GapFill,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Streaming => Self::Streaming,
            ModeArg::GapFill => Self::GapFill,
        }
    }
}

impl std::fmt::Display for ModeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Mode::from(*self))
    }
}
