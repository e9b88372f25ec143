//! CLI command implementations.

pub(crate) mod convert;
pub(crate) mod timeframes;
