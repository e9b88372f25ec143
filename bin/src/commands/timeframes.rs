//! Timeframes listing command.

use anyhow::Result;
use tickbar_lib::prelude::*;

/// List the supported aggregation timeframes.
pub(crate) fn list_timeframes() -> Result<()> {
    println!("{:<12} {:>10} {:>14}", "TIMEFRAME", "SECONDS", "CANDLES/DAY");
    for timeframe in Timeframe::all() {
        println!(
            "{:<12} {:>10} {:>14}",
            timeframe.as_str(),
            timeframe.interval_secs(),
            timeframe.candles_per_day()
        );
    }
    Ok(())
}
