//! Convert command implementation.
//!
//! This module drives a tick CSV file through the aggregation core and
//! writes the resulting candle CSV, streaming candles out as they complete.

use crate::display::ModeArg;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tickbar_lib::prelude::*;

/// Convert a tick CSV file to OHLCV candles.
pub(crate) fn convert(
    input: &Path,
    timeframe_str: &str,
    output: Option<PathBuf>,
    mode_arg: ModeArg,
    session_start_hour: u32,
    quiet: bool,
) -> Result<()> {
    let timeframe = timeframe_str
        .parse::<Timeframe>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    let mode = Mode::from(mode_arg);
    let session = SessionSpec::new(session_start_hour);

    // Default output path: <stem>_<timeframe>.csv beside the input
    let output = output.unwrap_or_else(|| default_output_path(input, timeframe));

    let in_file = File::open(input)
        .with_context(|| format!("Failed to open input file: {}", input.display()))?;
    let reader = CsvTickReader::new(BufReader::new(in_file))
        .with_context(|| format!("Failed to read CSV header from {}", input.display()))?;

    let out_file = File::create(&output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let mut writer = CsvCandleWriter::new(BufWriter::new(out_file));

    // Setup progress spinner (tick count is unknown up front)
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {human_pos} ticks read {msg}")
                .expect("Invalid progress template"),
        );
        pb.set_message(format!("-> {timeframe} candles ({mode})"));
        pb
    };

    let mut aggregator = Aggregator::new(timeframe, mode, session);
    let mut ticks_read = 0u64;
    let mut candles_written = 0u64;

    for tick in reader {
        let tick = tick.with_context(|| format!("Failed to parse {}", input.display()))?;
        if let Some(candle) = aggregator.process(tick) {
            writer.write_candle(&candle)?;
            candles_written += 1;
        }
        ticks_read += 1;
        progress.inc(1);
    }

    // Streaming: at most the trailing candle. Gap-fill: the whole session
    // walk, or EmptyInput when the file held no ticks.
    for candle in aggregator.finish()? {
        writer.write_candle(&candle)?;
        candles_written += 1;
    }

    // A valid but candle-less conversion still gets a header row
    writer.write_header()?;
    writer.into_inner()?;

    progress.finish_with_message(format!("done ({candles_written} candles)"));

    if !quiet {
        println!("Total ticks read: {ticks_read}");
        println!("Total {timeframe} candles written: {candles_written}");
        if mode == Mode::GapFill {
            println!(
                "Expected candles for a 24h session: {}",
                timeframe.candles_per_day()
            );
        }
        println!("Output written to: {}", output.display());
    }

    Ok(())
}

/// Default output path: the input path with `_<timeframe>` appended to the
/// file stem and a `.csv` extension.
fn default_output_path(input: &Path, timeframe: Timeframe) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "candles".to_string(), |s| s.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}_{timeframe}.csv"))
}
