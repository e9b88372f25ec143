//! tickbar CLI - tick-to-OHLCV converter with session gap filling.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

use display::ModeArg;

#[derive(Parser)]
#[command(name = "tickbar")]
#[command(about = "Convert trade tick CSV files to OHLCV candles", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a tick CSV file to OHLCV candles
    Convert {
        /// Path to the input tick CSV file (timestamp, price, size/volume)
        input: PathBuf,

        /// Target timeframe (1s, 1m, 5m, 15m, 1h, 4h, 1d)
        #[arg(short, long)]
        timeframe: String,

        /// Output file path. Defaults to <input-stem>_<timeframe>.csv
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Aggregation mode
        #[arg(short, long, value_enum, default_value = "gap-fill")]
        mode: ModeArg,

        /// UTC hour at which the 24-hour session rolls over (gap-fill mode)
        #[arg(long, default_value = "9", value_parser = clap::value_parser!(u32).range(0..24))]
        session_start_hour: u32,
    },

    /// List supported timeframes
    Timeframes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Convert {
            input,
            timeframe,
            output,
            mode,
            session_start_hour,
        } => commands::convert::convert(
            &input,
            &timeframe,
            output,
            mode,
            session_start_hour,
            cli.quiet,
        ),
        Commands::Timeframes => commands::timeframes::list_timeframes(),
    }
}
