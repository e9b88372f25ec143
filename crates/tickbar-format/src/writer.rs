//! Candle CSV output.

use std::io::{self, Write};

use tickbar_aggregate::Candle;

/// Incremental candle CSV writer.
///
/// Serializes candles in the fixed field order
/// `timestamp,datetime,open,high,low,close,volume,trades`, one row per
/// candle after a single header row. Rows are written as they arrive, so a
/// streaming aggregator can drive this writer with constant memory.
#[derive(Debug)]
pub struct CsvCandleWriter<W: Write> {
    writer: W,
    delimiter: char,
    include_header: bool,
    header_written: bool,
}

impl<W: Write> CsvCandleWriter<W> {
    /// Creates a writer with the default comma delimiter and a header row.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            delimiter: ',',
            include_header: true,
            header_written: false,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to emit a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Writes the header row if configured and not already written.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_header(&mut self) -> io::Result<()> {
        if self.include_header && !self.header_written {
            let d = self.delimiter;
            writeln!(
                self.writer,
                "timestamp{d}datetime{d}open{d}high{d}low{d}close{d}volume{d}trades"
            )?;
            self.header_written = true;
        }
        Ok(())
    }

    /// Writes a single candle row, emitting the header first if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_candle(&mut self, candle: &Candle) -> io::Result<()> {
        self.write_header()?;
        let d = self.delimiter;
        writeln!(
            self.writer,
            "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
            candle.timestamp,
            candle.datetime().format("%Y-%m-%dT%H:%M:%S"),
            candle.open,
            candle.high,
            candle.low,
            candle.close,
            candle.volume,
            candle.trades
        )
    }

    /// Writes all candles in order.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_all(&mut self, candles: &[Candle]) -> io::Result<()> {
        self.write_header()?;
        for candle in candles {
            self.write_candle(candle)?;
        }
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
