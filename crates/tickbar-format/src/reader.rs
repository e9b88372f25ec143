//! Tick CSV input.

use std::io::Read;

use csv::StringRecord;
use thiserror::Error;
use tickbar_types::{Tick, TickbarError};

/// Errors that can occur while reading tick CSV data.
#[derive(Error, Debug)]
pub enum ReadError {
    /// A required column is absent from the header row.
    #[error("missing required column '{0}' in header")]
    MissingColumn(&'static str),

    /// A row field could not be parsed as a number.
    #[error("line {line}: malformed {field} value '{value}'")]
    MalformedRow {
        /// 1-based line number of the offending row.
        line: u64,
        /// Name of the field that failed to parse.
        field: &'static str,
        /// The raw field text.
        value: String,
    },

    /// Underlying CSV error (I/O, unequal row lengths, invalid UTF-8).
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl From<ReadError> for TickbarError {
    fn from(err: ReadError) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Resolved column indices for a tick file.
#[derive(Debug, Clone, Copy)]
struct Columns {
    timestamp: usize,
    price: usize,
    /// `size` preferred, `volume` accepted; rows default to 0 when neither
    /// column exists.
    size: Option<usize>,
}

/// Header-aware tick CSV reader.
///
/// Requires `timestamp` and `price` columns; trade quantity is taken from
/// `size` if present, falling back to `volume`. Timestamps may be in seconds
/// or milliseconds and are normalized on read. Parsing is fail-fast: the
/// first malformed row aborts the iteration with an error rather than being
/// skipped.
pub struct CsvTickReader<R: Read> {
    records: csv::StringRecordsIntoIter<R>,
    columns: Columns,
}

impl<R: Read> std::fmt::Debug for CsvTickReader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvTickReader")
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

impl<R: Read> CsvTickReader<R> {
    /// Creates a reader, resolving column positions from the header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be read or lacks a `timestamp`
    /// or `price` column.
    pub fn new(reader: R) -> Result<Self, ReadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let columns = Columns {
            timestamp: find("timestamp").ok_or(ReadError::MissingColumn("timestamp"))?,
            price: find("price").ok_or(ReadError::MissingColumn("price"))?,
            size: find("size").or_else(|| find("volume")),
        };

        Ok(Self {
            records: csv_reader.into_records(),
            columns,
        })
    }

    fn parse_record(&self, record: &StringRecord) -> Result<Tick, ReadError> {
        let line = record.position().map_or(0, csv::Position::line);

        let raw_timestamp = parse_field(record, self.columns.timestamp, "timestamp", line)?;
        let price = parse_field(record, self.columns.price, "price", line)?;
        let size = match self.columns.size {
            Some(index) => parse_field(record, index, "size", line)?,
            None => 0.0,
        };

        Ok(Tick::from_raw(raw_timestamp, price, size))
    }
}

impl<R: Read> Iterator for CsvTickReader<R> {
    type Item = Result<Tick, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.records.next()? {
            Ok(record) => Some(self.parse_record(&record)),
            Err(err) => Some(Err(err.into())),
        }
    }
}

fn parse_field(
    record: &StringRecord,
    index: usize,
    field: &'static str,
    line: u64,
) -> Result<f64, ReadError> {
    let value = record.get(index).unwrap_or("");
    value.trim().parse().map_err(|_| ReadError::MalformedRow {
        line,
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(input: &str) -> Vec<Tick> {
        CsvTickReader::new(input.as_bytes())
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_reads_size_column() {
        let ticks = read_all("timestamp,price,size\n100.5,42000.0,0.25\n101.0,42001.5,1.5\n");
        assert_eq!(ticks.len(), 2);
        assert!((ticks[0].timestamp - 100.5).abs() < 1e-10);
        assert!((ticks[0].price - 42000.0).abs() < 1e-10);
        assert!((ticks[1].size - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_volume_column_fallback() {
        let ticks = read_all("timestamp,price,volume\n100.0,10.0,3.0\n");
        assert!((ticks[0].size - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_size_preferred_over_volume() {
        let ticks = read_all("timestamp,volume,price,size\n100.0,9.0,10.0,2.0\n");
        assert!((ticks[0].size - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_missing_quantity_column_defaults_to_zero() {
        let ticks = read_all("timestamp,price\n100.0,10.0\n");
        assert_eq!(ticks[0].size, 0.0);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let ticks = read_all("side,timestamp,symbol,price,size\nBuy,100.0,BTCUSD,10.0,1.0\n");
        assert_eq!(ticks.len(), 1);
        assert!((ticks[0].price - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_millisecond_timestamps_normalized() {
        let ticks = read_all("timestamp,price,size\n1700000000000,10.0,1.0\n");
        assert!((ticks[0].timestamp - 1_700_000_000.0).abs() < 1e-10);
    }

    #[test]
    fn test_missing_timestamp_column() {
        let result = CsvTickReader::new("time,price,size\n100.0,10.0,1.0\n".as_bytes());
        assert!(matches!(result, Err(ReadError::MissingColumn("timestamp"))));
    }

    #[test]
    fn test_missing_price_column() {
        let result = CsvTickReader::new("timestamp,size\n100.0,1.0\n".as_bytes());
        assert!(matches!(result, Err(ReadError::MissingColumn("price"))));
    }

    #[test]
    fn test_malformed_row_fails_fast_with_line_number() {
        let input = "timestamp,price,size\n100.0,10.0,1.0\n101.0,not-a-price,1.0\n";
        let results: Vec<_> = CsvTickReader::new(input.as_bytes()).unwrap().collect();

        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        match &results[1] {
            Err(ReadError::MalformedRow { line, field, value }) => {
                assert_eq!(*line, 3);
                assert_eq!(*field, "price");
                assert_eq!(value, "not-a-price");
            }
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_file_with_header_yields_no_ticks() {
        let ticks = read_all("timestamp,price,size\n");
        assert!(ticks.is_empty());
    }
}
