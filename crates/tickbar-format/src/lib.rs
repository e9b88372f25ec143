//! CSV input and output for the tickbar converter.
//!
//! This crate adapts tick CSV files to the aggregation core and serializes
//! the resulting candles:
//!
//! - [`CsvTickReader`] - reads `timestamp,price,size|volume` tick rows
//! - [`CsvCandleWriter`] - writes candles one row at a time

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tickbar/tickbar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod reader;
mod writer;

pub use reader::{CsvTickReader, ReadError};
pub use writer::CsvCandleWriter;
