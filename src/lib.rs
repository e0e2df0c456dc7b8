//! Line protocol to CSV converter
//!
//! Converts directories of InfluxDB line protocol files into CSV files with
//! the columns `measurement`, `tags`, `fields` and `timestamp`, one output
//! file per input file.
//!
//! This library provides:
//! - A line parser that honors backslash escapes and quoted field values
//! - Directory discovery and per-file conversion with isolated failures
//! - CSV output through the `csv` crate
//! - Per-file and per-run statistics for reporting

pub mod config;
pub mod constants;
pub mod converter;
pub mod error;
pub mod line_protocol;
pub mod models;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::{ConvertConfig, CsvOptions};
pub use converter::Converter;
pub use error::{ConvertError, Result};
pub use line_protocol::{LineOutcome, LineParser, MalformedRecord, Record, parse_line};
pub use models::{ConversionSummary, FileOutcome, FileStats, FileStatus};
