//! Line protocol record parser
//!
//! Splits one line of InfluxDB-style line protocol,
//!
//! ```text
//! measurement[,tag1=val1,...] field1=val1[,field2=val2,...] [timestamp]
//! ```
//!
//! into four raw strings. Nothing is unescaped or type-converted; the slices
//! are handed on to the CSV writer as they appear in the line.
//!
//! ## Architecture
//!
//! - [`scanner`] - quote/escape state machine that finds live separators
//! - [`record`] - the [`Record`] type and section splitting
//! - [`parser`] - blank/comment handling and the [`LineParser`] entry point
//!
//! ## Usage
//!
//! ```rust
//! use lp2csv::line_protocol::{parse_line, LineOutcome};
//!
//! let outcome = parse_line(r#"weather,city=Paris\,FR temp=21.5,note="warm, dry" 1700000000"#).unwrap();
//! let record = outcome.into_record().unwrap();
//!
//! assert_eq!(record.measurement(), "weather");
//! assert_eq!(record.tags(), r"city=Paris\,FR");
//! assert_eq!(record.fields(), r#"temp=21.5,note="warm, dry""#);
//! assert_eq!(record.timestamp(), "1700000000");
//!
//! assert_eq!(parse_line("   ").unwrap(), LineOutcome::Blank);
//! ```

use serde::Serialize;
use thiserror::Error;

pub mod parser;
pub mod record;
pub mod scanner;

#[cfg(test)]
pub mod tests;

pub use parser::{LineOutcome, LineParser, parse_line};
pub use record::Record;

/// Why a non-blank line could not become a record
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedRecord {
    /// No text between the first and second section separator
    #[error("malformed record: missing field set")]
    MissingFields,

    /// Line begins with the tag separator
    #[error("malformed record: empty measurement name")]
    MissingMeasurement,
}
