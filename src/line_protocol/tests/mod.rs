//! Test suite for the line protocol parser
//!
//! - `scanner_tests` - separator scanning and quote/escape state
//! - `parser_tests` - record splitting, blank/comment lines and malformed input

pub mod scanner_tests;

use super::{LineOutcome, Record, parse_line};

/// Parse a line that is expected to yield a record
pub fn parse_record(line: &str) -> Record<'_> {
    match parse_line(line) {
        Ok(LineOutcome::Record(record)) => record,
        other => panic!("Expected a record for {:?}, got {:?}", line, other),
    }
}
