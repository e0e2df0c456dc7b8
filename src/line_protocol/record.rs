//! The four-column record produced from one line protocol line

use serde::Serialize;

use super::MalformedRecord;
use super::scanner::{end_state, split_once_unescaped};
use crate::constants::{PAIR_SEPARATOR, SECTION_SEPARATOR};

/// One parsed line: measurement, tag set, field set and timestamp
///
/// Every attribute is a slice of the source line, exactly as written.
/// Absent tags or timestamp are empty strings, never missing, so a record
/// always serializes to four CSV columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Record<'a> {
    measurement: &'a str,
    tags: &'a str,
    fields: &'a str,
    timestamp: &'a str,
}

impl<'a> Record<'a> {
    /// Split a non-blank line into its sections
    ///
    /// The line is not trimmed here; callers pass already-trimmed text.
    pub fn parse(line: &'a str) -> Result<Self, MalformedRecord> {
        let (head, rest) = split_once_unescaped(line, SECTION_SEPARATOR).unwrap_or((line, ""));
        let (fields, timestamp) =
            split_once_unescaped(rest, SECTION_SEPARATOR).unwrap_or((rest, ""));

        if fields.trim().is_empty() {
            return Err(MalformedRecord::MissingFields);
        }

        let (measurement, tags) = split_once_unescaped(head, PAIR_SEPARATOR).unwrap_or((head, ""));
        if measurement.is_empty() {
            return Err(MalformedRecord::MissingMeasurement);
        }

        Ok(Self {
            measurement,
            tags,
            fields,
            timestamp,
        })
    }

    pub fn measurement(&self) -> &'a str {
        self.measurement
    }

    /// Comma-joined `key=value` tag pairs, empty when the line has none
    pub fn tags(&self) -> &'a str {
        self.tags
    }

    /// Comma-joined `key=value` field pairs
    pub fn fields(&self) -> &'a str {
        self.fields
    }

    /// Raw timestamp text, empty when the line has none
    pub fn timestamp(&self) -> &'a str {
        self.timestamp
    }

    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    pub fn has_timestamp(&self) -> bool {
        !self.timestamp.is_empty()
    }

    /// Whether the source line ended inside an open quote
    ///
    /// Sections only start where the scanner is back outside quotes, so the
    /// last non-empty section decides.
    pub fn ends_in_open_quote(&self) -> bool {
        let tail = if self.has_timestamp() {
            self.timestamp
        } else {
            self.fields
        };
        end_state(tail).in_quote
    }

    /// Rebuild the line this record came from
    pub fn to_line(&self) -> String {
        let mut line = String::with_capacity(
            self.measurement.len() + self.tags.len() + self.fields.len() + self.timestamp.len() + 3,
        );
        line.push_str(self.measurement);
        if self.has_tags() {
            line.push(PAIR_SEPARATOR);
            line.push_str(self.tags);
        }
        line.push(SECTION_SEPARATOR);
        line.push_str(self.fields);
        if self.has_timestamp() {
            line.push(SECTION_SEPARATOR);
            line.push_str(self.timestamp);
        }
        line
    }

    /// Values in CSV column order
    pub fn columns(&self) -> [&'a str; 4] {
        [self.measurement, self.tags, self.fields, self.timestamp]
    }
}
