//! Line-level parsing: blank and comment handling in front of [`Record::parse`]

use super::MalformedRecord;
use super::record::Record;
use crate::constants::COMMENT_PREFIX;

/// What a single input line turned into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome<'a> {
    /// A record to emit as one CSV row
    Record(Record<'a>),
    /// Empty or whitespace-only line
    Blank,
    /// Line starting with `#`
    Comment,
}

impl<'a> LineOutcome<'a> {
    pub fn into_record(self) -> Option<Record<'a>> {
        match self {
            LineOutcome::Record(record) => Some(record),
            LineOutcome::Blank | LineOutcome::Comment => None,
        }
    }
}

/// Stateless line parser
///
/// The only setting is whether `#` lines are skipped as comments. With
/// comment skipping disabled, such lines are parsed like any other record.
#[derive(Debug, Clone, Copy)]
pub struct LineParser {
    skip_comments: bool,
}

impl LineParser {
    pub fn new(skip_comments: bool) -> Self {
        Self { skip_comments }
    }

    /// Parse one line with its trailing newline already removed
    ///
    /// Surrounding whitespace (including a stray `\r`) is ignored.
    pub fn parse<'a>(&self, line: &'a str) -> Result<LineOutcome<'a>, MalformedRecord> {
        let line = line.trim();

        if line.is_empty() {
            return Ok(LineOutcome::Blank);
        }

        if self.skip_comments && line.starts_with(COMMENT_PREFIX) {
            return Ok(LineOutcome::Comment);
        }

        Record::parse(line).map(LineOutcome::Record)
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Parse one line with the default parser (comments skipped)
pub fn parse_line(line: &str) -> Result<LineOutcome<'_>, MalformedRecord> {
    LineParser::default().parse(line)
}
