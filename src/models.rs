//! Core data structures for conversion results.
//!
//! Per-file line statistics, per-file outcomes and the run summary
//! reported by the CLI.

use serde::Serialize;
use std::path::PathBuf;

use crate::constants::MAX_MALFORMED_REPORTS;
use crate::error::ConvertError;
use crate::line_protocol::MalformedRecord;

/// A skipped line and the reason it was rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedLine {
    /// 1-based line number in the input file
    pub line_number: usize,
    pub reason: MalformedRecord,
}

/// Line statistics for one input file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileStats {
    /// Lines read, including blank and comment lines
    pub total_lines: usize,

    /// Records written as CSV rows
    pub records: usize,

    pub blank_lines: usize,

    pub comment_lines: usize,

    /// Lines skipped as malformed
    pub malformed_lines: usize,

    /// Records whose line ended inside an open quote
    pub unterminated_quotes: usize,

    /// First malformed lines, capped at [`MAX_MALFORMED_REPORTS`]
    pub malformed: Vec<MalformedLine>,
}

impl FileStats {
    /// Count a malformed line, keeping its report while under the cap
    pub fn record_malformed(&mut self, line_number: usize, reason: MalformedRecord) {
        self.malformed_lines += 1;
        if self.malformed.len() < MAX_MALFORMED_REPORTS {
            self.malformed.push(MalformedLine {
                line_number,
                reason,
            });
        }
    }

    /// Lines that were expected to carry a record (not blank, not comments)
    pub fn candidate_lines(&self) -> usize {
        self.records + self.malformed_lines
    }

    /// Percentage of candidate lines that became records
    pub fn success_rate(&self) -> f64 {
        let candidates = self.candidate_lines();
        if candidates == 0 {
            0.0
        } else {
            (self.records as f64 / candidates as f64) * 100.0
        }
    }
}

/// What happened to one input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// CSV written
    Converted,
    /// No records found, no CSV written
    Empty,
    /// Unreadable input or unwritable output
    Failed,
    /// Dry run: would be converted
    Planned,
}

/// Result of processing one input file
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub status: FileStatus,
    pub stats: FileStats,
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn converted(input: PathBuf, output: PathBuf, stats: FileStats) -> Self {
        Self {
            input,
            output: Some(output),
            status: FileStatus::Converted,
            stats,
            error: None,
        }
    }

    pub fn empty(input: PathBuf, stats: FileStats) -> Self {
        Self {
            input,
            output: None,
            status: FileStatus::Empty,
            stats,
            error: None,
        }
    }

    pub fn failed(input: PathBuf, error: &ConvertError) -> Self {
        Self {
            input,
            output: None,
            status: FileStatus::Failed,
            stats: FileStats::default(),
            error: Some(error.report()),
        }
    }

    pub fn planned(input: PathBuf, output: PathBuf) -> Self {
        Self {
            input,
            output: Some(output),
            status: FileStatus::Planned,
            stats: FileStats::default(),
            error: None,
        }
    }

    /// File name of the input, for display
    pub fn input_name(&self) -> String {
        self.input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.display().to_string())
    }
}

/// Outcome of a whole conversion run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionSummary {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub files: Vec<FileOutcome>,
    pub elapsed_ms: u64,
}

impl ConversionSummary {
    fn count(&self, status: FileStatus) -> usize {
        self.files.iter().filter(|file| file.status == status).count()
    }

    pub fn files_converted(&self) -> usize {
        self.count(FileStatus::Converted)
    }

    pub fn files_empty(&self) -> usize {
        self.count(FileStatus::Empty)
    }

    pub fn files_failed(&self) -> usize {
        self.count(FileStatus::Failed)
    }

    pub fn files_planned(&self) -> usize {
        self.count(FileStatus::Planned)
    }

    pub fn total_records(&self) -> usize {
        self.files.iter().map(|file| file.stats.records).sum()
    }

    pub fn total_malformed(&self) -> usize {
        self.files.iter().map(|file| file.stats.malformed_lines).sum()
    }

    pub fn has_failures(&self) -> bool {
        self.files_failed() > 0
    }
}
