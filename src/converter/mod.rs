//! Directory conversion: line protocol files in, one CSV per file out
//!
//! Files are converted one at a time and independently. A file that cannot
//! be read or written is reported as failed and the run moves on; only a
//! missing input directory or an output directory that cannot be created
//! stops the run.
//!
//! ## Architecture
//!
//! - [`discovery`] - input file listing and output naming
//! - [`writer`] - CSV output via the `csv` crate
//! - [`Converter`] - run orchestration and per-file outcomes
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lp2csv::{ConvertConfig, Converter};
//!
//! # fn example() -> lp2csv::Result<()> {
//! let converter = Converter::new(ConvertConfig::new("input", "output"))?;
//! let summary = converter.run()?;
//!
//! println!(
//!     "Converted {} files, {} records",
//!     summary.files_converted(),
//!     summary.total_records()
//! );
//! # Ok(())
//! # }
//! ```

pub mod discovery;
pub mod writer;

#[cfg(test)]
pub mod tests;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, warn};

use crate::config::ConvertConfig;
use crate::error::{ConvertError, Result};
use crate::line_protocol::{LineOutcome, LineParser, Record};
use crate::models::{ConversionSummary, FileOutcome, FileStats, FileStatus};

pub use discovery::{discover_input_files, output_path_for};
pub use writer::write_csv_file;

/// Parse every line of `content`, keeping records in input order
///
/// Blank, comment and malformed lines are counted in the returned stats and
/// produce no record.
pub fn convert_content<'a>(content: &'a str, parser: &LineParser) -> (Vec<Record<'a>>, FileStats) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut records = Vec::new();
    let mut stats = FileStats::default();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        stats.total_lines += 1;

        match parser.parse(line) {
            Ok(LineOutcome::Record(record)) => {
                if record.ends_in_open_quote() {
                    debug!(line = line_number, "Quote left open at end of line");
                    stats.unterminated_quotes += 1;
                }
                records.push(record);
            }
            Ok(LineOutcome::Blank) => stats.blank_lines += 1,
            Ok(LineOutcome::Comment) => stats.comment_lines += 1,
            Err(reason) => {
                debug!(line = line_number, "Skipping line: {}", reason);
                stats.record_malformed(line_number, reason);
            }
        }
    }

    stats.records = records.len();
    (records, stats)
}

/// Converts every file of an input directory into the output directory
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConvertConfig,
    parser: LineParser,
}

impl Converter {
    /// Create a converter after validating the configuration
    pub fn new(config: ConvertConfig) -> Result<Self> {
        config.validate()?;
        let parser = LineParser::new(config.skip_comments);
        Ok(Self { config, parser })
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Convert all input files
    pub fn run(&self) -> Result<ConversionSummary> {
        self.run_with_progress(|_| {})
    }

    /// Convert all input files, calling `on_file` after each one
    pub fn run_with_progress<F>(&self, mut on_file: F) -> Result<ConversionSummary>
    where
        F: FnMut(&FileOutcome),
    {
        let files = self.discover()?;
        self.convert_files(&files, &mut on_file)
    }

    /// List the input files this converter would process
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        discover_input_files(&self.config.input_dir)
    }

    /// Convert the given files, in order
    pub fn convert_files<F>(&self, files: &[PathBuf], on_file: &mut F) -> Result<ConversionSummary>
    where
        F: FnMut(&FileOutcome),
    {
        let start_time = Instant::now();
        let output_dir = &self.config.output_dir;

        info!(
            "Converting {} files from {} into {}",
            files.len(),
            self.config.input_dir.display(),
            output_dir.display()
        );

        if !self.config.dry_run {
            fs::create_dir_all(output_dir).map_err(|e| ConvertError::io(output_dir, e))?;
        }

        let mut summary = ConversionSummary {
            input_dir: self.config.input_dir.clone(),
            output_dir: output_dir.clone(),
            dry_run: self.config.dry_run,
            ..Default::default()
        };
        let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();

        for input in files {
            let output = output_path_for(input, output_dir);

            let outcome = if let Some(previous) = claimed.get(&output) {
                let error = ConvertError::OutputCollision {
                    output: output.clone(),
                    previous: previous.clone(),
                };
                warn!("Skipping {}: {}", input.display(), error);
                FileOutcome::failed(input.clone(), &error)
            } else if self.config.dry_run {
                info!("Would convert {} -> {}", input.display(), output.display());
                FileOutcome::planned(input.clone(), output.clone())
            } else {
                match self.convert_file(input, &output) {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        error!("Failed to convert {}: {}", input.display(), e.report());
                        FileOutcome::failed(input.clone(), &e)
                    }
                }
            };

            if matches!(outcome.status, FileStatus::Converted | FileStatus::Planned) {
                claimed.insert(output, input.clone());
            }

            on_file(&outcome);
            summary.files.push(outcome);
        }

        summary.elapsed_ms = start_time.elapsed().as_millis() as u64;
        info!(
            "Finished: {} converted, {} empty, {} failed, {} records",
            summary.files_converted(),
            summary.files_empty(),
            summary.files_failed(),
            summary.total_records()
        );

        Ok(summary)
    }

    /// Read, parse and write a single file
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<FileOutcome> {
        debug!("Processing file: {}", input.display());

        let content = fs::read_to_string(input).map_err(|e| ConvertError::io(input, e))?;
        let (records, stats) = convert_content(&content, &self.parser);

        if stats.malformed_lines > 0 {
            let first = stats.malformed.first().map(|m| m.line_number).unwrap_or(0);
            warn!(
                "{}: skipped {} malformed line(s), first at line {}",
                input.display(),
                stats.malformed_lines,
                first
            );
        }

        if records.is_empty() && !self.config.write_empty {
            info!("Skipping {}: no valid line protocol data found", input.display());
            return Ok(FileOutcome::empty(input.to_path_buf(), stats));
        }

        write_csv_file(output, &records, &self.config.csv)?;
        info!(
            "Converted {} -> {} ({} rows)",
            input.display(),
            output.display(),
            records.len()
        );

        Ok(FileOutcome::converted(
            input.to_path_buf(),
            output.to_path_buf(),
            stats,
        ))
    }
}
