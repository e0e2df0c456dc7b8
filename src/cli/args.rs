//! Command-line argument definitions for the line protocol converter
//!
//! Every flag is optional: with none given, `./input` is converted into
//! `./output`.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{ConvertConfig, CsvOptions};
use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};

/// CLI arguments for the converter
///
/// Converts every InfluxDB line protocol file in a directory into a CSV
/// file with the columns measurement, tags, fields and timestamp.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "lp2csv",
    version,
    about = "Convert InfluxDB line protocol files into CSV",
    long_about = "Reads every file in the input directory as InfluxDB line protocol and writes \
                  one CSV file per input file into the output directory, with the columns \
                  measurement, tags, fields and timestamp. Blank lines and comments are \
                  skipped; malformed lines are skipped and reported."
)]
pub struct Args {
    /// Directory containing line protocol files
    #[arg(
        short = 'i',
        long = "input",
        value_name = "DIR",
        default_value = DEFAULT_INPUT_DIR,
        help = "Directory containing line protocol files"
    )]
    pub input_dir: PathBuf,

    /// Directory for the generated CSV files
    ///
    /// Will be created if it doesn't exist. Existing files with the same
    /// name are overwritten.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory for the generated CSV files"
    )]
    pub output_dir: PathBuf,

    /// Quote every CSV field, not only those that need quoting
    #[arg(long = "quote-all", help = "Quote every CSV field")]
    pub quote_all: bool,

    /// Parse lines starting with '#' as records instead of skipping them
    #[arg(
        long = "keep-comments",
        help = "Parse '#' lines as records instead of skipping them"
    )]
    pub keep_comments: bool,

    /// Write a header-only CSV for input files without any records
    #[arg(
        long = "write-empty",
        help = "Write header-only CSV files for inputs without records"
    )]
    pub write_empty: bool,

    /// Show what would be converted without creating output files
    #[arg(
        long = "dry-run",
        help = "Show what would be converted without creating output files"
    )]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Format of the final summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the summary"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Log level derived from `-v` / `-q`
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }

        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Whether to draw a progress bar
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }

    /// Build the run configuration from the arguments
    pub fn to_config(&self) -> ConvertConfig {
        ConvertConfig {
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
            csv: CsvOptions {
                quote_all: self.quote_all,
            },
            skip_comments: !self.keep_comments,
            write_empty: self.write_empty,
            dry_run: self.dry_run,
        }
    }
}
