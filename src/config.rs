//! Configuration management and validation.
//!
//! [`ConvertConfig`] carries everything a conversion run needs. The CLI
//! builds one from its arguments; library callers can start from
//! [`ConvertConfig::default`], which reproduces the zero-flag behavior
//! (`./input` converted into `./output`).

use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use crate::error::{ConvertError, Result};

/// CSV output settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CsvOptions {
    /// Quote every field instead of only those that need it
    pub quote_all: bool,
}

/// Settings for one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Directory scanned for input files (not recursive)
    pub input_dir: PathBuf,

    /// Directory receiving one `.csv` per input file, created if absent
    pub output_dir: PathBuf,

    pub csv: CsvOptions,

    /// Treat `#` lines as comments rather than records
    pub skip_comments: bool,

    /// Write a header-only CSV for files without records
    pub write_empty: bool,

    /// Report planned outputs without reading or writing files
    pub dry_run: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            csv: CsvOptions::default(),
            skip_comments: true,
            write_empty: false,
            dry_run: false,
        }
    }
}

impl ConvertConfig {
    /// Default settings for the given directories
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Check the directory settings before a run
    ///
    /// The input directory's existence is checked by the run itself, since
    /// that is an I/O condition rather than a configuration mistake.
    pub fn validate(&self) -> Result<()> {
        if self.input_dir.as_os_str().is_empty() {
            return Err(ConvertError::configuration("input directory must not be empty"));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(ConvertError::configuration("output directory must not be empty"));
        }

        if same_location(&self.input_dir, &self.output_dir) {
            return Err(ConvertError::configuration(format!(
                "input and output directories must differ (both are '{}')",
                self.input_dir.display()
            )));
        }

        Ok(())
    }
}

/// Compare two directories, resolving them when both exist
fn same_location(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
