//! Tests for the directory converter
//!
//! Builds small input directories in temporary locations and checks the
//! CSV files and outcomes produced.

pub mod content_tests;
pub mod error_handling;

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::config::ConvertConfig;

/// Input lines from the end-to-end scenario: two records, a blank line and
/// a malformed line
pub const MIXED_INPUT: &str = "cpu,host=server01,region=us-west value=0.64 1434055562000000000\n\
mem,host=server01 value=2048\n\
\n\
bad,line,no,fields\n";

/// Temporary workspace with `input/` created and `output/` not yet present
pub struct Workspace {
    pub temp_dir: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("input");
        let output = temp_dir.path().join("output");
        fs::create_dir(&input).unwrap();
        Self {
            temp_dir,
            input,
            output,
        }
    }

    pub fn add_input(&self, name: &str, content: &str) -> PathBuf {
        let path = self.input.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn config(&self) -> ConvertConfig {
        ConvertConfig::new(&self.input, &self.output)
    }

    pub fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.output.join(name)).unwrap()
    }
}
