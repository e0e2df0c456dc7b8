//! Error handling for file and directory level conversion failures.
//!
//! Line-level problems are [`MalformedRecord`](crate::line_protocol::MalformedRecord)
//! values and never abort a file; everything here concerns reading input,
//! writing output and run configuration.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Input directory not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("I/O error on '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV write failed for '{}'", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Directory traversal error: {0}")]
    DirectoryTraversal(#[from] walkdir::Error),

    #[error(
        "Output file '{}' was already produced from '{}'",
        .output.display(),
        .previous.display()
    )]
    OutputCollision { output: PathBuf, previous: PathBuf },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ConvertError {
    /// Create an I/O error for a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a CSV error for an output path
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Message including every underlying cause, for per-file reports
    pub fn report(&self) -> String {
        use std::error::Error as _;

        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
