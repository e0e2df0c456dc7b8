//! Input file discovery and output naming
//!
//! Only regular files directly inside the input directory are converted.
//! Subdirectories are skipped; symlinks are followed when they point at a
//! regular file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::constants::OUTPUT_EXTENSION;
use crate::error::{ConvertError, Result};

/// List the files to convert, sorted by file name
pub fn discover_input_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(ConvertError::InputNotFound {
            path: input_dir.to_path_buf(),
        });
    }

    debug!("Searching for input files in: {}", input_dir.display());

    let mut files = Vec::new();
    let walker = WalkDir::new(input_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        if is_regular_file(&entry) {
            files.push(entry.into_path());
        } else {
            debug!("Skipping non-file entry: {}", entry.path().display());
        }
    }

    debug!("Found {} input files", files.len());
    Ok(files)
}

fn is_regular_file(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// Output path for an input file: `name.ext` becomes `output_dir/name.csv`
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .or_else(|| input.file_name())
        .unwrap_or(input.as_os_str());

    let mut name = OsString::from(stem);
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    output_dir.join(name)
}
