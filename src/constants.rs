//! Application constants for the line protocol converter
//!
//! Default directories, CSV layout and the characters that drive the
//! line protocol scanner.

// =============================================================================
// Directories and File Names
// =============================================================================

/// Default input directory, relative to the working directory
pub const DEFAULT_INPUT_DIR: &str = "input";

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Extension given to every output file
pub const OUTPUT_EXTENSION: &str = "csv";

// =============================================================================
// CSV Layout
// =============================================================================

/// Column names of the output CSV, in order
pub mod columns {
    pub const MEASUREMENT: &str = "measurement";
    pub const TAGS: &str = "tags";
    pub const FIELDS: &str = "fields";
    pub const TIMESTAMP: &str = "timestamp";

    /// Header row written at the top of every output file
    pub const HEADER: [&str; 4] = [MEASUREMENT, TAGS, FIELDS, TIMESTAMP];
}

// =============================================================================
// Line Protocol Syntax
// =============================================================================

/// Separates measurement+tags, fields and timestamp
pub const SECTION_SEPARATOR: char = ' ';

/// Separates the measurement from the tag set, and pairs within a set
pub const PAIR_SEPARATOR: char = ',';

/// Makes the following character literal
pub const ESCAPE_CHAR: char = '\\';

/// Opens and closes a quoted string span
pub const QUOTE_CHAR: char = '"';

/// Lines starting with this prefix are comments
pub const COMMENT_PREFIX: char = '#';

// =============================================================================
// Reporting
// =============================================================================

/// Number of malformed line reports retained per file
pub const MAX_MALFORMED_REPORTS: usize = 100;
