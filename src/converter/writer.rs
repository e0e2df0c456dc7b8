//! CSV output for parsed records
//!
//! Quoting is left entirely to the `csv` crate: by default only fields that
//! contain a delimiter, quote or line break are quoted. `quote_all` quotes
//! every field, like the `unix` dialect of Python's csv module.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::config::CsvOptions;
use crate::constants::columns;
use crate::error::{ConvertError, Result};
use crate::line_protocol::Record;

/// Build a CSV writer with the configured quoting and `\n` line endings
///
/// The header is not written automatically; [`write_records`] writes it so
/// that a file with no rows still gets one.
pub fn csv_writer<W: Write>(inner: W, options: &CsvOptions) -> csv::Writer<W> {
    let quote_style = if options.quote_all {
        QuoteStyle::Always
    } else {
        QuoteStyle::Necessary
    };

    WriterBuilder::new()
        .has_headers(false)
        .quote_style(quote_style)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(inner)
}

/// Write the header row followed by one row per record, in order
pub fn write_records<W: Write>(
    writer: &mut csv::Writer<W>,
    records: &[Record<'_>],
) -> csv::Result<()> {
    writer.write_record(columns::HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write `records` to it
pub fn write_csv_file(path: &Path, records: &[Record<'_>], options: &CsvOptions) -> Result<()> {
    let file = File::create(path).map_err(|e| ConvertError::io(path, e))?;
    let mut writer = csv_writer(BufWriter::new(file), options);

    write_records(&mut writer, records).map_err(|e| ConvertError::csv(path, e))?;

    debug!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}
