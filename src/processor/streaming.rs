//! Line-by-line conversion of a single station log file
//!
//! Each file is streamed once: data lines are parsed and written straight
//! to the shared CSV output, everything else is ignored.

use super::writer::CsvOutput;
use crate::constants::DATA_ROW_PREFIX;
use crate::error::{ConvertError, Result};
use crate::models::{FileStats, ParseOutcome};
use crate::parser::RowParser;

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Convert one log file, appending its rows to `output`.
///
/// The header is written as soon as the file has been opened, if no earlier
/// file has written it. Lines that fail to parse are logged and skipped; a
/// read error mid-file aborts this file but keeps the rows already written.
pub fn process_file<W: Write>(
    path: &Path,
    output: &mut CsvOutput<W>,
    parser: &RowParser,
) -> Result<FileStats> {
    let file = File::open(path).map_err(|source| ConvertError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    output.write_header_once()?;
    let stats = convert_lines(BufReader::new(file), output, parser).map_err(|e| match e {
        ConvertError::Io(source) => ConvertError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    debug!(
        "{}: {} lines, {} data lines, {} rows written, {} skipped, {} filtered",
        path.display(),
        stats.lines_read,
        stats.data_lines,
        stats.rows_written,
        stats.lines_skipped,
        stats.records_filtered
    );

    Ok(stats)
}

/// Stream lines from `reader` into `output`.
///
/// Lines are read as raw bytes so stray non-UTF-8 bytes never abort a file;
/// data lines are decoded lossily before parsing. Only genuine I/O failures
/// surface, as [`ConvertError::Io`].
pub fn convert_lines<R: BufRead, W: Write>(
    mut reader: R,
    output: &mut CsvOutput<W>,
    parser: &RowParser,
) -> Result<FileStats> {
    let mut stats = FileStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        stats.lines_read += 1;

        let bytes = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
        if !bytes.starts_with(DATA_ROW_PREFIX.as_bytes()) {
            continue;
        }
        stats.data_lines += 1;

        let line = String::from_utf8_lossy(bytes);
        match parser.parse(&line) {
            Ok(ParseOutcome::Record(record)) => {
                output.write_record(&record)?;
                stats.rows_written += 1;
            }
            Ok(ParseOutcome::TooOld) => {
                stats.records_filtered += 1;
            }
            Err(e) => {
                warn!("Skipping line due to error: {}", e);
                stats.lines_skipped += 1;
            }
        }
    }

    Ok(stats)
}
