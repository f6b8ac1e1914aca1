//! CSV output sink for converted records
//!
//! Wraps a [`csv::Writer`] and remembers whether the header row has been
//! emitted, so that a run writes it exactly once no matter how many input
//! files contribute rows.

use crate::constants::{REQUIRED_MEASUREMENTS, STATION_COLUMN, TIMESTAMP_COLUMN};
use crate::error::{ConvertError, Result};
use crate::models::Record;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Column names of the output file, in order
pub fn header_row() -> Vec<&'static str> {
    let mut header = Vec::with_capacity(2 + REQUIRED_MEASUREMENTS.len());
    header.push(STATION_COLUMN);
    header.push(TIMESTAMP_COLUMN);
    header.extend_from_slice(REQUIRED_MEASUREMENTS);
    header
}

/// Single shared writer for a conversion run
#[derive(Debug)]
pub struct CsvOutput<W: Write> {
    writer: csv::Writer<W>,
    header_written: bool,
    rows_written: usize,
}

impl CsvOutput<BufWriter<File>> {
    /// Create (or truncate) the output file, creating its parent directory if needed
    pub fn create(path: &Path) -> Result<Self> {
        let create_error = |source| ConvertError::OutputCreate {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(create_error)?;
        }

        let file = File::create(path).map_err(create_error)?;
        debug!("Created output file: {}", path.display());

        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> CsvOutput<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(inner),
            header_written: false,
            rows_written: 0,
        }
    }

    pub fn header_written(&self) -> bool {
        self.header_written
    }

    /// Number of data rows written so far (header excluded)
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Write the header row unless it has already been written
    pub fn write_header_once(&mut self) -> Result<()> {
        if self.header_written {
            return Ok(());
        }

        self.writer.write_record(header_row())?;
        self.header_written = true;
        debug!("Wrote CSV header");
        Ok(())
    }

    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        self.writer.write_record(record.to_row())?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| ConvertError::Io(e.into_error()))
    }
}
