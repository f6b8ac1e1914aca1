//! Core data structures for station log conversion.
//!
//! Defines the parsed record, the outcome of parsing a single line,
//! and the per-file and per-run processing statistics.

use crate::constants::REQUIRED_MEASUREMENTS;
use std::collections::HashMap;
use std::path::PathBuf;

/// One parsed data line from a station log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Station identifier with leading zeros stripped
    pub station_id: String,
    /// `YYYY-MM-DDTHH:MM:SS`
    pub timestamp: String,
    /// Measurement column name -> raw value as it appeared in the log
    pub values: HashMap<&'static str, String>,
}

impl Record {
    /// Raw value for a measurement column, if the line carried one
    pub fn value(&self, measurement: &str) -> Option<&str> {
        self.values.get(measurement).map(String::as_str)
    }

    /// Project the record onto the output column order.
    ///
    /// Measurements missing from the record become empty fields.
    pub fn to_row(&self) -> Vec<&str> {
        let mut row = Vec::with_capacity(2 + REQUIRED_MEASUREMENTS.len());
        row.push(self.station_id.as_str());
        row.push(self.timestamp.as_str());
        row.extend(
            REQUIRED_MEASUREMENTS
                .iter()
                .map(|measurement| self.value(measurement).unwrap_or("")),
        );
        row
    }
}

/// Result of parsing a data line that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Record(Record),
    /// The record predates the recency cutoff and should be dropped quietly
    TooOld,
}

/// Counters for a single input file
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileStats {
    pub lines_read: usize,
    pub data_lines: usize,
    pub rows_written: usize,
    pub lines_skipped: usize,
    pub records_filtered: usize,
}

/// Processing statistics for a whole run
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub files_processed: usize,
    pub files_failed: usize,
    pub total_rows: usize,
    pub lines_skipped: usize,
    pub records_filtered: usize,
    pub output_path: PathBuf,
    pub processing_time_ms: u128,
}

impl ProcessingStats {
    /// Fold the counters of one successfully processed file into the run totals.
    ///
    /// `total_rows` is taken from the output sink instead, so rows written by
    /// a file that later failed are still counted.
    pub fn record_file(&mut self, file: &FileStats) {
        self.files_processed += 1;
        self.lines_skipped += file.lines_skipped;
        self.records_filtered += file.records_filtered;
    }
}
