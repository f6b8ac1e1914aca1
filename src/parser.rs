//! Row parsing for station log data lines.
//!
//! A data line looks like
//!
//! ```text
//! S,0012,9,5,0,15,6,2023,1,2,21.5,2,2,64,...
//! ```
//!
//! The first eight fields are fixed (tag, station, hour, minute, second,
//! day, month, year). They are followed by repeating
//! `(measurement ID, processing ID, value)` triples which are resolved
//! against the static measurement table.

use crate::config::FilterMode;
use crate::constants::{
    MIN_ROW_FIELDS, MISSING_VALUE_MARKER, TIMESTAMP_FORMAT, fields, measurement_name,
};
use crate::error::RowError;
use crate::models::{ParseOutcome, Record};
use chrono::NaiveDateTime;
use std::collections::HashMap;

/// Pad a single-character number with a leading zero.
///
/// Anything that is not exactly one character long is returned unchanged.
pub fn zero_pad(num: &str) -> String {
    if num.len() == 1 {
        format!("0{}", num)
    } else {
        num.to_string()
    }
}

/// Parser for data lines, carrying the screening mode of the run
#[derive(Debug, Clone, Copy)]
pub struct RowParser {
    filter: FilterMode,
}

impl RowParser {
    pub fn new(filter: FilterMode) -> Self {
        Self { filter }
    }

    /// Parse one data line into a record.
    ///
    /// Returns [`ParseOutcome::TooOld`] when recency filtering is active and the
    /// record's timestamp is strictly before the cutoff.
    pub fn parse(&self, line: &str) -> Result<ParseOutcome, RowError> {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < MIN_ROW_FIELDS {
            return Err(RowError::InvalidRow {
                line: line.to_string(),
            });
        }

        let station_id = parts[fields::STATION].trim_start_matches('0').to_string();
        let timestamp = assemble_timestamp(&parts);

        if let FilterMode::Recent { cutoff } = self.filter {
            let record_time = parse_timestamp(&timestamp)?;
            if record_time < cutoff {
                return Ok(ParseOutcome::TooOld);
            }
        }

        let values = self.collect_measurements(&parts);

        Ok(ParseOutcome::Record(Record {
            station_id,
            timestamp,
            values,
        }))
    }

    fn collect_measurements(&self, parts: &[&str]) -> HashMap<&'static str, String> {
        let normalize_missing = matches!(self.filter, FilterMode::Recent { .. });
        let mut values = HashMap::new();

        let triples = parts
            .get(fields::FIRST_MEASUREMENT..)
            .unwrap_or_default()
            .chunks_exact(fields::MEASUREMENT_STRIDE);

        for triple in triples {
            let (measurement_id, processing_id, value) = (triple[0], triple[1], triple[2]);
            let Some(name) = measurement_name(measurement_id, processing_id) else {
                continue;
            };

            let value = if normalize_missing && value == MISSING_VALUE_MARKER {
                String::new()
            } else {
                value.to_string()
            };
            values.insert(name, value);
        }

        values
    }
}

fn assemble_timestamp(parts: &[&str]) -> String {
    format!(
        "{}-{}-{}T{}:{}:{}",
        parts[fields::YEAR],
        zero_pad(parts[fields::MONTH]),
        zero_pad(parts[fields::DAY]),
        zero_pad(parts[fields::HOUR]),
        zero_pad(parts[fields::MINUTE]),
        zero_pad(parts[fields::SECOND]),
    )
}

/// Parse an assembled timestamp under the exact `YYYY-MM-DDTHH:MM:SS` layout.
///
/// chrono tolerates padding whitespace and short numbers, so the layout is
/// checked byte by byte first.
fn parse_timestamp(timestamp: &str) -> Result<NaiveDateTime, RowError> {
    let invalid = || RowError::InvalidTimestamp {
        timestamp: timestamp.to_string(),
    };

    if !has_timestamp_layout(timestamp) {
        return Err(invalid());
    }

    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).map_err(|_| invalid())
}

fn has_timestamp_layout(timestamp: &str) -> bool {
    let bytes = timestamp.as_bytes();
    bytes.len() == 19
        && bytes.iter().enumerate().all(|(i, &b)| match i {
            4 | 7 => b == b'-',
            10 => b == b'T',
            13 | 16 => b == b':',
            _ => b.is_ascii_digit(),
        })
}
