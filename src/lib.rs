//! nesa2csv Library
//!
//! Converts fixed-field weather-station log files into a single normalized
//! CSV file.
//!
//! This library provides tools for:
//! - Parsing `S,` data lines into station/timestamp/measurement records
//! - Resolving measurement and processing IDs through a static lookup table
//! - Optionally dropping records older than a recency cutoff
//! - Streaming every log file under a directory into one CSV output

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod processor;

// Re-export commonly used types
pub use config::{ConverterConfig, FilterMode};
pub use error::{ConvertError, Result, RowError};
pub use models::{ParseOutcome, ProcessingStats, Record};
pub use parser::{RowParser, zero_pad};
pub use processor::Converter;
