//! Error handling for station log conversion.
//!
//! Errors fall into three tiers: fatal setup errors that abort the run,
//! per-file errors that are logged before moving on to the next file, and
//! per-line [`RowError`]s that only cause a single line to be skipped.

use std::path::PathBuf;
use thiserror::Error;

/// A single data line could not be turned into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("invalid row: {line}")]
    InvalidRow { line: String },

    #[error("invalid timestamp: {timestamp}")]
    InvalidTimestamp { timestamp: String },
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Cannot access input directory {path}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot create output file {path}: {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ConvertError {
    /// Whether this error should stop the whole run rather than just the current file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ConvertError::DirectoryAccess { .. }
                | ConvertError::OutputCreate { .. }
                | ConvertError::Configuration { .. }
                | ConvertError::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
