//! Configuration for a conversion run.
//!
//! The only tunable behaviour is whether records are filtered by recency.
//! Measurement mappings and output columns are fixed in [`crate::constants`].

use crate::constants::DEFAULT_DAYS;
use crate::error::{ConvertError, Result};
use chrono::{NaiveDateTime, TimeDelta, Utc};
use tracing::debug;

/// How parsed records are screened before being written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Keep every record. Timestamps are assembled but not validated and
    /// missing-value markers are passed through unchanged.
    All,
    /// Drop records strictly older than `cutoff`. Timestamps must parse and
    /// missing-value markers become empty fields.
    Recent { cutoff: NaiveDateTime },
}

impl FilterMode {
    pub fn cutoff(&self) -> Option<NaiveDateTime> {
        match self {
            FilterMode::All => None,
            FilterMode::Recent { cutoff } => Some(*cutoff),
        }
    }
}

/// Conversion configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Record screening mode
    pub filter: FilterMode,
}

impl Default for ConverterConfig {
    /// Recency filtering over the last [`DEFAULT_DAYS`] days, measured from now
    fn default() -> Self {
        let cutoff = Utc::now().naive_utc() - TimeDelta::days(DEFAULT_DAYS);
        Self {
            filter: FilterMode::Recent { cutoff },
        }
    }
}

impl ConverterConfig {
    /// Filter to records no older than `days` before `now` (UTC).
    ///
    /// Negative values put the cutoff in the future.
    pub fn from_days(days: i64, now: NaiveDateTime) -> Result<Self> {
        let cutoff = TimeDelta::try_days(days)
            .and_then(|window| now.checked_sub_signed(window))
            .ok_or_else(|| ConvertError::Configuration {
                message: format!("days value {} is out of range", days),
            })?;

        debug!("Recency cutoff: {} ({} days before {})", cutoff, days, now);

        Ok(Self {
            filter: FilterMode::Recent { cutoff },
        })
    }

    /// Same as [`ConverterConfig::from_days`] measured from the current time
    pub fn from_days_ago(days: i64) -> Result<Self> {
        Self::from_days(days, Utc::now().naive_utc())
    }

    /// Disable recency filtering
    pub fn without_filter(mut self) -> Self {
        self.filter = FilterMode::All;
        self
    }

    /// Filter against an explicit cutoff
    pub fn with_cutoff(mut self, cutoff: NaiveDateTime) -> Self {
        self.filter = FilterMode::Recent { cutoff };
        self
    }
}
