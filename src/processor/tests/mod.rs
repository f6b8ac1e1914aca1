//! Integration tests for the conversion driver
//!
//! Build small station log trees on disk and run them through [`Converter`](super::Converter).

pub mod basic_processing;

use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::Path;

/// Fixed cutoff used by the tests so results do not depend on the clock
pub fn test_cutoff() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Write a log file, creating parent directories
pub fn write_log(path: &Path, lines: &[&str]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content).unwrap();
}

/// Read the output CSV back as lines
pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
