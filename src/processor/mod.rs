//! Conversion driver.
//!
//! Walks the input tree, feeds every station log file through the line
//! converter and collects everything into a single CSV file. Per-file
//! failures are logged and the run moves on; only setup failures abort.

pub mod discovery;
pub mod streaming;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::{discovery::log_files, streaming::process_file, writer::CsvOutput};

use crate::config::ConverterConfig;
use crate::error::Result;
use crate::models::ProcessingStats;
use crate::parser::RowParser;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info};

/// Converter from a directory of station logs to one CSV file
#[derive(Debug)]
pub struct Converter {
    input_path: PathBuf,
    output_path: PathBuf,
    config: ConverterConfig,
}

impl Converter {
    /// Create a new converter. Fails if the input path cannot be accessed.
    pub fn new(input_path: PathBuf, output_path: PathBuf) -> Result<Self> {
        discovery::check_input_root(&input_path)?;

        Ok(Self {
            input_path,
            output_path,
            config: ConverterConfig::default(),
        })
    }

    /// Configure the converter
    pub fn with_config(mut self, config: ConverterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Run the conversion, writing the output file
    pub fn run(&self) -> Result<ProcessingStats> {
        let start_time = Instant::now();
        debug!(
            "Converting {} -> {} ({:?})",
            self.input_path.display(),
            self.output_path.display(),
            self.config.filter
        );

        let mut output = CsvOutput::create(&self.output_path)?;
        let mut stats = self.convert_into(&mut output)?;
        output.flush()?;

        stats.output_path = self.output_path.clone();
        stats.processing_time_ms = start_time.elapsed().as_millis();
        Ok(stats)
    }

    /// Convert every log file under the input path into `output`.
    ///
    /// The header row is written by the first file that opens successfully.
    pub fn convert_into<W: Write>(&self, output: &mut CsvOutput<W>) -> Result<ProcessingStats> {
        let parser = RowParser::new(self.config.filter);
        let mut stats = ProcessingStats::default();

        for path in log_files(&self.input_path) {
            info!("Processing file: {}", path.display());

            match process_file(&path, output, &parser) {
                Ok(file_stats) => stats.record_file(&file_stats),
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    error!("Error processing file {}: {}", path.display(), e);
                    stats.files_failed += 1;
                }
            }
        }

        stats.total_rows = output.rows_written();
        Ok(stats)
    }
}
