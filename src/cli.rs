//! Command-line interface components.

use crate::config::ConverterConfig;
use crate::constants::DEFAULT_DAYS;
use crate::models::ProcessingStats;
use crate::processor::Converter;
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "nesa2csv")]
#[command(about = "Convert weather-station log files into a single CSV file")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Directory searched recursively for *.txt station logs
    #[arg(value_name = "INPUT_DIRECTORY")]
    pub input_dir: PathBuf,

    /// CSV file to write (overwritten if it exists)
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    /// Only keep records from the last DAYS days
    #[arg(
        value_name = "DAYS",
        default_value_t = DEFAULT_DAYS,
        allow_negative_numbers = true,
        conflicts_with = "all"
    )]
    pub days: i64,

    /// Keep every record regardless of age, without timestamp validation
    #[arg(long)]
    pub all: bool,

    /// Enable verbose logging (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors and skip the summary
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Get log level string based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the conversion configuration these arguments ask for
    pub fn converter_config(&self) -> crate::Result<ConverterConfig> {
        if self.all {
            Ok(ConverterConfig::default().without_filter())
        } else {
            ConverterConfig::from_days_ago(self.days)
        }
    }
}

/// Set up logging to stdout
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nesa2csv={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stdout),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Run a conversion for the parsed arguments
pub fn run(args: &Args) -> Result<ProcessingStats> {
    let config = args.converter_config()?;
    debug!("Command line arguments: {:?}", args);

    let converter = Converter::new(args.input_dir.clone(), args.output_file.clone())
        .context("Input directory is not usable")?
        .with_config(config);

    info!(
        "Converting {} into {}",
        converter.input_path().display(),
        converter.output_path().display()
    );

    let stats = converter.run().context("Conversion failed")?;

    if !args.quiet {
        print_summary(&stats);
    }

    Ok(stats)
}

/// Print a colored summary of a finished run
pub fn print_summary(stats: &ProcessingStats) {
    println!("\n{}", "Processing Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time_ms.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Files processed:".bright_cyan(),
        stats.files_processed.to_string().bright_white()
    );
    if stats.files_failed > 0 {
        println!(
            "  {} {}",
            "Files failed:".bright_red(),
            stats.files_failed.to_string().bright_red().bold()
        );
    }
    println!(
        "  {} {}",
        "Rows written:".bright_cyan(),
        stats.total_rows.to_string().bright_white().bold()
    );
    if stats.lines_skipped > 0 {
        println!(
            "  {} {}",
            "Lines skipped:".bright_yellow(),
            stats.lines_skipped.to_string().bright_yellow()
        );
    }
    if stats.records_filtered > 0 {
        println!(
            "  {} {}",
            "Records filtered:".bright_cyan(),
            stats.records_filtered.to_string().bright_white()
        );
    }
    println!(
        "  {} {}",
        "Output:".bright_cyan(),
        stats.output_path.display()
    );
}
