use clap::Parser;
use nesa2csv::cli::{self, Args};
use std::process;

fn main() {
    // Parse command line arguments; clap exits on usage errors
    let args = Args::parse();

    cli::setup_logging(&args);

    match cli::run(&args) {
        Ok(_stats) => {
            // Success - summary has already been printed
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
