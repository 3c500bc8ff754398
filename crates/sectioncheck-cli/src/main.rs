//! sectioncheck CLI - Course-section roster validation
//!
//! This binary loads a roster dataset, validates every record's sectionId
//! against the expected range, and prints a summary report.

use clap::Parser;
use std::process::ExitCode;

use sectioncheck_cli::commands;
use sectioncheck_cli::input::FALLBACK_DATASET;

/// sectioncheck - Course-Section Roster Validation
#[derive(Parser)]
#[command(name = "sectioncheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the roster dataset (a JSON array of section records)
    #[arg(default_value = FALLBACK_DATASET)]
    dataset: String,

    /// Output machine-readable JSON diagnostics instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = commands::check::run(&cli.dataset, cli.json);

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
