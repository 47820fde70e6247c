//! Comparar CLI
//!
//! Single-command entry point for the comparar library.
//!
//! # Usage
//!
//! ```bash
//! # Run the reference study with embedded defaults
//! comparar run
//!
//! # Run with a YAML config and overrides
//! comparar run study.yaml --seed 7 --output-dir ./artifacts
//!
//! # Validate a config
//! comparar validate study.yaml
//!
//! # Show the effective config
//! comparar info --format json
//! ```

use clap::Parser;
use comparar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
