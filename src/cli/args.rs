//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! comparar run
//! comparar run study.yaml --seed 7 --output-dir ./artifacts --format csv
//! comparar validate study.yaml
//! comparar info --format json
//! ```

use crate::export::SheetFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Comparar: simulated comparison studies for dimension-reduction pipelines
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "comparar")]
#[command(author = "PAIML")]
#[command(version)]
#[command(
    about = "Generate, rank, and render a simulated algorithm comparison study"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the full study and write all artifacts
    Run(RunArgs),

    /// Validate a study configuration without running
    Validate(ValidateArgs),

    /// Display the effective study configuration
    Info(InfoArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Path to YAML study configuration (embedded defaults when omitted)
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory the artifacts are written into
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Artifact file name prefix
    #[arg(short, long, default_value = "DimRed")]
    pub prefix: String,

    /// Sheet export format (xlsx, csv)
    #[arg(short, long, default_value = "xlsx")]
    pub format: SheetFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML study configuration
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML study configuration (embedded defaults when omitted)
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for the info command
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(format!(
                "Unknown output format: {s}. Valid formats: text, json, yaml"
            )),
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
