//! Run command implementation

use crate::cli::args::RunArgs;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::StudyConfig;
use crate::pipeline::{run_study, RunOptions};

pub fn run_run(args: RunArgs, level: LogLevel) -> Result<(), String> {
    let mut config = match &args.config {
        Some(path) => StudyConfig::from_yaml_file(path).map_err(|e| e.to_string())?,
        None => StudyConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Running comparison study: {} algorithms x {} analytes x {} splits x {} metrics (seed {})",
            config.algorithms.len(),
            config.analytes.len(),
            config.dataset_types.len(),
            config.metrics.len(),
            config.seed
        ),
    );

    let options = RunOptions {
        output_dir: args.output_dir,
        prefix: args.prefix,
        format: args.format,
    };
    let artifacts = run_study(&config, &options).map_err(|e| e.to_string())?;

    log(
        level,
        LogLevel::Normal,
        &format!("Wrote {} artifacts to {}", artifacts.paths().len(), options.output_dir.display()),
    );
    for path in artifacts.paths() {
        log(level, LogLevel::Verbose, &format!("  {}", path.display()));
    }

    Ok(())
}
