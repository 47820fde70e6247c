//! Info command implementation

use crate::cli::args::{InfoArgs, OutputFormat};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::StudyConfig;

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let config = match &args.config {
        Some(path) => StudyConfig::from_yaml_file(path).map_err(|e| e.to_string())?,
        None => StudyConfig::default(),
    };

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)
                .map_err(|e| format!("JSON serialization failed: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| format!("YAML serialization failed: {e}"))?;
            println!("{yaml}");
        }
        OutputFormat::Text => {
            log(level, LogLevel::Normal, &format!("Seed: {}", config.seed));
            log(
                level,
                LogLevel::Normal,
                &format!("Algorithms ({}): {}", config.algorithms.len(), config.algorithms.join(", ")),
            );
            log(
                level,
                LogLevel::Normal,
                &format!("Analytes: {}", config.analytes.join(", ")),
            );
            log(
                level,
                LogLevel::Normal,
                &format!("Dataset types: {}", config.dataset_types.join(", ")),
            );
            log(
                level,
                LogLevel::Normal,
                &format!("Metrics: {}", config.metrics.join(", ")),
            );
            log(
                level,
                LogLevel::Normal,
                &format!("Observations: {}", config.observation_count()),
            );
        }
    }

    Ok(())
}
