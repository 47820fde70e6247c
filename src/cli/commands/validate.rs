//! Validate command implementation

use crate::cli::args::ValidateArgs;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::StudyConfig;

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    let config = StudyConfig::from_yaml_file(&args.config).map_err(|e| e.to_string())?;

    log(
        level,
        LogLevel::Normal,
        &format!("Configuration OK: {}", args.config.display()),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  {} observations across {} ranking partitions",
            config.observation_count(),
            config.partition_count()
        ),
    );

    Ok(())
}
