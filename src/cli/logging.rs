//! Stdout logging for CLI commands

/// Verbosity of CLI output
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with per-artifact details
    Verbose,
}

impl LogLevel {
    /// Select the level from the global --verbose/--quiet flags
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }
}

/// Log a message if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        println!("{msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_wins_over_verbose() {
        assert!(LogLevel::from_flags(true, true) == LogLevel::Quiet);
        assert!(LogLevel::from_flags(true, false) == LogLevel::Verbose);
        assert!(LogLevel::from_flags(false, false) == LogLevel::Normal);
    }
}
