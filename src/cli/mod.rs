//! CLI module for pound-check
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration merging (CLI args + config files + environment)
//! - Command execution

pub mod config_merger;
pub mod executor;
pub mod parser;
pub mod validation;

// Re-export public types for convenience
pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands, LogLevel};

use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::logger::init_logger;
use crate::services::notifications::NotifierKind;

/// Load and merge configuration from CLI arguments
///
/// 1. Load base configuration from the file and environment
/// 2. Resolve the notifier name, so an unknown one is reported first
/// 3. Merge CLI argument overrides
/// 4. Validate the final configuration
///
/// # Errors
/// - `AppError::InvalidNotifier` for a notifier name outside the supported set
/// - `AppError::Configuration` if loading, merging or validation fails
pub fn load_and_merge_config(cli: &Cli) -> AppResult<Settings> {
    let merger = ConfigurationMerger::from_config_path(cli.config.as_deref())?;
    ConfigurationMerger::notifier_name(cli, merger.config()).parse::<NotifierKind>()?;
    Ok(merger.merge_cli_args(cli)?)
}

/// Initialize logger from settings
///
/// # Errors
/// Returns error if the logger settings are invalid or a subscriber is already set
pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<()> {
    let logger_config = settings.logger.clone().into_logger_config()?;
    init_logger(logger_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::tests::{EnvGuard, TEST_MUTEX};
    use crate::error::AppError;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_unknown_notifier_reported_before_missing_settings() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::clean();
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[pound]\nurl = \"\"").unwrap();
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["pound-check", "--config", path, "-n", "unknown", "check"])
            .unwrap();
        let err = load_and_merge_config(&cli).unwrap_err();
        assert!(matches!(err, AppError::InvalidNotifier { ref name, .. } if name == "unknown"));
    }

    #[test]
    fn test_known_notifier_then_missing_settings() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::clean();
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[pound]\nurl = \"\"").unwrap();
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["pound-check", "--config", path, "-n", "none", "check"])
            .unwrap();
        let err = load_and_merge_config(&cli).unwrap_err();
        assert!(matches!(err, AppError::Configuration { .. }));
    }
}
