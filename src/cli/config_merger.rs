//! Configuration merger for CLI arguments and config files
//!
//! This module handles merging CLI argument overrides with file-based configuration,
//! implementing the configuration precedence logic.

use super::parser::Cli;
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};
use std::path::Path;

/// Configuration merger that handles CLI argument integration with file-based configuration
///
/// CLI arguments override configuration file and environment values.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Create a configuration merger by loading configuration from the given file or the default sources
    ///
    /// # Errors
    /// Returns ConfigError if a required file is missing or cannot be parsed
    pub fn from_config_path(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let loader = ConfigLoader::new(config_path);
        Ok(Self::new(loader.load()?))
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// Overrides are applied in this order, later ones winning:
    /// 1. `--verbose` / `--quiet`
    /// 2. `--log-level`
    /// 3. `--timeout`
    ///
    /// The merged settings are validated before being returned.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(level) = cli.log_level {
            config.logger.level = level.into();
        }

        if let Some(timeout) = cli.timeout {
            config.http.timeout_seconds = timeout;
            // Keep the connect timeout within the overall one
            config.http.connect_timeout_seconds = config.http.connect_timeout_seconds.min(timeout);
        }

        config.validate()?;

        Ok(config)
    }

    /// Name of the notifier to use: `--notifier` / `POUNDCHECK_NOTIFIER`, else `[notifier] default`
    pub fn notifier_name<'a>(cli: &'a Cli, settings: &'a Settings) -> &'a str {
        cli.notifier
            .as_deref()
            .unwrap_or(settings.notifier.default.as_str())
    }

    /// Loaded configuration before CLI overrides
    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn create_valid_base_config() -> Settings {
        let mut config = Settings::default();
        config.pound.url = "https://pound.example.org/fourriere".to_string();
        config.pound.vehicle_plate = "AB-123-CD".to_string();
        config.pound.no_alert_marker = "RAS".to_string();
        config
    }

    fn merge(args: &[&str]) -> Result<Settings, ConfigError> {
        let cli = Cli::try_parse_from(args).unwrap();
        ConfigurationMerger::new(create_valid_base_config()).merge_cli_args(&cli)
    }

    #[test]
    fn test_configuration_merger_new() {
        let base_config = create_valid_base_config();
        let merger = ConfigurationMerger::new(base_config.clone());
        assert_eq!(merger.config(), &base_config);
    }

    #[test]
    fn test_merge_verbose_flag() {
        let merged = merge(&["pound-check", "--verbose", "check"]).unwrap();
        assert_eq!(merged.logger.level, "debug");
    }

    #[test]
    fn test_merge_quiet_flag() {
        let merged = merge(&["pound-check", "--quiet", "check"]).unwrap();
        assert_eq!(merged.logger.level, "error");
    }

    #[test]
    fn test_log_level_overrides_verbose() {
        let merged = merge(&["pound-check", "--verbose", "--log-level", "warn", "check"]).unwrap();
        assert_eq!(merged.logger.level, "warn");
    }

    #[test]
    fn test_timeout_override_clamps_connect_timeout() {
        let merged = merge(&["pound-check", "--timeout", "5", "check"]).unwrap();
        assert_eq!(merged.http.timeout_seconds, 5);
        assert_eq!(merged.http.connect_timeout_seconds, 5);
    }

    #[test]
    fn test_merge_rejects_missing_pound_settings() {
        let cli = Cli::try_parse_from(["pound-check", "check"]).unwrap();
        let err = ConfigurationMerger::new(Settings::default())
            .merge_cli_args(&cli)
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { ref field, .. } if field == "pound.url"));
    }

    #[test]
    fn test_notifier_name_precedence() {
        let mut settings = create_valid_base_config();
        settings.notifier.default = "slack".to_string();

        // No flag, independent of POUNDCHECK_NOTIFIER in the test environment
        let mut cli = Cli::try_parse_from(["pound-check", "check"]).unwrap();
        cli.notifier = None;
        assert_eq!(ConfigurationMerger::notifier_name(&cli, &settings), "slack");

        let cli = Cli::try_parse_from(["pound-check", "-n", "none", "check"]).unwrap();
        assert_eq!(ConfigurationMerger::notifier_name(&cli, &settings), "none");
    }
}
