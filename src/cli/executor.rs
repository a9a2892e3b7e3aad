//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use std::sync::Arc;

use super::config_merger::ConfigurationMerger;
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::external::{ReqwestTransport, build_http_client};
use crate::services::{RunMode, RunOutcome, Runner};

impl From<Commands> for RunMode {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Check => RunMode::Check,
            Commands::Test => RunMode::Test,
        }
    }
}

/// Execute a CLI command with the given settings
///
/// Builds the HTTP client for this run, runs the command and prints a
/// one-line summary on stdout.
///
/// # Errors
/// Returns the run's error unchanged, the caller maps it to an exit code
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<RunOutcome> {
    let notifier_name = ConfigurationMerger::notifier_name(cli, &settings).to_string();
    let client = build_http_client(&settings.http)?;
    let runner = Runner::new(Arc::new(ReqwestTransport::new(client)));

    let outcome = runner
        .run(cli.command.into(), &settings, &notifier_name)
        .await?;

    tracing::info!(outcome = ?outcome, "Run completed");
    println!("{}: {}", settings.pound.vehicle_plate.trim(), outcome);

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_to_mode() {
        assert_eq!(RunMode::from(Commands::Check), RunMode::Check);
        assert_eq!(RunMode::from(Commands::Test), RunMode::Test);
    }

    #[tokio::test]
    async fn test_unknown_notifier_is_usage_error() {
        use clap::Parser;

        let mut settings = Settings::default();
        settings.pound.url = "https://pound.invalid/fourriere".to_string();
        settings.pound.vehicle_plate = "AB-123-CD".to_string();
        settings.pound.no_alert_marker = "RAS".to_string();

        let cli = Cli::try_parse_from(["pound-check", "-n", "pigeon", "check"]).unwrap();
        let err = execute_command(&cli, settings).await.unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
    }
}
