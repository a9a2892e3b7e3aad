//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::build;

/// Check whether a vehicle has been taken to the pound
#[derive(Parser, Debug)]
#[command(name = "pound-check")]
#[command(about = "Check whether a vehicle has been taken to the pound")]
#[command(long_about = "
pound-check looks a vehicle up on the pound website once and sends an alert
when it has been impounded. It is meant to be run periodically by a scheduler
such as cron.

EXAMPLES:
    # Check the vehicle, log the result only
    pound-check check

    # Check the vehicle and alert on Slack when impounded
    pound-check --notifier slack check

    # Verify Slack credentials with a test alert
    pound-check -n slack test

    # Use a custom configuration file
    pound-check --config /etc/pound-check.toml check

Required settings can come from the configuration file or from the
PARIS_POUND_URL, VEHICLE_PLATE_NUMBER and NO_ALERT_STRING variables;
Slack needs SLACK_TOKEN and SLACK_CHANNEL.
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    ///
    /// TOML file with [pound], [http], [notifier] and [logger] sections.
    /// The file must exist and be readable.
    ///
    /// Example: --config /etc/pound-check.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Notifier used to deliver alerts
    ///
    /// Available values: none, slack. Defaults to [notifier] default
    /// from the configuration, itself "none" unless set. May be given
    /// before or after the subcommand.
    #[arg(short, long, global = true, value_name = "NAME", env = "POUNDCHECK_NOTIFIER")]
    pub notifier: Option<String>,

    /// Enable verbose logging
    ///
    /// Increases log output to debug level.
    /// Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only.
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level override
    ///
    /// Takes precedence over both the configuration and --verbose/--quiet.
    ///
    /// Available levels: error, warn, info, debug, trace
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// HTTP request timeout in seconds (1-120)
    #[arg(long, value_name = "SECONDS", value_parser = super::validation::validate_timeout)]
    pub timeout: Option<u64>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Check the vehicle and alert when it is impounded
    ///
    /// Looks the vehicle up once. Exits 0 whether or not it was found, and
    /// also when the website is in maintenance.
    #[command(alias = "c")]
    Check,
    /// Send a test alert through the selected notifier
    ///
    /// The pound website is not contacted.
    #[command(alias = "t")]
    Test,
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Trace => "trace".to_string(),
        }
    }
}
