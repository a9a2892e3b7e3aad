//! Configuration management module for pound-check
//!
//! This module provides layered configuration loading with support for:
//! - An optional TOML configuration file
//! - A `.env` file for local runs
//! - Legacy flat environment variables (`PARIS_POUND_URL`, `SLACK_TOKEN`, ...)
//! - `POUNDCHECK_<SECTION>__<KEY>` environment variable overrides
//!
//! # Configuration Priority (lowest to highest)
//! 1. Built-in defaults
//! 2. `--config FILE`, `POUNDCHECK_CONFIG_FILE` or `./pound-check.toml`
//! 3. Legacy flat environment variables
//! 4. `POUNDCHECK_*__*` environment variables
//! 5. Command-line flags

pub mod check;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

// Re-export public types
pub use check::CheckConfig;
pub use error::ConfigError;
pub use loader::{ConfigLoader, DotenvStatus, load_dotenv};
pub use settings::{HttpSettings, NotifierSettings, PoundSettings, Settings, SlackSettings};
