use clap::Parser;

use pound_check::cli::{Cli, execute_command, init_logger_from_settings, load_and_merge_config};
use pound_check::config::{DotenvStatus, load_dotenv};
use pound_check::error::{AppError, EXIT_OK, EXIT_USAGE};

#[tokio::main]
async fn main() {
    // `.env` must be loaded before clap reads `POUNDCHECK_NOTIFIER`
    let dotenv = match load_dotenv() {
        Ok(status) => status,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(EXIT_USAGE);
        }
    };

    let cli = Cli::parse();

    let settings = match load_and_merge_config(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            match std::error::Error::source(&e) {
                Some(source) => eprintln!("{}: {}", e, source),
                None => eprintln!("{}", e),
            }
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = init_logger_from_settings(&settings) {
        eprintln!("Logger initialization error: {:#}", e);
        std::process::exit(EXIT_USAGE);
    }

    tracing::debug!(version = pound_check::pkg_version(), "Starting pound-check");
    match dotenv {
        DotenvStatus::Loaded(path) => {
            tracing::debug!(path = %path.display(), "Loaded environment file")
        }
        DotenvStatus::NotFound => tracing::debug!("No .env file found"),
    }

    let code = match execute_command(&cli, settings).await {
        Ok(_) => EXIT_OK,
        Err(e) => {
            report(&e);
            e.exit_code()
        }
    };

    std::process::exit(code);
}

fn report(error: &AppError) {
    match std::error::Error::source(error) {
        Some(source) => tracing::error!(error = %error, cause = %source, "Run failed"),
        None => tracing::error!(error = %error, "Run failed"),
    }
}
