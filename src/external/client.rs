use std::time::Duration;

use crate::config::HttpSettings;
use crate::error::{AppError, AppResult};

/// User-Agent sent on every request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client used for a single run
///
/// The client is created once per invocation and dropped with it; nothing is
/// shared across runs.
///
/// # Features
/// - **Timeouts**: bounded request and connect timeouts from `[http]`
/// - **Compression**: gzip responses are decoded transparently
/// - **Security**: Rustls for TLS (no OpenSSL dependency)
///
/// # Example
/// ```ignore
/// let client = build_http_client(&settings.http)?;
/// let body = client.get(url).send().await?.text().await?;
/// ```
pub fn build_http_client(settings: &HttpSettings) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        // Timeouts
        .timeout(Duration::from_secs(settings.timeout_seconds))
        .connect_timeout(Duration::from_secs(settings.connect_timeout_seconds))
        .gzip(true)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| AppError::Internal {
            source: anyhow::Error::new(e).context("Failed to build HTTP client"),
        })
}
