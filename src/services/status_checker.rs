//! Impound status lookup.
//!
//! Builds the lookup URL the pound site expects from its search form, fetches
//! the result page and classifies it by substring matching.

use std::sync::Arc;

use reqwest::Url;

use crate::config::CheckConfig;
use crate::error::AppResult;
use crate::external::HttpTransport;

/// Substring the lookup site shows while it is down for maintenance
pub const MAINTENANCE_MARKER: &str = "maintenance";

/// Query parameter carrying the plate number
const IDENTIFIER_PARAM: &str = "immatriculation";

/// Empty parameter emulating the search button of the site's form
const SEARCH_ACTION_PARAM: &str = "action_rechercher";

/// Outcome of one lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckResult {
    /// Neither marker found: the vehicle is listed at the pound
    Impounded,
    /// The no-alert marker was found
    NotImpounded,
    /// The site is in maintenance mode, nothing can be concluded
    Inconclusive,
}

impl std::fmt::Display for CheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            CheckResult::Impounded => "impounded",
            CheckResult::NotImpounded => "not impounded",
            CheckResult::Inconclusive => "inconclusive (site in maintenance)",
        };
        f.write_str(text)
    }
}

/// Builds `{base}?immatriculation={plate}&action_rechercher=`
///
/// The plate is form-urlencoded. Parameters already present on the base URL
/// are kept in front.
pub fn build_lookup_url(config: &CheckConfig) -> Url {
    let mut url = config.lookup_base_url().clone();
    url.query_pairs_mut()
        .append_pair(IDENTIFIER_PARAM, config.vehicle_identifier())
        .append_pair(SEARCH_ACTION_PARAM, "");
    url
}

/// Classifies a result page
///
/// Maintenance wins over everything else: a maintenance page may contain the
/// no-alert marker by accident.
pub fn classify(body: &str, no_alert_marker: &str) -> CheckResult {
    if body.contains(MAINTENANCE_MARKER) {
        CheckResult::Inconclusive
    } else if body.contains(no_alert_marker) {
        CheckResult::NotImpounded
    } else {
        CheckResult::Impounded
    }
}

/// Performs the lookup for one vehicle
pub struct StatusChecker {
    transport: Arc<dyn HttpTransport>,
}

impl StatusChecker {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Fetches the lookup page once and classifies it
    ///
    /// # Errors
    /// - `AppError::Network` when the request fails or the site answers non-2xx
    /// - `AppError::BodyRead` when the page cannot be read completely
    pub async fn check(&self, config: &CheckConfig) -> AppResult<CheckResult> {
        let url = build_lookup_url(config);
        tracing::info!(url = %url, "Visiting pound lookup page");

        let body = self.transport.get_text(&url).await?;
        let result = classify(&body, config.no_alert_marker());

        match result {
            CheckResult::Inconclusive => {
                tracing::warn!("Pound website in maintenance mode, checking later")
            }
            CheckResult::NotImpounded => tracing::info!(
                vehicle = config.vehicle_identifier(),
                "Vehicle not impounded"
            ),
            CheckResult::Impounded => tracing::warn!(
                vehicle = config.vehicle_identifier(),
                "Vehicle found at the pound"
            ),
        }

        Ok(result)
    }
}
