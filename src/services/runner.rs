//! Single-run orchestration.
//!
//! One run is: resolve the notifier, fix the check configuration, look the
//! vehicle up once and alert when it was found. Test runs skip the lookup and
//! send a flagged alert straight away.

use std::sync::Arc;

use crate::config::{CheckConfig, Settings};
use crate::error::AppResult;
use crate::external::HttpTransport;
use crate::services::notifications::{
    NotificationContext, NotificationProvider, NotifierKind, NotifyOutcome,
};
use crate::services::status_checker::{CheckResult, StatusChecker, build_lookup_url};

/// What a run does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Look the vehicle up and alert when it is impounded
    Check,
    /// Send a test alert without looking anything up
    Test,
}

/// How a completed run ended
///
/// Every variant is a success for the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    NotImpounded,
    Inconclusive,
    Impounded { delivery: NotifyOutcome },
    TestSent { delivery: NotifyOutcome },
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunOutcome::NotImpounded => f.write_str("not impounded"),
            RunOutcome::Inconclusive => f.write_str("inconclusive: pound website in maintenance"),
            RunOutcome::Impounded { delivery } => write!(f, "IMPOUNDED, alert {}", delivery_text(delivery)),
            RunOutcome::TestSent { delivery } => write!(f, "test alert {}", delivery_text(delivery)),
        }
    }
}

fn delivery_text(delivery: &NotifyOutcome) -> &'static str {
    match delivery {
        NotifyOutcome::Delivered { .. } => "delivered",
        NotifyOutcome::Skipped => "not sent (no notifier)",
    }
}

/// Runs checks against the network through a shared transport
pub struct Runner {
    transport: Arc<dyn HttpTransport>,
}

impl Runner {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Execute one run
    ///
    /// The notifier name is resolved before the check configuration is
    /// fixed. Both failures happen before any HTTP call.
    ///
    /// # Errors
    /// - `AppError::InvalidNotifier` for a name outside the supported set
    /// - `AppError::Configuration` when a pound setting is missing or invalid
    /// - network, body and notify errors from the run itself
    pub async fn run(
        &self,
        mode: RunMode,
        settings: &Settings,
        notifier_name: &str,
    ) -> AppResult<RunOutcome> {
        let kind: NotifierKind = notifier_name.parse()?;
        let config = settings.check_config()?;
        let notifier = kind.build(&settings.notifier, self.transport.clone());

        tracing::debug!(mode = ?mode, notifier = %kind, "Starting run");
        self.run_with(mode, &config, notifier.as_ref()).await
    }

    /// Execute one run with an already resolved configuration and notifier
    pub async fn run_with(
        &self,
        mode: RunMode,
        config: &CheckConfig,
        notifier: &dyn NotificationProvider,
    ) -> AppResult<RunOutcome> {
        match mode {
            RunMode::Check => {
                let checker = StatusChecker::new(self.transport.clone());
                match checker.check(config).await? {
                    CheckResult::NotImpounded => Ok(RunOutcome::NotImpounded),
                    CheckResult::Inconclusive => Ok(RunOutcome::Inconclusive),
                    CheckResult::Impounded => {
                        let context = NotificationContext::alert(
                            build_lookup_url(config).to_string(),
                            config.vehicle_identifier(),
                        );
                        let delivery = notifier.notify(&context).await?;
                        Ok(RunOutcome::Impounded { delivery })
                    }
                }
            }
            RunMode::Test => {
                tracing::info!(notifier = notifier.name(), "Sending test notification");
                let context = NotificationContext::test(
                    build_lookup_url(config).to_string(),
                    config.vehicle_identifier(),
                );
                let delivery = notifier.notify(&context).await?;
                Ok(RunOutcome::TestSent { delivery })
            }
        }
    }
}
