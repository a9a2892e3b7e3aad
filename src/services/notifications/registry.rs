//! Notifier selection by name.

use super::null_notifier::NullNotifier;
use super::provider::NotificationProvider;
use super::slack_notifier::SlackNotifier;
use crate::config::NotifierSettings;
use crate::error::{AppError, AppResult};
use crate::external::HttpTransport;
use std::str::FromStr;
use std::sync::Arc;

/// Notifiers selectable with `--notifier`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierKind {
    /// Log only, nothing is sent
    None,
    /// Slack `chat.postMessage`
    Slack,
}

/// Accepted names, matched exactly
const KINDS: &[(&str, NotifierKind)] = &[("none", NotifierKind::None), ("slack", NotifierKind::Slack)];

impl NotifierKind {
    /// Comma separated list of accepted names, for error messages
    pub fn supported() -> String {
        KINDS
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotifierKind::None => "none",
            NotifierKind::Slack => "slack",
        }
    }

    /// Create the provider for this kind
    ///
    /// No credential is checked here, a misconfigured Slack notifier only
    /// fails when it is asked to send.
    pub fn build(
        self,
        settings: &NotifierSettings,
        transport: Arc<dyn HttpTransport>,
    ) -> Arc<dyn NotificationProvider> {
        match self {
            NotifierKind::None => Arc::new(NullNotifier),
            NotifierKind::Slack => Arc::new(SlackNotifier::new(settings.slack.clone(), transport)),
        }
    }
}

impl FromStr for NotifierKind {
    type Err = AppError;

    fn from_str(name: &str) -> AppResult<Self> {
        KINDS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| AppError::InvalidNotifier {
                name: name.to_string(),
                supported: Self::supported(),
            })
    }
}

impl std::fmt::Display for NotifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
