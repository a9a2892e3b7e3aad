//! Slack notification provider implementation.
//!
//! Posts the alert with `chat.postMessage`, authenticated with a bot token.
//!
//! Slack API Reference: https://api.slack.com/methods/chat.postMessage

use super::provider::{
    NotificationContext, NotificationMessage, NotificationProvider, NotifyOutcome,
};
use crate::config::SlackSettings;
use crate::error::{AppError, AppResult};
use crate::external::{HttpReply, HttpTransport, JsonPost};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;

/// Relevant part of a `chat.postMessage` answer
///
/// Slack answers HTTP 200 even when it rejects the call, the outcome is in
/// `ok` / `error`.
#[derive(Debug, Deserialize)]
struct SlackApiResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Slack notification provider
///
/// Credentials are read from `[notifier.slack]` and only checked when a
/// message is about to be sent.
///
/// # Example
/// ```ignore
/// let provider = SlackNotifier::new(settings.notifier.slack.clone(), transport);
/// let outcome = provider.notify(&context).await?;
/// ```
pub struct SlackNotifier {
    settings: SlackSettings,
    transport: Arc<dyn HttpTransport>,
}

impl SlackNotifier {
    pub fn new(settings: SlackSettings, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            settings,
            transport,
        }
    }

    fn token(&self) -> AppResult<&str> {
        non_empty(self.settings.token.as_deref()).ok_or_else(|| {
            AppError::configuration(
                "notifier.slack.token",
                "Missing Slack token (SLACK_TOKEN) for notifier slack",
            )
        })
    }

    fn channel(&self) -> AppResult<&str> {
        non_empty(self.settings.channel.as_deref()).ok_or_else(|| {
            AppError::configuration(
                "notifier.slack.channel",
                "Missing Slack channel (SLACK_CHANNEL) for notifier slack",
            )
        })
    }

    /// Renders the alert text for `context`, addressed to the configured channel
    pub fn build_message(&self, context: &NotificationContext) -> AppResult<NotificationMessage> {
        let alert = format!(
            ":warning: Alert, Your vehicle *{}* has just been impounded. Visit {} to get details :warning:",
            context.vehicle_identifier, context.details_url
        );
        let body_text = if context.is_test {
            format!("[TEST] {}", alert)
        } else {
            alert
        };

        Ok(NotificationMessage {
            body_text,
            target: self.channel()?.to_string(),
        })
    }

    /// Maps the API answer to an outcome or a `Notify` error
    fn interpret_reply(&self, reply: HttpReply, duration_ms: u64) -> AppResult<NotifyOutcome> {
        if !reply.is_success() {
            return Err(AppError::Notify {
                provider: self.name().to_string(),
                reason: format!("HTTP {}: {}", reply.status_code, reply.body.trim()),
            });
        }

        let response: SlackApiResponse =
            serde_json::from_str(&reply.body).map_err(|e| AppError::Notify {
                provider: self.name().to_string(),
                reason: format!("unreadable API response: {}", e),
            })?;

        if !response.ok {
            return Err(AppError::Notify {
                provider: self.name().to_string(),
                reason: response
                    .error
                    .unwrap_or_else(|| "unknown_error".to_string()),
            });
        }

        Ok(NotifyOutcome::Delivered {
            status_code: reply.status_code,
            duration_ms,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[async_trait]
impl NotificationProvider for SlackNotifier {
    /// Sends the alert via chat.postMessage
    ///
    /// Fails with a configuration error before any request when the token or
    /// the channel is missing.
    async fn notify(&self, context: &NotificationContext) -> AppResult<NotifyOutcome> {
        self.validate_config()?;
        let token = self.token()?;
        let message = self.build_message(context)?;

        let start = Instant::now();
        let reply = self
            .transport
            .post_json(JsonPost {
                url: &self.settings.api_url,
                bearer_token: Some(token),
                body: json!({
                    "text": message.body_text,
                    "channel": message.target,
                }),
            })
            .await?;
        let duration_ms = start.elapsed().as_millis() as u64;
        let status_code = reply.status_code;

        let outcome = self.interpret_reply(reply, duration_ms)?;
        tracing::info!(
            provider = self.name(),
            channel = %message.target,
            status_code,
            duration_ms,
            "Notification sent"
        );
        Ok(outcome)
    }

    fn name(&self) -> &'static str {
        "slack"
    }

    /// Validates slack configuration
    ///
    /// Checks that:
    /// - token is set
    /// - channel is set
    /// - api_url is an http(s) URL
    fn validate_config(&self) -> AppResult<()> {
        self.token()?;
        self.channel()?;

        let url = reqwest::Url::parse(&self.settings.api_url).map_err(|_| {
            AppError::configuration("notifier.slack.api_url", "Invalid Slack API URL format")
        })?;
        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(AppError::configuration(
                "notifier.slack.api_url",
                "Slack API URL must use http or https protocol",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::transport::testing::{FakeTransport, RecordedCall, connection_refused};

    fn settings() -> SlackSettings {
        SlackSettings {
            token: Some("xoxb-test".to_string()),
            channel: Some("#alerts".to_string()),
            api_url: "https://slack.example.org/api/chat.postMessage".to_string(),
        }
    }

    fn context() -> NotificationContext {
        NotificationContext::alert(
            "https://pound.example.org/fourriere?immatriculation=AB-123-CD&action_rechercher=",
            "AB-123-CD",
        )
    }

    #[test]
    fn test_build_message() {
        let provider = SlackNotifier::new(settings(), Arc::new(FakeTransport::new()));
        let message = provider.build_message(&context()).unwrap();

        assert_eq!(
            message.body_text,
            ":warning: Alert, Your vehicle *AB-123-CD* has just been impounded. Visit \
             https://pound.example.org/fourriere?immatriculation=AB-123-CD&action_rechercher= \
             to get details :warning:"
        );
        assert_eq!(message.target, "#alerts");
    }

    #[test]
    fn test_build_test_message_is_flagged() {
        let provider = SlackNotifier::new(settings(), Arc::new(FakeTransport::new()));
        let test_context = NotificationContext::test("https://pound.example.org", "AB-123-CD");
        let message = provider.build_message(&test_context).unwrap();
        assert!(message.body_text.starts_with("[TEST] :warning: Alert"));
    }

    #[tokio::test]
    async fn test_notify_posts_message() {
        let transport = Arc::new(FakeTransport::new().with_reply(200, r#"{"ok":true}"#));
        let provider = SlackNotifier::new(settings(), transport.clone());

        let outcome = provider.notify(&context()).await.unwrap();
        assert!(matches!(outcome, NotifyOutcome::Delivered { status_code: 200, .. }));

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            RecordedCall::Post {
                url,
                bearer_token,
                body,
            } => {
                assert_eq!(url, "https://slack.example.org/api/chat.postMessage");
                assert_eq!(bearer_token.as_deref(), Some("xoxb-test"));
                assert_eq!(body["channel"], "#alerts");
                let text = body["text"].as_str().unwrap();
                assert!(text.contains("*AB-123-CD*"));
                assert!(text.contains("immatriculation=AB-123-CD&action_rechercher="));
            }
            other => panic!("Expected POST, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_sending() {
        let transport = Arc::new(FakeTransport::new());
        let mut settings = settings();
        settings.token = Some("  ".to_string());
        let provider = SlackNotifier::new(settings, transport.clone());

        let err = provider.notify(&context()).await.unwrap_err();
        assert!(matches!(err, AppError::Configuration { ref key, .. } if key == "notifier.slack.token"));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_channel_fails_before_sending() {
        let transport = Arc::new(FakeTransport::new());
        let mut settings = settings();
        settings.channel = None;
        let provider = SlackNotifier::new(settings, transport.clone());

        let err = provider.notify(&context()).await.unwrap_err();
        assert!(matches!(err, AppError::Configuration { ref key, .. } if key == "notifier.slack.channel"));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_api_rejection_is_notify_error() {
        let transport = Arc::new(
            FakeTransport::new().with_reply(200, r#"{"ok":false,"error":"invalid_auth"}"#),
        );
        let provider = SlackNotifier::new(settings(), transport);

        let err = provider.notify(&context()).await.unwrap_err();
        match err {
            AppError::Notify { provider, reason } => {
                assert_eq!(provider, "slack");
                assert_eq!(reason, "invalid_auth");
            }
            other => panic!("Expected Notify error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_http_error_status_is_notify_error() {
        let transport = Arc::new(FakeTransport::new().with_reply(503, "upstream unavailable"));
        let provider = SlackNotifier::new(settings(), transport);

        let err = provider.notify(&context()).await.unwrap_err();
        assert!(matches!(err, AppError::Notify { ref reason, .. } if reason.starts_with("HTTP 503")));
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        let transport = Arc::new(FakeTransport::new().with_failure(connection_refused));
        let provider = SlackNotifier::new(settings(), transport);

        let err = provider.notify(&context()).await.unwrap_err();
        assert!(matches!(err, AppError::Network { .. }));
    }

    #[test]
    fn test_validate_config_rejects_bad_api_url() {
        let mut settings = settings();
        settings.api_url = "not-a-url".to_string();
        let provider = SlackNotifier::new(settings, Arc::new(FakeTransport::new()));
        assert!(provider.validate_config().is_err());
    }
}
