//! Outbound webhook delivery for freshly rotated quotes.
//!
//! Delivery is at-most-once: a single POST per rotation, no retries. Failures
//! are reported to the caller and never touch storage state.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::domain::types::{AvatarUrl, BotName, WebhookUrl};

/// Errors raised while delivering a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The request never produced a response (connect failure, timeout, ...).
    #[error("webhook request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("webhook returned status {0}")]
    Status(StatusCode),
}

/// Body shape expected by the webhook endpoint.
#[derive(Debug, Serialize)]
pub struct WebhookPayload {
    pub content: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub avatar_url: String,
}

/// Delivers one notification per newly activated quote.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, quote_text: &str) -> Result<(), NotifyError>;
}

/// Reqwest-backed [`Notifier`] posting to a configured webhook URL.
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: WebhookUrl,
    username: BotName,
    avatar_url: AvatarUrl,
}

impl WebhookNotifier {
    pub fn new(
        url: WebhookUrl,
        username: BotName,
        avatar_url: AvatarUrl,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            url,
            username,
            avatar_url,
        })
    }
}

#[async_trait::async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, quote_text: &str) -> Result<(), NotifyError> {
        let payload = WebhookPayload {
            content: quote_text.to_string(),
            username: self.username.as_str().to_string(),
            avatar_url: self.avatar_url.as_str().to_string(),
        };

        let response = self
            .client
            .post(self.url.as_str())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(NotifyError::Status(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_to_webhook_shape() {
        let payload = WebhookPayload {
            content: "quote of the day".to_string(),
            username: "QOTD Bot".to_string(),
            avatar_url: "https://example.com/assets/logo.png".to_string(),
        };

        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["content"], "quote of the day");
        assert_eq!(json["username"], "QOTD Bot");
        assert_eq!(json["avatar_url"], "https://example.com/assets/logo.png");
    }

    #[test]
    fn empty_identity_fields_are_omitted() {
        let payload = WebhookPayload {
            content: "bare".to_string(),
            username: String::new(),
            avatar_url: String::new(),
        };

        let json = serde_json::to_value(&payload).unwrap();

        assert!(json.get("username").is_none());
        assert!(json.get("avatar_url").is_none());
    }
}
