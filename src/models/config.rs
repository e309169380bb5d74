use chrono::NaiveTime;
use thiserror::Error;

use crate::domain::types::{AvatarUrl, BotName, QuoteCategory, WebhookUrl};

/// Errors raised while reading configuration from the environment.
///
/// These are the only errors (besides an unreachable database at boot) that
/// terminate the process.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

/// Configuration options specific to the QOTD service.
#[derive(Clone)]
pub struct ServerConfig {
    /// Path to the SQLite database file.
    pub database_url: String,
    /// Address the HTTP server binds to, e.g. `127.0.0.1:8080`.
    pub bind_address: String,
    /// Outbound webhook endpoint notified after each rotation.
    pub webhook_url: WebhookUrl,
    /// Display name sent with webhook payloads.
    pub bot_name: BotName,
    /// Avatar image URL sent with webhook payloads.
    pub avatar_url: AvatarUrl,
    /// Category rotated by the daily scheduler.
    pub rotation_category: QuoteCategory,
    /// UTC wall-clock time of the daily rotation.
    pub rotation_time: NaiveTime,
    /// Include error details in HTTP responses.
    pub debug: bool,
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

impl ServerConfig {
    /// Reads the configuration from environment variables.
    ///
    /// `DATABASE_URL`, `WEBHOOK_URL` and `SERVER_DOMAIN` are required.
    /// `BIND_ADDRESS`, `ROTATION_CATEGORY`, `ROTATION_TIME` (UTC `HH:MM`) and
    /// `DEBUG` fall back to defaults matching the production deployment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = required("DATABASE_URL")?;
        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        let webhook_url = WebhookUrl::new(required("WEBHOOK_URL")?)
            .map_err(|e| ConfigError::InvalidVar("WEBHOOK_URL", e.to_string()))?;

        let server_domain = required("SERVER_DOMAIN")?;
        let avatar_url = AvatarUrl::new(format!("https://{server_domain}/assets/logo.png"))
            .map_err(|e| ConfigError::InvalidVar("SERVER_DOMAIN", e.to_string()))?;

        let bot_name = BotName::new(
            std::env::var("BOT_NAME").unwrap_or_else(|_| "QOTD Bot".to_string()),
        )
        .map_err(|e| ConfigError::InvalidVar("BOT_NAME", e.to_string()))?;

        let rotation_category = QuoteCategory::new(
            std::env::var("ROTATION_CATEGORY").unwrap_or_else(|_| "normal".to_string()),
        )
        .map_err(|e| ConfigError::InvalidVar("ROTATION_CATEGORY", e.to_string()))?;

        let rotation_time = std::env::var("ROTATION_TIME").unwrap_or_else(|_| "04:30".to_string());
        let rotation_time = NaiveTime::parse_from_str(&rotation_time, "%H:%M")
            .map_err(|e| ConfigError::InvalidVar("ROTATION_TIME", e.to_string()))?;

        let debug = std::env::var("DEBUG").is_ok_and(|v| v == "true");

        Ok(Self {
            database_url,
            bind_address,
            webhook_url,
            bot_name,
            avatar_url,
            rotation_category,
            rotation_time,
            debug,
        })
    }
}
