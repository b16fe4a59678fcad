//! Telegram notifier adapter.
//!
//! Implements the `Notifier` port with the Bot API `sendMessage` method.
//!
//! # Security
//!
//! The bot token is part of the request URL, so it is held as a
//! `secrecy::SecretString` and the URL is never logged.
//!
//! # Configuration
//!
//! ```ignore
//! let config = TelegramConfig::new(bot_token).with_timeout(Duration::from_secs(10));
//! let notifier = TelegramNotifier::new(config)?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::ports::{DeliveryError, DeliveryReceipt, NotificationDestination, Notifier};

use super::api_types::{interpret_send_response, ApiResponse, SendMessageRequest, TelegramMessage};

/// Default Bot API host.
pub const DEFAULT_API_BASE_URL: &str = "https://api.telegram.org";

/// Telegram Bot API configuration.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot token issued by @BotFather.
    bot_token: SecretString,

    /// Base URL for the Bot API (overridable for self-hosted API servers).
    api_base_url: String,

    /// HTTP request timeout.
    timeout: Duration,
}

impl TelegramConfig {
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self::from_secret(SecretString::new(bot_token.into()))
    }

    pub fn from_secret(bot_token: SecretString) -> Self {
        Self {
            bot_token,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base_url,
            self.bot_token.expose_secret()
        )
    }
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Delivers notifications to a Telegram chat.
pub struct TelegramNotifier {
    config: TelegramConfig,
    client: Client,
}

impl TelegramNotifier {
    /// Creates a notifier with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the HTTP client cannot be built (TLS
    /// backend initialization).
    pub fn new(config: TelegramConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(
        &self,
        destination: &NotificationDestination,
        text: &str,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        let request = SendMessageRequest::html(destination.as_str(), text);

        let response = self
            .client
            .post(self.config.send_message_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DeliveryError::Timeout {
                        after: self.config.timeout,
                    }
                } else {
                    // without_url: the URL contains the bot token
                    DeliveryError::Network(e.without_url().to_string())
                }
            })?;

        let status = response.status().as_u16();
        let envelope: ApiResponse<TelegramMessage> = response.json().await.map_err(|e| {
            tracing::warn!(status, error = %e.without_url(), "Undecodable Telegram response");
            DeliveryError::InvalidResponse(format!("HTTP {}: undecodable body", status))
        })?;

        let outcome = interpret_send_response(status, envelope);
        if let Err(error) = &outcome {
            tracing::debug!(chat_id = %destination, status, error = %error, "Telegram rejected message");
        }
        outcome
    }

    fn name(&self) -> &'static str {
        "telegram"
    }
}
