//! Telegram configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot token; without one, notifications are only logged
    #[serde(default)]
    pub bot_token: Option<SecretString>,

    /// Chat that receives notifications
    #[serde(default)]
    pub chat_id: Option<String>,

    /// Bot API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl TelegramConfig {
    /// Token, if one is configured and non-blank
    pub fn bot_token(&self) -> Option<&SecretString> {
        self.bot_token
            .as_ref()
            .filter(|token| !token.expose_secret().trim().is_empty())
    }

    /// Chat ID, if configured and non-blank
    pub fn chat_id(&self) -> Option<&str> {
        self.chat_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// Validate Telegram configuration
    ///
    /// A token is mandatory in production. Whenever a token is present the
    /// chat ID must be too.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.bot_token().is_none() {
            if *environment == Environment::Production {
                return Err(ValidationError::MissingRequired("TELEGRAM__BOT_TOKEN"));
            }
            return Ok(());
        }
        if self.chat_id().is_none() {
            return Err(ValidationError::MissingRequired("TELEGRAM__CHAT_ID"));
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidTelegramApiUrl);
        }
        Ok(())
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id: None,
            api_base_url: default_api_base_url(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://api.telegram.org".to_string()
}
