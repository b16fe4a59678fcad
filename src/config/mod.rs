//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PURCHASE_RELAY` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use purchase_relay::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod notification;
mod revenuecat;
mod server;
mod telegram;

pub use error::{ConfigError, ValidationError};
pub use notification::NotificationConfig;
pub use revenuecat::RevenueCatConfig;
pub use server::{Environment, ServerConfig};
pub use telegram::TelegramConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Telegram bot configuration
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// RevenueCat webhook configuration
    #[serde(default)]
    pub revenuecat: RevenueCatConfig,

    /// Message locale and delivery timeout
    #[serde(default)]
    pub notification: NotificationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PURCHASE_RELAY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PURCHASE_RELAY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PURCHASE_RELAY__TELEGRAM__CHAT_ID=-100...` -> `telegram.chat_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PURCHASE_RELAY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.telegram.validate(&self.server.environment)?;
        self.revenuecat.validate()?;
        self.notification.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::purchase::Locale;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "PURCHASE_RELAY__REVENUECAT__BEARER_TOKEN",
        "PURCHASE_RELAY__TELEGRAM__BOT_TOKEN",
        "PURCHASE_RELAY__TELEGRAM__CHAT_ID",
        "PURCHASE_RELAY__SERVER__PORT",
        "PURCHASE_RELAY__SERVER__ENVIRONMENT",
        "PURCHASE_RELAY__NOTIFICATION__LOCALE",
        "PURCHASE_RELAY__NOTIFICATION__DELIVERY_TIMEOUT_SECS",
    ];

    /// Helper to set environment variables for testing
    fn set_minimal_env() {
        env::set_var("PURCHASE_RELAY__REVENUECAT__BEARER_TOKEN", "rc_secret");
    }

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        let token = config.revenuecat.bearer_token.unwrap();
        assert_eq!(token.expose_secret(), "rc_secret");
    }

    #[test]
    fn test_validate_minimal_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
        assert!(config.telegram.bot_token().is_none());
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.telegram.api_base_url, "https://api.telegram.org");
        assert_eq!(config.notification.locale, Locale::En);
        assert_eq!(config.notification.delivery_timeout_secs, 10);
    }

    #[test]
    fn test_missing_bearer_token_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("REVENUECAT__BEARER_TOKEN"))
        );
    }

    #[test]
    fn test_production_requires_telegram() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("PURCHASE_RELAY__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("TELEGRAM__BOT_TOKEN"))
        );
    }

    #[test]
    fn test_full_telegram_and_notification_settings() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("PURCHASE_RELAY__TELEGRAM__BOT_TOKEN", "123:abc");
        env::set_var("PURCHASE_RELAY__TELEGRAM__CHAT_ID", "-100200300");
        env::set_var("PURCHASE_RELAY__NOTIFICATION__LOCALE", "ru");
        env::set_var("PURCHASE_RELAY__NOTIFICATION__DELIVERY_TIMEOUT_SECS", "5");
        env::set_var("PURCHASE_RELAY__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telegram.chat_id(), Some("-100200300"));
        assert_eq!(config.notification.locale, Locale::Ru);
        assert_eq!(config.notification.delivery_timeout_secs, 5);
    }
}
