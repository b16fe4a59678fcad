//! Notification configuration

use std::time::Duration;

use serde::Deserialize;

use crate::domain::purchase::Locale;

use super::error::ValidationError;

/// Notification rendering and delivery settings
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    /// Language of the rendered messages
    #[serde(default)]
    pub locale: Locale,

    /// Upper bound on a single delivery attempt, in seconds
    #[serde(default = "default_delivery_timeout")]
    pub delivery_timeout_secs: u64,
}

impl NotificationConfig {
    pub fn delivery_timeout(&self) -> Duration {
        Duration::from_secs(self.delivery_timeout_secs)
    }

    /// Validate notification configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=60).contains(&self.delivery_timeout_secs) {
            return Err(ValidationError::InvalidDeliveryTimeout);
        }
        Ok(())
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            delivery_timeout_secs: default_delivery_timeout(),
        }
    }
}

fn default_delivery_timeout() -> u64 {
    10
}
