//! RevenueCat configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// RevenueCat webhook configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RevenueCatConfig {
    /// Value RevenueCat sends in the `Authorization` header
    #[serde(default)]
    pub bearer_token: Option<SecretString>,
}

impl RevenueCatConfig {
    /// Validate RevenueCat configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.bearer_token {
            Some(token) if !token.expose_secret().is_empty() => Ok(()),
            _ => Err(ValidationError::MissingRequired("REVENUECAT__BEARER_TOKEN")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_missing_token() {
        let config = RevenueCatConfig::default();
        assert!(config.validate().is_err());

        let config = RevenueCatConfig {
            bearer_token: Some(SecretString::new(String::new())),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        let config = RevenueCatConfig {
            bearer_token: Some(SecretString::new("rc_secret".to_string())),
        };
        assert!(config.validate().is_ok());
    }
}
