//! HTTP listener settings

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::ops::RangeInclusive;
use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Accepted values for `request_timeout_secs`.
const REQUEST_TIMEOUT_RANGE: RangeInclusive<u64> = 1..=300;

/// Listener, environment and log filter for the relay process.
///
/// Every field is optional in the environment; missing ones take the
/// values of [`ServerConfig::default`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// IP address to bind (`0.0.0.0` listens on all interfaces)
    pub host: String,

    pub port: u16,

    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_level: String,

    /// Upper bound on handling one HTTP request
    pub request_timeout_secs: u64,
}

/// Deployment stage the relay runs in
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ServerConfig {
    /// Address the listener binds to.
    ///
    /// `host` must be a literal IP address; hostnames are not resolved.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        self.host
            .trim()
            .parse::<IpAddr>()
            .map(|ip| SocketAddr::new(ip, self.port))
            .map_err(|_| ValidationError::InvalidBindAddress(self.host.clone()))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !REQUEST_TIMEOUT_RANGE.contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr().map(|_| ())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_level: "info,purchase_relay=debug".to_string(),
            request_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listening_on(host: &str, port: u16) -> ServerConfig {
        ServerConfig {
            host: host.to_string(),
            port,
            ..ServerConfig::default()
        }
    }

    #[test]
    fn defaults_listen_on_all_interfaces() {
        let config = ServerConfig::default();

        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.log_level, "info,purchase_relay=debug");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn ipv6_host_is_accepted() {
        let addr = listening_on("::1", 9000).socket_addr().unwrap();
        assert_eq!(addr.to_string(), "[::1]:9000");
    }

    #[test]
    fn hostname_is_not_a_bind_address() {
        assert_eq!(
            listening_on("localhost", 8080).validate(),
            Err(ValidationError::InvalidBindAddress("localhost".to_string()))
        );
    }

    #[test]
    fn port_zero_is_rejected() {
        assert_eq!(
            listening_on("127.0.0.1", 0).validate(),
            Err(ValidationError::InvalidPort)
        );
    }

    #[test]
    fn request_timeout_must_be_within_range() {
        for secs in [0, 301] {
            let config = ServerConfig {
                request_timeout_secs: secs,
                ..ServerConfig::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
        }

        let config = ServerConfig {
            request_timeout_secs: 300,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn environment_parses_lowercase_names() {
        let env: Environment = serde_json::from_str("\"staging\"").unwrap();
        assert_eq!(env, Environment::Staging);
        assert_eq!(Environment::Production.to_string(), "production");

        let production = ServerConfig {
            environment: Environment::Production,
            ..ServerConfig::default()
        };
        assert!(production.is_production());
        assert!(!ServerConfig::default().is_production());
    }
}
