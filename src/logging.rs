//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence over `server.log_level`. Production emits
//! JSON lines; every other environment uses the human-readable format.

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

/// Builds the filter from `RUST_LOG`, falling back to `log_level`.
pub fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// Installs the global subscriber.
///
/// Must be called once, before the first log statement.
pub fn init_tracing(server: &ServerConfig) {
    let filter = env_filter(&server.log_level);

    if server.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_falls_back_to_configured_level() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let filter = env_filter("info,purchase_relay=debug");
        let rendered = filter.to_string();
        assert!(rendered.contains("purchase_relay=debug"));
    }
}
