//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `country` - Built-in country directory
//! - `http` - axum webhook endpoints
//! - `notifier` - Log-only and mock notifiers
//! - `revenuecat` - RevenueCat payload decoding and bearer token check
//! - `telegram` - Telegram Bot API notifier

pub mod country;
pub mod http;
pub mod notifier;
pub mod revenuecat;
pub mod telegram;

pub use country::StaticCountryDirectory;
pub use notifier::{LoggingNotifier, MockNotifier};
pub use telegram::TelegramNotifier;
