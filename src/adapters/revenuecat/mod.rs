//! RevenueCat webhook adapter.
//!
//! Decodes RevenueCat webhook payloads into `PurchaseEvent`s and checks the
//! shared bearer token RevenueCat is configured to send.

mod bearer_auth;
mod webhook_types;

pub use bearer_auth::{BearerTokenVerifier, WebhookAuthError};
pub use webhook_types::{RevenueCatEvent, RevenueCatWebhook};
