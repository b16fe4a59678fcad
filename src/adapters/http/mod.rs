//! HTTP adapters - axum endpoint implementations.

pub mod webhooks;

pub use webhooks::webhook_router;
pub use webhooks::WebhooksAppState;
