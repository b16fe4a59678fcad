//! Webhook HTTP adapter.
//!
//! Exposes the provider callback endpoints and the health probe, and hands
//! decoded purchase events to the notification handler.

mod dto;
mod handlers;
mod routes;

pub use dto::WebhookResponse;
pub use handlers::WebhooksAppState;
pub use routes::{hook_routes, webhook_router};
