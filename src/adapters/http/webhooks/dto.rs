//! HTTP DTOs for webhook endpoints.

use serde::Serialize;

/// Acknowledgement body returned to webhook providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookResponse {
    pub status: &'static str,
}

impl WebhookResponse {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}
