//! HTTP handlers for webhook endpoints.
//!
//! Provider webhooks are always acknowledged with success. Authentication
//! and decoding failures are logged at warn and the request is dropped.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{Html, IntoResponse};
use axum::Json;

use crate::adapters::revenuecat::{BearerTokenVerifier, RevenueCatWebhook};
use crate::application::handlers::purchase::{
    SendPurchaseNotificationCommand, SendPurchaseNotificationHandler,
};

use super::dto::WebhookResponse;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for webhook routes.
#[derive(Clone)]
pub struct WebhooksAppState {
    pub notification_handler: Arc<SendPurchaseNotificationHandler>,
    pub revenuecat_auth: BearerTokenVerifier,
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

/// POST /hooks/revenuecat
pub async fn handle_revenuecat_webhook(
    State(state): State<WebhooksAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<WebhookResponse> {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if let Err(e) = state.revenuecat_auth.verify(authorization) {
        tracing::warn!(error = %e, "RevenueCat webhook failed authentication");
        return Json(WebhookResponse::success());
    }

    let webhook: RevenueCatWebhook = match serde_json::from_slice(&body) {
        Ok(webhook) => webhook,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to decode RevenueCat webhook");
            return Json(WebhookResponse::success());
        }
    };

    tracing::info!(
        event_id = webhook.event.id.as_deref().unwrap_or("-"),
        event_type = %webhook.event.event_type,
        store = webhook.event.store.as_deref().unwrap_or("-"),
        app_user_id = webhook.event.app_user_id.as_deref().unwrap_or("-"),
        environment = webhook.event.environment.as_deref().unwrap_or("-"),
        sandbox = webhook.event.is_sandbox(),
        "RevenueCat webhook received"
    );

    let event = match webhook.into_purchase_event() {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected RevenueCat event");
            return Json(WebhookResponse::success());
        }
    };

    state
        .notification_handler
        .handle(SendPurchaseNotificationCommand { event })
        .await;

    Json(WebhookResponse::success())
}

/// POST /hooks/rustore
///
/// RuStore payloads are not decoded yet; the endpoint only acknowledges.
pub async fn handle_rustore_webhook(body: Bytes) -> &'static str {
    tracing::debug!(bytes = body.len(), "RuStore webhook acknowledged");
    "ok"
}

/// GET /hooks/donationalerts
pub async fn handle_donationalerts_webhook() -> impl IntoResponse {
    Html("<html>ok</html>")
}
