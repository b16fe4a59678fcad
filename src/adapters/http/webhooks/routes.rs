//! Axum router configuration for webhook endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    handle_donationalerts_webhook, handle_revenuecat_webhook, handle_rustore_webhook, health,
    WebhooksAppState,
};

/// Create the provider webhook router.
///
/// # Routes
/// - `POST /revenuecat` - RevenueCat purchase events (bearer token)
/// - `POST /rustore` - RuStore callbacks (acknowledged only)
/// - `GET /donationalerts` - DonationAlerts confirmation page
pub fn hook_routes() -> Router<WebhooksAppState> {
    Router::new()
        .route("/revenuecat", post(handle_revenuecat_webhook))
        .route("/rustore", post(handle_rustore_webhook))
        .route("/donationalerts", get(handle_donationalerts_webhook))
}

/// Create the complete relay router, with `/health` and `/hooks/*`.
///
/// # Example
///
/// ```ignore
/// let app = webhook_router().with_state(WebhooksAppState { /* ... */ });
/// ```
pub fn webhook_router() -> Router<WebhooksAppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/hooks", hook_routes())
}
