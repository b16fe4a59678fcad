//! Integration tests for the webhook HTTP endpoints.
//!
//! These tests drive the full axum router:
//! 1. RevenueCat webhooks are authenticated, decoded and relayed
//! 2. Every failure path is still acknowledged with 200
//! 3. The auxiliary endpoints answer with their fixed bodies

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use secrecy::SecretString;
use serde_json::{json, Value};
use tower::ServiceExt;

use purchase_relay::adapters::country::StaticCountryDirectory;
use purchase_relay::adapters::http::{webhook_router, WebhooksAppState};
use purchase_relay::adapters::notifier::MockNotifier;
use purchase_relay::adapters::revenuecat::BearerTokenVerifier;
use purchase_relay::application::handlers::purchase::SendPurchaseNotificationHandler;
use purchase_relay::domain::purchase::{EventNormalizer, Locale};
use purchase_relay::ports::{DeliveryError, NotificationDestination};

// =============================================================================
// Test Infrastructure
// =============================================================================

const BEARER: &str = "rc_webhook_secret";
const CHAT_ID: &str = "-1001234567890";

fn app_with(notifier: MockNotifier, locale: Locale) -> Router {
    let handler = SendPurchaseNotificationHandler::new(
        EventNormalizer::new(locale, Arc::new(StaticCountryDirectory::new())),
        Arc::new(notifier),
        NotificationDestination::new(CHAT_ID),
        Duration::from_secs(2),
    );

    webhook_router().with_state(WebhooksAppState {
        notification_handler: Arc::new(handler),
        revenuecat_auth: BearerTokenVerifier::new(SecretString::new(BEARER.to_string())),
    })
}

fn app(notifier: MockNotifier) -> Router {
    app_with(notifier, Locale::En)
}

fn revenuecat_request(authorization: Option<&str>, body: impl Into<Body>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/hooks/revenuecat")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(body.into()).unwrap()
}

fn renewal_payload() -> String {
    json!({
        "api_version": "1.0",
        "event": {
            "id": "EVT-1",
            "type": "RENEWAL",
            "app_user_id": "user-42",
            "store": "APP_STORE",
            "country_code": "US",
            "price": 9.99,
            "product_id": "premium_monthly",
            "renewal_number": 3
        }
    })
    .to_string()
}

async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn assert_acknowledged(response: Response) {
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body, json!({"status": "success"}));
}

// =============================================================================
// RevenueCat Webhook Tests
// =============================================================================

#[tokio::test]
async fn authenticated_renewal_is_relayed_to_chat() {
    let notifier = MockNotifier::new();
    let response = app(notifier.clone())
        .oneshot(revenuecat_request(
            Some(&format!("Bearer {}", BEARER)),
            renewal_payload(),
        ))
        .await
        .unwrap();

    assert_acknowledged(response).await;

    let sent = notifier.sent_messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].destination.as_str(), CHAT_ID);
    assert_eq!(
        sent[0].text,
        "🔁 Subscription renewed in <b>App Store</b> 🔁\n\
         \n\
         Price: $9.99\n\
         Country: 🇺🇸 United States (US)\n\
         Product: premium_monthly\n\
         Renewals: 3"
    );
}

#[tokio::test]
async fn russian_locale_renders_russian_text() {
    let notifier = MockNotifier::new();
    let body = json!({
        "event": {"type": "CANCELLATION", "store": "PLAY_STORE", "country_code": "RU", "price": 5.0}
    })
    .to_string();

    let response = app_with(notifier.clone(), Locale::Ru)
        .oneshot(revenuecat_request(Some(&format!("Bearer {}", BEARER)), body))
        .await
        .unwrap();

    assert_acknowledged(response).await;
    let sent = notifier.sent_messages();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].text.starts_with("✖️ Совершена отмена подписки в <b>Google Play</b>"));
    assert!(sent[0].text.contains("Страна: 🇷🇺 Россия (RU)"));
    assert!(!sent[0].text.contains("Стоимость"));
}

#[tokio::test]
async fn wrong_token_is_acknowledged_without_delivery() {
    let notifier = MockNotifier::new();
    let response = app(notifier.clone())
        .oneshot(revenuecat_request(Some("Bearer wrong"), renewal_payload()))
        .await
        .unwrap();

    assert_acknowledged(response).await;
    assert_eq!(notifier.call_count(), 0);
}

#[tokio::test]
async fn missing_or_malformed_authorization_is_acknowledged_without_delivery() {
    let notifier = MockNotifier::new();
    let router = app(notifier.clone());

    let missing = router
        .clone()
        .oneshot(revenuecat_request(None, renewal_payload()))
        .await
        .unwrap();
    assert_acknowledged(missing).await;

    let malformed = router
        .oneshot(revenuecat_request(Some(BEARER), renewal_payload()))
        .await
        .unwrap();
    assert_acknowledged(malformed).await;

    assert_eq!(notifier.call_count(), 0);
}

#[tokio::test]
async fn malformed_json_is_acknowledged_without_delivery() {
    let notifier = MockNotifier::new();
    let response = app(notifier.clone())
        .oneshot(revenuecat_request(
            Some(&format!("Bearer {}", BEARER)),
            "{not json",
        ))
        .await
        .unwrap();

    assert_acknowledged(response).await;
    assert_eq!(notifier.call_count(), 0);
}

#[tokio::test]
async fn unsupported_event_type_is_skipped() {
    let notifier = MockNotifier::new();
    let body = json!({"event": {"type": "TRIAL_STARTED", "store": "APP_STORE"}}).to_string();

    let response = app(notifier.clone())
        .oneshot(revenuecat_request(Some(&format!("Bearer {}", BEARER)), body))
        .await
        .unwrap();

    assert_acknowledged(response).await;
    assert_eq!(notifier.call_count(), 0);
}

#[tokio::test]
async fn delivery_failure_is_still_acknowledged() {
    let notifier = MockNotifier::failing(DeliveryError::Unauthorized);
    let response = app(notifier.clone())
        .oneshot(revenuecat_request(
            Some(&format!("Bearer {}", BEARER)),
            renewal_payload(),
        ))
        .await
        .unwrap();

    assert_acknowledged(response).await;
    assert_eq!(notifier.call_count(), 1);
}

#[tokio::test]
async fn revenuecat_route_only_accepts_post() {
    let response = app(MockNotifier::new())
        .oneshot(
            Request::builder()
                .uri("/hooks/revenuecat")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// Auxiliary Endpoint Tests
// =============================================================================

#[tokio::test]
async fn health_returns_ok() {
    let response = app(MockNotifier::new())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn rustore_webhook_is_acknowledged() {
    let notifier = MockNotifier::new();
    let response = app(notifier.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/hooks/rustore")
                .body(Body::from(r#"{"anything": true}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
    assert_eq!(notifier.call_count(), 0);
}

#[tokio::test]
async fn donationalerts_returns_html_page() {
    let response = app(MockNotifier::new())
        .oneshot(
            Request::builder()
                .uri("/hooks/donationalerts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));
    assert_eq!(body_string(response).await, "<html>ok</html>");
}
