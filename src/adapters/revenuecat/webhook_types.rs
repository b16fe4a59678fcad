//! RevenueCat webhook payload types.
//!
//! RevenueCat posts a JSON envelope whose `event` object carries the
//! purchase details. Only the fields the relay reads are typed; everything
//! else is ignored by serde.
//!
//! ```text
//! {
//!   "api_version": "1.0",
//!   "event": {
//!     "type": "RENEWAL",
//!     "store": "APP_STORE",
//!     "country_code": "US",
//!     "price": 4.99,
//!     "product_id": "premium_monthly",
//!     "renewal_number": 3,
//!     ...
//!   }
//! }
//! ```

use serde::Deserialize;

use crate::domain::purchase::{PurchaseEvent, PurchaseEventError};

/// Top-level webhook body.
#[derive(Debug, Clone, Deserialize)]
pub struct RevenueCatWebhook {
    #[serde(default)]
    pub api_version: Option<String>,
    pub event: RevenueCatEvent,
}

/// The `event` object of a webhook.
#[derive(Debug, Clone, Deserialize)]
pub struct RevenueCatEvent {
    /// Event id, unique per delivery attempt group.
    #[serde(default)]
    pub id: Option<String>,

    #[serde(rename = "type")]
    pub event_type: String,

    #[serde(default)]
    pub app_user_id: Option<String>,

    #[serde(default)]
    pub store: Option<String>,

    #[serde(default)]
    pub country_code: Option<String>,

    /// Price in USD.
    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub product_id: Option<String>,

    #[serde(default)]
    pub renewal_number: Option<u32>,

    /// `PRODUCTION` or `SANDBOX`.
    #[serde(default)]
    pub environment: Option<String>,
}

impl RevenueCatEvent {
    /// Whether the event comes from a store sandbox (test purchases).
    pub fn is_sandbox(&self) -> bool {
        self.environment
            .as_deref()
            .is_some_and(|env| env.eq_ignore_ascii_case("SANDBOX"))
    }
}

impl RevenueCatWebhook {
    /// Converts the payload into a domain event.
    ///
    /// # Errors
    ///
    /// Returns `PurchaseEventError::EmptyEventType` when `type` is blank.
    pub fn into_purchase_event(self) -> Result<PurchaseEvent, PurchaseEventError> {
        let event = self.event;
        Ok(PurchaseEvent::new(event.event_type, event.store.unwrap_or_default())?
            .with_country_code(event.country_code)
            .with_price(event.price)
            .with_product_id(event.product_id)
            .with_renewal_number(event.renewal_number))
    }
}
