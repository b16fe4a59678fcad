//! Purchase event type tags.
//!
//! Providers send the event type as a SCREAMING_SNAKE_CASE string. Only four
//! tags are actionable; anything else is carried verbatim as `Other` so the
//! normalizer can decide to skip it.

use serde::{Deserialize, Serialize};

/// Kind of purchase lifecycle event reported by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PurchaseEventType {
    /// First purchase of a subscription product.
    InitialPurchase,
    /// One-off purchase (consumable or lifetime product).
    NonRenewingPurchase,
    /// Subscription renewed for another period.
    Renewal,
    /// Subscription cancelled (auto-renew turned off or refunded).
    Cancellation,
    /// Any tag this relay does not act on, kept as received.
    Other(String),
}

impl PurchaseEventType {
    /// Returns the wire name of this event type.
    pub fn as_str(&self) -> &str {
        match self {
            PurchaseEventType::InitialPurchase => "INITIAL_PURCHASE",
            PurchaseEventType::NonRenewingPurchase => "NON_RENEWING_PURCHASE",
            PurchaseEventType::Renewal => "RENEWAL",
            PurchaseEventType::Cancellation => "CANCELLATION",
            PurchaseEventType::Other(raw) => raw,
        }
    }

    /// Returns true if notifications are produced for this event type.
    pub fn is_supported(&self) -> bool {
        !matches!(self, PurchaseEventType::Other(_))
    }

    /// Returns true for the cancellation event.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, PurchaseEventType::Cancellation)
    }
}

impl From<&str> for PurchaseEventType {
    fn from(raw: &str) -> Self {
        match raw.trim() {
            "INITIAL_PURCHASE" => PurchaseEventType::InitialPurchase,
            "NON_RENEWING_PURCHASE" => PurchaseEventType::NonRenewingPurchase,
            "RENEWAL" => PurchaseEventType::Renewal,
            "CANCELLATION" => PurchaseEventType::Cancellation,
            other => PurchaseEventType::Other(other.to_string()),
        }
    }
}

impl From<String> for PurchaseEventType {
    fn from(raw: String) -> Self {
        PurchaseEventType::from(raw.as_str())
    }
}

impl From<PurchaseEventType> for String {
    fn from(event_type: PurchaseEventType) -> Self {
        match event_type {
            PurchaseEventType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for PurchaseEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
