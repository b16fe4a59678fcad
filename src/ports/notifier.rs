//! Notifier port - outbound delivery of notification text.
//!
//! The relay core depends only on this contract; the Telegram adapter, the
//! logging fallback and test mocks implement it.
//!
//! # Design
//!
//! - **Best-effort**: at most one attempt per event, no retry in the core
//! - **Static destination**: the target chat is configured, never derived
//!   from the event

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Port for delivering a formatted message to a chat.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `text` to `destination`.
    ///
    /// Returns a receipt on success. Implementations must not retry
    /// internally; the caller decides what a failure means.
    async fn send(
        &self,
        destination: &NotificationDestination,
        text: &str,
    ) -> Result<DeliveryReceipt, DeliveryError>;

    /// Short adapter name for logs (e.g. "telegram").
    fn name(&self) -> &'static str;
}

/// Pre-configured chat the notifications go to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotificationDestination(String);

impl NotificationDestination {
    pub fn new(chat_id: impl Into<String>) -> Self {
        Self(chat_id.into())
    }

    /// Chat identifier as understood by the transport.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NotificationDestination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Acknowledgement returned by a successful delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Transport-assigned message identifier, when the transport reports one.
    pub message_id: Option<i64>,
}

impl DeliveryReceipt {
    pub fn with_message_id(message_id: i64) -> Self {
        Self {
            message_id: Some(message_id),
        }
    }
}

/// Reasons a delivery attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// Connection, DNS or TLS failure before a response arrived.
    #[error("Network error: {0}")]
    Network(String),

    /// Transport rejected the credentials.
    #[error("Notifier credentials rejected")]
    Unauthorized,

    /// Transport asked us to slow down.
    #[error("Rate limited (retry after {retry_after_secs:?}s)")]
    RateLimited { retry_after_secs: Option<u64> },

    /// Transport refused the message (bad chat, malformed markup, ...).
    #[error("Message rejected ({status}): {description}")]
    Rejected { status: u16, description: String },

    /// Response could not be understood.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// No answer within the delivery timeout.
    #[error("Delivery timed out after {after:?}")]
    Timeout { after: Duration },
}

impl DeliveryError {
    /// Machine-readable error kind for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DeliveryError::Network(_) => "network",
            DeliveryError::Unauthorized => "unauthorized",
            DeliveryError::RateLimited { .. } => "rate_limited",
            DeliveryError::Rejected { .. } => "rejected",
            DeliveryError::InvalidResponse(_) => "invalid_response",
            DeliveryError::Timeout { .. } => "timeout",
        }
    }
}
