//! SendPurchaseNotificationHandler - turns a purchase event into at most one
//! chat notification.
//!
//! Webhook receivers must acknowledge providers regardless of what happens
//! downstream, so this handler never fails: skipped events, delivery errors
//! and timeouts are reported through the result and the log.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::purchase::{EventNormalizer, NotificationDecision, PurchaseEvent, PurchaseEventType};
use crate::ports::{DeliveryError, DeliveryReceipt, NotificationDestination, Notifier};

/// Command to notify about one purchase event.
#[derive(Debug, Clone)]
pub struct SendPurchaseNotificationCommand {
    pub event: PurchaseEvent,
}

/// Outcome of a notification run.
#[derive(Debug, Clone, PartialEq)]
pub enum SendPurchaseNotificationResult {
    /// Event type is not notified about; the notifier was not called.
    Skipped { event_type: PurchaseEventType },
    /// Notification delivered.
    Delivered { receipt: DeliveryReceipt },
    /// Notifier failed or timed out. Already logged.
    DeliveryFailed { error: DeliveryError },
}

impl SendPurchaseNotificationResult {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }
}

/// Handler for purchase notifications.
///
/// Holds only shared, immutable collaborators and is safe to call from many
/// requests at once.
pub struct SendPurchaseNotificationHandler {
    normalizer: EventNormalizer,
    notifier: Arc<dyn Notifier>,
    destination: NotificationDestination,
    delivery_timeout: Duration,
}

impl SendPurchaseNotificationHandler {
    pub fn new(
        normalizer: EventNormalizer,
        notifier: Arc<dyn Notifier>,
        destination: NotificationDestination,
        delivery_timeout: Duration,
    ) -> Self {
        Self {
            normalizer,
            notifier,
            destination,
            delivery_timeout,
        }
    }

    pub async fn handle(&self, cmd: SendPurchaseNotificationCommand) -> SendPurchaseNotificationResult {
        self.perform(&cmd.event).await
    }

    /// Normalize `event` and deliver the resulting message, if any.
    pub async fn perform(&self, event: &PurchaseEvent) -> SendPurchaseNotificationResult {
        let text = match self.normalizer.normalize(event) {
            NotificationDecision::Skip => {
                tracing::info!(
                    event_type = %event.event_type(),
                    store = event.store(),
                    "Ignoring unsupported purchase event type"
                );
                return SendPurchaseNotificationResult::Skipped {
                    event_type: event.event_type().clone(),
                };
            }
            NotificationDecision::Emit(text) => text,
        };

        let delivery = tokio::time::timeout(
            self.delivery_timeout,
            self.notifier.send(&self.destination, &text),
        )
        .await
        .unwrap_or_else(|_| {
            Err(DeliveryError::Timeout {
                after: self.delivery_timeout,
            })
        });

        match delivery {
            Ok(receipt) => {
                tracing::info!(
                    event_type = %event.event_type(),
                    store = event.store(),
                    notifier = self.notifier.name(),
                    message_id = ?receipt.message_id,
                    "Purchase notification delivered"
                );
                SendPurchaseNotificationResult::Delivered { receipt }
            }
            Err(error) => {
                tracing::error!(
                    event_type = %event.event_type(),
                    store = event.store(),
                    product_id = ?event.product_id(),
                    notifier = self.notifier.name(),
                    error_kind = error.kind(),
                    error = %error,
                    "Failed to deliver purchase notification"
                );
                SendPurchaseNotificationResult::DeliveryFailed { error }
            }
        }
    }
}
