//! Notifier that writes messages to the log instead of a chat.
//!
//! Used when no Telegram bot token is configured, so the relay can run
//! locally end to end.

use async_trait::async_trait;

use crate::ports::{DeliveryError, DeliveryReceipt, NotificationDestination, Notifier};

#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNotifier;

impl LoggingNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LoggingNotifier {
    async fn send(
        &self,
        destination: &NotificationDestination,
        text: &str,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        tracing::info!(destination = %destination, text, "Notification (log only)");
        Ok(DeliveryReceipt::default())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
