//! Mock notifier for testing.
//!
//! Provides a configurable implementation of `Notifier` for unit and
//! integration tests. Supports:
//! - Call tracking
//! - Error injection (next call or every call)

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{DeliveryError, DeliveryReceipt, NotificationDestination, Notifier};

/// Mock notifier for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockNotifier::new();
/// mock.fail_always(DeliveryError::Unauthorized);
///
/// let result = mock.send(&destination, "hello").await;
/// assert!(result.is_err());
/// assert_eq!(mock.sent_messages().len(), 1);
/// ```
#[derive(Default, Clone)]
pub struct MockNotifier {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Every message passed to `send`, in order.
    sent: Vec<SentMessage>,

    /// Error to return on the next call only.
    next_error: Option<DeliveryError>,

    /// Error to return on every call.
    permanent_error: Option<DeliveryError>,

    /// Counter used for receipt message IDs.
    next_message_id: i64,
}

/// A recorded `send` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub destination: NotificationDestination,
    pub text: String,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock whose every delivery fails with `error`.
    pub fn failing(error: DeliveryError) -> Self {
        let mock = Self::new();
        mock.fail_always(error);
        mock
    }

    /// Fail the next call with `error`.
    pub fn fail_next(&self, error: DeliveryError) {
        self.inner.lock().unwrap().next_error = Some(error);
    }

    /// Fail every call with `error`.
    pub fn fail_always(&self, error: DeliveryError) {
        self.inner.lock().unwrap().permanent_error = Some(error);
    }

    pub fn sent_messages(&self) -> Vec<SentMessage> {
        self.inner.lock().unwrap().sent.clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().sent.len()
    }

    pub fn clear(&self) {
        let mut state = self.inner.lock().unwrap();
        state.sent.clear();
        state.next_error = None;
        state.permanent_error = None;
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send(
        &self,
        destination: &NotificationDestination,
        text: &str,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        let mut state = self.inner.lock().unwrap();
        state.sent.push(SentMessage {
            destination: destination.clone(),
            text: text.to_string(),
        });

        if let Some(error) = state.next_error.take() {
            return Err(error);
        }
        if let Some(error) = &state.permanent_error {
            return Err(error.clone());
        }

        state.next_message_id += 1;
        Ok(DeliveryReceipt::with_message_id(state.next_message_id))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destination() -> NotificationDestination {
        NotificationDestination::new("chat")
    }

    #[tokio::test]
    async fn records_sent_messages() {
        let mock = MockNotifier::new();

        let receipt = mock.send(&destination(), "first").await.unwrap();
        mock.send(&destination(), "second").await.unwrap();

        assert_eq!(receipt.message_id, Some(1));
        let sent = mock.sent_messages();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].text, "first");
        assert_eq!(sent[1].destination.as_str(), "chat");
    }

    #[tokio::test]
    async fn fail_next_affects_one_call() {
        let mock = MockNotifier::new();
        mock.fail_next(DeliveryError::Unauthorized);

        assert_eq!(
            mock.send(&destination(), "a").await,
            Err(DeliveryError::Unauthorized)
        );
        assert!(mock.send(&destination(), "b").await.is_ok());
    }

    #[tokio::test]
    async fn failing_mock_fails_every_call() {
        let mock = MockNotifier::failing(DeliveryError::Network("down".to_string()));

        assert!(mock.send(&destination(), "a").await.is_err());
        assert!(mock.send(&destination(), "b").await.is_err());
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn clear_resets_state() {
        let mock = MockNotifier::failing(DeliveryError::Unauthorized);
        mock.send(&destination(), "a").await.ok();

        mock.clear();

        assert_eq!(mock.call_count(), 0);
        assert!(mock.send(&destination(), "b").await.is_ok());
    }
}
