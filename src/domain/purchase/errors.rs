//! Purchase event construction errors.

use thiserror::Error;

/// Errors raised while building a [`super::PurchaseEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseEventError {
    #[error("Event type cannot be empty")]
    EmptyEventType,
}
