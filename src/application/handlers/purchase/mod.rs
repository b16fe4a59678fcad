//! Purchase notification handlers.
//!
//! ## Commands
//! - Notifying the operator chat about a purchase lifecycle event

mod send_purchase_notification;

pub use send_purchase_notification::{
    SendPurchaseNotificationCommand, SendPurchaseNotificationHandler,
    SendPurchaseNotificationResult,
};
