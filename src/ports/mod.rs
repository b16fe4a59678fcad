//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Notifier` - Delivers a rendered message to a chat destination

mod notifier;

pub use notifier::{DeliveryError, DeliveryReceipt, NotificationDestination, Notifier};
