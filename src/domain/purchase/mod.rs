//! Purchase events and their notification text.
//!
//! - `PurchaseEvent` - provider-agnostic event decoded by a webhook adapter
//! - `PurchaseEventType` - lifecycle tag (allow-listed types plus `Other`)
//! - `EventNormalizer` - pure mapping from event to `NotificationDecision`
//! - `CountryDirectory` - pluggable country name/flag enrichment

mod country;
mod errors;
mod event;
mod event_type;
mod locale;
mod normalizer;
mod store;

pub use country::{flag_emoji, CountryDirectory, CountryInfo, RawCountryCodes};
pub use errors::PurchaseEventError;
pub use event::PurchaseEvent;
pub use event_type::PurchaseEventType;
pub use locale::Locale;
pub use normalizer::{escape_html, EventNormalizer, NotificationDecision};
pub use store::{store_display_name, UNKNOWN_STORE_LABEL};
