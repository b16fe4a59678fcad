//! Transport-independent notifier adapters.
//!
//! - `LoggingNotifier` - development fallback, writes messages to the log
//! - `MockNotifier` - call recording and error injection for tests

mod logging_notifier;
mod mock_notifier;

pub use logging_notifier::LoggingNotifier;
pub use mock_notifier::{MockNotifier, SentMessage};
