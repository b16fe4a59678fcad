//! Telegram notifier adapter.
//!
//! Implements the `Notifier` port with the Bot API, including:
//! - `sendMessage` with HTML parse mode
//! - Mapping of Bot API error envelopes to `DeliveryError`
//!
//! # Configuration
//!
//! Required environment variables:
//! - `PURCHASE_RELAY__TELEGRAM__BOT_TOKEN`: bot token
//! - `PURCHASE_RELAY__TELEGRAM__CHAT_ID`: chat receiving notifications

mod api_types;
mod telegram_notifier;

pub use api_types::{interpret_send_response, ApiResponse, SendMessageRequest, TelegramMessage};
pub use telegram_notifier::{TelegramConfig, TelegramNotifier, DEFAULT_API_BASE_URL};
