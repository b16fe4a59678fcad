//! Telegram Bot API wire types.
//!
//! Only the parts of `sendMessage` the relay uses. Every Bot API response
//! is wrapped in the same envelope:
//!
//! ```text
//! {"ok": true, "result": {...}}
//! {"ok": false, "error_code": 429, "description": "...", "parameters": {"retry_after": 5}}
//! ```

use serde::{Deserialize, Serialize};

use crate::ports::{DeliveryError, DeliveryReceipt};

/// Body of a `sendMessage` call.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
    pub parse_mode: &'static str,
    pub disable_web_page_preview: bool,
}

impl<'a> SendMessageRequest<'a> {
    /// HTML-formatted message without link previews.
    pub fn html(chat_id: &'a str, text: &'a str) -> Self {
        Self {
            chat_id,
            text,
            parse_mode: "HTML",
            disable_web_page_preview: true,
        }
    }
}

/// Response envelope shared by all Bot API methods.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub error_code: Option<u16>,
    pub description: Option<String>,
    pub parameters: Option<ResponseParameters>,
}

/// Extra details attached to some errors.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseParameters {
    pub retry_after: Option<u64>,
}

/// The subset of a `Message` object we read back.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramMessage {
    pub message_id: i64,
}

/// Maps an HTTP status and the decoded envelope to a delivery outcome.
pub fn interpret_send_response(
    status: u16,
    response: ApiResponse<TelegramMessage>,
) -> Result<DeliveryReceipt, DeliveryError> {
    if response.ok {
        return match response.result {
            Some(message) => Ok(DeliveryReceipt::with_message_id(message.message_id)),
            None => Err(DeliveryError::InvalidResponse(
                "ok response without result".to_string(),
            )),
        };
    }

    let code = response.error_code.unwrap_or(status);
    let description = response
        .description
        .unwrap_or_else(|| "no description".to_string());

    match code {
        401 => Err(DeliveryError::Unauthorized),
        429 => Err(DeliveryError::RateLimited {
            retry_after_secs: response.parameters.and_then(|p| p.retry_after),
        }),
        _ => Err(DeliveryError::Rejected {
            status: code,
            description,
        }),
    }
}
