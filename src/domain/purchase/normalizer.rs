//! Event normalizer - decides whether a purchase event is worth a
//! notification and renders its text.
//!
//! The normalizer is pure: no I/O, no shared mutable state, same output for
//! the same event. Unsupported event types are filtered here (allow-list)
//! and never reach the formatter, so new provider event types cannot produce
//! half-formatted messages.
//!
//! # Message layout
//!
//! ```text
//! 🔁 Subscription renewed in <b>App Store</b> 🔁
//!
//! Price: $9.99
//! Country: 🇺🇸 United States (US)
//! Product: pro_monthly
//! Renewals: 3
//! ```
//!
//! Detail lines appear only when the field is present, always in this order.
//! The price line is never rendered for cancellations. Text is meant for
//! HTML parse mode, so provider-supplied strings are escaped.

use std::sync::Arc;

use super::country::{CountryDirectory, RawCountryCodes};
use super::event::PurchaseEvent;
use super::locale::Locale;
use super::store::store_display_name;

/// Outcome of normalizing a purchase event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationDecision {
    /// Event type is not one the relay notifies about.
    Skip,
    /// Notification text to deliver.
    Emit(String),
}

impl NotificationDecision {
    pub fn is_skip(&self) -> bool {
        matches!(self, NotificationDecision::Skip)
    }

    /// Returns the rendered text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            NotificationDecision::Skip => None,
            NotificationDecision::Emit(text) => Some(text),
        }
    }
}

/// Maps purchase events to notification text.
#[derive(Clone)]
pub struct EventNormalizer {
    locale: Locale,
    countries: Arc<dyn CountryDirectory>,
}

impl EventNormalizer {
    pub fn new(locale: Locale, countries: Arc<dyn CountryDirectory>) -> Self {
        Self { locale, countries }
    }

    /// Normalizer that renders country codes without enrichment.
    pub fn without_country_names(locale: Locale) -> Self {
        Self::new(locale, Arc::new(RawCountryCodes))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Decides whether `event` produces a notification and renders it.
    pub fn normalize(&self, event: &PurchaseEvent) -> NotificationDecision {
        let event_type = event.event_type();
        if !event_type.is_supported() {
            return NotificationDecision::Skip;
        }
        let Some((icon, verb)) = self.locale.header(event_type) else {
            return NotificationDecision::Skip;
        };

        let labels = self.locale.labels();
        let store = escape_html(store_display_name(event.store()));
        let mut details = Vec::new();

        if let Some(price) = event.price() {
            if !event_type.is_cancellation() {
                details.push(format!("{}: ${:.2}", labels.price, price));
            }
        }

        if let Some(code) = event.country_code() {
            details.push(format!("{}: {}", labels.country, self.render_country(code)));
        }

        if let Some(product_id) = event.product_id() {
            details.push(format!("{}: {}", labels.product, escape_html(product_id)));
        }

        if let Some(renewal_number) = event.renewal_number() {
            details.push(format!("{}: {}", labels.renewals, renewal_number));
        }

        let mut lines = vec![format!("{icon} {verb} <b>{store}</b> {icon}")];
        if !details.is_empty() {
            lines.push(String::new());
            lines.extend(details);
        }

        NotificationDecision::Emit(lines.join("\n"))
    }

    fn render_country(&self, code: &str) -> String {
        let code = code.trim();
        match self.countries.lookup(code, self.locale) {
            Some(info) => format!(
                "{} {} ({})",
                info.flag,
                escape_html(&info.name),
                escape_html(code)
            ),
            None => escape_html(code),
        }
    }
}

impl std::fmt::Debug for EventNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventNormalizer")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

/// Escapes the characters Telegram's HTML parse mode treats as markup.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}
