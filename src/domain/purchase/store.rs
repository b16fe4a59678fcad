//! Marketplace display names.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Label used when the provider sends no store code at all.
pub const UNKNOWN_STORE_LABEL: &str = "Unknown store";

/// Store codes as sent by RevenueCat (and the RuStore relay) mapped to the
/// names operators know them by.
static STORE_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("APP_STORE", "App Store"),
        ("MAC_APP_STORE", "Mac App Store"),
        ("PLAY_STORE", "Google Play"),
        ("AMAZON", "Amazon Appstore"),
        ("STRIPE", "Stripe"),
        ("PROMOTIONAL", "RC Manual"),
        ("RU_STORE", "RuStore"),
    ])
});

/// Resolves a store code to its display name.
///
/// Unknown codes are returned unchanged; a blank code resolves to
/// [`UNKNOWN_STORE_LABEL`]. Never returns an empty string.
pub fn store_display_name(code: &str) -> &str {
    if code.trim().is_empty() {
        return UNKNOWN_STORE_LABEL;
    }
    match STORE_NAMES.get(code) {
        Some(name) => *name,
        None => code,
    }
}
