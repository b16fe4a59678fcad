//! Country enrichment for notification messages.
//!
//! The normalizer renders a country line from the raw ISO code. When a
//! [`CountryDirectory`] knows the code it adds a flag glyph and a localized
//! name; otherwise the raw code is shown as-is.

use super::locale::Locale;

/// Human-friendly rendering data for a country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryInfo {
    /// Localized country name.
    pub name: String,
    /// Flag emoji built from regional indicator symbols.
    pub flag: String,
}

/// Lookup of country names and flags by ISO 3166-1 alpha-2 code.
///
/// Implementations must be cheap and side-effect free; the normalizer calls
/// them synchronously while rendering.
pub trait CountryDirectory: Send + Sync {
    /// Returns rendering data for `code`, or `None` if the code is unknown.
    fn lookup(&self, code: &str, locale: Locale) -> Option<CountryInfo>;
}

/// Directory that knows no countries, so every code renders raw.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawCountryCodes;

impl CountryDirectory for RawCountryCodes {
    fn lookup(&self, _code: &str, _locale: Locale) -> Option<CountryInfo> {
        None
    }
}

/// Builds the flag emoji for a two-letter country code.
///
/// Returns `None` unless `code` is exactly two ASCII letters.
pub fn flag_emoji(code: &str) -> Option<String> {
    const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

    let code = code.trim();
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    code.chars()
        .map(|c| {
            let offset = c.to_ascii_uppercase() as u32 - 'A' as u32;
            char::from_u32(REGIONAL_INDICATOR_A + offset)
        })
        .collect()
}
