//! Bearer token check for RevenueCat webhooks.
//!
//! RevenueCat sends the configured authorization value verbatim in the
//! `Authorization` header. The header must split into exactly two
//! space-separated parts; the second part is compared to the secret in
//! constant time.

use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;
use thiserror::Error;

/// Why a webhook request failed authentication.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebhookAuthError {
    #[error("Missing Authorization header")]
    MissingHeader,

    #[error("Malformed Authorization header")]
    MalformedHeader,

    #[error("Bearer token does not match")]
    TokenMismatch,
}

/// Verifies `Authorization: Bearer <token>` headers.
#[derive(Clone)]
pub struct BearerTokenVerifier {
    token: SecretString,
}

impl BearerTokenVerifier {
    pub fn new(token: SecretString) -> Self {
        Self { token }
    }

    /// Checks a raw header value.
    pub fn verify(&self, header: Option<&str>) -> Result<(), WebhookAuthError> {
        let header = match header {
            Some(value) if !value.is_empty() => value,
            _ => return Err(WebhookAuthError::MissingHeader),
        };

        let parts: Vec<&str> = header.split(' ').collect();
        if parts.len() != 2 {
            return Err(WebhookAuthError::MalformedHeader);
        }

        let presented = parts[1].trim();
        let expected = self.token.expose_secret();
        if presented.as_bytes().ct_eq(expected.as_bytes()).into() {
            Ok(())
        } else {
            Err(WebhookAuthError::TokenMismatch)
        }
    }
}

impl std::fmt::Debug for BearerTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenVerifier")
            .field("token", &"[REDACTED]")
            .finish()
    }
}
