//! Shared-secret API key credential.

use secrecy::{ExposeSecret, SecretString};

/// Errors that can occur when constructing an [`ApiKey`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ApiKeyError {
    /// The configured key is empty.
    #[error("API key cannot be empty")]
    Empty,
}

/// The static shared secret required to access protected routes.
///
/// Fixed at process start and never rotated at runtime. Comparison against a
/// request-supplied value is exact: case-sensitive, no hashing. The secret
/// is held in a [`SecretString`] and redacted from `Debug` output.
#[derive(Clone)]
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Create an `ApiKey` from the configured secret value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ApiKeyError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ApiKeyError::Empty);
        }
        Ok(Self(SecretString::from(value)))
    }

    /// Compare a request-supplied credential against the configured secret.
    ///
    /// An absent credential never matches. Pure comparison, no side effects.
    #[must_use]
    pub fn matches(&self, supplied: Option<&str>) -> bool {
        supplied.is_some_and(|candidate| candidate == self.0.expose_secret())
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}
