//! Provider error taxonomy.
//!
//! Callers react to the category (credential, auth, rate limit, transport)
//! without parsing text.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// No credential configured, or the credential is the sample placeholder.
    #[error("Provider credential is not configured")]
    MissingCredential,

    /// A credential is present but does not follow the provider's key format.
    #[error("Provider credential is malformed (expected prefix '{expected_prefix}')")]
    MalformedCredential { expected_prefix: &'static str },

    /// The provider rejected the key (HTTP 401).
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rate limited by provider")]
    RateLimited { retry_after_secs: Option<u64> },

    /// Any other non-success status, 403 included.
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("Internal provider error: {0}")]
    Internal(String),
}
