//! User-facing replies for requests the model does not answer.
//!
//! [`FailureKind::classify`] is the only place provider errors are turned
//! into reply categories. It trusts structured variants and status codes
//! first and only falls back to scanning error text for the markers older
//! OpenAI-compatible servers put in their messages.

use weatherchat_core::error::ProviderError;

/// Returned without contacting the model when the question is off-topic.
pub const OFF_TOPIC_REPLY: &str = "I'm a weather-specific assistant. I can only help with weather-related questions about cities and regions worldwide. Please ask me about weather, climate, seasons, or specific cities anywhere in the world.";

pub const CREDENTIAL_MISSING_REPLY: &str = "⚠️ OpenAI API key is not configured. Please add your OPENAI_API_KEY to the environment (or .env file) and restart the server.";
pub const CREDENTIAL_MALFORMED_REPLY: &str = "⚠️ Invalid OpenAI API key format. Please check your OPENAI_API_KEY setting.";
pub const AUTH_FAILED_REPLY: &str = "⚠️ Invalid or expired OpenAI API key. Please verify your API key is correct and has sufficient credits. Update it and restart the server.";
pub const RATE_LIMIT_REPLY: &str = "⚠️ Rate limit exceeded. Please wait a moment and try again.";
pub const PROVIDER_UNAVAILABLE_REPLY: &str = "⚠️ Unable to connect to OpenAI API. Please check your API key and internet connection, then try again.";
pub const UNKNOWN_FAILURE_REPLY: &str = "⚠️ Sorry, I encountered an error processing your request. Please try again in a moment.";

/// Category of a failed generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    CredentialMissing,
    CredentialMalformed,
    Authentication,
    RateLimit,
    /// Transport trouble or any other answer from the provider.
    ProviderUnavailable,
    /// Nothing identifies the provider as the source.
    Unknown,
}

impl FailureKind {
    pub fn classify(err: &ProviderError) -> Self {
        match err {
            ProviderError::MissingCredential => Self::CredentialMissing,
            ProviderError::MalformedCredential { .. } => Self::CredentialMalformed,
            ProviderError::AuthenticationFailed(_) => Self::Authentication,
            ProviderError::RateLimited { .. } => Self::RateLimit,
            ProviderError::ApiError {
                status_code,
                message,
            } => match *status_code {
                401 => Self::Authentication,
                429 => Self::RateLimit,
                _ => Self::from_message(message).unwrap_or(Self::ProviderUnavailable),
            },
            ProviderError::Network(_)
            | ProviderError::Timeout(_)
            | ProviderError::InvalidResponse(_) => Self::ProviderUnavailable,
            ProviderError::Internal(message) => Self::from_message(message).unwrap_or_else(|| {
                if message.contains("OpenAI") {
                    Self::ProviderUnavailable
                } else {
                    Self::Unknown
                }
            }),
        }
    }

    /// Last-resort text matching.
    fn from_message(message: &str) -> Option<Self> {
        if message.contains("401") || message.contains("Incorrect API key") {
            Some(Self::Authentication)
        } else if message.contains("429") {
            Some(Self::RateLimit)
        } else {
            None
        }
    }

    pub fn reply(&self) -> &'static str {
        match self {
            Self::CredentialMissing => CREDENTIAL_MISSING_REPLY,
            Self::CredentialMalformed => CREDENTIAL_MALFORMED_REPLY,
            Self::Authentication => AUTH_FAILED_REPLY,
            Self::RateLimit => RATE_LIMIT_REPLY,
            Self::ProviderUnavailable => PROVIDER_UNAVAILABLE_REPLY,
            Self::Unknown => UNKNOWN_FAILURE_REPLY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_variants_map_directly() {
        assert_eq!(
            FailureKind::classify(&ProviderError::MissingCredential),
            FailureKind::CredentialMissing
        );
        assert_eq!(
            FailureKind::classify(&ProviderError::MalformedCredential {
                expected_prefix: "sk-"
            }),
            FailureKind::CredentialMalformed
        );
        assert_eq!(
            FailureKind::classify(&ProviderError::AuthenticationFailed("nope".into())),
            FailureKind::Authentication
        );
        assert_eq!(
            FailureKind::classify(&ProviderError::RateLimited {
                retry_after_secs: Some(3)
            }),
            FailureKind::RateLimit
        );
    }

    #[test]
    fn transport_errors_are_provider_unavailable() {
        for err in [
            ProviderError::Network("connection refused".into()),
            ProviderError::Timeout("120s".into()),
            ProviderError::InvalidResponse("eof".into()),
            ProviderError::ApiError {
                status_code: 500,
                message: "boom".into(),
            },
        ] {
            assert_eq!(FailureKind::classify(&err), FailureKind::ProviderUnavailable);
        }
    }

    #[test]
    fn api_error_status_codes_win() {
        assert_eq!(
            FailureKind::classify(&ProviderError::ApiError {
                status_code: 401,
                message: String::new(),
            }),
            FailureKind::Authentication
        );
        assert_eq!(
            FailureKind::classify(&ProviderError::ApiError {
                status_code: 429,
                message: String::new(),
            }),
            FailureKind::RateLimit
        );
    }

    #[test]
    fn forbidden_is_provider_unavailable() {
        let err = ProviderError::ApiError {
            status_code: 403,
            message: "Country, region, or territory not supported".into(),
        };
        assert_eq!(FailureKind::classify(&err), FailureKind::ProviderUnavailable);
    }

    #[test]
    fn message_markers_are_a_fallback() {
        assert_eq!(
            FailureKind::classify(&ProviderError::ApiError {
                status_code: 400,
                message: "Incorrect API key provided".into(),
            }),
            FailureKind::Authentication
        );
        assert_eq!(
            FailureKind::classify(&ProviderError::Internal("upstream said 429".into())),
            FailureKind::RateLimit
        );
        assert_eq!(
            FailureKind::classify(&ProviderError::Internal("OpenAI client crashed".into())),
            FailureKind::ProviderUnavailable
        );
    }

    #[test]
    fn unidentified_internal_error_is_unknown() {
        let kind = FailureKind::classify(&ProviderError::Internal("disk full".into()));
        assert_eq!(kind, FailureKind::Unknown);
        assert_eq!(kind.reply(), UNKNOWN_FAILURE_REPLY);
    }

    #[test]
    fn every_kind_has_distinct_reply() {
        let kinds = [
            FailureKind::CredentialMissing,
            FailureKind::CredentialMalformed,
            FailureKind::Authentication,
            FailureKind::RateLimit,
            FailureKind::ProviderUnavailable,
            FailureKind::Unknown,
        ];
        let mut replies: Vec<_> = kinds.iter().map(FailureKind::reply).collect();
        replies.sort_unstable();
        replies.dedup();
        assert_eq!(replies.len(), kinds.len());
        assert!(replies.iter().all(|r| r.starts_with("⚠️")));
    }
}
