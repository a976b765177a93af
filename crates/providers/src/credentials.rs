//! Client credential gate.
//!
//! Validates the configured provider key before any client is built:
//! a missing or placeholder key is [`ProviderError::MissingCredential`],
//! a key without the `sk-` prefix is [`ProviderError::MalformedCredential`].
//! The validated client is memoised so all requests share one connection
//! pool.

use std::sync::{Arc, OnceLock};

use tracing::info;
use weatherchat_config::{AppConfig, PLACEHOLDER_API_KEY};
use weatherchat_core::error::ProviderError;
use weatherchat_core::provider::{Provider, ProviderSource};

use crate::openai_compat::OpenAiCompatProvider;

/// Every OpenAI secret key starts with this.
pub const EXPECTED_KEY_PREFIX: &str = "sk-";

const KEY_PREVIEW_CHARS: usize = 5;

pub struct CredentialGate {
    api_key: Option<String>,
    base_url: String,
    dev_mode: bool,
    client: OnceLock<Arc<dyn Provider>>,
}

impl CredentialGate {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>, dev_mode: bool) -> Self {
        Self {
            api_key: api_key.map(|k| k.trim().to_string()),
            base_url: base_url.into(),
            dev_mode,
            client: OnceLock::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_key.clone(), &config.api_url, config.dev_mode)
    }

    /// Check the key without building a client.
    pub fn validate(&self) -> Result<&str, ProviderError> {
        if self.dev_mode {
            self.log_key_diagnostics();
        }

        let key = match self.api_key.as_deref() {
            Some(k) if !k.is_empty() && k != PLACEHOLDER_API_KEY => k,
            _ => return Err(ProviderError::MissingCredential),
        };

        if !key.starts_with(EXPECTED_KEY_PREFIX) {
            return Err(ProviderError::MalformedCredential {
                expected_prefix: EXPECTED_KEY_PREFIX,
            });
        }

        Ok(key)
    }

    /// Presence, length and a five-character prefix. Never the key itself.
    fn log_key_diagnostics(&self) {
        let key = self.api_key.as_deref().unwrap_or_default();
        info!(
            exists = !key.is_empty(),
            length = key.len(),
            starts_with = %key_preview(key),
            "API key check"
        );
    }
}

/// At most the first [`KEY_PREVIEW_CHARS`] characters, or `none`.
fn key_preview(key: &str) -> String {
    if key.is_empty() {
        "none".into()
    } else {
        key.chars().take(KEY_PREVIEW_CHARS).collect()
    }
}

impl ProviderSource for CredentialGate {
    fn get_client(&self) -> Result<Arc<dyn Provider>, ProviderError> {
        let key = self.validate()?;

        if let Some(client) = self.client.get() {
            return Ok(client.clone());
        }

        let provider: Arc<dyn Provider> =
            Arc::new(OpenAiCompatProvider::new("openai", &self.base_url, key)?);
        // A concurrent caller may have won the race; either client is fine.
        let _ = self.client.set(provider.clone());
        Ok(self.client.get().cloned().unwrap_or(provider))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(key: Option<&str>) -> CredentialGate {
        CredentialGate::new(key.map(String::from), "https://api.openai.com/v1", false)
    }

    #[test]
    fn missing_key_is_not_configured() {
        assert!(matches!(
            gate(None).get_client().err(),
            Some(ProviderError::MissingCredential)
        ));
        assert!(matches!(
            gate(Some("   ")).get_client().err(),
            Some(ProviderError::MissingCredential)
        ));
    }

    #[test]
    fn placeholder_key_is_not_configured() {
        assert!(matches!(
            gate(Some(PLACEHOLDER_API_KEY)).get_client().err(),
            Some(ProviderError::MissingCredential)
        ));
    }

    #[test]
    fn key_without_prefix_is_malformed() {
        assert!(matches!(
            gate(Some("pk-12345")).get_client().err(),
            Some(ProviderError::MalformedCredential { expected_prefix: "sk-" })
        ));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(gate(Some("  sk-abc \n")).validate().unwrap(), "sk-abc");
    }

    #[test]
    fn valid_key_builds_openai_client() {
        let client = gate(Some("sk-abc")).get_client().unwrap();
        assert_eq!(client.name(), "openai");
    }

    #[test]
    fn client_is_memoised() {
        let gate = gate(Some("sk-abc"));
        let first = gate.get_client().unwrap();
        let second = gate.get_client().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn dev_mode_still_validates() {
        let gate = CredentialGate::new(Some("bad".into()), "http://localhost", true);
        assert!(gate.validate().is_err());
    }

    #[test]
    fn key_preview_never_reveals_more_than_prefix() {
        let key = "sk-proj-abcdefghijklmnopqrstuvwxyz0123456789";
        let preview = key_preview(key);
        assert_eq!(preview, "sk-pr");
        assert!(!preview.contains("abcdef"));

        assert_eq!(key_preview(""), "none");
        assert_eq!(key_preview("sk-a"), "sk-a");
        assert_eq!(key_preview("ключ-секрет"), "ключ-");
    }

    #[test]
    fn from_config_uses_api_url_and_key() {
        let config = AppConfig {
            api_key: Some("sk-from-config".into()),
            api_url: "http://localhost:9999/v1".into(),
            ..AppConfig::default()
        };
        let gate = CredentialGate::from_config(&config);
        assert_eq!(gate.validate().unwrap(), "sk-from-config");
        assert_eq!(gate.base_url, "http://localhost:9999/v1");
    }
}
