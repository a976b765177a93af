//! LLM provider implementations for weatherchat.
//!
//! [`OpenAiCompatProvider`] implements `weatherchat_core::Provider` over any
//! OpenAI-compatible `/chat/completions` endpoint. [`CredentialGate`] checks
//! the configured key before a client is ever built.

pub mod credentials;
pub mod openai_compat;

pub use credentials::{CredentialGate, EXPECTED_KEY_PREFIX};
pub use openai_compat::OpenAiCompatProvider;
