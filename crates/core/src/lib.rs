//! # weatherchat core
//!
//! Domain types, traits, and error definitions shared by every weatherchat
//! crate. Nothing here performs I/O.

pub mod error;
pub mod message;
pub mod provider;

// Re-export key types at crate root for ergonomics
pub use error::ProviderError;
pub use message::{Message, Role};
pub use provider::{Provider, ProviderRequest, ProviderResponse, ProviderSource, Usage};
