//! Request handling for the weather chat assistant.
//!
//! Each turn runs **validate → classify → short-circuit or generate**:
//!
//! 1. **Validate** the inbound message list
//! 2. **Classify** the latest user message with [`classifier::classify`]
//! 3. **Short-circuit** clearly off-topic questions with a fixed redirect
//! 4. **Generate** otherwise: system prompt + full history to the provider
//!
//! Provider failures never escape as errors. They are mapped by
//! [`FailureKind::classify`] to a friendly reply.

pub mod classifier;
pub mod orchestrator;
pub mod prompt;
pub mod replies;

pub use classifier::{Classification, classify};
pub use orchestrator::{
    ChatError, ChatReply, ChatSettings, ReplySource, WeatherChat, parse_messages, validate_messages,
};
pub use prompt::{Season, build_system_prompt};
pub use replies::{FailureKind, OFF_TOPIC_REPLY};
