//! Chat orchestration: validate → classify → short-circuit or generate → respond.
//!
//! Only two outcomes escape as errors: a request without a trailing user
//! turn and a completion with no text. Every provider failure is logged and turned into a
//! friendly reply.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info};

use weatherchat_config::{AppConfig, ChatConfig};
use weatherchat_core::error::ProviderError;
use weatherchat_core::message::{Message, Role};
use weatherchat_core::provider::{ProviderRequest, ProviderSource};
use weatherchat_providers::CredentialGate;

use crate::classifier::{self, Classification};
use crate::prompt::build_system_prompt;
use crate::replies::{FailureKind, OFF_TOPIC_REPLY, UNKNOWN_FAILURE_REPLY};

pub const MESSAGES_REQUIRED: &str = "Invalid request. 'messages' array is required.";
pub const LAST_MESSAGE_NOT_USER: &str = "Last message must be from user.";
pub const EMPTY_COMPLETION: &str = "No response from AI model.";

#[derive(Debug, Error)]
pub enum ChatError {
    /// The caller must fix the payload.
    #[error("{0}")]
    InvalidRequest(String),

    /// The provider answered but produced no usable text.
    #[error("No response from AI model.")]
    EmptyCompletion,
}

/// Completion parameters sent with every model call.
#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self::from(&ChatConfig::default())
    }
}

impl From<&ChatConfig> for ChatSettings {
    fn from(config: &ChatConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Model,
    OffTopic,
    Failure(FailureKind),
}

#[derive(Debug, Clone)]
pub struct ChatReply {
    pub reply: String,
    pub source: ReplySource,
}

/// Answers one chat turn. Holds no per-conversation state.
pub struct WeatherChat {
    source: Arc<dyn ProviderSource>,
    settings: ChatSettings,
    knowledge: String,
}

impl WeatherChat {
    pub fn new(source: Arc<dyn ProviderSource>, settings: ChatSettings) -> Self {
        Self {
            source,
            settings,
            knowledge: weatherchat_knowledge::render_all(),
        }
    }

    /// Wire the orchestrator to the real OpenAI client behind a credential gate.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(CredentialGate::from_config(config)),
            ChatSettings::from(&config.chat),
        )
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    /// Validate a loosely-typed `messages` field and answer it.
    ///
    /// An element that is not a `{role, content}` pair is not a caller error:
    /// it gets the generic failure reply with a 2xx.
    pub async fn handle(&self, messages: Option<&Value>) -> Result<ChatReply, ChatError> {
        let items = validate_messages(messages)?;
        match parse_messages(items) {
            Ok(messages) => self.respond_on(messages, Local::now().date_naive()).await,
            Err(reason) => {
                error!(reason = %reason, "Malformed chat message");
                Ok(ChatReply {
                    reply: UNKNOWN_FAILURE_REPLY.into(),
                    source: ReplySource::Failure(FailureKind::Unknown),
                })
            }
        }
    }

    /// Answer an already-typed conversation, dated today.
    pub async fn respond(&self, messages: Vec<Message>) -> Result<ChatReply, ChatError> {
        self.respond_on(messages, Local::now().date_naive()).await
    }

    /// Answer a conversation as if today were `today`.
    pub async fn respond_on(
        &self,
        messages: Vec<Message>,
        today: NaiveDate,
    ) -> Result<ChatReply, ChatError> {
        let last = match messages.last() {
            Some(m) if m.role == Role::User => m,
            _ => return Err(ChatError::InvalidRequest(LAST_MESSAGE_NOT_USER.into())),
        };

        let classification = classifier::classify(&last.content);
        debug!(
            is_greeting = classification.is_greeting,
            is_non_weather = classification.is_non_weather,
            "Classified user message"
        );

        if classification.is_off_topic() {
            info!("Off-topic request answered without the model");
            return Ok(ChatReply {
                reply: OFF_TOPIC_REPLY.into(),
                source: ReplySource::OffTopic,
            });
        }

        match self.generate(messages, today, classification).await {
            Ok(Some(text)) => Ok(ChatReply {
                reply: text,
                source: ReplySource::Model,
            }),
            Ok(None) => {
                error!("Provider returned no completion text");
                Err(ChatError::EmptyCompletion)
            }
            Err(err) => {
                let kind = FailureKind::classify(&err);
                error!(error = %err, kind = ?kind, "Weather chat generation failed");
                Ok(ChatReply {
                    reply: kind.reply().into(),
                    source: ReplySource::Failure(kind),
                })
            }
        }
    }

    async fn generate(
        &self,
        messages: Vec<Message>,
        today: NaiveDate,
        classification: Classification,
    ) -> Result<Option<String>, ProviderError> {
        let provider = self.source.get_client()?;

        let mut conversation = Vec::with_capacity(messages.len() + 1);
        conversation.push(Message::system(build_system_prompt(today, &self.knowledge)));
        conversation.extend(messages);

        info!(
            provider = %provider.name(),
            model = %self.settings.model,
            messages = conversation.len(),
            greeting = classification.is_greeting,
            "Requesting completion"
        );

        let response = provider
            .complete(ProviderRequest {
                model: self.settings.model.clone(),
                messages: conversation,
                temperature: self.settings.temperature,
                max_tokens: Some(self.settings.max_tokens),
            })
            .await?;

        Ok(response.content.filter(|text| !text.is_empty()))
    }
}

/// Check the shape of the inbound `messages` field.
///
/// Missing, null or non-array → [`MESSAGES_REQUIRED`]; empty or not ending
/// with a user turn → [`LAST_MESSAGE_NOT_USER`]. Nothing else is rejected.
pub fn validate_messages(raw: Option<&Value>) -> Result<&[Value], ChatError> {
    let items = raw
        .and_then(Value::as_array)
        .ok_or_else(|| ChatError::InvalidRequest(MESSAGES_REQUIRED.into()))?;

    let last_is_user = items
        .last()
        .and_then(|m| m.get("role"))
        .and_then(Value::as_str)
        == Some(Role::User.as_str());
    if !last_is_user {
        return Err(ChatError::InvalidRequest(LAST_MESSAGE_NOT_USER.into()));
    }

    Ok(items.as_slice())
}

/// Type every element as a [`Message`]; the error names the first bad index.
pub fn parse_messages(items: &[Value]) -> Result<Vec<Message>, String> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            Message::deserialize(item).map_err(|e| format!("message {i}: {e}"))
        })
        .collect()
}
