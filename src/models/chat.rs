//! Chat Completions request/response models.
//!
//! `POST /v1/chat/completions`; see
//! <https://platform.openai.com/docs/api-reference/chat>.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::models::common::Usage;

/// Author of a chat message, lowercase on the wire.
///
/// - `System` sets the assistant's behavior ("You are a french teacher").
/// - `User` is the caller's turn.
/// - `Assistant` is the model's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One turn of a conversation. Immutable once created; ordering within a
/// transcript is the conversation order.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    /// Display name of the author in a multi-user chat.
    pub name: Option<String>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            name: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Chat Completions request. `Default` carries the documented sampling
/// defaults (temperature 1, top_p 1, n 1, penalties 0, streaming disabled);
/// `model` and `messages` are filled in by the caller.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature, 0..=2. Alter this or `top_p`, not both.
    pub temperature: f64,
    /// Nucleus sampling mass, 0..=1.
    pub top_p: f64,
    /// How many completion choices to generate per input.
    pub n: u32,
    /// Partial message deltas over SSE. Not supported by this client:
    /// requesting it fails before any network call.
    pub stream: bool,
    /// Cap on generated tokens; the vendor default is the model's remaining
    /// context.
    pub max_tokens: Option<i64>,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
    /// End-user identifier for abuse monitoring.
    pub user: Option<String>,
}

impl Default for ChatCompletionRequest {
    fn default() -> Self {
        Self {
            model: String::new(),
            messages: Vec::new(),
            temperature: 1.0,
            top_p: 1.0,
            n: 1,
            stream: false,
            max_tokens: None,
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
            user: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponseMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
    #[serde(default)]
    pub index: i64,
}

/// Chat Completions response envelope. Metadata fields default so partial
/// vendor payloads still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    pub usage: Option<Usage>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, or the empty string when the vendor returned
    /// no choices.
    pub fn text(&self) -> &str {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .unwrap_or("")
    }
}
