//! Text completions request/response models.
//!
//! `POST /v1/completions`; see
//! <https://platform.openai.com/docs/api-reference/completions>.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::models::common::Usage;

/// Completions request. `Default` matches the vendor documentation:
/// `text-davinci-003`, 16 max tokens, temperature 1, top_p 1, n 1, best_of 1.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    /// Prompt encoded as a single string. `<|endoftext|>` is the document
    /// separator the model saw during training.
    pub prompt: String,
    /// Suffix that comes after a completion of inserted text.
    pub suffix: Option<String>,
    /// Prompt tokens plus `max_tokens` cannot exceed the model context length.
    pub max_tokens: i64,
    pub temperature: f64,
    pub top_p: f64,
    pub n: u32,
    /// Echo back the prompt in addition to the completion.
    pub echo: bool,
    /// Sequence where generation stops; not included in the returned text.
    pub stop: Option<String>,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
    /// Generates `best_of` completions server-side and returns the best.
    /// Must be greater than `n` when both are set.
    pub best_of: u32,
    pub user: Option<String>,
}

impl Default for CompletionRequest {
    fn default() -> Self {
        Self {
            model: "text-davinci-003".to_owned(),
            prompt: String::new(),
            suffix: None,
            max_tokens: 16,
            temperature: 1.0,
            top_p: 1.0,
            n: 1,
            echo: false,
            stop: None,
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
            best_of: 1,
            user: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionChoice {
    pub text: String,
    #[serde(default)]
    pub index: i64,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
    pub usage: Option<Usage>,
}

impl CompletionResponse {
    /// Text of the first choice, or the empty string when there is none.
    pub fn text(&self) -> &str {
        self.choices
            .first()
            .map(|choice| choice.text.as_str())
            .unwrap_or("")
    }
}
