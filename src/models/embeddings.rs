//! Embeddings request/response models.
//!
//! `POST /v1/embeddings`; see
//! <https://platform.openai.com/docs/api-reference/embeddings>.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Embeddings request. Input must not exceed 8192 tokens.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingRequest {
    pub model: String,
    pub input: String,
    pub user: Option<String>,
}

impl EmbeddingRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            model: "text-embedding-ada-002".to_owned(),
            input: input.into(),
            user: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingData {
    #[serde(default)]
    pub index: i64,
    #[serde(default)]
    pub object: String,
    pub embedding: Vec<f32>,
}

/// Embeddings usage has no completion tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmbeddingUsage {
    pub prompt_tokens: i64,
    pub total_tokens: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub data: Vec<EmbeddingData>,
    pub usage: Option<EmbeddingUsage>,
}
