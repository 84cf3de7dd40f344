//! Moderations request/response models.
//!
//! `POST /v1/moderations`; see
//! <https://platform.openai.com/docs/api-reference/moderations>.
//!
//! Several category names contain `/` or `-` on the wire, so every field is
//! renamed explicitly rather than relying on a rename_all rule.

use serde::{Deserialize, Serialize};

use crate::models::ids::ModerationModelId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationRequest {
    /// The text to classify.
    pub input: String,
    pub model: String,
}

impl ModerationRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self::with_model(input, ModerationModelId::TextModerationLatest)
    }

    pub fn with_model(input: impl Into<String>, model: ModerationModelId) -> Self {
        Self {
            input: input.into(),
            model: model.as_str().to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationCategories {
    pub hate: bool,
    #[serde(rename = "hate/threatening")]
    pub hate_threatening: bool,
    #[serde(rename = "self-harm")]
    pub self_harm: bool,
    pub sexual: bool,
    #[serde(rename = "sexual/minors")]
    pub sexual_minors: bool,
    pub violence: bool,
    #[serde(rename = "violence/graphic")]
    pub violence_graphic: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationCategoryScores {
    pub hate: f32,
    #[serde(rename = "hate/threatening")]
    pub hate_threatening: f32,
    #[serde(rename = "self-harm")]
    pub self_harm: f32,
    pub sexual: f32,
    #[serde(rename = "sexual/minors")]
    pub sexual_minors: f32,
    pub violence: f32,
    #[serde(rename = "violence/graphic")]
    pub violence_graphic: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationResult {
    pub flagged: bool,
    pub categories: ModerationCategories,
    pub category_scores: ModerationCategoryScores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub results: Vec<ModerationResult>,
}
