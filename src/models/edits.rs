//! Edits request/response models.
//!
//! `POST /v1/edits`; see <https://platform.openai.com/docs/api-reference/edits>.

use serde::{Deserialize, Serialize};

use crate::models::common::Usage;

/// Edits request. `Default` uses `text-davinci-edit-001` with one edit at the
/// documented sampling defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditRequest {
    pub model: String,
    /// Starting text, e.g. "What day of the wek is it?".
    pub input: String,
    /// How to edit it, e.g. "Fix the spelling mistakes.".
    pub instruction: String,
    pub n: u32,
    pub temperature: f64,
    pub top_p: f64,
}

impl Default for EditRequest {
    fn default() -> Self {
        Self {
            model: "text-davinci-edit-001".to_owned(),
            input: String::new(),
            instruction: String::new(),
            n: 1,
            temperature: 1.0,
            top_p: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditChoice {
    pub text: String,
    #[serde(default)]
    pub index: i64,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditResponse {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub choices: Vec<EditChoice>,
    pub usage: Option<Usage>,
}
