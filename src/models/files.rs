//! File storage models.
//!
//! `GET/POST/DELETE /v1/files`; see
//! <https://platform.openai.com/docs/api-reference/files>.

use serde::{Deserialize, Serialize};

/// A file stored by the vendor, typically JSON Lines training data uploaded
/// with purpose `fine-tune`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAiFile {
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub bytes: i64,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilesResponse {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub data: Vec<OpenAiFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDeleteResponse {
    pub id: String,
    #[serde(default)]
    pub object: String,
    pub deleted: bool,
}
