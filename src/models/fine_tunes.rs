//! Fine-tune job models.
//!
//! `POST/GET /v1/fine-tunes` and friends; see
//! <https://platform.openai.com/docs/api-reference/fine-tunes>.
//!
//! Only `training_file` is required on create; everything else defaults
//! server-side, so optional fields are omitted from the JSON body entirely.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::models::files::OpenAiFile;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FineTuneRequest {
    /// ID of an uploaded JSON Lines file with purpose `fine-tune`.
    pub training_file: String,
    pub validation_file: Option<String>,
    /// Base model to fine-tune; defaults to `curie` server-side.
    pub model: Option<String>,
    pub n_epochs: Option<i64>,
    pub batch_size: Option<i64>,
    pub learning_rate_multiplier: Option<f64>,
    pub prompt_loss_weight: Option<f64>,
    pub compute_classification_metrics: Option<bool>,
    pub classification_n_classes: Option<i64>,
    pub classification_positive_class: Option<String>,
    pub classification_betas: Option<Vec<f64>>,
    /// Up to 40 characters appended to the fine-tuned model name.
    pub suffix: Option<String>,
}

impl FineTuneRequest {
    pub fn new(training_file: impl Into<String>) -> Self {
        Self {
            training_file: training_file.into(),
            validation_file: None,
            model: None,
            n_epochs: None,
            batch_size: None,
            learning_rate_multiplier: None,
            prompt_loss_weight: None,
            compute_classification_metrics: None,
            classification_n_classes: None,
            classification_positive_class: None,
            classification_betas: None,
            suffix: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FineTuneEvent {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub message: String,
}

/// Hyperparameters echoed back by the vendor. Fields the job has not
/// resolved yet come back null.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HyperParams {
    #[serde(default)]
    pub batch_size: Option<i64>,
    #[serde(default)]
    pub learning_rate_multiplier: Option<f64>,
    #[serde(default)]
    pub n_epochs: Option<i64>,
    #[serde(default)]
    pub prompt_loss_weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FineTune {
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub organization_id: String,
    #[serde(default)]
    pub fine_tuned_model: Option<String>,
    #[serde(default)]
    pub hyperparams: HyperParams,
    #[serde(default)]
    pub training_files: Vec<OpenAiFile>,
    #[serde(default)]
    pub validation_files: Vec<OpenAiFile>,
    #[serde(default)]
    pub result_files: Vec<OpenAiFile>,
    #[serde(default)]
    pub events: Vec<FineTuneEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListFineTunesResponse {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub data: Vec<FineTune>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFineTuneEventsResponse {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub data: Vec<FineTuneEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_contains_only_set_fields() {
        let req = FineTuneRequest::new("file-abc123");
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "training_file": "file-abc123" })
        );
    }
}
