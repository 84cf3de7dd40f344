use serde::{Deserialize, Serialize};

/// Token accounting attached to most completion-style responses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: i64,
    #[serde(default)]
    pub completion_tokens: i64,
    pub total_tokens: i64,
}
