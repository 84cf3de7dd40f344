//! Data models mirroring the OpenAI REST API schemas.
//!
//! One submodule per endpoint family, each holding the request/response pair
//! for that family. Every optional field is an `Option` (absent fields are
//! skipped on the wire, never sent as sentinels), and request DTOs round-trip
//! through JSON field-for-field.

pub mod audio;
pub mod catalog;
pub mod chat;
pub mod common;
pub mod completions;
pub mod edits;
pub mod embeddings;
pub mod files;
pub mod fine_tunes;
pub mod ids;
pub mod images;
pub mod moderations;

// Convenience re-exports for the most commonly used types.
pub use chat::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Role};
pub use common::Usage;
pub use ids::{
    AudioResponseFormat, EditsModelId, ImageResponseFormat, ImageSize, ModelId, ModerationModelId,
};
