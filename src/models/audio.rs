//! Audio transcription/translation models.
//!
//! `POST /v1/audio/{transcriptions,translations}`; see
//! <https://platform.openai.com/docs/api-reference/audio>.
//!
//! Both endpoints take multipart uploads; the audio payload is a raw byte
//! buffer (mp3, mp4, mpeg, mpga, m4a, wav or webm) passed through untouched.

use serde::{Deserialize, Serialize};

use crate::models::ids::AudioResponseFormat;

/// Transcribe audio into its own language.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioTranscriptionRequest {
    pub file: Vec<u8>,
    /// Filename forwarded in the multipart form; its extension tells the
    /// vendor the container format.
    pub filename: String,
    /// Only `whisper-1` is currently available.
    pub model: String,
    pub response_format: AudioResponseFormat,
    /// Optional text to guide the model's style or continue a previous
    /// segment; should match the audio language.
    pub prompt: Option<String>,
    /// Sampling temperature, 0..=1. At 0 the vendor auto-tunes it.
    pub temperature: f32,
    /// ISO-639-1 language of the input audio; improves accuracy and latency.
    pub language: Option<String>,
}

impl AudioTranscriptionRequest {
    pub fn new(file: Vec<u8>, filename: impl Into<String>) -> Self {
        Self {
            file,
            filename: filename.into(),
            model: "whisper-1".to_owned(),
            response_format: AudioResponseFormat::Json,
            prompt: None,
            temperature: 0.0,
            language: None,
        }
    }
}

/// Translate audio into English. Same surface as transcription minus the
/// source-language hint, which this endpoint does not accept.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioTranslationRequest {
    pub file: Vec<u8>,
    pub filename: String,
    pub model: String,
    pub response_format: AudioResponseFormat,
    pub prompt: Option<String>,
    pub temperature: f32,
}

impl AudioTranslationRequest {
    pub fn new(file: Vec<u8>, filename: impl Into<String>) -> Self {
        Self {
            file,
            filename: filename.into(),
            model: "whisper-1".to_owned(),
            response_format: AudioResponseFormat::Json,
            prompt: None,
            temperature: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioResponse {
    pub text: String,
}
