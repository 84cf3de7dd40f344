//! Closed sets of vendor constants and their canonical wire strings.
//!
//! Each enum is a static mapping: adding a vendor model means adding a case
//! here, nothing else. The serde renames keep the same strings on the JSON
//! side so the mapping lives in one place per enum.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Models accepted by the chat and completions endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelId {
    #[serde(rename = "gpt-4-32k-0314")]
    Gpt432k0314,
    #[serde(rename = "gpt-4-32k")]
    Gpt432k,
    #[serde(rename = "gpt-4-0314")]
    Gpt40314,
    #[serde(rename = "gpt-4")]
    Gpt4,
    #[serde(rename = "gpt-3.5-turbo-0301")]
    Gpt35Turbo0301,
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
    #[serde(rename = "text-davinci-003")]
    TextDavinci003,
    #[serde(rename = "text-davinci-002")]
    TextDavinci002,
    #[serde(rename = "text-curie-001")]
    TextCurie001,
    #[serde(rename = "text-babbage-001")]
    TextBabbage001,
    #[serde(rename = "text-ada-001")]
    TextAda001,
    #[serde(rename = "text-davinci-001")]
    TextDavinci001,
    #[serde(rename = "davinci-instruct-beta")]
    DavinciInstructBeta,
    #[serde(rename = "davinci")]
    Davinci,
    #[serde(rename = "curie-instruct-beta")]
    CurieInstructBeta,
    #[serde(rename = "curie")]
    Curie,
    #[serde(rename = "ada")]
    Ada,
    #[serde(rename = "babbage")]
    Babbage,
}

impl ModelId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Gpt432k0314 => "gpt-4-32k-0314",
            ModelId::Gpt432k => "gpt-4-32k",
            ModelId::Gpt40314 => "gpt-4-0314",
            ModelId::Gpt4 => "gpt-4",
            ModelId::Gpt35Turbo0301 => "gpt-3.5-turbo-0301",
            ModelId::Gpt35Turbo => "gpt-3.5-turbo",
            ModelId::TextDavinci003 => "text-davinci-003",
            ModelId::TextDavinci002 => "text-davinci-002",
            ModelId::TextCurie001 => "text-curie-001",
            ModelId::TextBabbage001 => "text-babbage-001",
            ModelId::TextAda001 => "text-ada-001",
            ModelId::TextDavinci001 => "text-davinci-001",
            ModelId::DavinciInstructBeta => "davinci-instruct-beta",
            ModelId::Davinci => "davinci",
            ModelId::CurieInstructBeta => "curie-instruct-beta",
            ModelId::Curie => "curie",
            ModelId::Ada => "ada",
            ModelId::Babbage => "babbage",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Models accepted by the edits endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditsModelId {
    #[serde(rename = "text-davinci-edit-001")]
    TextDavinciEdit001,
    #[serde(rename = "code-davinci-edit-001")]
    CodeDavinciEdit001,
}

impl EditsModelId {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditsModelId::TextDavinciEdit001 => "text-davinci-edit-001",
            EditsModelId::CodeDavinciEdit001 => "code-davinci-edit-001",
        }
    }
}

impl fmt::Display for EditsModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Models accepted by the moderations endpoint. `Latest` is upgraded by the
/// vendor over time; `Stable` changes only with advance notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModerationModelId {
    #[serde(rename = "text-moderation-stable")]
    TextModerationStable,
    #[serde(rename = "text-moderation-latest")]
    TextModerationLatest,
}

impl ModerationModelId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationModelId::TextModerationStable => "text-moderation-stable",
            ModerationModelId::TextModerationLatest => "text-moderation-latest",
        }
    }
}

impl fmt::Display for ModerationModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generated image dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "256x256")]
    Size256,
    #[serde(rename = "512x512")]
    Size512,
    #[serde(rename = "1024x1024")]
    Size1024,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Size256 => "256x256",
            ImageSize::Size512 => "512x512",
            ImageSize::Size1024 => "1024x1024",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How generated images come back: a short-lived URL or inline base64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageResponseFormat {
    Url,
    B64Json,
}

impl ImageResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageResponseFormat::Url => "url",
            ImageResponseFormat::B64Json => "b64_json",
        }
    }
}

impl fmt::Display for ImageResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output formats of the audio endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioResponseFormat {
    Json,
    Text,
    Srt,
    VerboseJson,
    Vtt,
}

impl AudioResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioResponseFormat::Json => "json",
            AudioResponseFormat::Text => "text",
            AudioResponseFormat::Srt => "srt",
            AudioResponseFormat::VerboseJson => "verbose_json",
            AudioResponseFormat::Vtt => "vtt",
        }
    }
}

impl fmt::Display for AudioResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
