//! Image generation/edit/variation models.
//!
//! `POST /v1/images/{generations,edits,variations}`; see
//! <https://platform.openai.com/docs/api-reference/images>.
//!
//! Generation is a JSON request; edits and variations are multipart uploads
//! whose image payloads are raw byte buffers passed through untouched.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::models::ids::{ImageResponseFormat, ImageSize};

/// Image generation request (JSON body).
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    /// Description of the desired image(s), at most 1000 characters.
    pub prompt: String,
    /// Number of images to generate, 1..=10.
    pub n: u32,
    pub size: ImageSize,
    pub response_format: ImageResponseFormat,
    pub user: Option<String>,
}

impl ImageGenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            n: 1,
            size: ImageSize::Size1024,
            response_format: ImageResponseFormat::Url,
            user: None,
        }
    }
}

/// Image edit parameters (multipart body).
///
/// The image must be a square PNG under 4MB. When `mask` is absent the
/// image's own transparency is used as the mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEditRequest {
    pub prompt: String,
    pub image: Vec<u8>,
    /// PNG whose fully transparent areas indicate where to edit; same
    /// dimensions as `image`.
    pub mask: Option<Vec<u8>>,
    pub n: u32,
    pub size: ImageSize,
    pub response_format: ImageResponseFormat,
}

impl ImageEditRequest {
    pub fn new(prompt: impl Into<String>, image: Vec<u8>) -> Self {
        Self {
            prompt: prompt.into(),
            image,
            mask: None,
            n: 1,
            size: ImageSize::Size1024,
            response_format: ImageResponseFormat::Url,
        }
    }
}

/// Image variation parameters (multipart body). The source image must be a
/// square PNG under 4MB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageVariationRequest {
    pub image: Vec<u8>,
    pub n: u32,
    pub size: ImageSize,
    pub response_format: ImageResponseFormat,
}

impl ImageVariationRequest {
    pub fn new(image: Vec<u8>) -> Self {
        Self {
            image,
            n: 1,
            size: ImageSize::Size1024,
            response_format: ImageResponseFormat::Url,
        }
    }
}

/// One generated image: a URL or inline base64 depending on the requested
/// response format.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    pub url: Option<String>,
    pub b64_json: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResponse {
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub data: Vec<ImageData>,
}
