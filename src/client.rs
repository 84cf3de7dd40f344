//! Endpoint client: one async method per REST operation.
//!
//! Every method runs exactly one HTTP exchange and returns the decoded
//! response or an [`Error`]. The client holds no mutable state, so it can be
//! shared freely; conversation state lives in [`ChatSession`].

use reqwest::multipart::{Form, Part};

use crate::chat::ChatSession;
use crate::config::Config;
use crate::error::Error;
use crate::models::audio::{AudioResponse, AudioTranscriptionRequest, AudioTranslationRequest};
use crate::models::catalog::{ListModelsResponse, Model, ModelDeleteResponse};
use crate::models::chat::{ChatCompletionRequest, ChatCompletionResponse};
use crate::models::completions::{CompletionRequest, CompletionResponse};
use crate::models::edits::{EditRequest, EditResponse};
use crate::models::embeddings::{EmbeddingRequest, EmbeddingResponse};
use crate::models::files::{FileDeleteResponse, ListFilesResponse, OpenAiFile};
use crate::models::fine_tunes::{
    FineTune, FineTuneRequest, ListFineTuneEventsResponse, ListFineTunesResponse,
};
use crate::models::ids::{EditsModelId, ModelId};
use crate::models::images::{
    ImageEditRequest, ImageGenerationRequest, ImageResponse, ImageVariationRequest,
};
use crate::models::moderations::{ModerationRequest, ModerationResponse};
use crate::transport::Transport;

/// Client for the OpenAI REST API.
///
/// ```no_run
/// # async fn run() -> Result<(), openai_client::Error> {
/// use openai_client::{Client, Config};
/// use openai_client::models::ModelId;
///
/// let client = Client::new(Config::new("sk-..."))?;
/// let mut session = client.chat(ModelId::Gpt35Turbo);
/// let reply = session.send("Hello!").await?;
/// println!("{}", reply.text());
/// # Ok(())
/// # }
/// ```
pub struct Client {
    transport: Transport,
}

impl Client {
    pub fn new(config: Config) -> Result<Self, Error> {
        Ok(Self {
            transport: Transport::new(&config)?,
        })
    }

    /// Build a client from `OPENAI_API_KEY` (plus the optional
    /// `OPENAI_ORGANIZATION` and `OPENAI_BASE_URL`).
    pub fn from_env() -> Result<Self, Error> {
        Self::new(Config::from_env()?)
    }

    /// Open a conversation session against `model`. The session keeps the
    /// transcript; the client stays stateless.
    pub fn chat(&self, model: ModelId) -> ChatSession<'_> {
        ChatSession::new(self, model)
    }

    // ---- chat completions ----

    /// `POST /v1/chat/completions`.
    ///
    /// Streaming is not supported: a request with `stream` set fails with
    /// [`Error::UnsupportedFeature`] before anything is sent.
    pub async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, Error> {
        if request.stream {
            return Err(Error::UnsupportedFeature("streaming chat completions"));
        }
        self.transport
            .post_json("/v1/chat/completions", request)
            .await
    }

    // ---- completions ----

    /// `POST /v1/completions`.
    pub async fn create_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, Error> {
        self.transport.post_json("/v1/completions", request).await
    }

    /// Single-prompt completion with the documented defaults.
    pub async fn complete(
        &self,
        model: ModelId,
        prompt: impl Into<String>,
    ) -> Result<CompletionResponse, Error> {
        let request = CompletionRequest {
            model: model.as_str().to_owned(),
            prompt: prompt.into(),
            ..CompletionRequest::default()
        };
        self.create_completion(&request).await
    }

    // ---- edits ----

    /// `POST /v1/edits`.
    pub async fn create_edit(&self, request: &EditRequest) -> Result<EditResponse, Error> {
        self.transport.post_json("/v1/edits", request).await
    }

    /// Single edit with the documented defaults.
    pub async fn edit(
        &self,
        model: EditsModelId,
        input: impl Into<String>,
        instruction: impl Into<String>,
    ) -> Result<EditResponse, Error> {
        let request = EditRequest {
            model: model.as_str().to_owned(),
            input: input.into(),
            instruction: instruction.into(),
            ..EditRequest::default()
        };
        self.create_edit(&request).await
    }

    // ---- model catalog ----

    /// `GET /v1/models`.
    pub async fn list_models(&self) -> Result<ListModelsResponse, Error> {
        self.transport.get("/v1/models").await
    }

    /// `GET /v1/models/{model}`.
    pub async fn retrieve_model(&self, model: &str) -> Result<Model, Error> {
        self.transport.get(&format!("/v1/models/{model}")).await
    }

    /// `DELETE /v1/models/{model}`. Only fine-tuned models owned by the
    /// caller's organization can be deleted.
    pub async fn delete_model(&self, model: &str) -> Result<ModelDeleteResponse, Error> {
        self.transport.delete(&format!("/v1/models/{model}")).await
    }

    // ---- images ----

    /// `POST /v1/images/generations`.
    pub async fn generate_image(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<ImageResponse, Error> {
        self.transport
            .post_json("/v1/images/generations", request)
            .await
    }

    /// `POST /v1/images/edits` (multipart).
    pub async fn edit_image(&self, request: ImageEditRequest) -> Result<ImageResponse, Error> {
        let mut form = Form::new()
            .part("image", png_part(request.image, "image.png")?)
            .text("prompt", request.prompt)
            .text("n", request.n.to_string())
            .text("size", request.size.as_str())
            .text("response_format", request.response_format.as_str());
        if let Some(mask) = request.mask {
            form = form.part("mask", png_part(mask, "mask.png")?);
        }
        self.transport.post_form("/v1/images/edits", form).await
    }

    /// `POST /v1/images/variations` (multipart).
    pub async fn create_image_variation(
        &self,
        request: ImageVariationRequest,
    ) -> Result<ImageResponse, Error> {
        let form = Form::new()
            .part("image", png_part(request.image, "image.png")?)
            .text("n", request.n.to_string())
            .text("size", request.size.as_str())
            .text("response_format", request.response_format.as_str());
        self.transport
            .post_form("/v1/images/variations", form)
            .await
    }

    // ---- embeddings ----

    /// `POST /v1/embeddings`.
    pub async fn create_embeddings(
        &self,
        request: &EmbeddingRequest,
    ) -> Result<EmbeddingResponse, Error> {
        self.transport.post_json("/v1/embeddings", request).await
    }

    /// Embed a single input with the default embedding model.
    pub async fn embed(&self, input: impl Into<String>) -> Result<EmbeddingResponse, Error> {
        self.create_embeddings(&EmbeddingRequest::new(input)).await
    }

    // ---- moderations ----

    /// `POST /v1/moderations`.
    pub async fn create_moderation(
        &self,
        request: &ModerationRequest,
    ) -> Result<ModerationResponse, Error> {
        self.transport.post_json("/v1/moderations", request).await
    }

    /// Classify a single input with the latest moderation model.
    pub async fn moderate(&self, input: impl Into<String>) -> Result<ModerationResponse, Error> {
        self.create_moderation(&ModerationRequest::new(input)).await
    }

    // ---- audio ----

    /// `POST /v1/audio/transcriptions` (multipart).
    pub async fn transcribe_audio(
        &self,
        request: AudioTranscriptionRequest,
    ) -> Result<AudioResponse, Error> {
        let mut form = Form::new()
            .part("file", audio_part(request.file, request.filename)?)
            .text("model", request.model)
            .text("response_format", request.response_format.as_str())
            .text("temperature", request.temperature.to_string());
        if let Some(prompt) = request.prompt {
            form = form.text("prompt", prompt);
        }
        if let Some(language) = request.language {
            form = form.text("language", language);
        }
        self.transport
            .post_form("/v1/audio/transcriptions", form)
            .await
    }

    /// `POST /v1/audio/translations` (multipart). Output is always English.
    pub async fn translate_audio(
        &self,
        request: AudioTranslationRequest,
    ) -> Result<AudioResponse, Error> {
        let mut form = Form::new()
            .part("file", audio_part(request.file, request.filename)?)
            .text("model", request.model)
            .text("response_format", request.response_format.as_str())
            .text("temperature", request.temperature.to_string());
        if let Some(prompt) = request.prompt {
            form = form.text("prompt", prompt);
        }
        self.transport
            .post_form("/v1/audio/translations", form)
            .await
    }

    // ---- files ----

    /// `GET /v1/files`.
    pub async fn list_files(&self) -> Result<ListFilesResponse, Error> {
        self.transport.get("/v1/files").await
    }

    /// `POST /v1/files` (multipart). `purpose` is `fine-tune` for training
    /// data uploads.
    pub async fn upload_file(
        &self,
        content: Vec<u8>,
        filename: impl Into<String>,
        purpose: impl Into<String>,
    ) -> Result<OpenAiFile, Error> {
        let part = Part::bytes(content).file_name(filename.into());
        let form = Form::new()
            .text("purpose", purpose.into())
            .part("file", part);
        self.transport.post_form("/v1/files", form).await
    }

    /// `GET /v1/files/{file_id}`.
    pub async fn retrieve_file(&self, file_id: &str) -> Result<OpenAiFile, Error> {
        self.transport.get(&format!("/v1/files/{file_id}")).await
    }

    /// `GET /v1/files/{file_id}/content`. The body comes back verbatim, it is
    /// not JSON.
    pub async fn file_content(&self, file_id: &str) -> Result<String, Error> {
        self.transport
            .get_text(&format!("/v1/files/{file_id}/content"))
            .await
    }

    /// `DELETE /v1/files/{file_id}`.
    pub async fn delete_file(&self, file_id: &str) -> Result<FileDeleteResponse, Error> {
        self.transport.delete(&format!("/v1/files/{file_id}")).await
    }

    // ---- fine-tunes ----

    /// `POST /v1/fine-tunes`.
    pub async fn create_fine_tune(&self, request: &FineTuneRequest) -> Result<FineTune, Error> {
        self.transport.post_json("/v1/fine-tunes", request).await
    }

    /// `GET /v1/fine-tunes`.
    pub async fn list_fine_tunes(&self) -> Result<ListFineTunesResponse, Error> {
        self.transport.get("/v1/fine-tunes").await
    }

    /// `GET /v1/fine-tunes/{fine_tune_id}`.
    pub async fn retrieve_fine_tune(&self, fine_tune_id: &str) -> Result<FineTune, Error> {
        self.transport
            .get(&format!("/v1/fine-tunes/{fine_tune_id}"))
            .await
    }

    /// `POST /v1/fine-tunes/{fine_tune_id}/cancel`.
    pub async fn cancel_fine_tune(&self, fine_tune_id: &str) -> Result<FineTune, Error> {
        self.transport
            .post_empty(&format!("/v1/fine-tunes/{fine_tune_id}/cancel"))
            .await
    }

    /// `GET /v1/fine-tunes/{fine_tune_id}/events`.
    pub async fn list_fine_tune_events(
        &self,
        fine_tune_id: &str,
    ) -> Result<ListFineTuneEventsResponse, Error> {
        self.transport
            .get(&format!("/v1/fine-tunes/{fine_tune_id}/events"))
            .await
    }
}

fn png_part(bytes: Vec<u8>, filename: &'static str) -> Result<Part, Error> {
    Part::bytes(bytes)
        .file_name(filename)
        .mime_str("image/png")
        .map_err(|e| Error::InvalidConfig(e.to_string()))
}

fn audio_part(bytes: Vec<u8>, filename: String) -> Result<Part, Error> {
    Part::bytes(bytes)
        .file_name(filename)
        .mime_str("application/octet-stream")
        .map_err(|e| Error::InvalidConfig(e.to_string()))
}
