//! Endpoint client coverage against a mock server: request shapes, headers,
//! multipart uploads and error mapping.

use mockito::Matcher;
use serde_json::json;

use openai_client::models::audio::AudioTranscriptionRequest;
use openai_client::models::fine_tunes::FineTuneRequest;
use openai_client::models::images::ImageGenerationRequest;
use openai_client::models::{EditsModelId, ImageResponseFormat, ImageSize, ModelId};
use openai_client::{Client, Config, Error};

fn client(server: &mockito::Server) -> Client {
    Client::new(Config::new("sk-test").with_base_url(server.url())).unwrap()
}

#[tokio::test]
async fn list_models_sends_bearer_and_org_headers() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/models")
        .match_header("authorization", "Bearer sk-test")
        .match_header("openai-organization", "org-123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "object": "list",
                "data": [
                    {"id": "gpt-3.5-turbo", "object": "model", "created": 1677610602, "owned_by": "openai"},
                    {"id": "davinci", "object": "model", "created": 1649359874, "owned_by": "openai"}
                ]
            })
            .to_string(),
        )
        .create();

    let client = Client::new(
        Config::new("sk-test")
            .with_base_url(server.url())
            .with_organization("org-123"),
    )
    .unwrap();
    let models = client.list_models().await.unwrap();

    mock.assert();
    assert_eq!(models.data.len(), 2);
    assert_eq!(models.data[0].id, "gpt-3.5-turbo");
}

#[tokio::test]
async fn retrieve_and_delete_model_hit_the_id_path() {
    let mut server = mockito::Server::new_async().await;
    let get = server
        .mock("GET", "/v1/models/davinci")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "davinci", "object": "model", "created": 1649359874, "owned_by": "openai"}"#)
        .create();
    let delete = server
        .mock("DELETE", "/v1/models/curie:ft-acme-2023")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "curie:ft-acme-2023", "object": "model", "deleted": true}"#)
        .create();

    let client = client(&server);
    let model = client.retrieve_model("davinci").await.unwrap();
    assert_eq!(model.owned_by, "openai");

    let deleted = client.delete_model("curie:ft-acme-2023").await.unwrap();
    assert!(deleted.deleted);

    get.assert();
    delete.assert();
}

#[tokio::test]
async fn complete_sends_documented_defaults() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/completions")
        .match_body(Matcher::Json(json!({
            "model": "text-davinci-003",
            "prompt": "Say this is a test",
            "max_tokens": 16,
            "temperature": 1.0,
            "top_p": 1.0,
            "n": 1,
            "echo": false,
            "presence_penalty": 0.0,
            "frequency_penalty": 0.0,
            "best_of": 1
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "cmpl-1",
                "object": "text_completion",
                "created": 1589478378,
                "model": "text-davinci-003",
                "choices": [{"text": "\n\nThis is indeed a test", "index": 0, "finish_reason": "length"}],
                "usage": {"prompt_tokens": 5, "completion_tokens": 7, "total_tokens": 12}
            })
            .to_string(),
        )
        .create();

    let client = client(&server);
    let response = client
        .complete(ModelId::TextDavinci003, "Say this is a test")
        .await
        .unwrap();

    mock.assert();
    assert_eq!(response.text(), "\n\nThis is indeed a test");
}

#[tokio::test]
async fn edit_sends_input_and_instruction() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/edits")
        .match_body(Matcher::Json(json!({
            "model": "text-davinci-edit-001",
            "input": "What day of the wek is it?",
            "instruction": "Fix the spelling mistakes.",
            "n": 1,
            "temperature": 1.0,
            "top_p": 1.0
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "object": "edit",
                "created": 1589478378,
                "choices": [{"text": "What day of the week is it?", "index": 0}]
            })
            .to_string(),
        )
        .create();

    let client = client(&server);
    let response = client
        .edit(
            EditsModelId::TextDavinciEdit001,
            "What day of the wek is it?",
            "Fix the spelling mistakes.",
        )
        .await
        .unwrap();

    mock.assert();
    assert_eq!(response.choices[0].text, "What day of the week is it?");
}

#[tokio::test]
async fn embed_uses_default_embedding_model() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/embeddings")
        .match_body(Matcher::Json(json!({
            "model": "text-embedding-ada-002",
            "input": "The food was delicious"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "object": "list",
                "model": "text-embedding-ada-002",
                "data": [{"object": "embedding", "index": 0, "embedding": [0.0023, -0.0092, 0.0157]}],
                "usage": {"prompt_tokens": 8, "total_tokens": 8}
            })
            .to_string(),
        )
        .create();

    let client = client(&server);
    let response = client.embed("The food was delicious").await.unwrap();

    mock.assert();
    assert_eq!(response.data[0].embedding.len(), 3);
    assert_eq!(response.usage.unwrap().prompt_tokens, 8);
}

#[tokio::test]
async fn moderate_sends_the_input_and_decodes_slash_categories() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/moderations")
        .match_body(Matcher::Json(json!({
            "input": "I want to hurt them.",
            "model": "text-moderation-latest"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "modr-1",
                "model": "text-moderation-004",
                "results": [{
                    "flagged": true,
                    "categories": {
                        "hate": false,
                        "hate/threatening": false,
                        "self-harm": false,
                        "sexual": false,
                        "sexual/minors": false,
                        "violence": true,
                        "violence/graphic": false
                    },
                    "category_scores": {
                        "hate": 0.01,
                        "hate/threatening": 0.001,
                        "self-harm": 0.002,
                        "sexual": 0.0001,
                        "sexual/minors": 0.00001,
                        "violence": 0.97,
                        "violence/graphic": 0.03
                    }
                }]
            })
            .to_string(),
        )
        .create();

    let client = client(&server);
    let response = client.moderate("I want to hurt them.").await.unwrap();

    mock.assert();
    let result = &response.results[0];
    assert!(result.flagged);
    assert!(result.categories.violence);
    assert!(!result.categories.hate_threatening);
    assert!(result.category_scores.violence > 0.9);
}

#[tokio::test]
async fn generate_image_posts_json() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/images/generations")
        .match_body(Matcher::Json(json!({
            "prompt": "A cute baby sea otter",
            "n": 2,
            "size": "512x512",
            "response_format": "b64_json"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "created": 1589478378,
                "data": [{"b64_json": "aW1hZ2Ux"}, {"b64_json": "aW1hZ2Uy"}]
            })
            .to_string(),
        )
        .create();

    let client = client(&server);
    let mut request = ImageGenerationRequest::new("A cute baby sea otter");
    request.n = 2;
    request.size = ImageSize::Size512;
    request.response_format = ImageResponseFormat::B64Json;
    let response = client.generate_image(&request).await.unwrap();

    mock.assert();
    assert_eq!(response.data.len(), 2);
    assert_eq!(response.data[0].b64_json.as_deref(), Some("aW1hZ2Ux"));
    assert!(response.data[0].url.is_none());
}

#[tokio::test]
async fn upload_file_posts_multipart_with_purpose() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/files")
        .match_header(
            "content-type",
            Matcher::Regex("multipart/form-data.*".into()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("name=\"purpose\"".into()),
            Matcher::Regex("fine-tune".into()),
            Matcher::Regex("filename=\"train.jsonl\"".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "file-abc123",
                "object": "file",
                "bytes": 42,
                "created_at": 1613779121,
                "filename": "train.jsonl",
                "purpose": "fine-tune"
            })
            .to_string(),
        )
        .create();

    let client = client(&server);
    let file = client
        .upload_file(
            br#"{"prompt": "p", "completion": "c"}"#.to_vec(),
            "train.jsonl",
            "fine-tune",
        )
        .await
        .unwrap();

    mock.assert();
    assert_eq!(file.id, "file-abc123");
    assert_eq!(file.purpose, "fine-tune");
}

#[tokio::test]
async fn file_content_returns_the_raw_body() {
    let mut server = mockito::Server::new_async().await;
    let raw = "{\"prompt\": \"p\", \"completion\": \"c\"}\n";
    let mock = server
        .mock("GET", "/v1/files/file-abc123/content")
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_body(raw)
        .create();

    let client = client(&server);
    let content = client.file_content("file-abc123").await.unwrap();

    mock.assert();
    assert_eq!(content, raw);
}

#[tokio::test]
async fn create_fine_tune_sends_only_set_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/fine-tunes")
        .match_body(Matcher::Json(json!({"training_file": "file-abc123"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "ft-1",
                "object": "fine-tune",
                "model": "curie",
                "created_at": 1614807352,
                "updated_at": 1614807352,
                "status": "pending",
                "organization_id": "org-123",
                "fine_tuned_model": null,
                "hyperparams": {"batch_size": 4, "n_epochs": 4},
                "training_files": [],
                "validation_files": [],
                "result_files": [],
                "events": []
            })
            .to_string(),
        )
        .create();

    let client = client(&server);
    let job = client
        .create_fine_tune(&FineTuneRequest::new("file-abc123"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(job.status, "pending");
    assert!(job.fine_tuned_model.is_none());
    assert_eq!(job.hyperparams.batch_size, Some(4));
}

#[tokio::test]
async fn cancel_fine_tune_posts_to_the_cancel_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/fine-tunes/ft-1/cancel")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "ft-1", "object": "fine-tune", "status": "cancelled"}"#)
        .create();

    let client = client(&server);
    let job = client.cancel_fine_tune("ft-1").await.unwrap();

    mock.assert();
    assert_eq!(job.status, "cancelled");
}

#[tokio::test]
async fn transcription_posts_multipart_with_model_and_language() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/audio/transcriptions")
        .match_header(
            "content-type",
            Matcher::Regex("multipart/form-data.*".into()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("name=\"model\"".into()),
            Matcher::Regex("whisper-1".into()),
            Matcher::Regex("filename=\"audio.mp3\"".into()),
            Matcher::Regex("name=\"language\"".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"text": "Imagine the wildest idea that you've ever had."}"#)
        .create();

    let client = client(&server);
    let mut request = AudioTranscriptionRequest::new(vec![0u8; 16], "audio.mp3");
    request.language = Some("en".into());
    let response = client.transcribe_audio(request).await.unwrap();

    mock.assert();
    assert!(response.text.starts_with("Imagine"));
}

#[tokio::test]
async fn api_error_carries_status_path_and_both_bodies() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/models/nonexistent")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"message": "That model does not exist", "type": "invalid_request_error"}}"#)
        .create();

    let client = client(&server);
    let result = client.retrieve_model("nonexistent").await;

    mock.assert();
    match result {
        Err(Error::Api {
            status,
            path,
            request_body,
            response_body,
        }) => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(path, "/v1/models/nonexistent");
            assert!(request_body.is_none());
            assert!(response_body.contains("does not exist"));
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/models")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json at all")
        .create();

    let client = client(&server);
    let result = client.list_models().await;

    mock.assert();
    match result {
        Err(Error::Decode { path, body, .. }) => {
            assert_eq!(path, "/v1/models");
            assert_eq!(body, "not json at all");
        }
        other => panic!("expected Error::Decode, got {other:?}"),
    }
}
