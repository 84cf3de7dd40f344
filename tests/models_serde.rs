//! Wire-shape checks for the request/response types: absent optional fields
//! are omitted, responses decode from partial payloads.

use serde_json::json;

use openai_client::models::completions::CompletionRequest;
use openai_client::models::edits::EditRequest;
use openai_client::models::embeddings::EmbeddingRequest;
use openai_client::models::fine_tunes::FineTuneRequest;
use openai_client::models::images::ImageGenerationRequest;
use openai_client::models::moderations::ModerationRequest;
use openai_client::models::{ImageResponseFormat, ImageSize, ModerationModelId};
use openai_client::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

#[test]
fn chat_request_omits_unset_optionals() {
    let request = ChatCompletionRequest {
        model: "gpt-3.5-turbo".into(),
        messages: vec![ChatMessage::user("Hello")],
        ..ChatCompletionRequest::default()
    };
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(
        body,
        json!({
            "model": "gpt-3.5-turbo",
            "messages": [{"role": "user", "content": "Hello"}],
            "temperature": 1.0,
            "top_p": 1.0,
            "n": 1,
            "stream": false,
            "presence_penalty": 0.0,
            "frequency_penalty": 0.0
        })
    );
}

#[test]
fn chat_request_serializes_set_optionals() {
    let request = ChatCompletionRequest {
        model: "gpt-4".into(),
        messages: vec![ChatMessage::user("Hello")],
        max_tokens: Some(64),
        user: Some("user-1".into()),
        ..ChatCompletionRequest::default()
    };
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["max_tokens"], 64);
    assert_eq!(body["user"], "user-1");
}

#[test]
fn chat_request_round_trips() {
    let request = ChatCompletionRequest {
        model: "gpt-4".into(),
        messages: vec![
            ChatMessage::system("Be terse."),
            ChatMessage::user("Hello"),
        ],
        temperature: 0.2,
        max_tokens: Some(64),
        ..ChatCompletionRequest::default()
    };
    let wire = serde_json::to_string(&request).unwrap();
    let back: ChatCompletionRequest = serde_json::from_str(&wire).unwrap();
    assert_eq!(back, request);
}

#[test]
fn completion_request_defaults_match_the_documentation() {
    let request = CompletionRequest::default();
    assert_eq!(request.model, "text-davinci-003");
    assert_eq!(request.max_tokens, 16);

    let body = serde_json::to_value(&request).unwrap();
    assert!(body.get("suffix").is_none());
    assert!(body.get("stop").is_none());
    assert!(body.get("user").is_none());
    assert_eq!(body["echo"], false);
    assert_eq!(body["best_of"], 1);
}

#[test]
fn image_generation_request_uses_wire_strings_for_enums() {
    let request = ImageGenerationRequest::new("a white siamese cat");
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(
        body,
        json!({
            "prompt": "a white siamese cat",
            "n": 1,
            "size": "1024x1024",
            "response_format": "url"
        })
    );
}

#[test]
fn embedding_request_skips_absent_user() {
    let body = serde_json::to_value(EmbeddingRequest::new("hello")).unwrap();
    assert_eq!(
        body,
        json!({"model": "text-embedding-ada-002", "input": "hello"})
    );
}

#[test]
fn completion_request_round_trips() {
    let request = CompletionRequest {
        prompt: "Say this is a test".into(),
        suffix: Some(" end".into()),
        stop: Some("\n".into()),
        user: Some("user-1".into()),
        temperature: 0.7,
        ..CompletionRequest::default()
    };
    let wire = serde_json::to_string(&request).unwrap();
    let back: CompletionRequest = serde_json::from_str(&wire).unwrap();
    assert_eq!(back, request);
}

#[test]
fn edit_request_round_trips() {
    let request = EditRequest {
        input: "What day of the wek is it?".into(),
        instruction: "Fix the spelling mistakes.".into(),
        n: 2,
        ..EditRequest::default()
    };
    let wire = serde_json::to_string(&request).unwrap();
    let back: EditRequest = serde_json::from_str(&wire).unwrap();
    assert_eq!(back, request);
}

#[test]
fn embedding_request_round_trips() {
    let mut request = EmbeddingRequest::new("The food was delicious");
    request.user = Some("user-1".into());
    let wire = serde_json::to_string(&request).unwrap();
    let back: EmbeddingRequest = serde_json::from_str(&wire).unwrap();
    assert_eq!(back, request);
}

#[test]
fn moderation_request_round_trips() {
    let request =
        ModerationRequest::with_model("I want to hurt them.", ModerationModelId::TextModerationStable);
    let wire = serde_json::to_string(&request).unwrap();
    let back: ModerationRequest = serde_json::from_str(&wire).unwrap();
    assert_eq!(back, request);
}

#[test]
fn image_generation_request_round_trips() {
    let mut request = ImageGenerationRequest::new("a white siamese cat");
    request.n = 2;
    request.size = ImageSize::Size512;
    request.response_format = ImageResponseFormat::B64Json;
    request.user = Some("user-1".into());
    let wire = serde_json::to_string(&request).unwrap();
    let back: ImageGenerationRequest = serde_json::from_str(&wire).unwrap();
    assert_eq!(back, request);
}

#[test]
fn fine_tune_request_round_trips() {
    let mut request = FineTuneRequest::new("file-abc123");
    request.validation_file = Some("file-def456".into());
    request.model = Some("curie".into());
    request.n_epochs = Some(4);
    request.classification_betas = Some(vec![0.5, 1.0]);
    request.suffix = Some("custom-model".into());
    let wire = serde_json::to_string(&request).unwrap();
    let back: FineTuneRequest = serde_json::from_str(&wire).unwrap();
    assert_eq!(back, request);
}

#[test]
fn chat_response_decodes_without_metadata() {
    // Partial envelopes still decode; metadata falls back to defaults.
    let response: ChatCompletionResponse = serde_json::from_str(
        r#"{"choices": [{"message": {"role": "assistant", "content": "Hi"}}]}"#,
    )
    .unwrap();
    assert_eq!(response.text(), "Hi");
    assert_eq!(response.id, "");
    assert!(response.usage.is_none());
    assert_eq!(response.choices[0].index, 0);
    assert!(response.choices[0].finish_reason.is_none());
}
