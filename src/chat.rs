//! Stateful conversation on top of the stateless chat endpoint.
//!
//! The REST API has no memory: it sees only what each request carries. A
//! [`ChatSession`] supplies the memory by keeping an append-only transcript
//! and resending the whole of it on every exchange, so the model always sees
//! the full conversation so far.
//!
//! The transcript is never rolled back. Outgoing turns are recorded before
//! the network call; if the call fails, the turns stay and only the assistant
//! reply is missing. A retry then resends the same conversation instead of
//! silently dropping what the user said.

use std::fmt;

use crate::client::Client;
use crate::error::Error;
use crate::models::chat::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::models::ids::ModelId;

/// One conversation with one model. Sessions are independent: each owns its
/// transcript, and nothing is shared through the client.
///
/// `send` takes `&mut self`, so exchanges on a session are serialized by the
/// borrow checker; run separate sessions for concurrent conversations.
pub struct ChatSession<'a> {
    client: &'a Client,
    model: ModelId,
    transcript: Vec<ChatMessage>,
}

impl<'a> ChatSession<'a> {
    pub(crate) fn new(client: &'a Client, model: ModelId) -> Self {
        Self {
            client,
            model,
            transcript: Vec::new(),
        }
    }

    pub fn model(&self) -> ModelId {
        self.model
    }

    /// The conversation so far, in order: each exchange contributed its
    /// outgoing turns followed by the assistant reply (when one arrived).
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Send one user turn and return the model's response.
    pub async fn send(
        &mut self,
        content: impl Into<String>,
    ) -> Result<ChatCompletionResponse, Error> {
        self.send_messages(vec![ChatMessage::user(content)]).await
    }

    /// Send several turns in one exchange, e.g. a system instruction followed
    /// by a user turn. The turns join the transcript in the given order.
    pub async fn send_messages(
        &mut self,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatCompletionResponse, Error> {
        let request = ChatCompletionRequest {
            messages,
            ..ChatCompletionRequest::default()
        };
        self.send_request(request).await
    }

    /// Like [`send_messages`](Self::send_messages) but with caller-chosen
    /// sampling parameters: `request.messages` are the new turns, everything
    /// else is used as-is except `model`, which the session supplies.
    ///
    /// A request with `stream` set fails with [`Error::UnsupportedFeature`]
    /// before any turn is recorded and before anything is sent.
    pub async fn send_request(
        &mut self,
        mut request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, Error> {
        if request.stream {
            return Err(Error::UnsupportedFeature("streaming chat completions"));
        }

        self.transcript.append(&mut request.messages);
        request.model = self.model.as_str().to_owned();
        request.messages = self.transcript.clone();

        tracing::debug!(
            model = self.model.as_str(),
            transcript_len = self.transcript.len(),
            "sending conversation"
        );
        let response = self.client.create_chat_completion(&request).await?;

        if let Some(choice) = response.choices.first() {
            self.transcript
                .push(ChatMessage::assistant(choice.message.content.clone()));
        }
        Ok(response)
    }
}

impl fmt::Display for ChatSession<'_> {
    /// Renders the transcript one turn per line as `role: content`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in &self.transcript {
            writeln!(f, "{}: {}", message.role, message.content)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn session(client: &Client) -> ChatSession<'_> {
        client.chat(ModelId::Gpt35Turbo)
    }

    #[test]
    fn new_session_starts_empty() {
        let client = Client::new(Config::new("sk-test")).unwrap();
        let session = session(&client);
        assert_eq!(session.model(), ModelId::Gpt35Turbo);
        assert!(session.transcript().is_empty());
        assert_eq!(session.to_string(), "");
    }

    #[tokio::test]
    async fn streaming_template_leaves_transcript_untouched() {
        let client = Client::new(Config::new("sk-test")).unwrap();
        let mut session = session(&client);

        let request = ChatCompletionRequest {
            messages: vec![ChatMessage::user("Hello")],
            stream: true,
            ..ChatCompletionRequest::default()
        };
        let result = session.send_request(request).await;

        assert!(matches!(result, Err(Error::UnsupportedFeature(_))));
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn display_renders_role_prefixed_lines() {
        let client = Client::new(Config::new("sk-test")).unwrap();
        let mut session = session(&client);
        session.transcript.push(ChatMessage::user("Hello"));
        session.transcript.push(ChatMessage::assistant("Hi"));
        assert_eq!(session.to_string(), "user: Hello\nassistant: Hi\n");
    }
}
