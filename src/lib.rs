#![forbid(unsafe_code)]
#![doc = r#"
openai-client

Typed async bindings for the OpenAI REST API: chat, completions, edits,
images, embeddings, moderations, audio, files, fine-tunes and the model
catalog, plus a stateful conversation session on top of the stateless chat
endpoint.

Crate highlights
- `Client`: one async method per REST operation, one HTTP exchange each.
- `ChatSession`: append-only transcript resent in full on every exchange, so
  the model sees the whole conversation.
- `models`: request/response types mirroring the wire schemas field-for-field.

Modules
- `chat`: Conversation session.
- `client`: Endpoint client.
- `config`: API key, organization, base URL, timeout.
- `error`: The crate-wide `Error` enum.
- `models`: Data structures, one submodule per endpoint family.
- `util`: Shared helpers (tracing, env) for binaries and examples.

Streaming (SSE) responses are out of scope: requests with `stream` set fail
before any network call.
"#]

pub mod chat;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod util;

mod transport;

pub use crate::chat::ChatSession;
pub use crate::client::Client;
pub use crate::config::{Config, DEFAULT_BASE_URL};
pub use crate::error::Error;

// Re-export the everyday types so callers rarely need the models paths.
pub use crate::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Role};
