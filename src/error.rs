use reqwest::StatusCode;
use thiserror::Error;

/// All failure modes surfaced by the client.
///
/// Requests are never retried and no error is swallowed: every variant
/// propagates to the immediate caller. `Api` and `Decode` keep the raw
/// request/response bodies so a failed exchange can be diagnosed without
/// re-issuing it.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP exchange never completed, so no status code is available.
    #[error("transport error for {path}: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP exchange completed with a non-success status.
    #[error("api error {status} for {path}: {response_body}")]
    Api {
        status: StatusCode,
        path: String,
        /// Outgoing JSON body, when the request had one.
        request_body: Option<String>,
        response_body: String,
    },

    /// The response body did not match the expected typed schema.
    #[error("failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        /// Raw body that failed to decode.
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// Raised synchronously, before any network I/O.
    #[error("unsupported feature: {0}")]
    UnsupportedFeature(&'static str),

    #[error("api key not found; pass one explicitly or set OPENAI_API_KEY")]
    MissingApiKey,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// HTTP status of the failed exchange, if one completed.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
