//! Thin HTTP layer shared by every endpoint method.
//!
//! Responsibilities end at: inject the fixed auth headers, run exactly one
//! exchange, and hand back either the raw success body or an [`Error`]
//! carrying the status, path and both bodies. TLS, pooling and timeouts are
//! reqwest's concern.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::Form;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::error::Error;

const ORGANIZATION_HEADER: &str = "OpenAI-Organization";

pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: String,
    headers: HeaderMap,
}

impl Transport {
    pub(crate) fn new(config: &Config) -> Result<Self, Error> {
        if config.api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }

        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {}", config.api_key.trim());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&bearer)
                .map_err(|_| Error::InvalidConfig("api key is not a valid header value".into()))?,
        );
        if let Some(org) = config.organization.as_deref() {
            headers.insert(
                ORGANIZATION_HEADER,
                HeaderValue::from_str(org).map_err(|_| {
                    Error::InvalidConfig("organization id is not a valid header value".into())
                })?,
            );
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(format!("openai-client/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            headers,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let body = self
            .execute(self.http.get(self.url(path)), path, None)
            .await?;
        decode(path, body)
    }

    /// GET returning the raw body untouched (file content download).
    pub(crate) async fn get_text(&self, path: &str) -> Result<String, Error> {
        self.execute(self.http.get(self.url(path)), path, None)
            .await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        // Serialized up front so the outgoing body can travel with any error.
        let request_body = serde_json::to_string(body).map_err(|source| Error::Decode {
            path: path.to_owned(),
            body: String::new(),
            source,
        })?;
        let request = self
            .http
            .post(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .body(request_body.clone());
        let response = self.execute(request, path, Some(request_body)).await?;
        decode(path, response)
    }

    /// POST with no body (fine-tune cancel).
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let body = self
            .execute(self.http.post(self.url(path)), path, None)
            .await?;
        decode(path, body)
    }

    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, Error> {
        let request = self.http.post(self.url(path)).multipart(form);
        let body = self.execute(request, path, None).await?;
        decode(path, body)
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let body = self
            .execute(self.http.delete(self.url(path)), path, None)
            .await?;
        decode(path, body)
    }

    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
        request_body: Option<String>,
    ) -> Result<String, Error> {
        let response = request
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(|source| Error::Transport {
                path: path.to_owned(),
                source,
            })?;

        let status = response.status();
        tracing::debug!(%status, path, "api exchange completed");

        let response_body = response.text().await.map_err(|source| Error::Transport {
            path: path.to_owned(),
            source,
        })?;

        if !status.is_success() {
            return Err(Error::Api {
                status,
                path: path.to_owned(),
                request_body,
                response_body,
            });
        }
        Ok(response_body)
    }
}

fn decode<T: DeserializeOwned>(path: &str, body: String) -> Result<T, Error> {
    serde_json::from_str(&body).map_err(|source| Error::Decode {
        path: path.to_owned(),
        body,
        source,
    })
}
