use std::time::Duration;

use crate::error::Error;

/// Default public API endpoint. Override it to target a beta deployment or a
/// mock server.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Connection settings resolved once at client construction. No hot-reload:
/// changing any of these requires building a new [`crate::Client`].
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    /// Sent as `OpenAI-Organization` when the account belongs to several
    /// organizations.
    pub organization: Option<String>,
    pub base_url: String,
    /// Overall per-request timeout. `None` leaves reqwest's default in place.
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            organization: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
        }
    }

    /// Build a config from the environment, as the API guidelines specify:
    /// `OPENAI_API_KEY` (required), `OPENAI_ORGANIZATION` and
    /// `OPENAI_BASE_URL` (optional).
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or(Error::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Some(org) = std::env::var("OPENAI_ORGANIZATION")
            .ok()
            .filter(|s| !s.trim().is_empty())
        {
            config.organization = Some(org);
        }
        if let Some(url) = std::env::var("OPENAI_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
        {
            config.base_url = url;
        }
        Ok(config)
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
