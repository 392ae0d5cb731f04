//! Client configuration.
//!
//! A [`ClientConfig`] is built once and shared read-only by every request the
//! client makes. Several differently-configured clients can coexist in one
//! process; nothing here is global.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::{HubSpotError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.hubapi.com/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_USER_AGENT: &str = concat!("hubspot-client/", env!("CARGO_PKG_VERSION"));

/// API key and/or OAuth token held for the lifetime of a client.
#[derive(Debug, Default)]
pub struct Credentials {
    api_key: Option<SecretString>,
    oauth_token: Option<SecretString>,
}

/// How a single request authenticates.
///
/// When both an OAuth token and an API key are configured the bearer token
/// wins and the `hapikey` parameter is never sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth<'a> {
    Bearer(&'a str),
    ApiKey(&'a str),
    None,
}

impl Credentials {
    pub fn new(api_key: Option<String>, oauth_token: Option<String>) -> Self {
        Self {
            api_key: non_empty(api_key).map(SecretString::from),
            oauth_token: non_empty(oauth_token).map(SecretString::from),
        }
    }

    pub fn auth(&self) -> Auth<'_> {
        if let Some(token) = &self.oauth_token {
            return Auth::Bearer(token.expose_secret());
        }
        if let Some(key) = &self.api_key {
            return Auth::ApiKey(key.expose_secret());
        }
        Auth::None
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn has_oauth_token(&self) -> bool {
        self.oauth_token.is_some()
    }
}

/// Immutable settings shared by every request of a client.
#[derive(Debug)]
pub struct ClientConfig {
    base_url: Url,
    credentials: Credentials,
    timeout: Duration,
    connect_timeout: Duration,
    user_agent: String,
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Shorthand for an API-key authenticated client against the public API.
    pub fn with_api_key(api_key: &str) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Shorthand for an OAuth authenticated client against the public API.
    pub fn with_oauth_token(token: &str) -> Result<Self> {
        Self::builder().oauth_token(token).build()
    }

    /// Read configuration from the process environment.
    ///
    /// * `HUBSPOT_API_KEY`      – legacy `hapikey` credential
    /// * `HUBSPOT_OAUTH_TOKEN`  – bearer token (takes precedence)
    /// * `HUBSPOT_BASE_URL`     – API root, defaults to `https://api.hubapi.com/`
    /// * `HUBSPOT_TIMEOUT_SECS` – request timeout, defaults to 30
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_vars<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();
        if let Some(key) = non_empty(get("HUBSPOT_API_KEY")) {
            builder = builder.api_key(key);
        }
        if let Some(token) = non_empty(get("HUBSPOT_OAUTH_TOKEN")) {
            builder = builder.oauth_token(token);
        }
        if let Some(url) = non_empty(get("HUBSPOT_BASE_URL")) {
            builder = builder.base_url(url);
        }
        if let Some(secs) = non_empty(get("HUBSPOT_TIMEOUT_SECS")) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                HubSpotError::Config(format!("HUBSPOT_TIMEOUT_SECS is not a number: {secs}"))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    api_key: Option<String>,
    oauth_token: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn oauth_token(mut self, token: impl Into<String>) -> Self {
        self.oauth_token = Some(token.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<ClientConfig> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let mut base_url = Url::parse(raw)
            .map_err(|e| HubSpotError::Config(format!("invalid base URL {raw:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(HubSpotError::Config(format!("base URL {raw:?} cannot hold a path")));
        }
        // Routes are joined relative to the base, which needs a trailing slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        base_url.set_query(None);

        Ok(ClientConfig {
            base_url,
            credentials: Credentials::new(self.api_key, self.oauth_token),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            user_agent: self.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
