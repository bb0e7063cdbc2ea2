use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, USER_AGENT};
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::debug;

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Basic authentication credentials
pub struct Credentials {
    /// Login name
    pub username: String,
    /// Secret paired with the login name, never serialised
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl Credentials {
    /// Creates a credential pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every request path is appended to
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
    /// User agent sent by sessions the client creates itself
    pub user_agent: String,
}

#[derive(Serialize, Deserialize, Clone)]
/// Raw client configuration, typically loaded from the environment
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Optional basic authentication credentials
    pub credentials: Option<Credentials>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("rest_api", &self.rest_api)
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the configuration from the environment and an optional `.env` file
    ///
    /// Reads `API_BASE_URL`, `API_TIMEOUT_SECS`, `API_USER_AGENT`,
    /// `API_USERNAME` and `API_PASSWORD`. Credentials are only set when
    /// `API_USERNAME` is present.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let credentials = get_env_or_none::<String>("API_USERNAME").map(|username| {
            Credentials::new(username, get_env_or_default("API_PASSWORD", String::new()))
        });

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default("API_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
                user_agent: get_env_or_default("API_USER_AGENT", String::from(USER_AGENT)),
            },
            credentials,
        }
    }
}

/// Validated client configuration
///
/// The base URL is checked once at construction and cannot change afterwards.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    credentials: Option<Credentials>,
    timeout: Duration,
    user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration for `base_url` with default timeout and user agent
    ///
    /// # Errors
    /// Returns `AppError::Configuration` if `base_url` is empty, cannot be
    /// parsed, or does not use the `http`/`https` scheme.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            credentials: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
        })
    }

    /// Sets the basic authentication credentials
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the request timeout used by an owned session
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent used by an owned session
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Base URL every request path is appended to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Configured credentials, if any
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Request timeout for an owned session
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// User agent for an owned session
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl TryFrom<Config> for ClientConfig {
    type Error = AppError;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        let mut client_config = ClientConfig::new(&config.rest_api.base_url)?
            .with_timeout(Duration::from_secs(config.rest_api.timeout))
            .with_user_agent(config.rest_api.user_agent);
        client_config.credentials = config.credentials;
        Ok(client_config)
    }
}

/// Parses and validates a base URL
fn parse_base_url(base_url: &str) -> Result<Url, AppError> {
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        return Err(AppError::Configuration("base URL must not be empty".to_string()));
    }

    let url = Url::parse(trimmed)
        .map_err(|e| AppError::Configuration(format!("invalid base URL {trimmed:?}: {e}")))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::Configuration(format!(
                "unsupported base URL scheme {other:?}, expected http or https"
            )));
        }
    }

    if url.cannot_be_a_base() {
        return Err(AppError::Configuration(format!(
            "base URL {trimmed:?} cannot carry a path"
        )));
    }

    Ok(url)
}
