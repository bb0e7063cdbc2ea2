/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! The API client
//!
//! [`ApiClient`] owns an immutable base URL, an authentication strategy and
//! an HTTP session. The session is either supplied by the caller or created
//! by the client at construction time.
//!
//! # Example
//! ```ignore
//! use http_api_client::prelude::*;
//!
//! let client = ApiClient::builder("https://api.example.com")
//!     .credentials(Credentials::new("user", "secret"))
//!     .build()?;
//!
//! let pet: Pet = client
//!     .execute(Operation::get("/pets/{pet_id}").with_path_param("pet_id", 42))
//!     .await?;
//! ```

use crate::application::auth::{AuthScheme, Authenticator, BasicAuth, NoAuth};
use crate::application::config::{ClientConfig, Config, Credentials};
use crate::application::session::SessionHandle;
use crate::constants::REQUEST_ID_HEADER;
use crate::error::AppError;
use crate::model::http::{ApiResponse, Operation, truncate_body};
use crate::utils::id::get_id;
use reqwest::{Client, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Async HTTP API client
///
/// Requests take `&self`, so one client can serve concurrent tasks when
/// wrapped in an `Arc`.
#[derive(Debug)]
pub struct ApiClient {
    config: ClientConfig,
    auth: Arc<dyn Authenticator>,
    session: SessionHandle,
}

impl ApiClient {
    /// Creates a client for `base_url` with no credentials and an owned session
    ///
    /// # Errors
    /// `AppError::Configuration` for an invalid base URL, `AppError::Connection`
    /// if the session cannot be created.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        Self::builder(base_url).build()
    }

    /// Starts building a client for `base_url`
    pub fn builder(base_url: impl Into<String>) -> ApiClientBuilder {
        ApiClientBuilder::new(base_url)
    }

    /// Creates a client from a validated configuration with an owned session
    ///
    /// Credentials in the configuration enable basic authentication.
    ///
    /// # Errors
    /// `AppError::Connection` if the session cannot be created.
    pub fn from_config(config: ClientConfig) -> Result<Self, AppError> {
        let session = SessionHandle::owned(&config)?;
        let auth = default_auth(config.credentials());
        Ok(Self {
            config,
            auth,
            session,
        })
    }

    /// Creates a client configured from the environment
    ///
    /// # Errors
    /// Same as [`ClientConfig::try_from`] and [`ApiClient::from_config`].
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_config(ClientConfig::try_from(Config::new())?)
    }

    /// Base URL every request path is appended to
    pub fn base_url(&self) -> &Url {
        self.config.base_url()
    }

    /// The client's configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The HTTP session in use
    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// The authentication strategy in use
    pub fn authenticator(&self) -> &dyn Authenticator {
        self.auth.as_ref()
    }

    /// Releases the client
    ///
    /// An owned session is closed together with its connection pool. A
    /// session supplied by the caller stays open for its owner.
    pub fn close(self) {
        if self.session.is_owned() {
            debug!("Closing client for {} and its owned session", self.base_url());
        } else {
            debug!(
                "Closing client for {}, shared session left to its owner",
                self.base_url()
            );
        }
    }

    /// Makes a GET request and parses the JSON response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.execute(Operation::get(path)).await
    }

    /// Makes a POST request with a JSON body and parses the JSON response
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.execute(Operation::post(path).with_body(body)?).await
    }

    /// Makes a PUT request with a JSON body and parses the JSON response
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.execute(Operation::put(path).with_body(body)?).await
    }

    /// Makes a PATCH request with a JSON body and parses the JSON response
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.execute(Operation::patch(path).with_body(body)?).await
    }

    /// Makes a DELETE request, ignoring the response body
    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        self.execute_empty(Operation::delete(path)).await
    }

    /// Executes `operation` and parses an accepted response as `T`
    ///
    /// # Errors
    /// Status errors as described by [`ApiResponse::check`], and
    /// `AppError::Validation` if the body does not fit `T`.
    pub async fn execute<T: DeserializeOwned>(&self, operation: Operation) -> Result<T, AppError> {
        let response = self.send(&operation).await?;
        response.check(&operation)?;
        response.json()
    }

    /// Executes `operation`, checking the status but ignoring the body
    ///
    /// # Errors
    /// Status errors as described by [`ApiResponse::check`].
    pub async fn execute_empty(&self, operation: Operation) -> Result<(), AppError> {
        let response = self.send(&operation).await?;
        response.check(&operation)
    }

    /// Sends `operation` and buffers the response without judging its status
    ///
    /// # Errors
    /// `AppError::InvalidInput` if the path or headers are invalid, authentication
    /// errors, and `AppError::Connection` for transport failures.
    pub async fn send(&self, operation: &Operation) -> Result<ApiResponse, AppError> {
        let url = operation.url(self.base_url())?;
        let headers = operation.header_map()?;
        let request_id = get_id();

        debug!(request_id = %request_id, "{} {}", operation.method, url);

        let mut request = self
            .session
            .client()
            .request(operation.method.clone(), url)
            .header(REQUEST_ID_HEADER, request_id.as_str())
            .header("Accept", "application/json");

        if !operation.query.is_empty() {
            request = request.query(&operation.query);
        }

        if !headers.is_empty() {
            request = request.headers(headers);
        }

        if let Some(body) = &operation.body {
            request = request.json(body);
        }

        if operation.security.accepts(self.auth.scheme()) {
            request = self.auth.authenticate(request).await?;
        } else if self.auth.scheme() != AuthScheme::None {
            debug!(
                request_id = %request_id,
                "Skipping {} authentication, not accepted by {} {}",
                self.auth.scheme(),
                operation.method,
                operation.path
            );
        }

        let response = request.send().await.map_err(|e| {
            error!(request_id = %request_id, "Request failed: {}", e);
            AppError::from(e)
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        debug!(request_id = %request_id, "Response status: {}", status);

        if !operation.accepts_status(status) {
            warn!(
                request_id = %request_id,
                "{} {} answered {}: {}",
                operation.method,
                operation.path,
                status,
                truncate_body(&body)
            );
        }

        Ok(ApiResponse {
            status,
            headers,
            body,
            request_id,
        })
    }
}

/// Chooses the authenticator implied by configured credentials
fn default_auth(credentials: Option<&Credentials>) -> Arc<dyn Authenticator> {
    match credentials {
        Some(credentials) => Arc::new(BasicAuth::from(credentials.clone())),
        None => Arc::new(NoAuth),
    }
}

/// Builder for [`ApiClient`]
///
/// Authentication and the session are wired independently: any combination
/// of credentials (or a custom [`Authenticator`]) and a caller-owned session
/// is accepted.
#[derive(Debug)]
pub struct ApiClientBuilder {
    base_url: String,
    credentials: Option<Credentials>,
    auth: Option<Arc<dyn Authenticator>>,
    session: Option<Arc<Client>>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    /// Creates a builder for `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: None,
            auth: None,
            session: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Use HTTP basic authentication with `credentials`
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Use a custom authentication strategy, overriding credentials
    pub fn auth<A: Authenticator + 'static>(mut self, auth: A) -> Self {
        self.auth = Some(Arc::new(auth));
        self
    }

    /// Adopt a caller-owned session instead of creating one
    pub fn session(mut self, session: Arc<Client>) -> Self {
        self.session = Some(session);
        self
    }

    /// Request timeout for an owned session
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// User agent for an owned session
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validates the configuration and creates the client
    ///
    /// # Errors
    /// `AppError::Configuration` for an invalid base URL, `AppError::Connection`
    /// if an owned session cannot be created.
    pub fn build(self) -> Result<ApiClient, AppError> {
        let tuned = self.timeout.is_some() || self.user_agent.is_some();

        let mut config = ClientConfig::new(&self.base_url)?;
        if let Some(credentials) = self.credentials {
            config = config.with_credentials(credentials);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            config = config.with_user_agent(user_agent);
        }

        if tuned && self.session.is_some() {
            warn!("Timeout and user agent only apply to owned sessions, ignoring them");
        }

        let session = match self.session {
            Some(client) => SessionHandle::shared(client),
            None => SessionHandle::owned(&config)?,
        };
        let auth = self
            .auth
            .unwrap_or_else(|| default_auth(config.credentials()));

        Ok(ApiClient {
            config,
            auth,
            session,
        })
    }
}
