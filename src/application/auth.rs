/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Authentication strategies
//!
//! Authentication is a capability plugged into the client, independent of
//! the HTTP session it uses:
//! - [`NoAuth`] sends requests untouched
//! - [`BasicAuth`] adds an HTTP basic `Authorization` header
//! - [`BearerAuth`] adds a bearer token `Authorization` header
//!
//! Custom strategies implement [`Authenticator`].

use crate::application::config::Credentials;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP authentication schemes an operation may accept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    /// No authentication
    None,
    /// HTTP basic auth
    Basic,
    /// HTTP bearer token
    Bearer,
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthScheme::None => write!(f, "none"),
            AuthScheme::Basic => write!(f, "basic"),
            AuthScheme::Bearer => write!(f, "bearer"),
        }
    }
}

/// Strategy that attaches credentials to outgoing requests
#[async_trait]
pub trait Authenticator: Send + Sync + fmt::Debug {
    /// The scheme this strategy implements
    fn scheme(&self) -> AuthScheme;

    /// Adds authentication to a request about to be sent
    ///
    /// # Errors
    /// Implementations fail when credentials cannot be produced.
    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder, AppError>;
}

/// Leaves requests unauthenticated
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

#[async_trait]
impl Authenticator for NoAuth {
    fn scheme(&self) -> AuthScheme {
        AuthScheme::None
    }

    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder, AppError> {
        Ok(request)
    }
}

/// HTTP basic authentication
#[derive(Debug, Clone)]
pub struct BasicAuth {
    credentials: Credentials,
}

impl BasicAuth {
    /// Creates a basic auth strategy from a username and secret
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(username, password),
        }
    }

    /// Login name sent with every request
    pub fn username(&self) -> &str {
        &self.credentials.username
    }
}

impl From<Credentials> for BasicAuth {
    fn from(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl Authenticator for BasicAuth {
    fn scheme(&self) -> AuthScheme {
        AuthScheme::Basic
    }

    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder, AppError> {
        let password = Some(&self.credentials.password).filter(|p| !p.is_empty());
        Ok(request.basic_auth(&self.credentials.username, password))
    }
}

/// HTTP bearer token authentication
#[derive(Clone)]
pub struct BearerAuth {
    token: String,
}

impl BearerAuth {
    /// Creates a bearer strategy sending `token`
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerAuth")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl Authenticator for BearerAuth {
    fn scheme(&self) -> AuthScheme {
        AuthScheme::Bearer
    }

    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder, AppError> {
        if self.token.is_empty() {
            return Err(AppError::Configuration(
                "bearer token must not be empty".to_string(),
            ));
        }
        Ok(request.bearer_auth(&self.token))
    }
}
