/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! HTTP session ownership
//!
//! A [`SessionHandle`] wraps the `reqwest` client used to reach the API. It is
//! either shared by the caller, who keeps responsibility for its lifecycle, or
//! created and owned by the API client. An owned session is never handed out
//! as an `Arc`. Its connection pool closes once the handle is dropped, unless
//! a caller kept its own clone of the `reqwest::Client` returned by
//! [`SessionHandle::client`].

use crate::application::config::ClientConfig;
use crate::error::AppError;
use reqwest::Client;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Who is responsible for a session's lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// Created by the API client and released with it
    Owned,
    /// Supplied by the caller, who keeps it alive and closes it
    Shared,
}

/// An HTTP session together with its ownership
pub struct SessionHandle {
    client: Arc<Client>,
    ownership: Ownership,
}

impl SessionHandle {
    /// Builds a new session owned by the handle
    ///
    /// # Errors
    /// Returns `AppError::Connection` if the underlying client cannot be built
    /// (e.g. the TLS backend fails to initialise).
    pub fn owned(config: &ClientConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.timeout())
            .build()?;

        debug!("Created owned HTTP session for {}", config.base_url());

        Ok(Self {
            client: Arc::new(client),
            ownership: Ownership::Owned,
        })
    }

    /// Adopts a session supplied by the caller
    pub fn shared(client: Arc<Client>) -> Self {
        Self {
            client,
            ownership: Ownership::Shared,
        }
    }

    /// The underlying HTTP client
    ///
    /// A clone shares the connection pool and keeps it open.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The session's ownership
    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Whether the handle owns its session
    pub fn is_owned(&self) -> bool {
        self.ownership == Ownership::Owned
    }

    /// Whether this handle wraps exactly `other`
    pub fn is_same_session(&self, other: &Arc<Client>) -> bool {
        Arc::ptr_eq(&self.client, other)
    }

    /// Whether two handles wrap the same session
    pub fn shares_session_with(&self, other: &SessionHandle) -> bool {
        Arc::ptr_eq(&self.client, &other.client)
    }

    /// Returns the caller's session, or `None` for an owned one
    pub fn shared_client(&self) -> Option<Arc<Client>> {
        match self.ownership {
            Ownership::Shared => Some(Arc::clone(&self.client)),
            Ownership::Owned => None,
        }
    }
}

impl fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionHandle")
            .field("ownership", &self.ownership)
            .finish_non_exhaustive()
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        match self.ownership {
            Ownership::Owned => debug!("Releasing owned HTTP session"),
            Ownership::Shared => debug!("Detaching from caller-owned HTTP session"),
        }
    }
}
