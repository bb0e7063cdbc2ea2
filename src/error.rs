/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error type shared by every fallible operation in the crate

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the API client
///
/// Nothing is retried internally: every failure reaches the caller either
/// unchanged (`Connection`) or wrapped with the context it happened in.
#[derive(Debug, Error)]
pub enum AppError {
    /// The client was configured with an invalid value (e.g. an empty base URL)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Session creation or the network round-trip failed
    #[error("connection error: {0}")]
    Connection(#[from] reqwest::Error),

    /// A payload could not be populated into its schema
    #[error("validation error: {0}")]
    Validation(String),

    /// A request payload could not be serialized
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The caller supplied arguments that cannot form a request
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The server answered 401
    #[error("unauthorized")]
    Unauthorized,

    /// The server answered 404
    #[error("not found")]
    NotFound,

    /// The server answered with a status the operation does not accept
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// Status returned by the server
        status: StatusCode,
        /// Response body, truncated for readability
        body: String,
    },
}

impl AppError {
    /// Maps a rejected response status to the matching variant
    #[must_use]
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => AppError::Unauthorized,
            StatusCode::NOT_FOUND => AppError::NotFound,
            _ => AppError::UnexpectedStatus { status, body },
        }
    }

    /// Returns the HTTP status attached to this error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            AppError::NotFound => Some(StatusCode::NOT_FOUND),
            AppError::UnexpectedStatus { status, .. } => Some(*status),
            AppError::Connection(e) => e.status(),
            _ => None,
        }
    }
}
