//! # http-api-client
//!
//! Typed async core for HTTP API clients built on `reqwest` and `serde`.
//!
//! - [`ApiClient`](application::client::ApiClient) holds an immutable base
//!   URL, a pluggable [`Authenticator`](application::auth::Authenticator) and
//!   an HTTP session that is either supplied by the caller or created and
//!   owned by the client.
//! - [`Schema`](model::schema::Schema) is the shared base of payload types:
//!   fields are populated from either their canonical name or their wire alias.
//! - [`Operation`](model::http::Operation) describes one HTTP call: path
//!   template, query, body, accepted statuses and accepted authentication.
//!
//! ```ignore
//! use http_api_client::prelude::*;
//!
//! setup_logger();
//! let client = ApiClient::new("https://api.example.com")?;
//! let pets: Vec<Pet> = client.get("/pets").await?;
//! client.close();
//! ```

/// Client, configuration, authentication and session ownership
pub mod application;
/// Crate-wide constants
pub mod constants;
/// Error type
pub mod error;
/// Payload schemas and HTTP operations
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Configuration, logging and id helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
