/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Prelude
//!
//! Brings the commonly used types into scope:
//!
//! ```rust
//! use http_api_client::prelude::*;
//!
//! let client = ApiClient::new("https://api.example.com").unwrap();
//! assert!(client.session().is_owned());
//! ```

// ============================================================================
// CLIENT AND CONFIGURATION
// ============================================================================

pub use crate::application::client::{ApiClient, ApiClientBuilder};
pub use crate::application::config::{ClientConfig, Config, Credentials, RestApiConfig};
pub use crate::application::session::{Ownership, SessionHandle};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// AUTHENTICATION
// ============================================================================

pub use crate::application::auth::{AuthScheme, Authenticator, BasicAuth, BearerAuth, NoAuth};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::AppError;

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::http::{ApiResponse, Operation, Security};
pub use crate::model::schema::{Schema, parse_as};
pub use crate::{impl_schema, schema};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::id::get_id;
pub use crate::utils::logger::setup_logger;

// ============================================================================
// EXTERNAL RE-EXPORTS
// ============================================================================

pub use reqwest::{Method, StatusCode};
pub use serde::{Deserialize, Serialize};
