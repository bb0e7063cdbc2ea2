/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// User agent string sent by sessions the client creates itself
pub const USER_AGENT: &str = concat!("http-api-client/", env!("CARGO_PKG_VERSION"));
/// Base URL used when `API_BASE_URL` is not configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Default request timeout in seconds for owned sessions
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";
/// Length of generated request correlation ids
pub const REQUEST_ID_LENGTH: usize = 30;
/// Maximum number of response body bytes echoed into logs and errors
pub const MAX_LOGGED_BODY_LEN: usize = 512;
