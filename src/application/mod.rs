/// Authentication strategies
pub mod auth;
/// The API client and its builder
pub mod client;
/// Application configuration module
pub mod config;
/// HTTP session ownership
pub mod session;
