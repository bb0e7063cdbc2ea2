/// Environment variable helpers used by the configuration layer
pub mod config;
/// Module containing utilities for request correlation ids
pub mod id;
/// Module containing logging utilities
pub mod logger;

pub use id::*;
pub use logger::*;
