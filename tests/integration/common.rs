// Common utilities for integration tests

use http_api_client::prelude::*;

schema! {
    /// Payload used across the integration tests
    #[derive(Debug, Clone, PartialEq)]
    pub struct Pet {
        pub id: u64,
        pub class_name as "class": String,
        pub pet_name as "petName": String,
    }
}

/// Creates an unauthenticated client pointed at a mock server
pub fn create_test_client(server_url: &str) -> ApiClient {
    setup_logger();
    ApiClient::new(server_url).expect("valid mock server url")
}

/// Creates a client authenticating with basic credentials
pub fn create_basic_auth_client(server_url: &str) -> ApiClient {
    setup_logger();
    ApiClient::builder(server_url)
        .credentials(Credentials::new("user", "secret"))
        .build()
        .expect("valid mock server url")
}

/// Authorization header sent for `user:secret`
pub const BASIC_USER_SECRET: &str = "Basic dXNlcjpzZWNyZXQ=";
