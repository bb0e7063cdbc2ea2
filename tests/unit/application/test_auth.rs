use http_api_client::application::auth::{
    AuthScheme, Authenticator, BasicAuth, BearerAuth, NoAuth,
};
use http_api_client::application::config::Credentials;
use http_api_client::error::AppError;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;

fn authorization_of(request: reqwest::RequestBuilder) -> Option<String> {
    let request = request.build().expect("request should build");
    request
        .headers()
        .get(AUTHORIZATION)
        .map(|v| v.to_str().expect("ascii header").to_string())
}

fn request() -> reqwest::RequestBuilder {
    Client::new().get("https://api.example.com/pets")
}

#[test]
fn test_schemes() {
    assert_eq!(NoAuth.scheme(), AuthScheme::None);
    assert_eq!(BasicAuth::new("user", "secret").scheme(), AuthScheme::Basic);
    assert_eq!(BearerAuth::new("token").scheme(), AuthScheme::Bearer);
}

#[test]
fn test_scheme_display() {
    assert_eq!(AuthScheme::None.to_string(), "none");
    assert_eq!(AuthScheme::Basic.to_string(), "basic");
    assert_eq!(AuthScheme::Bearer.to_string(), "bearer");
}

#[tokio::test]
async fn test_no_auth_leaves_request_untouched() {
    let request = NoAuth.authenticate(request()).await.unwrap();
    assert_eq!(authorization_of(request), None);
}

#[tokio::test]
async fn test_basic_auth_header() {
    let auth = BasicAuth::new("user", "secret");
    let request = auth.authenticate(request()).await.unwrap();
    assert_eq!(
        authorization_of(request).as_deref(),
        Some("Basic dXNlcjpzZWNyZXQ=")
    );
}

#[tokio::test]
async fn test_basic_auth_with_empty_password() {
    let auth = BasicAuth::from(Credentials::new("user", ""));
    assert_eq!(auth.username(), "user");
    let request = auth.authenticate(request()).await.unwrap();
    assert_eq!(authorization_of(request).as_deref(), Some("Basic dXNlcjo="));
}

#[tokio::test]
async fn test_bearer_auth_header() {
    let auth = BearerAuth::new("abc123");
    let request = auth.authenticate(request()).await.unwrap();
    assert_eq!(authorization_of(request).as_deref(), Some("Bearer abc123"));
}

#[tokio::test]
async fn test_bearer_auth_rejects_empty_token() {
    let err = BearerAuth::new("").authenticate(request()).await.unwrap_err();
    assert!(matches!(err, AppError::Configuration(_)));
}

#[test]
fn test_bearer_debug_redacts_token() {
    let text = format!("{:?}", BearerAuth::new("super-secret-token"));
    assert!(!text.contains("super-secret-token"));
}

#[test]
fn test_auth_scheme_serialization() {
    let json = serde_json::to_string(&AuthScheme::Basic).unwrap();
    assert_eq!(json, r#""basic""#);
    let scheme: AuthScheme = serde_json::from_str(r#""bearer""#).unwrap();
    assert_eq!(scheme, AuthScheme::Bearer);
}
