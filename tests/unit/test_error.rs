use http_api_client::error::AppError;
use reqwest::StatusCode;

#[test]
fn test_app_error_display_configuration() {
    let error = AppError::Configuration("base URL must not be empty".to_string());
    assert_eq!(
        error.to_string(),
        "configuration error: base URL must not be empty"
    );
}

#[test]
fn test_app_error_display_validation() {
    let error = AppError::Validation("missing field `id`".to_string());
    assert_eq!(error.to_string(), "validation error: missing field `id`");
}

#[test]
fn test_app_error_display_serialization() {
    let error = AppError::Serialization("key must be a string".to_string());
    assert_eq!(error.to_string(), "serialization error: key must be a string");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("missing path parameter".to_string());
    assert_eq!(error.to_string(), "invalid input: missing path parameter");
}

#[test]
fn test_app_error_display_unauthorized() {
    assert_eq!(AppError::Unauthorized.to_string(), "unauthorized");
}

#[test]
fn test_app_error_display_not_found() {
    assert_eq!(AppError::NotFound.to_string(), "not found");
}

#[test]
fn test_app_error_display_unexpected_status() {
    let error = AppError::UnexpectedStatus {
        status: StatusCode::BAD_REQUEST,
        body: "bad".to_string(),
    };
    let text = error.to_string();
    assert!(text.contains("400"));
    assert!(text.contains("bad"));
}

#[test]
fn test_from_status_maps_known_codes() {
    assert!(matches!(
        AppError::from_status(StatusCode::UNAUTHORIZED, String::new()),
        AppError::Unauthorized
    ));
    assert!(matches!(
        AppError::from_status(StatusCode::NOT_FOUND, String::new()),
        AppError::NotFound
    ));
    match AppError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()) {
        AppError::UnexpectedStatus { status, body } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, "boom");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn test_status_accessor() {
    assert_eq!(AppError::NotFound.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(AppError::Unauthorized.status(), Some(StatusCode::UNAUTHORIZED));
    assert_eq!(AppError::Validation("x".to_string()).status(), None);
}
