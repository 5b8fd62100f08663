use crate::ApiError;

use sr_core::FieldViolation;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_bytes(error: ApiError) -> bytes::Bytes {
    let response = error.into_response();
    response.into_body().collect().await.unwrap().to_bytes()
}

#[tokio::test]
async fn test_decode_error_returns_400_with_message() {
    let error = ApiError::decode("request body is empty");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "request body is empty");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field_map() {
    let error = ApiError::validation(vec![
        FieldViolation::new("name", "name cannot be empty"),
        FieldViolation::new("email", "email must be a valid email address"),
    ]);
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["name"], "name cannot be empty");
    assert_eq!(json["error"]["email"], "email must be a valid email address");
    assert_eq!(json["error"].as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_validation_error_preserves_violation_order() {
    let error = ApiError::validation(vec![
        FieldViolation::new("name", "name cannot be empty"),
        FieldViolation::new("email", "email must be a valid email address"),
    ]);

    let body = body_bytes(error).await;
    let text = std::str::from_utf8(&body).unwrap();

    let name_pos = text.find("\"name\"").unwrap();
    let email_pos = text.find("\"email\"").unwrap();
    assert!(name_pos < email_pos, "field order must follow violations");
}

#[tokio::test]
async fn test_single_violation_produces_single_entry() {
    let error = ApiError::validation(vec![FieldViolation::new(
        "age",
        "age must be between 3 and 120",
    )]);

    let body = body_bytes(error).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let fields = json["error"].as_object().unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields["age"], "age must be between 3 and 120");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::internal("registration failed");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "registration failed");
}

#[tokio::test]
async fn test_encoding_same_error_twice_is_byte_identical() {
    let violations = vec![
        FieldViolation::new("name", "name cannot be empty"),
        FieldViolation::new("email", "email must be a valid email address"),
    ];

    let first = body_bytes(ApiError::validation(violations.clone())).await;
    let second = body_bytes(ApiError::validation(violations)).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_decode_message_is_never_empty() {
    let error = ApiError::decode("invalid request body: expected value at line 1 column 1");

    let body = body_bytes(error).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert!(!json["error"].as_str().unwrap().is_empty());
}
