use crate::tests::test_server;

use http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn given_empty_body_when_create_student_then_400_with_error() {
    let server = test_server();

    let response = server.post("/students").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "request body is empty");
}

#[tokio::test]
async fn given_empty_object_body_when_create_student_then_400_decode_error() {
    let server = test_server();

    // `{}` is missing required fields, so it fails structural decode
    let response = server.post("/students").json(&json!({})).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn given_malformed_json_when_create_student_then_400_decode_error() {
    let server = test_server();

    let response = server.post("/students").text("not json at all").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("invalid request body"));
}

#[tokio::test]
async fn given_blank_name_and_bad_email_when_create_student_then_both_reported() {
    let server = test_server();

    let response = server
        .post("/students")
        .json(&json!({"name": "", "email": "bad"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    let fields = body["error"].as_object().unwrap();

    assert_eq!(fields.len(), 2);
    assert_eq!(fields["name"], "name cannot be empty");
    assert_eq!(fields["email"], "email must be a valid email address");

    // Declaration order: name before email
    let text = response.text();
    assert!(text.find("\"name\"").unwrap() < text.find("\"email\"").unwrap());
}

#[tokio::test]
async fn given_single_bad_field_when_create_student_then_single_entry() {
    let server = test_server();

    let response = server
        .post("/students")
        .json(&json!({"name": "Alice", "email": "alice@example.com", "age": 200}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    let fields = body["error"].as_object().unwrap();

    assert_eq!(fields.len(), 1);
    assert_eq!(fields["age"], "age must be between 3 and 120");
}

#[tokio::test]
async fn given_overlong_name_when_create_student_then_name_reported_once() {
    let server = test_server();

    let response = server
        .post("/students")
        .json(&json!({"name": "x".repeat(101), "email": "alice@example.com"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    let fields = body["error"].as_object().unwrap();

    assert_eq!(fields.len(), 1);
    assert_eq!(fields["name"], "name must not exceed 100 characters");
}

#[tokio::test]
async fn given_valid_body_when_create_student_then_201_without_error() {
    let server = test_server();

    let response = server
        .post("/students")
        .json(&json!({"name": "Alice Doe", "email": "alice@example.com", "age": 21}))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();

    assert!(body.get("error").is_none());
    assert_eq!(body["student"]["name"], "Alice Doe");
    assert_eq!(body["student"]["email"], "alice@example.com");
    assert_eq!(body["student"]["age"], 21);
    assert!(!body["student"]["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn given_valid_body_without_age_when_create_student_then_201() {
    let server = test_server();

    let response = server
        .post("/students")
        .json(&json!({"name": "Bob", "email": "bob@example.com"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();

    assert!(body.get("error").is_none());
    assert!(body["student"].get("age").is_none());
}
