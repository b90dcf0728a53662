//! Public contact form validation

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn test_short_contact_message_is_rejected_with_details() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/contact",
            None,
            json!({ "name": "A", "email": "a@b.co", "message": "Hi" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({
            "error": "Validation failed",
            "details": [
                { "field": "message", "message": "must be between 10 and 5000 characters" }
            ]
        })
    );
}

#[tokio::test]
async fn test_whitespace_padded_short_message_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/contact",
            None,
            json!({ "name": "   ", "email": "a@b.co", "message": "         x" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({
            "error": "Validation failed",
            "details": [
                { "field": "message", "message": "must be between 10 and 5000 characters" },
                { "field": "name", "message": "must be between 1 and 100 characters" }
            ]
        })
    );
}

#[tokio::test]
async fn test_contact_form_reports_every_bad_field() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/contact",
            None,
            json!({ "name": "", "email": "not-an-email", "message": "Hi" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["email", "message", "name"]);
}

#[tokio::test]
async fn test_contact_body_must_be_json() {
    let app = TestApp::new();

    let response = app
        .send(
            axum::http::Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header("content-type", "application/json")
                .body(axum::body::Body::from("{not json"))
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn test_wrong_shaped_contact_body_gets_validation_envelope() {
    let app = TestApp::new();

    let response = app.post_json("/api/contact", None, json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"][0]["field"], "name");
    assert_eq!(body["details"][0]["message"], "is required");
    assert!(!body.to_string().contains("line 1"));
}

#[tokio::test]
async fn test_wrong_field_type_names_the_field() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/contact",
            None,
            json!({ "name": "Robin", "email": "robin@example.com", "message": 42 }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({
            "error": "Validation failed",
            "details": [{ "field": "message", "message": "has the wrong type" }]
        })
    );
}
