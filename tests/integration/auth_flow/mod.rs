//! Server-side authorizer and credential clearing through the router

use axum::http::{Method, StatusCode};
use carepath_auth::{Credential, Role};
use serde_json::json;

use crate::common::{
    assertions::assert_error, body_json, cookie_pair, request, set_cookies, TestApp,
};

const ADMIN_ID: &str = "00000000-0000-0000-0000-0000000000a1";
const USER_ID: &str = "00000000-0000-0000-0000-0000000000b2";

#[tokio::test]
async fn test_admin_api_without_cookie_is_unauthorized() {
    let app = TestApp::new();

    let response = app.get("/api/users", None).await;

    assert_error(response, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn test_tampered_cookie_is_unauthorized() {
    let app = TestApp::new();
    let mut token = app.token(ADMIN_ID, Role::Admin);
    token.push('x');

    let response = app
        .get("/api/users", Some(&format!("admin_token={}", token)))
        .await;

    assert_error(response, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn test_expired_cookie_is_unauthorized() {
    let app = TestApp::new();
    let expired = app.sign(&Credential::new(USER_ID, Role::User, -30).unwrap());

    let response = app
        .get("/api/auth/me", Some(&format!("session_token={}", expired)))
        .await;

    assert_error(response, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn test_user_role_is_forbidden_from_admin_apis() {
    let app = TestApp::new();
    let cookie = app.cookie(USER_ID, Role::User);

    for uri in ["/api/users", "/api/quiz", "/api/contact"] {
        let response = app.get(uri, Some(&cookie)).await;
        assert_error(response, StatusCode::FORBIDDEN, "Forbidden").await;
    }

    let response = app
        .patch_json(
            "/api/payments/00000000-0000-0000-0000-000000000009",
            Some(&cookie),
            json!({ "status": "succeeded" }),
        )
        .await;
    assert_error(response, StatusCode::FORBIDDEN, "Forbidden").await;
}

#[tokio::test]
async fn test_admin_credential_passes_the_authorizer() {
    let app = TestApp::new();
    let cookie = app.cookie(ADMIN_ID, Role::Admin);

    // rejected by body validation, so the credential was accepted first
    let response = app
        .patch_json(
            "/api/payments/00000000-0000-0000-0000-000000000009",
            Some(&cookie),
            json!({ "status": "chargeback" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logout_clears_both_cookies() {
    let app = TestApp::new();

    let response = app
        .send(request(Method::POST, "/api/auth/logout", None, None))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let cleared = set_cookies(response.headers());
    assert_eq!(cleared.len(), 2);
    assert!(cleared[0].starts_with("admin_token=;"));
    assert!(cleared[1].starts_with("session_token=;"));
    for cookie in &cleared {
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("HttpOnly"));
    }

    assert_eq!(body_json(response).await, json!({ "success": true }));
}

#[tokio::test]
async fn test_request_after_logout_is_unauthorized() {
    let app = TestApp::new();
    let signed_in = app.cookie(USER_ID, Role::User);

    let response = app
        .send(request(
            Method::POST,
            "/api/auth/logout",
            Some(&signed_in),
            None,
        ))
        .await;

    // the browser now sends the cleared (empty) cookies
    let cookie_header = set_cookies(response.headers())
        .iter()
        .map(|c| cookie_pair(c))
        .collect::<Vec<_>>()
        .join("; ");

    let response = app.get("/api/auth/me", Some(&cookie_header)).await;
    assert_error(response, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let app = TestApp::new();

    let first = app
        .send(request(Method::POST, "/api/auth/logout", None, None))
        .await;
    let second = app
        .send(request(
            Method::POST,
            "/api/auth/logout",
            Some("admin_token=; session_token="),
            None,
        ))
        .await;

    assert_eq!(first.status(), second.status());
    assert_eq!(set_cookies(first.headers()), set_cookies(second.headers()));
}

#[tokio::test]
async fn test_malformed_login_body_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/auth/login", None, json!({ "email": "a@b.test" }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(
        body["details"],
        json!([{ "field": "password", "message": "is required" }])
    );
}

#[tokio::test]
async fn test_short_registration_password_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/auth/register",
            None,
            json!({ "email": "new@carepath.test", "password": "short" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"][0]["field"], "password");
}
