//! Edge gate in front of the `/admin` section

use axum::http::{header::LOCATION, StatusCode};
use carepath_auth::{Credential, Role};

use crate::common::{body_text, TestApp};

#[tokio::test]
async fn test_admin_path_without_cookie_redirects_to_login() {
    let app = TestApp::new();

    let response = app.get("/admin/users", None).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[LOCATION],
        "/admin/login?redirect=%2Fadmin%2Fusers"
    );
}

#[tokio::test]
async fn test_login_page_is_reachable_without_cookie() {
    let app = TestApp::new();

    let response = app.get("/admin/login", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("/api/auth/login"));
}

#[tokio::test]
async fn test_admin_on_login_page_goes_to_dashboard() {
    let app = TestApp::new();
    let cookie = app.cookie("00000000-0000-0000-0000-000000000001", Role::Admin);

    let response = app.get("/admin/login", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[LOCATION], "/admin");
}

#[tokio::test]
async fn test_user_credential_is_redirected_like_a_missing_one() {
    let app = TestApp::new();
    // a user token placed in the admin cookie must not pass the gate
    let user_token = app.token("00000000-0000-0000-0000-000000000002", Role::User);
    let forged = format!("admin_token={}", user_token);
    let session = app.cookie("00000000-0000-0000-0000-000000000002", Role::User);

    let missing = app.get("/admin", None).await;
    for cookie in [forged.as_str(), session.as_str(), "admin_token=garbage"] {
        let response = app.get("/admin", Some(cookie)).await;
        assert_eq!(response.status(), missing.status());
        assert_eq!(response.headers()[LOCATION], missing.headers()[LOCATION]);
    }
    assert_eq!(missing.headers()[LOCATION], "/admin/login?redirect=%2Fadmin");
}

#[tokio::test]
async fn test_expired_admin_credential_is_redirected() {
    let app = TestApp::new();
    let expired = app.sign(
        &Credential::new("00000000-0000-0000-0000-000000000001", Role::Admin, -1).unwrap(),
    );

    let response = app
        .get("/admin", Some(&format!("admin_token={}", expired)))
        .await;

    assert_eq!(response.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn test_unknown_admin_paths_are_gated_too() {
    let app = TestApp::new();

    let response = app.get("/admin/does-not-exist", None).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[LOCATION],
        "/admin/login?redirect=%2Fadmin%2Fdoes-not-exist"
    );
}

#[tokio::test]
async fn test_public_paths_are_not_gated() {
    let app = TestApp::new();

    let health = app.get("/health", None).await;
    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(body_text(health).await, "OK");

    let home = app.get("/", None).await;
    assert_eq!(home.status(), StatusCode::OK);

    let lookalike = app.get("/administrator", None).await;
    assert_eq!(lookalike.status(), StatusCode::NOT_FOUND);
}
