//! Full sign-up → subscription → payment flow against a live database
//!
//! Run with `TEST_DATABASE_URL` pointing at a disposable Postgres:
//! `cargo test -p carepath-integration-tests -- --ignored`

use axum::http::StatusCode;
use carepath_auth::Role;
use serde_json::json;
use uuid::Uuid;

use crate::common::{body_json, cookie_pair, set_cookies, TestApp};

fn unique_email() -> String {
    format!("test_{}@carepath.test", Uuid::new_v4().simple())
}

async fn register(app: &TestApp, email: &str) -> String {
    let response = app
        .post_json(
            "/api/auth/register",
            None,
            json!({ "email": email, "password": "correct horse", "name": "Test User" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let cookies = set_cookies(response.headers());
    assert!(cookies[0].starts_with("session_token="));
    cookie_pair(&cookies[0])
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_register_login_and_me() {
    let app = TestApp::with_database().await.unwrap();
    let email = unique_email();
    register(&app, &email).await;

    let duplicate = app
        .post_json(
            "/api/auth/register",
            None,
            json!({ "email": email.to_uppercase(), "password": "another one" }),
        )
        .await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let wrong = app
        .post_json(
            "/api/auth/login",
            None,
            json!({ "email": email, "password": "wrong password" }),
        )
        .await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(wrong).await["error"], "Invalid email or password");

    let login = app
        .post_json(
            "/api/auth/login",
            None,
            json!({ "email": email, "password": "correct horse" }),
        )
        .await;
    assert_eq!(login.status(), StatusCode::OK);
    let cookie = cookie_pair(&set_cookies(login.headers())[0]);

    let me = app.get("/api/auth/me", Some(&cookie)).await;
    assert_eq!(me.status(), StatusCode::OK);
    let body = body_json(me).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["email"], email);
    assert_eq!(body["user"]["role"], "user");
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_user_login_clears_leftover_admin_cookie() {
    let app = TestApp::with_database().await.unwrap();
    let email = unique_email();
    register(&app, &email).await;

    let leftover = app.cookie(&Uuid::new_v4().to_string(), Role::Admin);
    let login = app
        .post_json(
            "/api/auth/login",
            Some(&leftover),
            json!({ "email": email, "password": "correct horse" }),
        )
        .await;
    assert_eq!(login.status(), StatusCode::OK);

    let cookies = set_cookies(login.headers());
    assert_eq!(cookies.len(), 2);
    assert!(cookies[0].starts_with("session_token=ey"));
    assert!(cookies[1].starts_with("admin_token=;"));
    assert!(cookies[1].contains("Max-Age=0"));

    // The browser now holds only the user's session cookie
    let session = cookie_pair(&cookies[0]);
    let admin_api = app.get("/api/users", Some(&session)).await;
    assert_eq!(admin_api.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_subscription_lifecycle_and_payment() {
    let app = TestApp::with_database().await.unwrap();
    let cookie = register(&app, &unique_email()).await;

    let created = app
        .post_json("/api/subscriptions", Some(&cookie), json!({ "plan": "weight_loss" }))
        .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let subscription = body_json(created).await["subscription"].clone();
    assert_eq!(subscription["status"], "pending");
    assert_eq!(subscription["price_cents"], 14900);
    let id = subscription["id"].as_str().unwrap().to_string();

    let again = app
        .post_json("/api/subscriptions", Some(&cookie), json!({ "plan": "weight_loss" }))
        .await;
    assert_eq!(again.status(), StatusCode::CONFLICT);

    let paused_too_early = app
        .patch_json(
            &format!("/api/subscriptions/{id}"),
            Some(&cookie),
            json!({ "status": "paused" }),
        )
        .await;
    assert_eq!(paused_too_early.status(), StatusCode::BAD_REQUEST);

    let activated = app
        .patch_json(
            &format!("/api/subscriptions/{id}"),
            Some(&cookie),
            json!({ "status": "active" }),
        )
        .await;
    assert_eq!(activated.status(), StatusCode::OK);
    assert!(body_json(activated).await["subscription"]["started_at"].is_string());

    let paid = app
        .post_json(
            "/api/payments",
            Some(&cookie),
            json!({ "subscription_id": id, "amount_cents": 14900, "currency": "usd" }),
        )
        .await;
    assert_eq!(paid.status(), StatusCode::CREATED);
    assert_eq!(body_json(paid).await["payment"]["currency"], "USD");

    // someone else's subscription looks like a missing one
    let stranger = register(&app, &unique_email()).await;
    let foreign = app
        .post_json(
            "/api/payments",
            Some(&stranger),
            json!({ "subscription_id": id, "amount_cents": 100, "currency": "USD" }),
        )
        .await;
    assert_eq!(foreign.status(), StatusCode::NOT_FOUND);

    let hidden = app
        .patch_json(
            &format!("/api/subscriptions/{id}"),
            Some(&stranger),
            json!({ "status": "cancelled" }),
        )
        .await;
    assert_eq!(hidden.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_quiz_attaches_signed_in_user() {
    let app = TestApp::with_database().await.unwrap();
    let email = unique_email();
    let cookie = register(&app, &email).await;

    let submitted = app
        .post_json(
            "/api/quiz",
            Some(&cookie),
            json!({ "answers": [{ "question": "goal", "answer": "lose weight" }] }),
        )
        .await;
    assert_eq!(submitted.status(), StatusCode::CREATED);
    let submission = body_json(submitted).await["submission"].clone();
    assert_eq!(submission["recommended_plan"], "weight_loss");
    assert!(submission["user_id"].is_string());
    assert_eq!(submission["email"], email);

    let mine = app.get("/api/quiz/mine", Some(&cookie)).await;
    let body = body_json(mine).await;
    assert_eq!(body["submissions"].as_array().unwrap().len(), 1);

    let anonymous = app
        .post_json(
            "/api/quiz",
            None,
            json!({ "answers": [{ "question": "goal", "answer": "healthy aging" }] }),
        )
        .await;
    assert_eq!(anonymous.status(), StatusCode::CREATED);
    assert!(body_json(anonymous).await["submission"]["user_id"].is_null());
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_contact_message_reaches_admin_inbox() {
    let app = TestApp::with_database().await.unwrap();

    let sent = app
        .post_json(
            "/api/contact",
            None,
            json!({
                "name": "Robin",
                "email": "robin@example.com",
                "subject": "Pricing",
                "message": "Do you offer family plans?"
            }),
        )
        .await;
    assert_eq!(sent.status(), StatusCode::CREATED);
    let id = body_json(sent).await["message"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let admin = app.cookie(&Uuid::new_v4().to_string(), carepath_auth::Role::Admin);
    let handled = app
        .patch_json(&format!("/api/contact/{id}/handled"), Some(&admin), json!({}))
        .await;
    assert_eq!(handled.status(), StatusCode::OK);
    assert_eq!(body_json(handled).await["message"]["handled"], true);

    let dashboard = app.get("/admin", Some(&admin)).await;
    assert_eq!(dashboard.status(), StatusCode::OK);
    assert!(body_json(dashboard).await["dashboard"]["users"].is_number());
}
