//! Route definitions for Accounts domain API

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{auth, subscriptions, users};
use super::middleware::AccountsState;

/// Sign-up, sign-in and sign-out
fn auth_routes() -> Router<AccountsState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
}

/// Admin user directory
fn user_routes() -> Router<AccountsState> {
    Router::new()
        .route("/api/users", get(users::list_users))
        .route("/api/users/{id}", get(users::get_user))
}

fn subscription_routes() -> Router<AccountsState> {
    Router::new()
        .route(
            "/api/subscriptions",
            get(subscriptions::list_subscriptions).post(subscriptions::create_subscription),
        )
        .route(
            "/api/subscriptions/{id}",
            patch(subscriptions::update_subscription_status),
        )
}

/// Create all Accounts domain API routes
pub fn routes() -> Router<AccountsState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(subscription_routes())
}
