//! Carepath application composition root
//!
//! Composes all domain routers into a single application and puts the admin
//! edge gate in front of everything.

mod admin;
mod layers;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use carepath_accounts::{AccountsRepositories, AccountsState};
use carepath_auth::{admin_gate, AdminGate, AuthBackend, AuthConfig};
use carepath_common::Config;
use carepath_contact::{ContactRepositories, ContactState};
use carepath_payments::{PaymentsRepositories, PaymentsState};
use carepath_quizzes::{QuizRepositories, QuizState};
use sqlx::PgPool;

pub use admin::AdminState;
pub use layers::{body_limit_layer, build_cors_layer, MAX_BODY_BYTES};

/// Create the main application router with all routes and middleware
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    let auth = AuthBackend::new(AuthConfig::from(config));

    let accounts_state = AccountsState {
        repos: AccountsRepositories::new(pool.clone()),
        auth: auth.clone(),
    };
    let quiz_state = QuizState {
        repos: QuizRepositories::new(pool.clone()),
        auth: auth.clone(),
    };
    let payments_state = PaymentsState {
        repos: PaymentsRepositories::new(pool.clone()),
        auth: auth.clone(),
    };
    let contact_state = ContactState {
        repos: ContactRepositories::new(pool.clone()),
        auth: auth.clone(),
    };
    let admin_state = AdminState::new(pool, auth.clone());

    // Layered over the whole router so unmatched /admin/* paths are gated too
    let gate = AdminGate::new(auth);

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(|| async { "Carepath API v0.0.1-SNAPSHOT" }))
        .merge(carepath_accounts::routes().with_state(accounts_state))
        .merge(carepath_quizzes::routes().with_state(quiz_state))
        .merge(carepath_payments::routes().with_state(payments_state))
        .merge(carepath_contact::routes().with_state(contact_state))
        .merge(admin::routes().with_state(admin_state))
        .layer(from_fn_with_state(gate, admin_gate))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
