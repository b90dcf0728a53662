//! Route definitions for Payments domain API

use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::payments;
use super::middleware::PaymentsState;

/// Create all Payments domain API routes
pub fn routes() -> Router<PaymentsState> {
    Router::new()
        .route(
            "/api/payments",
            get(payments::list_payments).post(payments::create_payment),
        )
        .route("/api/payments/{id}", patch(payments::update_payment_status))
}
