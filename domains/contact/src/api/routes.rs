//! Route definitions for Contact domain API

use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::messages;
use super::middleware::ContactState;

/// Create all Contact domain API routes
pub fn routes() -> Router<ContactState> {
    Router::new()
        .route(
            "/api/contact",
            get(messages::list_messages).post(messages::submit_message),
        )
        .route("/api/contact/{id}/handled", patch(messages::mark_handled))
}
