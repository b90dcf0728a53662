//! Route definitions for Quiz domain API

use axum::{routing::get, Router};

use super::handlers::submissions;
use super::middleware::QuizState;

/// Create all Quiz domain API routes
pub fn routes() -> Router<QuizState> {
    Router::new()
        .route(
            "/api/quiz",
            get(submissions::list_submissions).post(submissions::submit_quiz),
        )
        .route("/api/quiz/mine", get(submissions::list_my_submissions))
}
