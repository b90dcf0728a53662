//! Quiz domain state and auth backend integration

use crate::QuizRepositories;
use axum::extract::FromRef;
use carepath_auth::AuthBackend;

/// Application state for the Quiz domain
#[derive(Clone)]
pub struct QuizState {
    pub repos: QuizRepositories,
    pub auth: AuthBackend,
}

impl FromRef<QuizState> for AuthBackend {
    fn from_ref(state: &QuizState) -> Self {
        state.auth.clone()
    }
}
