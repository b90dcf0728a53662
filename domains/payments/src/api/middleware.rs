//! Payments domain state and auth backend integration

use crate::PaymentsRepositories;
use axum::extract::FromRef;
use carepath_auth::AuthBackend;

/// Application state for the Payments domain
#[derive(Clone)]
pub struct PaymentsState {
    pub repos: PaymentsRepositories,
    pub auth: AuthBackend,
}

impl FromRef<PaymentsState> for AuthBackend {
    fn from_ref(state: &PaymentsState) -> Self {
        state.auth.clone()
    }
}
