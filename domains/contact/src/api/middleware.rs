//! Contact domain state and auth backend integration

use crate::ContactRepositories;
use axum::extract::FromRef;
use carepath_auth::AuthBackend;

/// Application state for the Contact domain
#[derive(Clone)]
pub struct ContactState {
    pub repos: ContactRepositories,
    pub auth: AuthBackend,
}

impl FromRef<ContactState> for AuthBackend {
    fn from_ref(state: &ContactState) -> Self {
        state.auth.clone()
    }
}
