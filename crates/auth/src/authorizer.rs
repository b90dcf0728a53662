//! Server-side request authorizer
//!
//! Handlers call this (usually through the extractors) to turn the request's
//! credential cookie into an [`Identity`] whose role is on an allow-list.
//! Unlike the edge gate, failures here are precise: 401 for a missing or
//! unusable credential, 403 for a role outside the allow-list.

use axum::{
    http::HeaderMap,
    response::{IntoResponse, Response},
};

use crate::backend::AuthBackend;
use crate::claims::Role;
use crate::context::Identity;
use crate::cookie::read_credential;
use crate::error::AuthError;

/// Outcome of [`authorize`]
#[derive(Debug)]
pub enum Authorization {
    Authorized(Identity),
    /// Ready-to-send 401/403 `{"error": ...}` response
    Denied(Response),
}

impl Authorization {
    pub fn is_authorized(&self) -> bool {
        matches!(self, Authorization::Authorized(_))
    }
}

/// Verify the request credential and enforce `allowed` roles
pub fn check(
    backend: &AuthBackend,
    headers: &HeaderMap,
    allowed: &[Role],
) -> Result<Identity, AuthError> {
    let (cookie, token) = read_credential(headers).ok_or(AuthError::Missing)?;
    let credential = backend.verify(&token)?;

    if !allowed.contains(&credential.role) {
        tracing::debug!(
            cookie,
            subject_id = %credential.subject_id,
            role = %credential.role,
            "Role not permitted"
        );
        return Err(AuthError::Forbidden);
    }

    Ok(Identity::from(credential))
}

/// Same as [`check`], with the failure already rendered as a response
pub fn authorize(backend: &AuthBackend, headers: &HeaderMap, allowed: &[Role]) -> Authorization {
    match check(backend, headers, allowed) {
        Ok(identity) => Authorization::Authorized(identity),
        Err(err) => {
            tracing::debug!(reason = err.kind(), "Request not authorized");
            Authorization::Denied(err.into_response())
        }
    }
}
