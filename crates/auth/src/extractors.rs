//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::Response,
};

use crate::authorizer::{authorize, check, Authorization};
use crate::backend::AuthBackend;
use crate::claims::Role;
use crate::context::Identity;

fn require(parts: &Parts, backend: &AuthBackend, allowed: &[Role]) -> Result<Identity, Response> {
    match authorize(backend, &parts.headers, allowed) {
        Authorization::Authorized(identity) => Ok(identity),
        Authorization::Denied(response) => Err(response),
    }
}

/// Admin-only extractor; 401 without a usable credential, 403 for other roles
#[derive(Debug)]
pub struct AdminUser(pub Identity);

impl<S> FromRequestParts<S> for AdminUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);
        require(parts, &backend, &[Role::Admin]).map(AdminUser)
    }
}

/// Any signed-in principal (admin or user)
#[derive(Debug)]
pub struct SignedInUser(pub Identity);

impl<S> FromRequestParts<S> for SignedInUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);
        require(parts, &backend, &[Role::Admin, Role::User]).map(SignedInUser)
    }
}

/// Optional identity for public endpoints that attach data to the caller
/// when one is signed in. Never rejects.
#[derive(Debug)]
pub struct MaybeUser(pub Option<Identity>);

impl<S> FromRequestParts<S> for MaybeUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);
        let identity = check(&backend, &parts.headers, &[Role::Admin, Role::User]).ok();
        Ok(MaybeUser(identity))
    }
}
