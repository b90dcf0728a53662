//! Sign-up, sign-in and sign-out handlers
//!
//! Implements:
//! - POST /api/auth/register: create a user account and sign it in
//! - POST /api/auth/login   : verify a password and issue the role's cookie
//! - POST /api/auth/logout  : clear every credential cookie
//! - GET  /api/auth/me      : the caller's account

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderName, HeaderValue},
    response::{AppendHeaders, IntoResponse},
};
use carepath_auth::{Role, SignedInUser};
use carepath_common::{Error, Result, Success, ValidatedJson};
use serde::Deserialize;
use validator::Validate;

use crate::api::handlers::users::{UserEnvelope, UserResponse};
use crate::api::middleware::AccountsState;
use crate::domain::entities::{normalize_email, User};
use crate::domain::password::{hash_password_async, verify_sign_in_async};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email, length(max = 255))]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    #[validate(length(max = 100))]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 255))]
    pub email: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// `Set-Cookie` values for the user's role cookie (clearing the other
/// credential cookie), plus the user envelope
fn signed_in(state: &AccountsState, user: User) -> Result<(Vec<HeaderValue>, UserEnvelope)> {
    let role = Role::from(user.role);
    let credential = state
        .auth
        .credential_for(user.id.to_string(), role)?
        .with_claim("email", user.email.clone());
    let cookies = state.auth.sign_in_cookies(&credential)?;

    Ok((
        cookies,
        UserEnvelope {
            user: UserResponse::from(user),
        },
    ))
}

fn set_cookies(values: Vec<HeaderValue>) -> AppendHeaders<Vec<(HeaderName, HeaderValue)>> {
    AppendHeaders(values.into_iter().map(|value| (SET_COOKIE, value)).collect())
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse> {
    let email = normalize_email(&req.email);
    if state.repos.users.find_by_email(&email).await?.is_some() {
        return Err(Error::Conflict("Email already registered".to_string()));
    }

    let password_hash = hash_password_async(req.password).await?;
    let user = User::new(&email, req.name, password_hash)?;
    let created = state.repos.users.create(&user).await?;

    tracing::info!(user_id = %created.id, "User registered");

    let (cookies, envelope) = signed_in(&state, created)?;
    Ok((set_cookies(cookies), Success::created(envelope)))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse> {
    let email = normalize_email(&req.email);
    let user = state.repos.users.find_by_email(&email).await?;

    // Unknown emails still pay for one Argon2 verify
    let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
    let matched = verify_sign_in_async(stored_hash, req.password).await?;

    let user = user.filter(|_| matched).ok_or_else(|| {
        tracing::info!("Sign-in rejected");
        Error::Authentication(INVALID_CREDENTIALS.to_string())
    })?;

    tracing::info!(user_id = %user.id, role = %user.role, "User signed in");

    let (cookies, envelope) = signed_in(&state, user)?;
    Ok((set_cookies(cookies), Success::new(envelope)))
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<AccountsState>) -> Result<impl IntoResponse> {
    let cleared = state.auth.clear_cookies()?;
    Ok((set_cookies(cleared), Success::ack()))
}

/// GET /api/auth/me
pub async fn me(
    SignedInUser(identity): SignedInUser,
    State(state): State<AccountsState>,
) -> Result<Success<UserEnvelope>> {
    let user_id = identity.user_id()?;
    let user = state
        .repos
        .users
        .find(user_id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(Success::new(UserEnvelope { user: user.into() }))
}
