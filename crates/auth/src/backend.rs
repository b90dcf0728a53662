//! Concrete authentication backend
//!
//! Owns the signing keys and cookie policy. Verification is a pure function of
//! (token, current time, secret): no database, no session store.

use std::sync::Arc;

use axum::http::HeaderValue;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation};

use crate::claims::{Credential, Role};
use crate::config::AuthConfig;
use crate::cookie::{clear_cookie, set_cookie, ADMIN_COOKIE, CREDENTIAL_COOKIES, SESSION_COOKIE};
use crate::error::AuthError;
use crate::jwt::{sign_credential, validation, verify_credential};

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

/// Concrete authentication backend.
///
/// Cheap to clone; keys are built once in [`AuthBackend::new`].
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    config: AuthConfig,
    keys: Arc<Keys>,
}

impl AuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        let keys = Keys {
            encoding: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation: validation(),
        };

        Self {
            config,
            keys: Arc::new(keys),
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Verify a raw token (signature + expiry) and decode it
    pub fn verify(&self, token: &str) -> Result<Credential, AuthError> {
        verify_credential(token, &self.keys.decoding, &self.keys.validation)
    }

    /// Sign an already-built credential
    pub fn sign(&self, credential: &Credential) -> Result<String, AuthError> {
        sign_credential(credential, &self.keys.encoding)
    }

    /// Build a credential valid for the configured lifetime
    pub fn credential_for(
        &self,
        subject_id: impl Into<String>,
        role: Role,
    ) -> Result<Credential, AuthError> {
        Credential::new(subject_id, role, self.config.token_ttl_seconds)
    }

    /// Cookie a credential of this role travels in
    pub fn cookie_name(role: Role) -> &'static str {
        match role {
            Role::Admin => ADMIN_COOKIE,
            Role::User => SESSION_COOKIE,
        }
    }

    /// Sign `credential` and return the `Set-Cookie` value carrying it
    pub fn issue_cookie(&self, credential: &Credential) -> Result<HeaderValue, AuthError> {
        let token = self.sign(credential)?;
        let cookie = set_cookie(
            Self::cookie_name(credential.role),
            &token,
            self.config.token_ttl_seconds,
            self.config.secure_cookies,
        )
        .ok_or(AuthError::IssueFailed)?;

        tracing::debug!(
            subject_id = %credential.subject_id,
            role = %credential.role,
            "Credential issued"
        );

        Ok(cookie)
    }

    /// `Set-Cookie` values for a fresh sign-in: the role's cookie, then a
    /// clear for every other credential cookie.
    ///
    /// A leftover `admin_token` would otherwise outrank a new `session_token`.
    pub fn sign_in_cookies(&self, credential: &Credential) -> Result<Vec<HeaderValue>, AuthError> {
        let issued_name = Self::cookie_name(credential.role);
        let mut cookies = vec![self.issue_cookie(credential)?];

        for name in CREDENTIAL_COOKIES.iter().filter(|name| **name != issued_name) {
            cookies.push(
                clear_cookie(name, self.config.secure_cookies).ok_or(AuthError::IssueFailed)?,
            );
        }

        Ok(cookies)
    }

    /// `Set-Cookie` values that clear every credential cookie
    pub fn clear_cookies(&self) -> Result<Vec<HeaderValue>, AuthError> {
        CREDENTIAL_COOKIES
            .iter()
            .map(|name| clear_cookie(name, self.config.secure_cookies).ok_or(AuthError::IssueFailed))
            .collect()
    }
}
