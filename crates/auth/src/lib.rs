//! Authentication and authorization for Carepath
//!
//! Provides stateless cookie credentials (signed HS256 tokens), the edge gate
//! that protects the `/admin` section, the per-handler role authorizer, and
//! axum extractors that work with any state implementing `FromRef<S>` for
//! `AuthBackend`.

mod authorizer;
mod backend;
mod claims;
mod config;
mod context;
mod cookie;
mod error;
mod extractors;
mod gate;
mod jwt;

pub use authorizer::{authorize, check, Authorization};
pub use backend::AuthBackend;
pub use claims::{Credential, Role};
pub use config::AuthConfig;
pub use context::Identity;
pub use cookie::{read_cookie, ADMIN_COOKIE, CREDENTIAL_COOKIES, SESSION_COOKIE};
pub use error::AuthError;
pub use extractors::{AdminUser, MaybeUser, SignedInUser};
pub use gate::{admin_gate, AdminGate, GateDecision, GatePaths};

#[cfg(test)]
pub(crate) fn test_backend() -> AuthBackend {
    AuthBackend::new(AuthConfig {
        jwt_secret: "backend-test-secret".to_string(),
        token_ttl_seconds: 3600,
        secure_cookies: false,
    })
}
