//! Edge gate for the administrative section
//!
//! Runs ahead of every handler. For paths under the protected prefix it reads
//! the `admin_token` cookie, verifies it and either lets the request through or
//! redirects. A missing, invalid or wrong-role credential all produce the same
//! redirect; the reason is only logged.

use axum::{
    extract::{Request, State},
    http::{header::LOCATION, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::backend::AuthBackend;
use crate::claims::Role;
use crate::cookie::{read_cookie, ADMIN_COOKIE};
use crate::error::AuthError;

/// Paths the gate works with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatePaths {
    /// Protected namespace, e.g. `/admin`
    pub prefix: String,
    /// Login page; reachable without a credential
    pub login: String,
    /// Where an authenticated admin lands when visiting the login page
    pub landing: String,
}

impl Default for GatePaths {
    fn default() -> Self {
        Self {
            prefix: "/admin".to_string(),
            login: "/admin/login".to_string(),
            landing: "/admin".to_string(),
        }
    }
}

impl GatePaths {
    /// `/admin` itself or anything below `/admin/`
    pub fn is_protected(&self, path: &str) -> bool {
        match path.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    pub fn is_login(&self, path: &str) -> bool {
        path == self.login || path.strip_suffix('/') == Some(self.login.as_str())
    }

    /// Login URL carrying the originally requested path
    pub fn login_redirect(&self, original_path: &str) -> String {
        format!(
            "{}?redirect={}",
            self.login,
            urlencoding::encode(original_path)
        )
    }
}

/// What the gate decided for a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    PassThrough,
    RedirectToLogin(String),
    RedirectToLanding(String),
}

impl GateDecision {
    pub fn location(&self) -> Option<&str> {
        match self {
            GateDecision::PassThrough => None,
            GateDecision::RedirectToLogin(location) | GateDecision::RedirectToLanding(location) => {
                Some(location)
            }
        }
    }
}

/// The gate: verification backend plus the paths it protects
#[derive(Clone)]
pub struct AdminGate {
    backend: AuthBackend,
    paths: GatePaths,
}

impl AdminGate {
    pub fn new(backend: AuthBackend) -> Self {
        Self::with_paths(backend, GatePaths::default())
    }

    pub fn with_paths(backend: AuthBackend, paths: GatePaths) -> Self {
        Self { backend, paths }
    }

    pub fn paths(&self) -> &GatePaths {
        &self.paths
    }

    fn admin_credential(&self, token: Option<&str>) -> Result<(), AuthError> {
        let token = token.ok_or(AuthError::Missing)?;
        let credential = self.backend.verify(token)?;
        if credential.role != Role::Admin {
            return Err(AuthError::Forbidden);
        }
        Ok(())
    }

    /// Decide from the request path and the raw `admin_token` value.
    ///
    /// Depends only on the token, the clock and the signing secret.
    pub fn decide(&self, path: &str, token: Option<&str>) -> GateDecision {
        if !self.paths.is_protected(path) {
            return GateDecision::PassThrough;
        }

        let on_login = self.paths.is_login(path);

        match self.admin_credential(token) {
            Ok(()) if on_login => GateDecision::RedirectToLanding(self.paths.landing.clone()),
            Ok(()) => GateDecision::PassThrough,
            Err(err) => {
                tracing::debug!(path, reason = err.kind(), "Admin gate rejected credential");
                if on_login {
                    GateDecision::PassThrough
                } else {
                    GateDecision::RedirectToLogin(self.paths.login_redirect(path))
                }
            }
        }
    }
}

fn redirect(location: &str) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => (StatusCode::FOUND, [(LOCATION, value)]).into_response(),
        Err(e) => {
            tracing::error!(error = %e, location, "Unrepresentable redirect target");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Middleware entry point.
///
/// ```ignore
/// let app = router.layer(axum::middleware::from_fn_with_state(gate, admin_gate));
/// ```
pub async fn admin_gate(State(gate): State<AdminGate>, request: Request, next: Next) -> Response {
    let token = read_cookie(request.headers(), ADMIN_COOKIE);

    match gate.decide(request.uri().path(), token.as_deref()) {
        GateDecision::PassThrough => next.run(request).await,
        GateDecision::RedirectToLogin(location) | GateDecision::RedirectToLanding(location) => {
            redirect(&location)
        }
    }
}
