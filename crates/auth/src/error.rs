//! Authentication errors
//!
//! `Missing` and `Invalid` render the same body on purpose; only the logs
//! tell them apart.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No credential cookie (or an empty one)
    Missing,
    /// Bad signature, malformed payload or expired
    Invalid,
    /// Valid credential, role not permitted
    Forbidden,
    /// Signing a new credential failed
    IssueFailed,
}

impl AuthError {
    /// Short label used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::Missing => "missing",
            AuthError::Invalid => "invalid",
            AuthError::Forbidden => "forbidden",
            AuthError::IssueFailed => "issue_failed",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Missing | AuthError::Invalid => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::IssueFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            AuthError::Missing | AuthError::Invalid => "Unauthorized",
            AuthError::Forbidden => "Forbidden",
            AuthError::IssueFailed => "Internal server error",
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.message() }));
        (self.status_code(), body).into_response()
    }
}

impl From<AuthError> for carepath_common::Error {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Missing | AuthError::Invalid => {
                carepath_common::Error::Authentication(err.to_string())
            }
            AuthError::Forbidden => carepath_common::Error::Authorization(err.to_string()),
            AuthError::IssueFailed => {
                carepath_common::Error::Internal("Failed to issue credential".to_string())
            }
        }
    }
}
