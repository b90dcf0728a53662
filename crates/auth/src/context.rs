//! Authorized identity handed to request handlers

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::claims::{Credential, Role};
use crate::error::AuthError;

/// Represents an authenticated principal
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub subject_id: String,
    pub role: Role,
    pub claims: Map<String, Value>,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Subject as a user UUID.
    ///
    /// A signed token whose subject is not a UUID cannot name an account, so
    /// it is treated like any other unusable credential.
    pub fn user_id(&self) -> Result<Uuid, AuthError> {
        Uuid::parse_str(&self.subject_id).map_err(|_| {
            tracing::debug!(subject_id = %self.subject_id, "Credential subject is not a user id");
            AuthError::Invalid
        })
    }

    /// `email` claim, when the credential carries one
    pub fn email(&self) -> Option<&str> {
        self.claims.get("email").and_then(Value::as_str)
    }
}

impl From<Credential> for Identity {
    fn from(credential: Credential) -> Self {
        Self {
            subject_id: credential.subject_id,
            role: credential.role,
            claims: credential.claims,
        }
    }
}
