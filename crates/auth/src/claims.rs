//! Credential payload carried inside the signed token

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AuthError;

/// Principal kind. Closed set: an unknown role string makes the token malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::User => write!(f, "user"),
        }
    }
}

/// Verified token payload.
///
/// `sub` and `role` are required; any other signed claims (email, name, ...)
/// land in `claims` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    /// Subject (principal ID)
    #[serde(rename = "sub")]
    pub subject_id: String,
    pub role: Role,
    /// Issued at (unix seconds)
    #[serde(rename = "iat")]
    pub issued_at: i64,
    /// Expires at (unix seconds)
    #[serde(rename = "exp")]
    pub expires_at: i64,
    #[serde(flatten)]
    pub claims: Map<String, Value>,
}

impl Credential {
    /// New credential issued now and valid for `ttl_seconds`.
    ///
    /// Fails with [`AuthError::IssueFailed`] when the expiry is not a
    /// representable timestamp.
    pub fn new(
        subject_id: impl Into<String>,
        role: Role,
        ttl_seconds: i64,
    ) -> Result<Self, AuthError> {
        let now = Utc::now();
        let expires_at = Duration::try_seconds(ttl_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or(AuthError::IssueFailed)?;

        Ok(Self {
            subject_id: subject_id.into(),
            role,
            issued_at: now.timestamp(),
            expires_at: expires_at.timestamp(),
            claims: Map::new(),
        })
    }

    /// Attach an auxiliary claim
    pub fn with_claim(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.claims.insert(key.into(), value.into());
        self
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now().timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_credential_wire_format() {
        let credential = Credential {
            subject_id: "42".to_string(),
            role: Role::Admin,
            issued_at: 100,
            expires_at: 200,
            claims: Map::new(),
        }
        .with_claim("email", "ops@carepath.test");

        let value = serde_json::to_value(&credential).unwrap();
        assert_eq!(
            value,
            json!({
                "sub": "42",
                "role": "admin",
                "iat": 100,
                "exp": 200,
                "email": "ops@carepath.test",
            })
        );
    }

    #[test]
    fn test_unknown_claims_are_collected() {
        let credential: Credential = serde_json::from_value(json!({
            "sub": "abc",
            "role": "user",
            "iat": 1,
            "exp": 2,
            "email": "a@b.test",
            "plan": "longevity",
        }))
        .unwrap();

        assert_eq!(credential.role, Role::User);
        assert_eq!(credential.claims.len(), 2);
        assert_eq!(credential.claims["plan"], "longevity");
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result: Result<Credential, _> = serde_json::from_value(json!({
            "sub": "abc",
            "role": "superuser",
            "iat": 1,
            "exp": 2,
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_credential_expiry() {
        assert!(!Credential::new("abc", Role::User, 60).unwrap().is_expired());
        assert!(Credential::new("abc", Role::User, -60).unwrap().is_expired());
    }

    #[test]
    fn test_out_of_range_ttl_fails_instead_of_panicking() {
        for ttl in [i64::MAX, 9_000_000_000_000_000, i64::MIN] {
            assert_eq!(
                Credential::new("abc", Role::User, ttl),
                Err(AuthError::IssueFailed),
                "ttl {ttl}"
            );
        }
    }
}
