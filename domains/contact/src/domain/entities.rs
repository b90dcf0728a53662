//! Domain entities for the Contact domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Message left through the public contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub handled: bool,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// New unhandled message; inputs are trimmed, a blank subject is dropped
    pub fn new(name: &str, email: &str, subject: Option<&str>, message: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            subject: subject
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            message: message.trim().to_string(),
            handled: false,
            created_at: Utc::now(),
        }
    }
}
