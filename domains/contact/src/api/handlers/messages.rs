//! Contact form API handlers

use axum::extract::{Path, State};
use carepath_auth::AdminUser;
use carepath_common::{Error, Result, Success, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::api::middleware::ContactState;
use crate::domain::entities::ContactMessage;

/// Length rules measure the text as stored, after trimming
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(length(max = 200, message = "must be at most 200 characters"))]
    pub subject: Option<String>,

    #[validate(custom(function = "validate_message"))]
    pub message: String,
}

fn trimmed_length(
    value: &str,
    min: usize,
    max: usize,
    message: &'static str,
) -> std::result::Result<(), ValidationError> {
    if (min..=max).contains(&value.trim().chars().count()) {
        Ok(())
    } else {
        Err(ValidationError::new("length").with_message(message.into()))
    }
}

fn validate_name(name: &str) -> std::result::Result<(), ValidationError> {
    trimmed_length(name, 1, 100, "must be between 1 and 100 characters")
}

fn validate_message(message: &str) -> std::result::Result<(), ValidationError> {
    trimmed_length(message, 10, 5000, "must be between 10 and 5000 characters")
}

#[derive(Debug, Serialize)]
pub struct MessageEnvelope {
    pub message: ContactMessage,
}

#[derive(Debug, Serialize)]
pub struct MessagesEnvelope {
    pub messages: Vec<ContactMessage>,
}

/// POST /api/contact
pub async fn submit_message(
    State(state): State<ContactState>,
    ValidatedJson(req): ValidatedJson<ContactRequest>,
) -> Result<Success<MessageEnvelope>> {
    let message = ContactMessage::new(&req.name, &req.email, req.subject.as_deref(), &req.message);
    let created = state.repos.messages.create(&message).await?;

    tracing::info!(contact_message_id = %created.id, "Contact message received");

    Ok(Success::created(MessageEnvelope { message: created }))
}

/// GET /api/contact
pub async fn list_messages(
    AdminUser(_admin): AdminUser,
    State(state): State<ContactState>,
) -> Result<Success<MessagesEnvelope>> {
    let messages = state.repos.messages.list().await?;
    Ok(Success::new(MessagesEnvelope { messages }))
}

/// PATCH /api/contact/{id}/handled
pub async fn mark_handled(
    AdminUser(_admin): AdminUser,
    State(state): State<ContactState>,
    Path(id): Path<Uuid>,
) -> Result<Success<MessageEnvelope>> {
    let message = state
        .repos
        .messages
        .mark_handled(id)
        .await?
        .ok_or_else(|| Error::NotFound("Message not found".to_string()))?;

    Ok(Success::new(MessageEnvelope { message }))
}
