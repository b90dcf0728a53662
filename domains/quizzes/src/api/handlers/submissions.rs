//! Quiz submission API handlers
//!
//! Implements:
//! - POST /api/quiz     : public; attaches the caller when signed in
//! - GET  /api/quiz     : admin listing
//! - GET  /api/quiz/mine: the caller's own submissions

use axum::extract::State;
use carepath_auth::{AdminUser, MaybeUser, SignedInUser};
use carepath_common::{Result, Success, ValidatedJson};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::api::middleware::QuizState;
use crate::domain::entities::{QuizAnswer, QuizSubmission};

/// Maximum answers per submission
pub const MAX_ANSWERS: usize = 50;

#[derive(Debug, Deserialize)]
pub struct SubmitQuizRequest {
    pub email: Option<String>,
    pub answers: Vec<QuizAnswer>,
}

/// `answers` reports either a count error or per-answer errors
/// (`answers[i].question`, `answers[i].answer`), never both.
impl Validate for SubmitQuizRequest {
    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(email) = &self.email {
            if !email.validate_email() {
                let err = ValidationError::new("email")
                    .with_message("must be a valid email address".into());
                errors.add("email", err);
            }
        }

        if !(1..=MAX_ANSWERS).contains(&self.answers.len()) {
            let err = ValidationError::new("length")
                .with_message("must contain between 1 and 50 answers".into());
            errors.add("answers", err);
        } else {
            let failed: BTreeMap<usize, Box<ValidationErrors>> = self
                .answers
                .iter()
                .enumerate()
                .filter_map(|(idx, answer)| answer.validate().err().map(|e| (idx, Box::new(e))))
                .collect();
            if !failed.is_empty() {
                errors
                    .errors_mut()
                    .insert("answers".into(), ValidationErrorsKind::List(failed));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubmissionEnvelope {
    pub submission: QuizSubmission,
}

#[derive(Debug, Serialize)]
pub struct SubmissionsEnvelope {
    pub submissions: Vec<QuizSubmission>,
}

/// POST /api/quiz
pub async fn submit_quiz(
    MaybeUser(identity): MaybeUser,
    State(state): State<QuizState>,
    ValidatedJson(req): ValidatedJson<SubmitQuizRequest>,
) -> Result<Success<SubmissionEnvelope>> {
    let user_id = identity.as_ref().and_then(|i| i.user_id().ok());
    let email = req
        .email
        .or_else(|| identity.as_ref().and_then(|i| i.email()).map(str::to_string));

    let submission = QuizSubmission::new(user_id, email, req.answers);
    let created = state.repos.submissions.create(&submission).await?;

    tracing::info!(
        submission_id = %created.id,
        signed_in = user_id.is_some(),
        recommended_plan = %created.recommended_plan,
        "Quiz submitted"
    );

    Ok(Success::created(SubmissionEnvelope {
        submission: created,
    }))
}

/// GET /api/quiz
pub async fn list_submissions(
    AdminUser(_admin): AdminUser,
    State(state): State<QuizState>,
) -> Result<Success<SubmissionsEnvelope>> {
    let submissions = state.repos.submissions.list().await?;
    Ok(Success::new(SubmissionsEnvelope { submissions }))
}

/// GET /api/quiz/mine
pub async fn list_my_submissions(
    SignedInUser(identity): SignedInUser,
    State(state): State<QuizState>,
) -> Result<Success<SubmissionsEnvelope>> {
    let submissions = state
        .repos
        .submissions
        .list_by_user(identity.user_id()?)
        .await?;

    Ok(Success::new(SubmissionsEnvelope { submissions }))
}
