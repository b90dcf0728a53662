//! Domain entities for the Quiz domain

use carepath_accounts::SubscriptionPlan;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;
use validator::Validate;

use super::recommendation::recommend_plan;

/// One question/answer pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct QuizAnswer {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub question: String,

    #[validate(length(min = 1, max = 2000, message = "must be between 1 and 2000 characters"))]
    pub answer: String,
}

impl QuizAnswer {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Stored quiz submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct QuizSubmission {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub email: Option<String>,
    pub answers: Json<Vec<QuizAnswer>>,
    pub recommended_plan: SubscriptionPlan,
    pub created_at: DateTime<Utc>,
}

impl QuizSubmission {
    /// New submission with its recommendation computed from `answers`
    pub fn new(user_id: Option<Uuid>, email: Option<String>, answers: Vec<QuizAnswer>) -> Self {
        let recommended_plan = recommend_plan(&answers);
        Self {
            id: Uuid::new_v4(),
            user_id,
            email: email
                .map(|e| e.trim().to_lowercase())
                .filter(|e| !e.is_empty()),
            answers: Json(answers),
            recommended_plan,
            created_at: Utc::now(),
        }
    }
}
