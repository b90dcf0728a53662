//! Quiz submission repository

use crate::domain::entities::QuizSubmission;
use carepath_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct SubmissionRepository {
    pool: PgPool,
}

impl SubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a submission
    pub async fn create(&self, submission: &QuizSubmission) -> Result<QuizSubmission> {
        let created = sqlx::query_as::<_, QuizSubmission>(
            r#"
            INSERT INTO quiz_submissions (id, user_id, email, answers, recommended_plan, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, email, answers, recommended_plan, created_at
            "#,
        )
        .bind(submission.id)
        .bind(submission.user_id)
        .bind(&submission.email)
        .bind(&submission.answers)
        .bind(submission.recommended_plan)
        .bind(submission.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// All submissions, newest first
    pub async fn list(&self) -> Result<Vec<QuizSubmission>> {
        let submissions = sqlx::query_as::<_, QuizSubmission>(
            r#"
            SELECT id, user_id, email, answers, recommended_plan, created_at
            FROM quiz_submissions
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(submissions)
    }

    /// Submissions attached to a user, newest first
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<QuizSubmission>> {
        let submissions = sqlx::query_as::<_, QuizSubmission>(
            r#"
            SELECT id, user_id, email, answers, recommended_plan, created_at
            FROM quiz_submissions
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(submissions)
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM quiz_submissions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
