//! Subscription repository

use crate::domain::entities::{Subscription, SubscriptionPlan};
use carepath_common::{RepositoryError, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct SubscriptionRepository {
    pool: PgPool,
}

impl SubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find subscription by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<Subscription>> {
        let sub = sqlx::query_as::<_, Subscription>(
            r#"
            SELECT id, user_id, plan, status, price_cents,
                   started_at, cancelled_at, created_at, updated_at
            FROM subscriptions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sub)
    }

    /// All subscriptions, newest first
    pub async fn list_all(&self) -> Result<Vec<Subscription>> {
        let subs = sqlx::query_as::<_, Subscription>(
            r#"
            SELECT id, user_id, plan, status, price_cents,
                   started_at, cancelled_at, created_at, updated_at
            FROM subscriptions
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(subs)
    }

    /// Subscriptions owned by a user, newest first
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Subscription>> {
        let subs = sqlx::query_as::<_, Subscription>(
            r#"
            SELECT id, user_id, plan, status, price_cents,
                   started_at, cancelled_at, created_at, updated_at
            FROM subscriptions
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(subs)
    }

    /// A user's non-cancelled subscription on `plan`, if any
    pub async fn find_open_for_plan(
        &self,
        user_id: Uuid,
        plan: SubscriptionPlan,
    ) -> Result<Option<Subscription>> {
        let sub = sqlx::query_as::<_, Subscription>(
            r#"
            SELECT id, user_id, plan, status, price_cents,
                   started_at, cancelled_at, created_at, updated_at
            FROM subscriptions
            WHERE user_id = $1 AND plan = $2 AND status <> 'cancelled'
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(plan)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sub)
    }

    /// Create a new subscription; a second open one on the same plan is a conflict
    pub async fn create(&self, sub: &Subscription) -> Result<Subscription> {
        let created = sqlx::query_as::<_, Subscription>(
            r#"
            INSERT INTO subscriptions (
                id, user_id, plan, status, price_cents,
                started_at, cancelled_at, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, user_id, plan, status, price_cents,
                      started_at, cancelled_at, created_at, updated_at
            "#,
        )
        .bind(sub.id)
        .bind(sub.user_id)
        .bind(sub.plan)
        .bind(sub.status)
        .bind(sub.price_cents)
        .bind(sub.started_at)
        .bind(sub.cancelled_at)
        .bind(sub.created_at)
        .bind(sub.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(created)
    }

    /// Persist status and lifecycle timestamps
    pub async fn update_status(&self, sub: &Subscription) -> Result<Option<Subscription>> {
        let updated = sqlx::query_as::<_, Subscription>(
            r#"
            UPDATE subscriptions SET
                status = $2,
                started_at = $3,
                cancelled_at = $4,
                updated_at = $5
            WHERE id = $1
            RETURNING id, user_id, plan, status, price_cents,
                      started_at, cancelled_at, created_at, updated_at
            "#,
        )
        .bind(sub.id)
        .bind(sub.status)
        .bind(sub.started_at)
        .bind(sub.cancelled_at)
        .bind(sub.updated_at)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM subscriptions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
