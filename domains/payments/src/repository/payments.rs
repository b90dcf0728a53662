//! Payment repository

use crate::domain::entities::{Payment, PaymentStatus};
use carepath_common::Result;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<Payment>> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            SELECT id, user_id, subscription_id, amount_cents, currency, status,
                   provider_reference, created_at, updated_at
            FROM payments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(payment)
    }

    /// All payments, newest first
    pub async fn list_all(&self) -> Result<Vec<Payment>> {
        let payments = sqlx::query_as::<_, Payment>(
            r#"
            SELECT id, user_id, subscription_id, amount_cents, currency, status,
                   provider_reference, created_at, updated_at
            FROM payments
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }

    /// Payments made by a user, newest first
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Payment>> {
        let payments = sqlx::query_as::<_, Payment>(
            r#"
            SELECT id, user_id, subscription_id, amount_cents, currency, status,
                   provider_reference, created_at, updated_at
            FROM payments
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }

    pub async fn create(&self, payment: &Payment) -> Result<Payment> {
        let created = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (
                id, user_id, subscription_id, amount_cents, currency, status,
                provider_reference, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, user_id, subscription_id, amount_cents, currency, status,
                      provider_reference, created_at, updated_at
            "#,
        )
        .bind(payment.id)
        .bind(payment.user_id)
        .bind(payment.subscription_id)
        .bind(payment.amount_cents)
        .bind(&payment.currency)
        .bind(payment.status)
        .bind(&payment.provider_reference)
        .bind(payment.created_at)
        .bind(payment.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Set status; `provider_reference` replaces the stored one only when given
    pub async fn update_status(
        &self,
        id: Uuid,
        status: PaymentStatus,
        provider_reference: Option<&str>,
    ) -> Result<Option<Payment>> {
        let updated = sqlx::query_as::<_, Payment>(
            r#"
            UPDATE payments SET
                status = $2,
                provider_reference = COALESCE($3, provider_reference),
                updated_at = $4
            WHERE id = $1
            RETURNING id, user_id, subscription_id, amount_cents, currency, status,
                      provider_reference, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(provider_reference)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM payments")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
