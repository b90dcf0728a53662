//! Contact message repository

use crate::domain::entities::ContactMessage;
use carepath_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, message: &ContactMessage) -> Result<ContactMessage> {
        let created = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (id, name, email, subject, message, handled, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, email, subject, message, handled, created_at
            "#,
        )
        .bind(message.id)
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.subject)
        .bind(&message.message)
        .bind(message.handled)
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// All messages, newest first
    pub async fn list(&self) -> Result<Vec<ContactMessage>> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            r#"
            SELECT id, name, email, subject, message, handled, created_at
            FROM contact_messages
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    /// Mark a message handled; `None` when it does not exist
    pub async fn mark_handled(&self, id: Uuid) -> Result<Option<ContactMessage>> {
        let updated = sqlx::query_as::<_, ContactMessage>(
            r#"
            UPDATE contact_messages SET handled = TRUE
            WHERE id = $1
            RETURNING id, name, email, subject, message, handled, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn count_unhandled(&self) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages WHERE NOT handled")
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}
