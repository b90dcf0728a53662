//! User directory API handlers (admin only)

use axum::extract::{Path, State};
use carepath_auth::AdminUser;
use carepath_common::{Error, Result, Success};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::api::middleware::AccountsState;
use crate::domain::entities::{User, UserRole};

/// User response DTO; never carries the password hash
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub struct UsersEnvelope {
    pub users: Vec<UserResponse>,
}

/// GET /api/users
pub async fn list_users(
    AdminUser(_admin): AdminUser,
    State(state): State<AccountsState>,
) -> Result<Success<UsersEnvelope>> {
    let users = state.repos.users.list().await?;

    Ok(Success::new(UsersEnvelope {
        users: users.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/users/{id}
pub async fn get_user(
    AdminUser(_admin): AdminUser,
    State(state): State<AccountsState>,
    Path(id): Path<Uuid>,
) -> Result<Success<UserEnvelope>> {
    let user = state
        .repos
        .users
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(Success::new(UserEnvelope { user: user.into() }))
}
