//! Domain entities for the Accounts domain

use carepath_auth::Role;
use carepath_common::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum email length (varchar(255))
const MAX_EMAIL_LENGTH: usize = 255;

/// Account role as stored in the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

impl From<UserRole> for Role {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => Role::Admin,
            UserRole::User => Role::User,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::User => write!(f, "user"),
        }
    }
}

/// User account
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: UserRole,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lower-cased, trimmed email used for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl User {
    /// Create a new regular account from an already-hashed password
    pub fn new(email: &str, name: Option<String>, password_hash: String) -> Result<Self> {
        let email = normalize_email(email);
        if email.is_empty() || !email.contains('@') {
            return Err(Error::invalid_field("email", "must be a valid email address"));
        }
        if email.len() > MAX_EMAIL_LENGTH {
            return Err(Error::invalid_field(
                "email",
                format!("must be at most {} characters", MAX_EMAIL_LENGTH),
            ));
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            email,
            name: name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
            role: UserRole::User,
            password_hash,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Subscription program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "subscription_plan", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionPlan {
    WeightLoss,
    HormoneHealth,
    Longevity,
}

impl SubscriptionPlan {
    /// Monthly list price in cents
    pub fn list_price_cents(&self) -> i32 {
        match self {
            SubscriptionPlan::WeightLoss => 14_900,
            SubscriptionPlan::HormoneHealth => 9_900,
            SubscriptionPlan::Longevity => 19_900,
        }
    }
}

impl std::fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionPlan::WeightLoss => write!(f, "weight_loss"),
            SubscriptionPlan::HormoneHealth => write!(f, "hormone_health"),
            SubscriptionPlan::Longevity => write!(f, "longevity"),
        }
    }
}

/// Subscription status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "subscription_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    Pending,
    Active,
    Paused,
    Cancelled,
}

impl SubscriptionStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubscriptionStatus::Cancelled)
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionStatus::Pending => write!(f, "pending"),
            SubscriptionStatus::Active => write!(f, "active"),
            SubscriptionStatus::Paused => write!(f, "paused"),
            SubscriptionStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Subscription entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Subscription {
    pub id: Uuid,
    pub user_id: Uuid,
    pub plan: SubscriptionPlan,
    pub status: SubscriptionStatus,
    pub price_cents: i32,
    pub started_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subscription {
    /// New pending subscription at the plan's list price
    pub fn new(user_id: Uuid, plan: SubscriptionPlan) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            plan,
            status: SubscriptionStatus::default(),
            price_cents: plan.list_price_cents(),
            started_at: None,
            cancelled_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a (validated) status change, stamping lifecycle timestamps
    pub fn apply_status(&mut self, status: SubscriptionStatus) {
        let now = Utc::now();
        if status == SubscriptionStatus::Active && self.started_at.is_none() {
            self.started_at = Some(now);
        }
        if status == SubscriptionStatus::Cancelled {
            self.cancelled_at = Some(now);
        }
        self.status = status;
        self.updated_at = now;
    }
}
