//! Subscription API handlers

use axum::extract::{Path, State};
use carepath_auth::{Identity, SignedInUser};
use carepath_common::{Error, Result, Success, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::AccountsState;
use crate::domain::entities::{Subscription, SubscriptionPlan, SubscriptionStatus};
use crate::domain::state::SubscriptionStateMachine;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubscriptionRequest {
    pub plan: SubscriptionPlan,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSubscriptionRequest {
    pub status: SubscriptionStatus,
}

#[derive(Debug, Serialize)]
pub struct SubscriptionEnvelope {
    pub subscription: Subscription,
}

#[derive(Debug, Serialize)]
pub struct SubscriptionsEnvelope {
    pub subscriptions: Vec<Subscription>,
}

fn not_found() -> Error {
    Error::NotFound("Subscription not found".to_string())
}

/// Admins may touch any subscription, users only their own
fn can_access(identity: &Identity, owner: Uuid) -> bool {
    identity.is_admin() || identity.user_id().is_ok_and(|id| id == owner)
}

/// GET /api/subscriptions
pub async fn list_subscriptions(
    SignedInUser(identity): SignedInUser,
    State(state): State<AccountsState>,
) -> Result<Success<SubscriptionsEnvelope>> {
    let subscriptions = if identity.is_admin() {
        state.repos.subscriptions.list_all().await?
    } else {
        state
            .repos
            .subscriptions
            .list_by_user(identity.user_id()?)
            .await?
    };

    Ok(Success::new(SubscriptionsEnvelope { subscriptions }))
}

/// POST /api/subscriptions
pub async fn create_subscription(
    SignedInUser(identity): SignedInUser,
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<CreateSubscriptionRequest>,
) -> Result<Success<SubscriptionEnvelope>> {
    let user_id = identity.user_id()?;

    if state
        .repos
        .subscriptions
        .find_open_for_plan(user_id, req.plan)
        .await?
        .is_some()
    {
        return Err(Error::Conflict(format!(
            "An open {} subscription already exists",
            req.plan
        )));
    }

    let subscription = Subscription::new(user_id, req.plan);
    let created = state.repos.subscriptions.create(&subscription).await?;

    tracing::info!(
        subscription_id = %created.id,
        user_id = %user_id,
        plan = %created.plan,
        "Subscription created"
    );

    Ok(Success::created(SubscriptionEnvelope {
        subscription: created,
    }))
}

/// PATCH /api/subscriptions/{id}
pub async fn update_subscription_status(
    SignedInUser(identity): SignedInUser,
    State(state): State<AccountsState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateSubscriptionRequest>,
) -> Result<Success<SubscriptionEnvelope>> {
    let mut subscription = state
        .repos
        .subscriptions
        .find(id)
        .await?
        .filter(|sub| can_access(&identity, sub.user_id))
        .ok_or_else(not_found)?;

    let from = subscription.status;
    let to = SubscriptionStateMachine::transition(from, req.status)?;
    subscription.apply_status(to);

    let updated = state
        .repos
        .subscriptions
        .update_status(&subscription)
        .await?
        .ok_or_else(not_found)?;

    tracing::info!(subscription_id = %id, from = %from, to = %to, "Subscription status changed");

    Ok(Success::new(SubscriptionEnvelope {
        subscription: updated,
    }))
}
