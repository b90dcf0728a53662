//! Payment bookkeeping API handlers

use axum::extract::{Path, State};
use carepath_auth::{AdminUser, SignedInUser};
use carepath_common::{Error, Result, Success, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::PaymentsState;
use crate::domain::entities::{Payment, PaymentStatus};
use crate::domain::state::PaymentStateMachine;

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePaymentRequest {
    pub subscription_id: Option<Uuid>,

    #[validate(range(min = 1))]
    pub amount_cents: i64,

    #[validate(length(equal = 3))]
    pub currency: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePaymentRequest {
    pub status: PaymentStatus,

    #[validate(length(min = 1, max = 255))]
    pub provider_reference: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PaymentEnvelope {
    pub payment: Payment,
}

#[derive(Debug, Serialize)]
pub struct PaymentsEnvelope {
    pub payments: Vec<Payment>,
}

/// POST /api/payments
pub async fn create_payment(
    SignedInUser(identity): SignedInUser,
    State(state): State<PaymentsState>,
    ValidatedJson(req): ValidatedJson<CreatePaymentRequest>,
) -> Result<Success<PaymentEnvelope>> {
    let user_id = identity.user_id()?;

    if let Some(subscription_id) = req.subscription_id {
        let owned = state
            .repos
            .subscriptions
            .find(subscription_id)
            .await?
            .is_some_and(|sub| sub.user_id == user_id);
        if !owned {
            return Err(Error::NotFound("Subscription not found".to_string()));
        }
    }

    let payment = Payment::new(user_id, req.subscription_id, req.amount_cents, &req.currency)?;
    let created = state.repos.payments.create(&payment).await?;

    tracing::info!(
        payment_id = %created.id,
        user_id = %user_id,
        amount_cents = created.amount_cents,
        currency = %created.currency,
        "Payment recorded"
    );

    Ok(Success::created(PaymentEnvelope { payment: created }))
}

/// GET /api/payments
pub async fn list_payments(
    SignedInUser(identity): SignedInUser,
    State(state): State<PaymentsState>,
) -> Result<Success<PaymentsEnvelope>> {
    let payments = if identity.is_admin() {
        state.repos.payments.list_all().await?
    } else {
        state.repos.payments.list_by_user(identity.user_id()?).await?
    };

    Ok(Success::new(PaymentsEnvelope { payments }))
}

/// PATCH /api/payments/{id}
pub async fn update_payment_status(
    AdminUser(admin): AdminUser,
    State(state): State<PaymentsState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdatePaymentRequest>,
) -> Result<Success<PaymentEnvelope>> {
    let not_found = || Error::NotFound("Payment not found".to_string());

    let payment = state.repos.payments.find(id).await?.ok_or_else(not_found)?;
    let to = PaymentStateMachine::transition(payment.status, req.status)?;

    let updated = state
        .repos
        .payments
        .update_status(id, to, req.provider_reference.as_deref())
        .await?
        .ok_or_else(not_found)?;

    tracing::info!(
        payment_id = %id,
        from = %payment.status,
        to = %to,
        admin = %admin.subject_id,
        "Payment status changed"
    );

    Ok(Success::new(PaymentEnvelope { payment: updated }))
}
