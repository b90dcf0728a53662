//! Repository implementations for the Payments domain

pub mod payments;

use carepath_accounts::SubscriptionRepository;
use sqlx::PgPool;

pub use payments::PaymentRepository;

/// Combined repository access for the Payments domain
///
/// Carries the accounts subscription repository for ownership checks.
#[derive(Clone)]
pub struct PaymentsRepositories {
    pub payments: PaymentRepository,
    pub subscriptions: SubscriptionRepository,
}

impl PaymentsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            payments: PaymentRepository::new(pool.clone()),
            subscriptions: SubscriptionRepository::new(pool),
        }
    }
}
