//! Repository implementations for the Accounts domain

pub mod subscriptions;
pub mod users;

use sqlx::PgPool;

pub use subscriptions::SubscriptionRepository;
pub use users::UserRepository;

/// Combined repository access for the Accounts domain
#[derive(Clone)]
pub struct AccountsRepositories {
    pub users: UserRepository,
    pub subscriptions: SubscriptionRepository,
}

impl AccountsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            subscriptions: SubscriptionRepository::new(pool),
        }
    }
}
