//! Repository implementations for the Contact domain

pub mod messages;

use sqlx::PgPool;

pub use messages::MessageRepository;

#[derive(Clone)]
pub struct ContactRepositories {
    pub messages: MessageRepository,
}

impl ContactRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            messages: MessageRepository::new(pool),
        }
    }
}
