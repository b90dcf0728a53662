//! Repository implementations for the Quiz domain

pub mod submissions;

use sqlx::PgPool;

pub use submissions::SubmissionRepository;

/// Combined repository access for the Quiz domain
#[derive(Clone)]
pub struct QuizRepositories {
    pub submissions: SubmissionRepository,
}

impl QuizRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            submissions: SubmissionRepository::new(pool),
        }
    }
}
