//! Quiz domain: intake questionnaire submissions and plan recommendations

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{QuizAnswer, QuizSubmission};
pub use domain::recommendation::recommend_plan;

// Re-export repository types
pub use repository::{QuizRepositories, SubmissionRepository};

// Re-export API types
pub use api::routes;
pub use api::QuizState;
