//! Payments domain: payment bookkeeping for subscriptions

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Payment, PaymentStatus};
pub use domain::state::PaymentStateMachine;

// Re-export repository types
pub use repository::{PaymentRepository, PaymentsRepositories};

// Re-export API types
pub use api::routes;
pub use api::PaymentsState;
