//! Accounts domain: users, sign-in/out, subscriptions

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{
    Subscription, SubscriptionPlan, SubscriptionStatus, User, UserRole,
};
pub use domain::state::SubscriptionStateMachine;

// Re-export repository types
pub use repository::{AccountsRepositories, SubscriptionRepository, UserRepository};

// Re-export API types
pub use api::routes;
pub use api::AccountsState;
