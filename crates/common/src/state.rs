//! Common state machine error types
//!
//! Shared across the domain crates that implement status lifecycles
//! (subscriptions, payments).

use thiserror::Error;

use crate::error::Error as AppError;

/// Errors that can occur during state transitions
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    #[error("Invalid transition: cannot transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Terminal state: {0} is a terminal state and cannot transition")]
    TerminalState(String),
}

impl From<StateError> for AppError {
    fn from(err: StateError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
