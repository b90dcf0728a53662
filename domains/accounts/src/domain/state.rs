//! State machine for subscription status transitions
//!
//! Pending → Active, Active ↔ Paused, any non-cancelled → Cancelled.
//! Cancelled is terminal.

pub use carepath_common::StateError;

use super::entities::SubscriptionStatus;

impl SubscriptionStatus {
    /// Get all valid next states from current state
    pub fn valid_transitions(&self) -> &'static [SubscriptionStatus] {
        match self {
            Self::Pending => &[Self::Active, Self::Cancelled],
            Self::Active => &[Self::Paused, Self::Cancelled],
            Self::Paused => &[Self::Active, Self::Cancelled],
            Self::Cancelled => &[],
        }
    }
}

/// Subscription state machine
pub struct SubscriptionStateMachine;

impl SubscriptionStateMachine {
    /// Attempt a state transition
    pub fn transition(
        current: SubscriptionStatus,
        target: SubscriptionStatus,
    ) -> Result<SubscriptionStatus, StateError> {
        if current.is_terminal() {
            return Err(StateError::TerminalState(current.to_string()));
        }

        if !current.valid_transitions().contains(&target) {
            return Err(StateError::InvalidTransition {
                from: current.to_string(),
                to: target.to_string(),
            });
        }

        Ok(target)
    }
}
