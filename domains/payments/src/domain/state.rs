//! State machine for payment status transitions
//!
//! Pending → Succeeded | Failed, Succeeded → Refunded.
//! Failed and Refunded are terminal.

pub use carepath_common::StateError;

use super::entities::PaymentStatus;

impl PaymentStatus {
    /// Get all valid next states from current state
    pub fn valid_transitions(&self) -> &'static [PaymentStatus] {
        match self {
            Self::Pending => &[Self::Succeeded, Self::Failed],
            Self::Succeeded => &[Self::Refunded],
            Self::Failed | Self::Refunded => &[],
        }
    }
}

/// Payment state machine
pub struct PaymentStateMachine;

impl PaymentStateMachine {
    pub fn transition(
        current: PaymentStatus,
        target: PaymentStatus,
    ) -> Result<PaymentStatus, StateError> {
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
