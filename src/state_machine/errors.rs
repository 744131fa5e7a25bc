use super::states::WizardStep;
use crate::validation::FieldErrors;
use thiserror::Error;

/// Error types for wizard transitions
///
/// The store treats every one of these as a silent no-op; they exist so the
/// reason can be logged and tested.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateMachineError {
    #[error("Invalid transition from {from} on {event}")]
    InvalidTransition { from: String, event: String },

    #[error("Step {target} is outside the wizard")]
    StepOutOfRange { target: i32 },
}

/// Specific error type for guard condition failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    #[error("Step {step} has {} invalid field(s)", .errors.len())]
    StepInvalid { step: WizardStep, errors: FieldErrors },
}

impl GuardError {
    /// Field errors carried by the failure
    pub fn into_field_errors(self) -> FieldErrors {
        match self {
            GuardError::StepInvalid { errors, .. } => errors,
        }
    }
}

/// Result type alias for state machine operations
pub type StateMachineResult<T> = Result<T, StateMachineError>;
pub type GuardResult<T> = Result<T, GuardError>;
