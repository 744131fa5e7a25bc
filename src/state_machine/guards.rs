use super::context::WizardState;
use super::errors::{GuardError, GuardResult};
use super::states::WizardStep;
use crate::validation::StepValidator;

/// Trait for implementing step transition guards
pub trait StateGuard: Send + Sync {
    /// Check if moving from `from` to `to` is allowed for `state`
    fn check(&self, from: WizardStep, to: WizardStep, state: &WizardState) -> GuardResult<()>;

    /// Get a description of this guard for logging
    fn description(&self) -> &'static str;
}

/// Forward moves require the step being left to validate
///
/// Backward moves and same-step jumps always pass.
#[derive(Debug, Clone, Default)]
pub struct StepCompleteGuard {
    validator: StepValidator,
}

impl StepCompleteGuard {
    pub fn new(validator: StepValidator) -> Self {
        Self { validator }
    }
}

impl StateGuard for StepCompleteGuard {
    fn check(&self, from: WizardStep, to: WizardStep, state: &WizardState) -> GuardResult<()> {
        if to < from {
            return Ok(());
        }

        let validation =
            self.validator
                .validate_step(from, &state.account_info, &state.company_info);

        if validation.is_valid() {
            Ok(())
        } else {
            Err(GuardError::StepInvalid {
                step: from,
                errors: validation.errors,
            })
        }
    }

    fn description(&self) -> &'static str {
        "The step being left must be valid"
    }
}
