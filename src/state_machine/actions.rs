use super::context::WizardState;
use super::events::WizardEvent;
use super::states::WizardStep;
use crate::constants::events;
use crate::log_wizard;

/// Trait for side effects that run after a successful transition
pub trait StateAction: Send + Sync {
    /// Execute the action; the state already holds the new step
    fn execute(&self, state: &mut WizardState, from: WizardStep, to: WizardStep, event: &WizardEvent);

    /// Get a description of this action for logging
    fn description(&self) -> &'static str;
}

/// Drop field errors and the submit error on every successful transition
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearErrorsAction;

impl StateAction for ClearErrorsAction {
    fn execute(&self, state: &mut WizardState, _from: WizardStep, _to: WizardStep, _event: &WizardEvent) {
        state.errors.clear();
        state.submit_error.clear();
    }

    fn description(&self) -> &'static str {
        "Clear validation and submission errors"
    }
}

/// Emit a structured log line for the transition
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTransitionAction;

impl StateAction for LogTransitionAction {
    fn execute(&self, _state: &mut WizardState, from: WizardStep, to: WizardStep, event: &WizardEvent) {
        log_wizard!(
            debug,
            events::WIZARD_STEP_CHANGED,
            from: from,
            to: to,
            event: event.event_type()
        );
    }

    fn description(&self) -> &'static str {
        "Log the step change"
    }
}

/// Actions every store runs, in order
pub fn default_actions() -> Vec<Box<dyn StateAction>> {
    vec![Box::new(ClearErrorsAction), Box::new(LogTransitionAction)]
}
