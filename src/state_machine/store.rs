use super::actions::{default_actions, StateAction};
use super::context::WizardState;
use super::errors::StateMachineResult;
use super::events::WizardEvent;
use super::states::WizardStep;
use crate::constants::{events, messages, StepConfig, TOTAL_STEPS};
use crate::models::{AccountInfo, AccountInfoPatch, CompanyInfo, CompanyInfoPatch, Field, RegistrationPayload};
use crate::services::{RegistrationSubmitter, SubmissionFailure};
use crate::validation::{ErrorMessages, FieldErrors};
use crate::{log_submission, log_wizard};
use futures::FutureExt;
use parking_lot::RwLock;
use std::any::Any;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

/// Shared, clonable handle over the wizard state
///
/// Every clone observes and mutates the same state. Locks are taken per
/// operation and never held across an `.await`, so navigation stays possible
/// while a submission is outstanding.
#[derive(Clone)]
pub struct RegistrationStore {
    state: Arc<RwLock<WizardState>>,
    actions: Arc<[Box<dyn StateAction>]>,
}

impl fmt::Debug for RegistrationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationStore")
            .field("state", &*self.state.read())
            .field(
                "actions",
                &self.actions.iter().map(|a| a.description()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Default for RegistrationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationStore {
    pub fn new() -> Self {
        Self::with_actions(default_actions())
    }

    /// Store running a custom action chain after each transition
    pub fn with_actions(actions: Vec<Box<dyn StateAction>>) -> Self {
        Self {
            state: Arc::new(RwLock::new(WizardState::default())),
            actions: actions.into(),
        }
    }

    /// Point-in-time copy of the whole state
    pub fn snapshot(&self) -> WizardState {
        self.state.read().clone()
    }

    /// Apply `event` to the current step and run the action chain
    pub fn transition(&self, event: WizardEvent) -> StateMachineResult<WizardStep> {
        let mut state = self.state.write();
        self.apply_event(&mut state, event)
    }

    fn apply_event(&self, state: &mut WizardState, event: WizardEvent) -> StateMachineResult<WizardStep> {
        let from = state.current_step;
        let to = from.apply(&event)?;
        state.current_step = to;
        if !to.is_terminal() {
            state.is_submitted = false;
        }

        for action in self.actions.iter() {
            action.execute(state, from, to, &event);
        }

        Ok(to)
    }

    /// Transition, treating a refused event as a logged no-op
    fn try_transition(&self, event: WizardEvent) -> bool {
        match self.transition(event) {
            Ok(_) => true,
            Err(e) => {
                log_wizard!(
                    debug,
                    events::WIZARD_TRANSITION_IGNORED,
                    step: self.current_step(),
                    event: event.event_type(),
                    reason: e.to_string()
                );
                false
            }
        }
    }

    pub fn next_step(&self) -> bool {
        self.try_transition(WizardEvent::Next)
    }

    pub fn prev_step(&self) -> bool {
        self.try_transition(WizardEvent::Back)
    }

    /// Jump to the 1-based `target`; anything outside `[1, TOTAL_STEPS + 1]` is ignored
    pub fn go_to_step(&self, target: i32) -> bool {
        self.try_transition(WizardEvent::GoTo(target))
    }

    pub fn update_account_info(&self, patch: AccountInfoPatch) {
        self.state.write().account_info.apply(patch);
    }

    pub fn update_company_info(&self, patch: CompanyInfoPatch) {
        self.state.write().company_info.apply(patch);
    }

    /// Replace the whole error map
    pub fn set_errors(&self, errors: FieldErrors) {
        self.state.write().errors = errors;
    }

    pub fn set_field_error(&self, field: Field, messages: impl Into<ErrorMessages>) {
        self.state.write().errors.set(field, messages);
    }

    /// Drop every field error and the submit error
    pub fn clear_errors(&self) {
        let mut state = self.state.write();
        state.errors.clear();
        state.submit_error.clear();
    }

    pub fn clear_field_error(&self, field: Field) {
        self.state.write().errors.remove(field);
    }

    /// Hand the collected data to `submitter`
    ///
    /// Returns `true` on success. Failures land in the error map and
    /// `submit_error`; a panicking submitter is reported as an unexpected
    /// error. `is_loading` is reset on every exit, including when the
    /// returned future is dropped before completion.
    pub async fn submit(&self, submitter: &dyn RegistrationSubmitter) -> bool {
        let (payload, brochure) = {
            let mut state = self.state.write();
            state.in_flight += 1;
            state.submit_error.clear();
            RegistrationPayload::from_bags(&state.account_info, &state.company_info)
        };
        let _in_flight = InFlightGuard {
            state: Arc::clone(&self.state),
        };

        log_submission!(
            info,
            events::SUBMISSION_STARTED,
            has_brochure: brochure.is_some()
        );

        let outcome = AssertUnwindSafe(submitter.submit(payload, brochure))
            .catch_unwind()
            .await;

        let mut state = self.state.write();
        match outcome {
            Ok(Ok(receipt)) => {
                state.submission_result = Some(receipt.data);
                state.is_submitted = true;
                if let Err(e) = self.apply_event(&mut state, WizardEvent::Submitted) {
                    log_wizard!(warn, events::WIZARD_TRANSITION_IGNORED, reason: e.to_string());
                }
                log_submission!(info, events::SUBMISSION_SUCCEEDED, message: receipt.message);
                true
            }
            Ok(Err(SubmissionFailure::Validation { errors, message })) => {
                log_submission!(
                    warn,
                    events::SUBMISSION_REJECTED,
                    fields: errors.fields(),
                    message: &message
                );
                state.errors = errors;
                state.submit_error = message;
                false
            }
            Ok(Err(SubmissionFailure::Transport { message })) => {
                log_submission!(warn, events::SUBMISSION_FAILED, message: &message);
                state.submit_error = if message.trim().is_empty() {
                    messages::UNEXPECTED_SUBMIT_ERROR.to_string()
                } else {
                    message
                };
                false
            }
            Err(panic) => {
                log_submission!(
                    error,
                    events::SUBMISSION_PANICKED,
                    panic: panic_message(panic.as_ref())
                );
                state.submit_error = messages::UNEXPECTED_SUBMIT_ERROR.to_string();
                false
            }
        }
    }

    /// Back to step 1 with empty bags, no errors and no result
    ///
    /// Outstanding submissions keep `is_loading` raised until they finish.
    /// The step change runs through the action chain like any other event.
    pub fn reset_form(&self) {
        let mut state = self.state.write();
        let from = state.current_step;
        let in_flight = state.in_flight;
        *state = WizardState {
            current_step: from,
            in_flight,
            ..WizardState::default()
        };
        if let Err(e) = self.apply_event(&mut state, WizardEvent::Reset) {
            log_wizard!(warn, events::WIZARD_TRANSITION_IGNORED, reason: e.to_string());
        }
        log_wizard!(info, events::WIZARD_RESET, from: from);
    }

    pub fn current_step(&self) -> WizardStep {
        self.state.read().current_step
    }

    pub fn account_info(&self) -> AccountInfo {
        self.state.read().account_info.clone()
    }

    pub fn company_info(&self) -> CompanyInfo {
        self.state.read().company_info.clone()
    }

    pub fn errors(&self) -> FieldErrors {
        self.state.read().errors.clone()
    }

    pub fn submit_error(&self) -> String {
        self.state.read().submit_error.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading()
    }

    pub fn is_submitted(&self) -> bool {
        self.state.read().is_submitted
    }

    pub fn submission_result(&self) -> Option<serde_json::Value> {
        self.state.read().submission_result.clone()
    }

    pub fn total_steps(&self) -> u8 {
        TOTAL_STEPS
    }

    pub fn current_step_config(&self) -> Option<&'static StepConfig> {
        self.current_step().config()
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step().is_first()
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step().is_last_content_step()
    }

    pub fn is_complete(&self) -> bool {
        self.current_step().is_terminal()
    }

    pub fn full_name(&self) -> String {
        self.state.read().account_info.full_name()
    }

    /// JSON-ready copy of both bags, brochure excluded
    pub fn registration_data(&self) -> RegistrationPayload {
        let state = self.state.read();
        RegistrationPayload::from_bags(&state.account_info, &state.company_info).0
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.state.read().errors.contains(field)
    }

    /// First message recorded for `field`
    pub fn get_error(&self, field: Field) -> Option<String> {
        self.state
            .read()
            .errors
            .first_message(field)
            .map(str::to_string)
    }
}

/// Lowers the in-flight count when a submission ends, however it ends
struct InFlightGuard {
    state: Arc<RwLock<WizardState>>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut state = self.state.write();
        state.in_flight = state.in_flight.saturating_sub(1);
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
