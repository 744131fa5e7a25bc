//! # Registration Wizard
//!
//! Navigation facade over [`RegistrationStore`]. Moving forward validates the
//! step being left and writes any failures into the store's error map instead
//! of moving; moving back never validates. Final submission re-validates both
//! content steps before the collaborator is called.

use crate::config::RegistrationConfig;
use crate::constants::{events, StepConfig};
use crate::log_wizard;
use crate::models::{AccountInfo, AccountInfoPatch, CompanyInfo, CompanyInfoPatch, Field};
use crate::services::RegistrationSubmitter;
use crate::state_machine::{
    RegistrationStore, StateGuard, StepCompleteGuard, WizardEvent, WizardState, WizardStep,
};
use crate::validation::{FieldErrors, StepValidation, StepValidator};
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct RegistrationWizard {
    store: RegistrationStore,
    validator: StepValidator,
    guard: Arc<dyn StateGuard>,
    submitter: Arc<dyn RegistrationSubmitter>,
}

impl fmt::Debug for RegistrationWizard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationWizard")
            .field("store", &self.store)
            .field("validator", &self.validator)
            .field("guard", &self.guard.description())
            .finish_non_exhaustive()
    }
}

impl RegistrationWizard {
    /// Wizard with default validation rules and a fresh store
    pub fn new(submitter: Arc<dyn RegistrationSubmitter>) -> Self {
        Self::with_validator(StepValidator::default(), submitter)
    }

    pub fn from_config(config: &RegistrationConfig, submitter: Arc<dyn RegistrationSubmitter>) -> Self {
        Self::with_validator(StepValidator::new(config), submitter)
    }

    pub fn with_validator(validator: StepValidator, submitter: Arc<dyn RegistrationSubmitter>) -> Self {
        Self::with_store(RegistrationStore::new(), validator, submitter)
    }

    /// Drive an existing store, e.g. one shared with a view layer
    pub fn with_store(
        store: RegistrationStore,
        validator: StepValidator,
        submitter: Arc<dyn RegistrationSubmitter>,
    ) -> Self {
        Self {
            store,
            guard: Arc::new(StepCompleteGuard::new(validator.clone())),
            validator,
            submitter,
        }
    }

    pub fn store(&self) -> &RegistrationStore {
        &self.store
    }

    pub fn validator(&self) -> &StepValidator {
        &self.validator
    }

    pub fn validate_step1(&self) -> StepValidation {
        self.validator.validate_account(&self.store.account_info())
    }

    pub fn validate_step2(&self) -> StepValidation {
        self.validator.validate_company(&self.store.company_info())
    }

    pub fn validate_current_step(&self) -> StepValidation {
        let state = self.store.snapshot();
        self.validator
            .validate_step(state.current_step, &state.account_info, &state.company_info)
    }

    /// Check the guard for leaving the current step towards `to`
    ///
    /// On failure the errors are written to the store.
    fn admit(&self, state: &WizardState, to: WizardStep) -> bool {
        match self.guard.check(state.current_step, to, state) {
            Ok(()) => true,
            Err(e) => {
                log_wizard!(
                    debug,
                    events::WIZARD_STEP_REJECTED,
                    step: state.current_step,
                    to_step: to,
                    reason: e.to_string()
                );
                self.store.set_errors(e.into_field_errors());
                false
            }
        }
    }

    /// Validate the current step and advance when it passes
    pub fn go_next(&self) -> bool {
        let state = self.store.snapshot();
        let Ok(to) = state.current_step.apply(&WizardEvent::Next) else {
            return false;
        };

        if !self.admit(&state, to) {
            return false;
        }

        self.store.clear_errors();
        self.store.next_step()
    }

    pub fn go_back(&self) -> bool {
        self.store.clear_errors();
        self.store.prev_step()
    }

    /// Jump to `target`; only backward jumps skip validation
    ///
    /// Out-of-range targets are ignored without touching the error map.
    pub fn go_to_step(&self, target: i32) -> bool {
        let state = self.store.snapshot();
        let Some(to) = WizardStep::from_index(target) else {
            return self.store.go_to_step(target);
        };

        if to < state.current_step {
            return self.store.go_to_step(target);
        }

        if !self.admit(&state, to) {
            return false;
        }

        self.store.go_to_step(target)
    }

    /// Validate both content steps and submit when they pass
    pub async fn submit_registration(&self) -> bool {
        let mut errors: FieldErrors = self.validate_step1().errors;
        errors.merge(self.validate_step2().errors);

        if !errors.is_empty() {
            log_wizard!(
                debug,
                events::WIZARD_STEP_REJECTED,
                step: self.store.current_step(),
                fields: errors.fields()
            );
            self.store.set_errors(errors);
            return false;
        }

        self.store.submit(self.submitter.as_ref()).await
    }

    pub fn can_go_back(&self) -> bool {
        let state = self.store.snapshot();
        !state.current_step.is_first() && !state.is_loading()
    }

    pub fn can_go_next(&self) -> bool {
        let state = self.store.snapshot();
        !state.current_step.is_last_content_step()
            && !state.current_step.is_terminal()
            && !state.is_loading()
    }

    pub fn can_submit(&self) -> bool {
        let state = self.store.snapshot();
        state.current_step.is_last_content_step() && !state.is_loading()
    }

    pub fn is_complete(&self) -> bool {
        self.store.is_complete()
    }

    /// Position as a percentage of the content steps; 100 on review
    pub fn progress(&self) -> f64 {
        f64::from(self.store.current_step().index()) / f64::from(self.store.total_steps()) * 100.0
    }

    pub fn current_step(&self) -> WizardStep {
        self.store.current_step()
    }

    pub fn current_step_config(&self) -> Option<&'static StepConfig> {
        self.store.current_step_config()
    }

    pub fn account_info(&self) -> AccountInfo {
        self.store.account_info()
    }

    pub fn company_info(&self) -> CompanyInfo {
        self.store.company_info()
    }

    pub fn errors(&self) -> FieldErrors {
        self.store.errors()
    }

    pub fn submit_error(&self) -> String {
        self.store.submit_error()
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    pub fn is_submitted(&self) -> bool {
        self.store.is_submitted()
    }

    pub fn submission_result(&self) -> Option<serde_json::Value> {
        self.store.submission_result()
    }

    pub fn full_name(&self) -> String {
        self.store.full_name()
    }

    pub fn update_account_info(&self, patch: AccountInfoPatch) {
        self.store.update_account_info(patch);
    }

    pub fn update_company_info(&self, patch: CompanyInfoPatch) {
        self.store.update_company_info(patch);
    }

    pub fn clear_field_error(&self, field: Field) {
        self.store.clear_field_error(field);
    }

    pub fn reset_form(&self) {
        self.store.reset_form();
    }
}
