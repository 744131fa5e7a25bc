//! Submission Tests
//!
//! Success, rejection and failure flows, plus the loading flag under
//! overlapping, panicking and abandoned submissions.

mod common;

use common::*;
use exhibitor_registration::constants::messages::UNEXPECTED_SUBMIT_ERROR;
use exhibitor_registration::models::{AccountInfoPatch, CompanyInfoPatch, Field};
use exhibitor_registration::{
    FieldErrors, InMemoryRegistrationBackend, RegistrationStore, SubmissionFailure, WizardStep,
};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn successful_submission_completes_the_wizard() {
    let submitter = ScriptedSubmitter::succeeding();
    let wizard = wizard_on_review(submitter.clone());
    wizard.store().set_field_error(Field::Region, "stale");

    assert!(wizard.submit_registration().await);

    let state = wizard.store().snapshot();
    assert!(state.is_submitted);
    assert_eq!(state.current_step, WizardStep::Complete);
    assert_eq!(
        state.submission_result.as_ref().unwrap()["registrationId"],
        "MF-TEST000001"
    );
    assert!(state.errors.is_empty());
    assert!(state.submit_error.is_empty());
    assert!(!state.is_loading());
    assert_eq!(submitter.calls(), 1);
}

#[tokio::test]
async fn brochure_travels_beside_the_payload() {
    let submitter = ScriptedSubmitter::succeeding();
    let wizard = wizard_on_review(submitter.clone());
    wizard.update_company_info(CompanyInfoPatch {
        brochure: Some(Some(pdf_brochure(1024))),
        ..Default::default()
    });

    assert!(wizard.submit_registration().await);

    let (payload, brochure) = submitter.last_call().unwrap();
    assert!(payload.company_info.brochure.is_none());
    assert_eq!(payload.account_info.username, "mcruz");
    assert_eq!(brochure.unwrap().size_bytes, 1024);
}

#[tokio::test]
async fn invalid_steps_block_the_collaborator() {
    let submitter = ScriptedSubmitter::succeeding();
    let wizard = wizard_on_review(submitter.clone());
    wizard.update_account_info(AccountInfoPatch {
        password_confirmation: Some("Different1".to_string()),
        ..Default::default()
    });
    wizard.update_company_info(CompanyInfoPatch {
        website: Some("http://".to_string()),
        ..Default::default()
    });

    assert!(!wizard.submit_registration().await);

    let errors = wizard.errors();
    assert_eq!(
        errors.fields(),
        vec![Field::PasswordConfirmation, Field::Website]
    );
    assert_eq!(submitter.calls(), 0);
    assert_eq!(wizard.current_step(), WizardStep::Review);
}

#[tokio::test]
async fn validation_failure_replaces_errors_and_sets_message() {
    let mut backend_errors = FieldErrors::new();
    backend_errors.set(Field::Email, "This email is already registered");
    let submitter = ScriptedSubmitter::failing(SubmissionFailure::validation(
        backend_errors,
        "The given data was invalid.",
    ));
    let wizard = wizard_on_review(submitter);
    wizard.store().set_field_error(Field::City, "old error");

    assert!(!wizard.submit_registration().await);

    let errors = wizard.errors();
    assert_eq!(errors.fields(), vec![Field::Email]);
    assert_eq!(wizard.submit_error(), "The given data was invalid.");
    assert!(!wizard.is_submitted());
    assert!(!wizard.is_loading());
    assert_eq!(wizard.current_step(), WizardStep::Review);
}

#[tokio::test]
async fn transport_failure_leaves_error_map_untouched() {
    let submitter = ScriptedSubmitter::failing(SubmissionFailure::transport("Service Unavailable"));
    let store = store_on_review();
    store.set_field_error(Field::Region, "kept");

    assert!(!store.submit(submitter.as_ref()).await);

    assert_eq!(store.submit_error(), "Service Unavailable");
    assert_eq!(store.get_error(Field::Region).as_deref(), Some("kept"));
    assert!(!store.is_loading());
}

#[tokio::test]
async fn new_submission_clears_previous_submit_error() {
    let store = store_on_review();
    let failing = ScriptedSubmitter::failing(SubmissionFailure::transport("timeout"));
    assert!(!store.submit(failing.as_ref()).await);
    assert_eq!(store.submit_error(), "timeout");

    let succeeding = ScriptedSubmitter::succeeding();
    assert!(store.submit(succeeding.as_ref()).await);
    assert!(store.submit_error().is_empty());
}

#[tokio::test]
async fn panicking_collaborator_still_resets_loading() {
    let store = store_on_review();

    assert!(!store.submit(&PanickingSubmitter).await);

    assert!(!store.is_loading());
    assert_eq!(store.submit_error(), UNEXPECTED_SUBMIT_ERROR);
    assert_eq!(store.current_step(), WizardStep::Review);

    // The wizard stays usable afterwards.
    assert!(store.prev_step());
}

#[tokio::test]
async fn dropped_submission_resets_loading() {
    let store = store_on_review();

    let result = tokio::time::timeout(Duration::from_millis(20), store.submit(&PendingSubmitter)).await;

    assert!(result.is_err());
    assert!(!store.is_loading());
    assert!(!store.is_submitted());
}

#[tokio::test]
async fn overlapping_submissions_keep_loading_raised() {
    let store = store_on_review();
    let gate = GatedSubmitter::new();

    let first = tokio::spawn({
        let store = store.clone();
        let gate = gate.clone();
        async move { store.submit(gate.as_ref()).await }
    });
    gate.wait_for_entered(1).await;
    assert!(store.is_loading());

    let second = tokio::spawn({
        let store = store.clone();
        let gate = gate.clone();
        async move { store.submit(gate.as_ref()).await }
    });
    gate.wait_for_entered(2).await;
    assert!(store.is_loading());

    // Navigation is not blocked while a submission is outstanding.
    assert!(store.go_to_step(1));
    assert_eq!(store.current_step(), WizardStep::Account);
    assert!(store.is_loading());

    gate.release_all();
    assert!(first.await.unwrap());
    assert!(second.await.unwrap());

    assert!(!store.is_loading());
    assert!(store.is_submitted());
    assert_eq!(store.current_step(), WizardStep::Complete);
}

#[tokio::test]
async fn can_flags_follow_loading() {
    let gate = GatedSubmitter::new();
    let wizard = wizard_on_review(gate.clone());
    assert!(wizard.can_submit());
    assert!(wizard.can_go_back());

    let pending = tokio::spawn({
        let wizard = wizard.clone();
        async move { wizard.submit_registration().await }
    });
    gate.wait_for_entered(1).await;

    assert!(wizard.is_loading());
    assert!(!wizard.can_submit());
    assert!(!wizard.can_go_back());

    gate.release_all();
    assert!(pending.await.unwrap());
    assert!(wizard.is_complete());
}

#[tokio::test]
async fn in_memory_backend_rejects_taken_username() {
    let backend = Arc::new(InMemoryRegistrationBackend::new());
    let wizard = wizard_on_review(backend.clone());
    wizard.update_account_info(AccountInfoPatch {
        username: Some("JohnDoe".to_string()),
        ..Default::default()
    });

    assert!(!wizard.submit_registration().await);
    assert_eq!(
        wizard.errors().first_message(Field::Username),
        Some("This username is already taken")
    );
    assert_eq!(wizard.submit_error(), "The given data was invalid.");
    assert_eq!(backend.registration_count(), 0);

    wizard.update_account_info(AccountInfoPatch {
        username: Some("mcruz".to_string()),
        ..Default::default()
    });
    assert!(wizard.submit_registration().await);
    assert_eq!(backend.registration_count(), 1);

    let result = wizard.submission_result().unwrap();
    let id = result["registrationId"].as_str().unwrap();
    assert_eq!(backend.registration_status(id).await.unwrap().status, "pending");
}

#[tokio::test]
async fn reset_after_success_allows_a_new_registration() {
    let store = RegistrationStore::new();
    store.update_account_info(AccountInfoBuilder::new().build_patch());
    store.update_company_info(CompanyInfoBuilder::new().build_patch());
    assert!(store.submit(ScriptedSubmitter::succeeding().as_ref()).await);

    store.reset_form();
    assert!(!store.is_submitted());
    assert!(store.submission_result().is_none());
    assert_eq!(store.current_step(), WizardStep::Account);
}

#[tokio::test]
async fn going_back_after_success_lowers_submitted_flag() {
    let wizard = wizard_on_review(ScriptedSubmitter::succeeding());
    assert!(wizard.submit_registration().await);
    assert!(wizard.is_submitted());

    assert!(wizard.go_back());
    assert_eq!(wizard.current_step(), WizardStep::Review);
    assert!(!wizard.is_submitted());
    assert!(wizard.can_submit());
}
