#![allow(clippy::doc_markdown)] // Allow technical terms like MIME, JSON in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Exhibitor Registration
//!
//! Multi-step registration wizard for event exhibitors: a step state machine,
//! field-level validation and the plumbing that hands a finished registration
//! to a submission backend.
//!
//! ## Overview
//!
//! Registration runs in three content steps (account, company, review) plus a
//! terminal "complete" state. Each step is validated locally before the wizard
//! moves forward; failures are recorded per field in the shared state instead
//! of being returned as errors. Submission is the only asynchronous operation
//! and is delegated to a [`services::RegistrationSubmitter`].
//!
//! ## Module Organization
//!
//! - [`state_machine`] - Steps, events, transition actions and the shared store
//! - [`validation`] - Step rules, field predicates and the field error map
//! - [`wizard`] - Navigation facade combining validation with the store
//! - [`services`] - Submission contract, wire mapping, in-memory backend, countries
//! - [`models`] - Account and company data bags
//! - [`config`] - Layered configuration for validation limits
//! - [`logging`] - Structured logging setup
//! - [`error`] - Crate error type
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use exhibitor_registration::models::AccountInfoPatch;
//! use exhibitor_registration::services::InMemoryRegistrationBackend;
//! use exhibitor_registration::RegistrationWizard;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let wizard = RegistrationWizard::new(Arc::new(InMemoryRegistrationBackend::new()));
//!
//! wizard.update_account_info(AccountInfoPatch {
//!     first_name: Some("Maria".to_string()),
//!     ..Default::default()
//! });
//!
//! if !wizard.go_next() {
//!     for (field, messages) in wizard.errors().iter() {
//!         println!("{field}: {}", messages.join(", "));
//!     }
//! }
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod state_machine;
pub mod validation;
pub mod wizard;

pub use config::{ConfigManager, RegistrationConfig};
pub use constants::{StepConfig, REGISTRATION_STEPS, TOTAL_STEPS};
pub use error::{RegistrationError, Result};
pub use models::{
    AccountInfo, AccountInfoPatch, BrochureFile, CompanyInfo, CompanyInfoPatch, Field,
    ParticipationType, RegistrationPayload,
};
pub use services::{
    InMemoryRegistrationBackend, RegistrationSubmitter, SubmissionFailure, SubmissionReceipt,
};
pub use state_machine::{RegistrationStore, WizardEvent, WizardState, WizardStep};
pub use validation::{
    validate_step1, validate_step2, validate_step3, FieldErrors, StepValidation, StepValidator,
};
pub use wizard::RegistrationWizard;
