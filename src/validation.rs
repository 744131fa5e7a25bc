//! # Step Validation
//!
//! Field-level rules for each content step of the registration wizard.
//!
//! Validators borrow an immutable snapshot of the relevant data bag and report
//! every failing field at once. Within one field the checks short-circuit, so a
//! missing username reports "required" and never "too short".

pub mod field_errors;
pub mod predicates;

pub use field_errors::{ErrorMessages, FieldErrors};

use crate::config::{BrochureRules, RegistrationConfig, ValidationRules};
use crate::models::{AccountInfo, CompanyInfo, Field};
use crate::state_machine::WizardStep;
use chrono::Datelike;
use predicates::*;

/// Outcome of validating one step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepValidation {
    pub errors: FieldErrors,
}

impl StepValidation {
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl From<FieldErrors> for StepValidation {
    fn from(errors: FieldErrors) -> Self {
        Self { errors }
    }
}

/// Rule set for the account and company steps
#[derive(Debug, Clone)]
pub struct StepValidator {
    rules: ValidationRules,
    brochure: BrochureRules,
    current_year: i32,
}

impl Default for StepValidator {
    fn default() -> Self {
        Self::new(&RegistrationConfig::default())
    }
}

impl StepValidator {
    pub fn new(config: &RegistrationConfig) -> Self {
        Self {
            rules: config.validation.clone(),
            brochure: config.brochure.clone(),
            current_year: chrono::Local::now().year(),
        }
    }

    /// Pin the upper bound for the establishment year
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Validate whichever step `step` denotes; review and complete always pass
    pub fn validate_step(
        &self,
        step: WizardStep,
        account: &AccountInfo,
        company: &CompanyInfo,
    ) -> StepValidation {
        match step {
            WizardStep::Account => self.validate_account(account),
            WizardStep::Company => self.validate_company(company),
            WizardStep::Review | WizardStep::Complete => self.validate_review(),
        }
    }

    /// Step 1 rules
    pub fn validate_account(&self, account: &AccountInfo) -> StepValidation {
        let mut errors = FieldErrors::new();
        let rules = &self.rules;

        if !is_required(&account.first_name) {
            errors.set(Field::FirstName, "First name is required");
        }
        if !is_required(&account.last_name) {
            errors.set(Field::LastName, "Last name is required");
        }

        if !is_required(&account.email) {
            errors.set(Field::Email, "Email is required");
        } else if !is_valid_email(&account.email) {
            errors.set(Field::Email, "Please enter a valid email address");
        }

        if !is_required(&account.username) {
            errors.set(Field::Username, "Username is required");
        } else if !is_valid_username(&account.username) {
            errors.set(
                Field::Username,
                "Username can only contain letters, numbers, underscores, and hyphens",
            );
        } else if !has_min_length(&account.username, rules.username_min_length) {
            errors.set(
                Field::Username,
                format!(
                    "Username must be at least {} characters",
                    rules.username_min_length
                ),
            );
        } else if !has_max_length(&account.username, rules.username_max_length) {
            errors.set(
                Field::Username,
                format!(
                    "Username must be at most {} characters",
                    rules.username_max_length
                ),
            );
        }

        if !is_required(&account.password) {
            errors.set(Field::Password, "Password is required");
        } else if !has_min_length(&account.password, rules.password_min_length) {
            errors.set(
                Field::Password,
                format!(
                    "Password must be at least {} characters",
                    rules.password_min_length
                ),
            );
        } else if !has_max_length(&account.password, rules.password_max_length) {
            errors.set(
                Field::Password,
                format!(
                    "Password must be at most {} characters",
                    rules.password_max_length
                ),
            );
        }

        // Independent of whether the password itself passed.
        if !passwords_match(&account.password, &account.password_confirmation) {
            errors.set(Field::PasswordConfirmation, "Passwords do not match");
        }

        if account.participation_type.is_none() {
            errors.set(Field::ParticipationType, "Please select a participation type");
        }

        errors.into()
    }

    /// Step 2 rules
    pub fn validate_company(&self, company: &CompanyInfo) -> StepValidation {
        let mut errors = FieldErrors::new();

        if !is_required(&company.company_name) {
            errors.set(Field::CompanyName, "Company name is required");
        }
        if !is_required(&company.address_line) {
            errors.set(Field::AddressLine, "Address is required");
        }
        if !is_required(&company.city) {
            errors.set(Field::City, "City is required");
        }
        if !is_required(&company.country) {
            errors.set(Field::Country, "Country is required");
        }

        if !company.year_established.is_empty()
            && !is_valid_year(
                &company.year_established,
                self.rules.year_established_min,
                self.current_year,
            )
        {
            errors.set(Field::YearEstablished, self.year_range_message());
        }

        if !company.website.is_empty() && !is_valid_url(&company.website) {
            errors.set(Field::Website, "Please enter a valid URL");
        }

        if let Some(brochure) = &company.brochure {
            if !is_valid_file_size(brochure, self.brochure.max_size_bytes()) {
                errors.set(
                    Field::Brochure,
                    format!(
                        "File size must be less than {}MB",
                        self.brochure.max_size_mb
                    ),
                );
            } else if !is_valid_file_type(
                brochure,
                &self.brochure.allowed_mime_types,
                &self.brochure.allowed_extensions,
            ) {
                errors.set(
                    Field::Brochure,
                    format!(
                        "Allowed file types: {}",
                        self.brochure.allowed_extensions.join(", ")
                    ),
                );
            }
        }

        errors.into()
    }

    /// Step 3 has no fields of its own
    pub fn validate_review(&self) -> StepValidation {
        StepValidation::valid()
    }

    pub fn year_range_message(&self) -> String {
        format!(
            "Year must be between {} and {}",
            self.rules.year_established_min, self.current_year
        )
    }
}

/// Step 1 with the default rules
pub fn validate_step1(account: &AccountInfo) -> StepValidation {
    StepValidator::default().validate_account(account)
}

/// Step 2 with the default rules
pub fn validate_step2(company: &CompanyInfo) -> StepValidation {
    StepValidator::default().validate_company(company)
}

/// Step 3 (review) always passes
pub fn validate_step3() -> StepValidation {
    StepValidation::valid()
}
