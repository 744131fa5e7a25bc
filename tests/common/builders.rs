//! Test data builders for wizard scenarios

use exhibitor_registration::models::{
    AccountInfo, AccountInfoPatch, CompanyInfo, CompanyInfoPatch, ParticipationType,
};
use exhibitor_registration::{BrochureFile, RegistrationStore, RegistrationSubmitter, RegistrationWizard, StepValidator};
use std::sync::Arc;

/// Builder for an account bag that passes step 1 unless told otherwise
pub struct AccountInfoBuilder {
    account: AccountInfo,
}

impl AccountInfoBuilder {
    pub fn new() -> Self {
        Self {
            account: AccountInfo {
                first_name: "Maria".to_string(),
                last_name: "Cruz".to_string(),
                email: "maria@cruzcrafts.ph".to_string(),
                username: "mcruz".to_string(),
                password: "Secret123".to_string(),
                password_confirmation: "Secret123".to_string(),
                participation_type: Some(ParticipationType::Exhibitor),
            },
        }
    }

    pub fn with_first_name(mut self, value: &str) -> Self {
        self.account.first_name = value.to_string();
        self
    }

    pub fn with_email(mut self, value: &str) -> Self {
        self.account.email = value.to_string();
        self
    }

    pub fn with_username(mut self, value: &str) -> Self {
        self.account.username = value.to_string();
        self
    }

    pub fn with_passwords(mut self, password: &str, confirmation: &str) -> Self {
        self.account.password = password.to_string();
        self.account.password_confirmation = confirmation.to_string();
        self
    }

    pub fn without_participation_type(mut self) -> Self {
        self.account.participation_type = None;
        self
    }

    pub fn build(self) -> AccountInfo {
        self.account
    }

    pub fn build_patch(self) -> AccountInfoPatch {
        let account = self.account;
        AccountInfoPatch {
            first_name: Some(account.first_name),
            last_name: Some(account.last_name),
            email: Some(account.email),
            username: Some(account.username),
            password: Some(account.password),
            password_confirmation: Some(account.password_confirmation),
            participation_type: account.participation_type,
        }
    }
}

/// Builder for a company bag that passes step 2 unless told otherwise
pub struct CompanyInfoBuilder {
    company: CompanyInfo,
}

impl CompanyInfoBuilder {
    pub fn new() -> Self {
        Self {
            company: CompanyInfo {
                company_name: "Cruz Crafts".to_string(),
                address_line: "12 Rizal Ave".to_string(),
                city: "Cebu City".to_string(),
                country: "PH".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn with_year(mut self, value: &str) -> Self {
        self.company.year_established = value.to_string();
        self
    }

    pub fn with_website(mut self, value: &str) -> Self {
        self.company.website = value.to_string();
        self
    }

    pub fn with_brochure(mut self, brochure: BrochureFile) -> Self {
        self.company.brochure = Some(brochure);
        self
    }

    pub fn build(self) -> CompanyInfo {
        self.company
    }

    pub fn build_patch(self) -> CompanyInfoPatch {
        let company = self.company;
        CompanyInfoPatch {
            company_name: Some(company.company_name),
            address_line: Some(company.address_line),
            city: Some(company.city),
            region: Some(company.region),
            country: Some(company.country),
            year_established: Some(company.year_established),
            website: Some(company.website),
            brochure: Some(company.brochure),
            brochure_path: Some(company.brochure_path),
        }
    }
}

pub fn pdf_brochure(size_bytes: usize) -> BrochureFile {
    BrochureFile::from_bytes("catalogue.pdf", "application/pdf", vec![0u8; size_bytes])
}

/// Validator pinned to a fixed year so year bounds are deterministic
pub fn validator_for_year(year: i32) -> StepValidator {
    StepValidator::default().with_current_year(year)
}

pub fn wizard_with(submitter: Arc<dyn RegistrationSubmitter>) -> RegistrationWizard {
    RegistrationWizard::with_validator(validator_for_year(2025), submitter)
}

/// Store already sitting on the review step with valid data
pub fn store_on_review() -> RegistrationStore {
    let store = RegistrationStore::new();
    store.update_account_info(AccountInfoBuilder::new().build_patch());
    store.update_company_info(CompanyInfoBuilder::new().build_patch());
    store.go_to_step(3);
    store
}

/// Wizard filled with valid data and moved to the review step
pub fn wizard_on_review(submitter: Arc<dyn RegistrationSubmitter>) -> RegistrationWizard {
    let wizard = wizard_with(submitter);
    wizard.update_account_info(AccountInfoBuilder::new().build_patch());
    wizard.update_company_info(CompanyInfoBuilder::new().build_patch());
    assert!(wizard.go_next(), "valid account step should advance");
    assert!(wizard.go_next(), "valid company step should advance");
    wizard
}
