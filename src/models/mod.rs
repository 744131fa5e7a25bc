//! # Registration Data Model
//!
//! The two data bags the wizard collects ([`AccountInfo`], [`CompanyInfo`]),
//! their merge-patch companions, and the closed set of field names used to key
//! validation errors.

pub mod account;
pub mod company;
pub mod field;

pub use account::{AccountInfo, AccountInfoPatch, ParticipationType};
pub use company::{BrochureFile, CompanyInfo, CompanyInfoPatch};
pub use field::Field;

use serde::{Deserialize, Serialize};

/// JSON-ready snapshot of both bags, brochure excluded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub account_info: AccountInfo,
    pub company_info: CompanyInfo,
}

impl RegistrationPayload {
    /// Split the bags into a JSON body and the file that travels beside it
    pub fn from_bags(
        account_info: &AccountInfo,
        company_info: &CompanyInfo,
    ) -> (Self, Option<BrochureFile>) {
        let (company_info, brochure) = company_info.without_brochure();
        (
            Self {
                account_info: account_info.clone(),
                company_info,
            },
            brochure,
        )
    }
}
