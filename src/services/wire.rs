//! Backend wire contract
//!
//! The wizard names fields flat and camelCase per bag. The backend expects one
//! JSON body with snake_case keys grouped under `account_info` and
//! `company_info`; the brochure is uploaded separately and only its stored path
//! appears in the body. Error responses follow the
//! `{ "message": ..., "errors": { "field": [..] } }` convention.

use super::submission::SubmissionFailure;
use crate::models::{Field, RegistrationPayload};
use crate::validation::FieldErrors;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireRegistration {
    pub account_info: WireAccount,
    pub company_info: WireCompany,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub password_confirmation: String,
    pub participation_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireCompany {
    pub company_name: String,
    pub address_line: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub region: Option<String>,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub year_established: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub brochure_path: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl From<&RegistrationPayload> for WireRegistration {
    fn from(payload: &RegistrationPayload) -> Self {
        let account = &payload.account_info;
        let company = &payload.company_info;

        Self {
            account_info: WireAccount {
                first_name: account.first_name.trim().to_string(),
                last_name: account.last_name.trim().to_string(),
                email: account.email.trim().to_string(),
                username: account.username.clone(),
                password: account.password.clone(),
                password_confirmation: account.password_confirmation.clone(),
                participation_type: account.participation_type.map(|t| t.to_string()),
            },
            company_info: WireCompany {
                company_name: company.company_name.trim().to_string(),
                address_line: company.address_line.trim().to_string(),
                city: company.city.trim().to_string(),
                region: non_empty(&company.region),
                country: company.country.trim().to_string(),
                year_established: company.year_established.trim().parse().ok(),
                website: non_empty(&company.website),
                brochure_path: non_empty(&company.brochure_path),
            },
        }
    }
}

/// Resolve a backend error key to a wizard field
///
/// Accepts `first_name`, `account_info.first_name` and `firstName`.
pub fn field_from_wire_key(key: &str) -> Option<Field> {
    let leaf = key.rsplit('.').next().unwrap_or(key);
    leaf.parse().ok()
}

/// Translate a backend error map into wizard field errors
///
/// Keys that name no known field are logged and dropped.
pub fn field_errors_from_wire(errors: &HashMap<String, Vec<String>>) -> FieldErrors {
    let mut field_errors = FieldErrors::new();

    for (key, messages) in errors {
        match field_from_wire_key(key) {
            Some(field) => {
                for message in messages {
                    field_errors.push(field, message.clone());
                }
            }
            None => warn!(key = %key, "Dropping backend error for unknown field"),
        }
    }

    field_errors
}

/// Backend error response body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireErrorResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl WireErrorResponse {
    /// Classify: an `errors` object marks a validation failure
    pub fn into_failure(self) -> SubmissionFailure {
        match self.errors {
            Some(errors) => {
                SubmissionFailure::validation(field_errors_from_wire(&errors), self.message)
            }
            None => SubmissionFailure::transport(self.message),
        }
    }
}
