//! In-memory registration backend
//!
//! A deterministic stand-in for the registration API used in development,
//! demos and tests. It speaks the same wire contract as the real backend:
//! payloads are translated to [`WireRegistration`] on the way in and errors
//! come back keyed by backend field names.

use super::submission::{RegistrationSubmitter, SubmissionFailure, SubmissionReceipt};
use super::wire::{field_errors_from_wire, WireErrorResponse, WireRegistration};
use crate::error::{RegistrationError, Result};
use crate::models::{BrochureFile, RegistrationPayload};
use crate::validation::StepValidation;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use tracing::{debug, info};

const SEEDED_EMAILS: [&str; 2] = ["test@example.com", "admin@manilafame.com"];
const SEEDED_USERNAMES: [&str; 3] = ["admin", "testuser", "johndoe"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniquenessCheck {
    pub is_unique: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedBrochure {
    pub file_path: String,
    pub file_name: String,
    pub file_size: u64,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStatus {
    pub registration_id: String,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug, Clone)]
struct StoredRegistration {
    body: WireRegistration,
    brochure: Option<UploadedBrochure>,
    submitted_at: DateTime<Utc>,
}

/// Lowercased emails and usernames that are already in use
#[derive(Debug, Default)]
struct RegisteredIdentities {
    emails: HashSet<String>,
    usernames: HashSet<String>,
}

impl RegisteredIdentities {
    fn duplicate_errors(&self, body: &WireRegistration) -> HashMap<String, Vec<String>> {
        let mut errors = HashMap::new();
        if self.emails.contains(&body.account_info.email.to_lowercase()) {
            errors.insert(
                "account_info.email".to_string(),
                vec!["This email is already registered".to_string()],
            );
        }
        if self
            .usernames
            .contains(&body.account_info.username.to_lowercase())
        {
            errors.insert(
                "account_info.username".to_string(),
                vec!["This username is already taken".to_string()],
            );
        }
        errors
    }
}

/// Email and username reserved by a submission that has not finished yet
///
/// Released on drop unless committed, so a failed or cancelled submission
/// frees both for the next attempt.
struct IdentityClaim<'a> {
    identities: &'a RwLock<RegisteredIdentities>,
    email: String,
    username: String,
    committed: bool,
}

impl IdentityClaim<'_> {
    fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for IdentityClaim<'_> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        let mut identities = self.identities.write();
        identities.emails.remove(&self.email);
        identities.usernames.remove(&self.username);
        debug!(email = %self.email, username = %self.username, "Identity claim released");
    }
}

#[derive(Debug)]
pub struct InMemoryRegistrationBackend {
    identities: RwLock<RegisteredIdentities>,
    registrations: DashMap<String, StoredRegistration>,
    latency: Option<Duration>,
}

impl Default for InMemoryRegistrationBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRegistrationBackend {
    /// Backend seeded with the accounts that already exist in the sample data
    pub fn new() -> Self {
        Self::with_registered(SEEDED_EMAILS, SEEDED_USERNAMES)
    }

    pub fn with_registered<E, U>(emails: E, usernames: U) -> Self
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        U: IntoIterator,
        U::Item: AsRef<str>,
    {
        Self {
            identities: RwLock::new(RegisteredIdentities {
                emails: emails.into_iter().map(|e| e.as_ref().to_lowercase()).collect(),
                usernames: usernames
                    .into_iter()
                    .map(|u| u.as_ref().to_lowercase())
                    .collect(),
            }),
            registrations: DashMap::new(),
            latency: None,
        }
    }

    /// Delay every call to mimic network latency
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }

    fn email_taken(&self, email: &str) -> bool {
        self.identities.read().emails.contains(&email.to_lowercase())
    }

    fn username_taken(&self, username: &str) -> bool {
        self.identities
            .read()
            .usernames
            .contains(&username.to_lowercase())
    }

    /// Check and reserve the body's email and username under one lock
    fn claim_identity(
        &self,
        body: &WireRegistration,
    ) -> std::result::Result<IdentityClaim<'_>, HashMap<String, Vec<String>>> {
        let mut identities = self.identities.write();
        let duplicates = identities.duplicate_errors(body);
        if !duplicates.is_empty() {
            return Err(duplicates);
        }

        let email = body.account_info.email.to_lowercase();
        let username = body.account_info.username.to_lowercase();
        identities.emails.insert(email.clone());
        identities.usernames.insert(username.clone());

        Ok(IdentityClaim {
            identities: &self.identities,
            email,
            username,
            committed: false,
        })
    }

    pub async fn check_email_unique(&self, email: &str) -> UniquenessCheck {
        self.simulate_latency().await;
        let is_unique = !self.email_taken(email);
        UniquenessCheck {
            is_unique,
            message: if is_unique {
                "Email is available".to_string()
            } else {
                "Email is already registered".to_string()
            },
        }
    }

    pub async fn check_username_unique(&self, username: &str) -> UniquenessCheck {
        self.simulate_latency().await;
        let is_unique = !self.username_taken(username);
        UniquenessCheck {
            is_unique,
            message: if is_unique {
                "Username is available".to_string()
            } else {
                "Username is already taken".to_string()
            },
        }
    }

    pub async fn upload_brochure(&self, file: &BrochureFile) -> UploadedBrochure {
        self.simulate_latency().await;
        let uploaded = UploadedBrochure {
            file_path: format!(
                "/uploads/brochures/{}_{}",
                Utc::now().timestamp_millis(),
                file.file_name
            ),
            file_name: file.file_name.clone(),
            file_size: file.size_bytes,
            mime_type: file.mime_type.clone(),
        };
        debug!(file_path = %uploaded.file_path, size = uploaded.file_size, "Brochure stored");
        uploaded
    }

    /// Server-side checks for one step; only step 1 has any
    pub async fn validate_step(&self, step: u8, payload: &RegistrationPayload) -> StepValidation {
        self.simulate_latency().await;
        if step != 1 {
            return StepValidation::valid();
        }
        let duplicates = self
            .identities
            .read()
            .duplicate_errors(&WireRegistration::from(payload));
        field_errors_from_wire(&duplicates).into()
    }

    pub async fn registration_status(&self, registration_id: &str) -> Result<RegistrationStatus> {
        self.simulate_latency().await;
        let record = self.registrations.get(registration_id).ok_or_else(|| {
            RegistrationError::NotFound(format!("Registration {registration_id}"))
        })?;

        Ok(RegistrationStatus {
            registration_id: registration_id.to_string(),
            status: "pending".to_string(),
            submitted_at: record.submitted_at,
            message: "Your registration is being processed".to_string(),
        })
    }

    pub fn registration_count(&self) -> usize {
        self.registrations.len()
    }

    /// Body exactly as it was received on the wire
    pub fn stored_registration(&self, registration_id: &str) -> Option<WireRegistration> {
        self.registrations
            .get(registration_id)
            .map(|record| record.body.clone())
    }

    /// Stored brochure for a registration, if one was attached
    pub fn stored_brochure(&self, registration_id: &str) -> Option<UploadedBrochure> {
        self.registrations
            .get(registration_id)
            .and_then(|record| record.brochure.clone())
    }

    fn generate_registration_id() -> String {
        let id = uuid::Uuid::new_v4().simple().to_string().to_uppercase();
        format!("MF-{}", &id[..10])
    }
}

#[async_trait]
impl RegistrationSubmitter for InMemoryRegistrationBackend {
    async fn submit(
        &self,
        payload: RegistrationPayload,
        brochure: Option<BrochureFile>,
    ) -> std::result::Result<SubmissionReceipt, SubmissionFailure> {
        self.simulate_latency().await;

        let mut body = WireRegistration::from(&payload);
        let claim = self.claim_identity(&body).map_err(|duplicates| {
            WireErrorResponse {
                message: "The given data was invalid.".to_string(),
                errors: Some(duplicates),
            }
            .into_failure()
        })?;

        let uploaded = match &brochure {
            Some(file) => Some(self.upload_brochure(file).await),
            None => None,
        };
        if let Some(uploaded) = &uploaded {
            body.company_info.brochure_path = Some(uploaded.file_path.clone());
        }

        let registration_id = Self::generate_registration_id();
        let submitted_at = Utc::now();

        let data = json!({
            "registrationId": registration_id,
            "status": "pending",
            "submittedAt": submitted_at.to_rfc3339(),
            "accountInfo": {
                "email": body.account_info.email,
                "username": body.account_info.username,
                "participationType": body.account_info.participation_type,
            },
            "companyInfo": {
                "companyName": body.company_info.company_name,
                "country": body.company_info.country,
            },
            "brochurePath": uploaded.as_ref().map(|b| b.file_path.clone()),
        });

        self.registrations.insert(
            registration_id.clone(),
            StoredRegistration {
                body,
                brochure: uploaded,
                submitted_at,
            },
        );
        claim.commit();

        info!(registration_id = %registration_id, "Registration stored");

        Ok(SubmissionReceipt {
            data,
            message: "Registration submitted successfully! Please check your email for confirmation."
                .to_string(),
        })
    }
}
