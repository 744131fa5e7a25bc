//! Submission collaborator contract
//!
//! The wizard hands its aggregate to a [`RegistrationSubmitter`] and only ever
//! distinguishes two failure shapes: field-attributed rejections and
//! everything else.

use crate::models::{BrochureFile, RegistrationPayload};
use crate::validation::FieldErrors;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Successful submission response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub data: serde_json::Value,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionFailure {
    /// The backend rejected specific fields
    #[error("{message}")]
    Validation { errors: FieldErrors, message: String },

    /// Network, server or anything else without field attribution
    #[error("{message}")]
    Transport { message: String },
}

impl SubmissionFailure {
    pub fn validation(errors: FieldErrors, message: impl Into<String>) -> Self {
        Self::Validation {
            errors,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. } | Self::Transport { message } => message,
        }
    }
}

/// Receives a complete registration
///
/// `payload` is the JSON-ready body; the brochure, when attached, travels
/// beside it rather than inside it.
#[async_trait]
pub trait RegistrationSubmitter: Send + Sync {
    async fn submit(
        &self,
        payload: RegistrationPayload,
        brochure: Option<BrochureFile>,
    ) -> Result<SubmissionReceipt, SubmissionFailure>;
}
