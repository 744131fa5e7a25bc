//! # Registration Configuration
//!
//! Tunable limits behind the step validation rules. Every value has a default
//! that reproduces the stock exhibitor signup behaviour, so configuration files
//! are optional.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use exhibitor_registration::config::ConfigManager;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ConfigManager::load()?;
//! let min = manager.config().validation.password_min_length;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;

use crate::constants::{brochure, validation};
use serde::{Deserialize, Serialize};

pub use error::{ConfigResult, ConfigurationError};
pub use loader::ConfigManager;

/// Root configuration structure mirroring `config/registration.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Account and company field limits
    pub validation: ValidationRules,

    /// Brochure upload limits
    pub brochure: BrochureRules,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ValidationRules {
    pub password_min_length: usize,
    pub password_max_length: usize,
    pub username_min_length: usize,
    pub username_max_length: usize,
    /// Earliest accepted establishment year; the latest is always the current year
    pub year_established_min: i32,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            password_min_length: validation::PASSWORD_MIN_LENGTH,
            password_max_length: validation::PASSWORD_MAX_LENGTH,
            username_min_length: validation::USERNAME_MIN_LENGTH,
            username_max_length: validation::USERNAME_MAX_LENGTH,
            year_established_min: validation::YEAR_ESTABLISHED_MIN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BrochureRules {
    pub max_size_mb: u64,
    /// Extensions with their leading dot, e.g. `.pdf`
    pub allowed_extensions: Vec<String>,
    pub allowed_mime_types: Vec<String>,
}

impl BrochureRules {
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_mb * 1024 * 1024
    }
}

impl Default for BrochureRules {
    fn default() -> Self {
        Self {
            max_size_mb: brochure::MAX_SIZE_MB,
            allowed_extensions: brochure::ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            allowed_mime_types: brochure::ALLOWED_MIME_TYPES
                .iter()
                .map(|mime| mime.to_string())
                .collect(),
        }
    }
}

impl RegistrationConfig {
    /// Reject limits that would make the wizard impossible to complete
    pub fn validate(&self) -> ConfigResult<()> {
        let rules = &self.validation;

        if rules.password_min_length == 0 {
            return Err(ConfigurationError::invalid_value(
                "validation.password_min_length",
                rules.password_min_length,
                "must be at least 1",
            ));
        }
        if rules.password_min_length > rules.password_max_length {
            return Err(ConfigurationError::invalid_value(
                "validation.password_min_length",
                rules.password_min_length,
                format!(
                    "exceeds validation.password_max_length ({})",
                    rules.password_max_length
                ),
            ));
        }
        if rules.username_min_length == 0 {
            return Err(ConfigurationError::invalid_value(
                "validation.username_min_length",
                rules.username_min_length,
                "must be at least 1",
            ));
        }
        if rules.username_min_length > rules.username_max_length {
            return Err(ConfigurationError::invalid_value(
                "validation.username_min_length",
                rules.username_min_length,
                format!(
                    "exceeds validation.username_max_length ({})",
                    rules.username_max_length
                ),
            ));
        }
        if rules.year_established_min <= 0 {
            return Err(ConfigurationError::invalid_value(
                "validation.year_established_min",
                rules.year_established_min,
                "must be a positive year",
            ));
        }

        let brochure = &self.brochure;
        if brochure.max_size_mb == 0 {
            return Err(ConfigurationError::invalid_value(
                "brochure.max_size_mb",
                brochure.max_size_mb,
                "must be at least 1",
            ));
        }
        if brochure.allowed_mime_types.is_empty() {
            return Err(ConfigurationError::invalid_value(
                "brochure.allowed_mime_types",
                "[]",
                "at least one MIME type is required",
            ));
        }
        if let Some(ext) = brochure
            .allowed_extensions
            .iter()
            .find(|ext| !ext.starts_with('.') || ext.len() < 2)
        {
            return Err(ConfigurationError::invalid_value(
                "brochure.allowed_extensions",
                ext,
                "extensions must look like '.pdf'",
            ));
        }

        Ok(())
    }
}
