//! Error types for the registration crate.
//!

use crate::config::ConfigurationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Country lookup failed: {0}")]
    CountryLookup(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<ConfigurationError> for RegistrationError {
    fn from(err: ConfigurationError) -> Self {
        RegistrationError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RegistrationError>;
