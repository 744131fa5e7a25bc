//! Configuration Tests
//!
//! Layered loading of validation limits and their effect on the wizard.

mod common;

use common::*;
use exhibitor_registration::config::{ConfigManager, ConfigurationError};
use exhibitor_registration::models::{AccountInfoPatch, Field};
use exhibitor_registration::{RegistrationConfig, RegistrationWizard, StepValidator};
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join(name), contents).expect("write config file");
}

#[test]
fn defaults_apply_without_files() {
    let dir = TempDir::new().unwrap();
    let manager =
        ConfigManager::load_from_directory_with_env(Some(dir.path().to_path_buf()), "test").unwrap();

    assert_eq!(manager.environment(), "test");
    assert_eq!(manager.config().validation.username_min_length, 3);
    assert_eq!(
        manager.config().brochure.allowed_extensions,
        vec![".pdf", ".doc", ".docx"]
    );
}

#[test]
fn environment_file_overrides_base_file() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "registration.toml",
        "[validation]\nusername_min_length = 4\nyear_established_min = 1900\n",
    );
    write(
        &dir,
        "registration.production.toml",
        "[validation]\nusername_min_length = 5\n",
    );

    let manager =
        ConfigManager::load_from_directory_with_env(Some(dir.path().to_path_buf()), "production")
            .unwrap();

    assert_eq!(manager.config().validation.username_min_length, 5);
    assert_eq!(manager.config().validation.year_established_min, 1900);
    assert_eq!(manager.config().validation.password_min_length, 8);
}

#[test]
fn inconsistent_limits_are_rejected() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "registration.toml",
        "[validation]\nusername_min_length = 60\nusername_max_length = 50\n",
    );

    let err = ConfigManager::load_from_directory_with_env(Some(dir.path().to_path_buf()), "test")
        .unwrap_err();
    assert!(matches!(err, ConfigurationError::InvalidValue { .. }));
}

#[test]
fn environment_variables_win_over_files() {
    let dir = TempDir::new().unwrap();
    write(&dir, "registration.toml", "[validation]\npassword_max_length = 64\n");

    std::env::set_var("REGISTRATION__VALIDATION__PASSWORD_MAX_LENGTH", "72");
    let loaded =
        ConfigManager::load_from_directory_with_env(Some(dir.path().to_path_buf()), "test");
    std::env::remove_var("REGISTRATION__VALIDATION__PASSWORD_MAX_LENGTH");

    assert_eq!(loaded.unwrap().config().validation.password_max_length, 72);
}

#[test]
fn configured_limits_drive_validation_messages() {
    let mut config = RegistrationConfig::default();
    config.validation.username_min_length = 6;
    config.validation.year_established_min = 1950;

    let validator = StepValidator::new(&config).with_current_year(2025);
    let wizard = RegistrationWizard::with_validator(validator, ScriptedSubmitter::succeeding());
    wizard.update_account_info(AccountInfoBuilder::new().build_patch());
    wizard.update_account_info(AccountInfoPatch {
        username: Some("mcruz".to_string()),
        ..Default::default()
    });

    assert!(!wizard.go_next());
    assert_eq!(
        wizard.errors().first_message(Field::Username),
        Some("Username must be at least 6 characters")
    );
    assert_eq!(
        wizard.validator().year_range_message(),
        "Year must be between 1950 and 2025"
    );
}

#[test]
fn configured_maximum_lengths_are_enforced() {
    let mut config = RegistrationConfig::default();
    config.validation.password_max_length = 10;
    config.validation.username_max_length = 8;
    config.validate().unwrap();

    let validator = StepValidator::new(&config).with_current_year(2025);
    let account = AccountInfoBuilder::new()
        .with_username("maria_cruz")
        .with_passwords("Secret12345", "Secret12345")
        .build();
    let result = validator.validate_account(&account);

    assert_eq!(
        result.errors.first_message(Field::Username),
        Some("Username must be at most 8 characters")
    );
    assert_eq!(
        result.errors.first_message(Field::Password),
        Some("Password must be at most 10 characters")
    );
}
