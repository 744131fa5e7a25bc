//! Configuration Loader
//!
//! Environment-aware loading: built-in defaults, then
//! `registration.{toml,yaml,json}` from the config directory, then the
//! environment-specific `registration.{env}.*` override, then
//! `REGISTRATION__SECTION__KEY` environment variables.

use super::error::ConfigResult;
use super::RegistrationConfig;
use crate::logging::get_environment;
use config::{Config, Environment, File};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

const CONFIG_FILE_STEM: &str = "registration";
const ENV_PREFIX: &str = "REGISTRATION";

/// Loaded configuration together with where it came from
#[derive(Debug)]
pub struct ConfigManager {
    config: RegistrationConfig,
    environment: String,
    config_directory: PathBuf,
}

impl ConfigManager {
    /// Load configuration with environment auto-detection
    pub fn load() -> ConfigResult<Arc<ConfigManager>> {
        Self::load_from_directory(None)
    }

    /// Load configuration from a specific directory
    pub fn load_from_directory(config_dir: Option<PathBuf>) -> ConfigResult<Arc<ConfigManager>> {
        let environment = get_environment();
        Self::load_from_directory_with_env(config_dir, &environment)
    }

    /// Load configuration from a specific directory with explicit environment
    pub fn load_from_directory_with_env(
        config_dir: Option<PathBuf>,
        environment: &str,
    ) -> ConfigResult<Arc<ConfigManager>> {
        let config_directory = config_dir.unwrap_or_else(Self::default_config_directory);

        debug!(
            "Loading configuration for environment '{}' from directory: {}",
            environment,
            config_directory.display()
        );

        let config = Self::build(&config_directory, environment)?;
        config.validate()?;

        info!(
            environment = %environment,
            config_directory = %config_directory.display(),
            password_min_length = config.validation.password_min_length,
            username_min_length = config.validation.username_min_length,
            brochure_max_size_mb = config.brochure.max_size_mb,
            "Configuration loaded successfully"
        );

        Ok(Arc::new(ConfigManager {
            config,
            environment: environment.to_string(),
            config_directory,
        }))
    }

    fn build(config_directory: &Path, environment: &str) -> ConfigResult<RegistrationConfig> {
        let base = config_directory.join(CONFIG_FILE_STEM);
        let overlay = config_directory.join(format!("{CONFIG_FILE_STEM}.{environment}"));

        let config = Config::builder()
            .add_source(Config::try_from(&RegistrationConfig::default())?)
            .add_source(File::with_name(&base.to_string_lossy()).required(false))
            .add_source(File::with_name(&overlay.to_string_lossy()).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("brochure.allowed_extensions")
                    .with_list_parse_key("brochure.allowed_mime_types"),
            )
            .build()?
            .try_deserialize::<RegistrationConfig>()?;

        Ok(config)
    }

    fn default_config_directory() -> PathBuf {
        env::var("REGISTRATION_CONFIG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config"))
    }

    pub fn config(&self) -> &RegistrationConfig {
        &self.config
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn config_directory(&self) -> &Path {
        &self.config_directory
    }
}
