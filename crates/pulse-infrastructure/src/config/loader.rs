//! Configuration loader
//!
//! Merges configuration from defaults, an optional TOML file, and
//! environment variables, then validates the result before anything is
//! constructed from it.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use pulse_domain::constants::SENTIMENT_BATCH_MAX_ITEMS;
use pulse_domain::error::{Error, Result};
use tracing::{info, warn};

use super::AppConfig;
use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_FILENAME, KNOWN_PROVIDERS};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources.
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables with the prefix, double-underscore nested
    ///    (e.g. `PULSE_PROVIDER__API_KEY`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                info!("Configuration loaded from {}", config_path.display());
            } else {
                warn!("Configuration file not found: {}", config_path.display());
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            info!("Configuration loaded from {}", default_path.display());
        }

        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("__"));

        let app_config: AppConfig = figment
            .extract()
            .map_err(|e| Error::config_with_source("failed to extract configuration", e))?;

        self.validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Save a configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config)
            .map_err(|e| Error::config_with_source("failed to serialize config to TOML", e))?;
        std::fs::write(path.as_ref(), toml_string)?;
        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Look for the default config file in the working directory
    fn find_default_config_path() -> Option<PathBuf> {
        let candidate = env::current_dir().ok()?.join(DEFAULT_CONFIG_FILENAME);
        candidate.exists().then_some(candidate)
    }

    /// Validate a merged configuration
    fn validate_config(&self, config: &AppConfig) -> Result<()> {
        let analyzer = &config.analyzer;
        if analyzer.batch_size == 0 || analyzer.batch_size > SENTIMENT_BATCH_MAX_ITEMS {
            return Err(Error::config(format!(
                "analyzer.batch_size must be between 1 and {SENTIMENT_BATCH_MAX_ITEMS}, got {}",
                analyzer.batch_size
            )));
        }
        if analyzer.max_retries == 0 {
            return Err(Error::config("analyzer.max_retries must be at least 1"));
        }
        if analyzer.max_text_bytes == 0 {
            return Err(Error::config("analyzer.max_text_bytes must be positive"));
        }

        let provider = &config.provider;
        if !KNOWN_PROVIDERS.contains(&provider.provider.as_str()) {
            return Err(Error::config(format!(
                "unknown sentiment provider '{}', expected one of: {}",
                provider.provider,
                KNOWN_PROVIDERS.join(", ")
            )));
        }
        if provider.provider == "http"
            && provider.api_key.as_deref().is_none_or(|key| key.trim().is_empty())
        {
            return Err(Error::config(
                "provider.api_key is required for the http sentiment provider",
            ));
        }

        crate::logging::parse_log_level(&config.logging.level)?;

        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
