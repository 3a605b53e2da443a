//! Configuration types
//!
//! Serde-backed configuration for the analyzer, the sentiment provider, and
//! logging. Loaded by [`ConfigLoader`] from defaults, a TOML file, and
//! `PULSE_*` environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LANGUAGE_CODE, DEFAULT_LOG_LEVEL, DEFAULT_PROVIDER_TIMEOUT_SECS};

/// Configuration loader
pub mod loader;

pub use loader::ConfigLoader;
pub use pulse_application::AnalyzerConfig;

/// Sentiment provider configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider implementation to use ("http" or "lexicon")
    pub provider: String,

    /// API key for the remote provider (required for "http")
    pub api_key: Option<String>,

    /// Custom base URL for the remote provider
    pub base_url: Option<String>,

    /// Language tag passed through with every detection request
    pub language_code: String,

    /// Request timeout for remote calls, in seconds
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: "lexicon".to_string(),
            api_key: None,
            base_url: None,
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
            timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub level: String,

    /// Emit JSON-structured log lines instead of human-readable output
    pub json_format: bool,

    /// Optional log file path; enables daily rotation when set
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Analyzer pipeline tuning
    pub analyzer: AnalyzerConfig,

    /// Sentiment provider selection and credentials
    pub provider: ProviderConfig,

    /// Logging setup
    pub logging: LoggingConfig,
}
