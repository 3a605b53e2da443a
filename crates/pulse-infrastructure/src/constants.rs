//! Infrastructure constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "PULSE";

/// Environment variable controlling the log filter
pub const LOG_FILTER_ENV: &str = "PULSE_LOG";

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "comment-pulse.toml";

/// Default log level when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default request timeout for remote providers, in seconds
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

/// Default language tag passed to providers
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// Known sentiment provider names accepted in configuration
pub const KNOWN_PROVIDERS: &[&str] = &["http", "lexicon"];
