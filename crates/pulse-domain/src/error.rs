//! Error handling types
//!
//! The sentiment service boundary classifies every failure into a closed
//! [`ErrorCategory`] so the retry utility and batch manager never have to
//! inspect provider-specific error shapes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Category assigned to an external sentiment service failure
///
/// Produced by an explicit classifier at the provider boundary (HTTP status
/// codes, transport failures). Throttling and service errors are transient
/// and worth retrying; validation and authentication errors are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// Rate limiting or throughput caps (HTTP 429)
    Throttling,
    /// Server-side or transport failure (HTTP 5xx, connection errors)
    Service,
    /// Request rejected as malformed or too large (HTTP 400/413)
    Validation,
    /// Credentials missing, invalid, or unauthorized (HTTP 401/403)
    Authentication,
    /// Anything that does not fit the categories above
    Unknown,
}

/// Main error type for the Comment Pulse workspace
#[derive(Error, Debug)]
pub enum Error {
    /// External sentiment service failure, classified at the boundary
    #[error("Sentiment provider error ({category:?}): {message}")]
    Provider {
        /// Description of the provider failure
        message: String,
        /// Category assigned by the boundary classifier
        category: ErrorCategory,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Provider error creation methods
impl Error {
    /// Create a provider error with an explicit category
    pub fn provider<S: Into<String>>(message: S, category: ErrorCategory) -> Self {
        Self::Provider {
            message: message.into(),
            category,
        }
    }

    /// Create a throttling provider error
    pub fn throttling<S: Into<String>>(message: S) -> Self {
        Self::provider(message, ErrorCategory::Throttling)
    }

    /// Create a service provider error
    pub fn service<S: Into<String>>(message: S) -> Self {
        Self::provider(message, ErrorCategory::Service)
    }

    /// Create a validation provider error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::provider(message, ErrorCategory::Validation)
    }

    /// Create an authentication provider error
    pub fn authentication<S: Into<String>>(message: S) -> Self {
        Self::provider(message, ErrorCategory::Authentication)
    }

    /// Create an uncategorized provider error
    pub fn provider_unknown<S: Into<String>>(message: S) -> Self {
        Self::provider(message, ErrorCategory::Unknown)
    }
}

// Ambient error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// Category of this error; non-provider errors are `Unknown`
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Provider { category, .. } => *category,
            _ => ErrorCategory::Unknown,
        }
    }

    /// Whether this error is worth retrying with backoff
    ///
    /// Throttling and service failures are transient; everything else fails
    /// fast so a misconfigured request is never hammered against the service.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Throttling | ErrorCategory::Service
        )
    }
}
