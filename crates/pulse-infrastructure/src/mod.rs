//! # Comment Pulse Infrastructure Layer
//!
//! Cross-cutting technical concerns: configuration loading, logging
//! initialization, and the explicit factory that wires a configured
//! sentiment provider into an analyzer.
//!
//! Construction is deliberately factory-based rather than registry-based:
//! the caller owns every handle it builds here, and tests can bypass this
//! crate entirely by constructing providers directly.

/// Configuration types and loader
pub mod config;
/// Infrastructure constants
pub mod constants;
/// Provider and analyzer factories
pub mod factory;
/// Structured logging with tracing
pub mod logging;

pub use config::{AppConfig, ConfigLoader, LoggingConfig, ProviderConfig};
pub use factory::{build_analyzer, create_sentiment_provider};
pub use logging::init_logging;
