//! # Comment Pulse - Provider Implementations
//!
//! Implementations of the `SentimentProvider` port defined in
//! `pulse-domain`. Callers construct a provider, wrap it in an `Arc`, and
//! inject it into the analyzer; no provider holds global state.
//!
//! ## Providers
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`sentiment::HttpSentimentProvider`] | Remote HTTP/JSON sentiment service |
//! | [`sentiment::LexiconSentimentProvider`] | Deterministic offline keyword scorer |
//!
//! ## Usage
//!
//! ```ignore
//! use pulse_providers::sentiment::LexiconSentimentProvider;
//!
//! let provider = LexiconSentimentProvider::new("en".to_string());
//! ```

// Re-export pulse-domain types commonly used with providers
pub use pulse_domain::error::{Error, ErrorCategory, Result};
pub use pulse_domain::ports::providers::SentimentProvider;

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Sentiment provider implementations
///
/// Implements the `SentimentProvider` trait against remote and offline
/// backends.
pub mod sentiment;
