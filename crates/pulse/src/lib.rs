//! # Comment Pulse
//!
//! Sentiment classification and aggregation for batches of short
//! social-media comments: raw four-way scores from an external detection
//! service, deterministic MIXED resolution, a question-detection override,
//! batching with graceful degradation to per-item retries, and aggregation
//! into a breakdown plus a human-readable summary.
//!
//! This crate is the public facade; it re-exports the layered workspace
//! crates for convenience.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use pulse::application::{AnalyzerConfig, SentimentAnalyzer};
//! use pulse::providers::sentiment::LexiconSentimentProvider;
//!
//! # async fn example() {
//! let provider = Arc::new(LexiconSentimentProvider::new("en".to_string()));
//! let analyzer = SentimentAnalyzer::new(provider, AnalyzerConfig::default());
//!
//! let comments = vec!["I love this video".to_string()];
//! let result = analyzer.analyze_comments(&comments).await;
//! println!("{}", result.overall_sentiment);
//! # }
//! ```
//!
//! ## Architecture
//!
//! The workspace follows a layered layout:
//!
//! - `domain` - sentiment value objects, error taxonomy, provider port
//! - `application` - the classification pipeline and analyzer orchestration
//! - `providers` - HTTP and offline implementations of the provider port
//! - `infrastructure` - configuration, logging, and factory wiring

/// Domain layer - core sentiment types and the provider port
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use pulse_domain::*;
}

/// Application layer - the classification pipeline and orchestration
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use pulse_application::*;
}

/// Provider layer - sentiment provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use pulse_providers::*;
}

/// Infrastructure layer - configuration, logging, and factories
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use pulse_infrastructure::*;
}

// Most-used types at the crate root
pub use pulse_application::{AnalyzerConfig, SentimentAnalyzer};
pub use pulse_domain::{
    AnalysisResult, Error, ErrorCategory, Result, SentimentLabel, SentimentProvider,
};
pub use pulse_infrastructure::{AppConfig, ConfigLoader, build_analyzer};
