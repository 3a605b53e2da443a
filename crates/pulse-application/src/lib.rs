//! # Comment Pulse Application Layer
//!
//! The sentiment classification pipeline: text preprocessing, question
//! detection, raw-score classification, batch management, retry with
//! backoff, aggregation, and the [`SentimentAnalyzer`] orchestrator that
//! external callers invoke.
//!
//! The pipeline consumes the `SentimentProvider` port from `pulse-domain`;
//! concrete providers are injected by the caller (see `pulse-providers`).
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use pulse_application::{AnalyzerConfig, SentimentAnalyzer};
//! use pulse_providers::sentiment::LexiconSentimentProvider;
//!
//! let provider = Arc::new(LexiconSentimentProvider::new("en".to_string()));
//! let analyzer = SentimentAnalyzer::new(provider, AnalyzerConfig::default());
//! let result = analyzer.analyze_comments(&comments).await;
//! println!("{}", result.overall_sentiment);
//! ```

/// Breakdown counting and summary generation
pub mod aggregation;
/// Pipeline orchestration
pub mod analyzer;
/// Batch partitioning and failure bookkeeping
pub mod batching;
/// Raw-score to final-label classification
pub mod classification;
/// Comment text normalization and truncation
pub mod preprocess;
/// Interrogative-form detection
pub mod question;
/// Generic retry with backoff
pub mod retry;

pub use aggregation::{calculate_breakdown, generate_overall_sentiment};
pub use analyzer::{AnalyzerConfig, SentimentAnalyzer};
pub use batching::BatchManager;
pub use classification::ClassificationEngine;
pub use preprocess::{byte_length, is_empty, preprocess_comment};
pub use question::{QuestionDetector, is_question};
pub use retry::{retry_with_backoff, retry_with_fixed_delay};
