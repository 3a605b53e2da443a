//! # Comment Pulse Domain Layer
//!
//! Core types for the comment sentiment analysis pipeline: sentiment value
//! objects, the batch bookkeeping structures, the analysis output types, the
//! error taxonomy, and the `SentimentProvider` port implemented by external
//! sentiment services.
//!
//! This crate is a pure library with no I/O. Providers and orchestration live
//! in the `pulse-providers` and `pulse-application` crates.

/// Domain constants shared across the pipeline
pub mod constants;
/// Error taxonomy and result alias
pub mod error;
/// Port traits implemented by external collaborators
pub mod ports;
/// Immutable domain value objects
pub mod value_objects;

// Re-export commonly used items at the crate root
pub use error::{Error, ErrorCategory, Result};
pub use ports::{
    BatchItemError, BatchSentimentDetection, IndexedDetection, SentimentDetection,
    SentimentProvider,
};
pub use value_objects::{
    AnalysisMetadata, AnalysisResult, Batch, BatchOutcome, CommentSentiment, RawSentimentLabel,
    SentimentBreakdown, SentimentLabel, SentimentResult, SentimentScores,
};
