//! Provider Ports
//!
//! Contracts for the external capabilities the pipeline consumes. The only
//! capability today is sentiment detection.

/// Sentiment detection port
pub mod sentiment;

pub use sentiment::{
    BatchItemError, BatchSentimentDetection, IndexedDetection, SentimentDetection,
    SentimentProvider,
};
