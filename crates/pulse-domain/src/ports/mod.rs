//! Domain Ports
//!
//! Trait contracts implemented by external collaborators. The pipeline core
//! depends on these abstractions only; concrete implementations live in the
//! `pulse-providers` crate and are injected by the caller.

/// Provider ports for external services
pub mod providers;

pub use providers::{
    BatchItemError, BatchSentimentDetection, IndexedDetection, SentimentDetection,
    SentimentProvider,
};
