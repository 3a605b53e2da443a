//! Domain Value Objects
//!
//! Immutable value objects for the sentiment pipeline. Each stage of the
//! pipeline produces value objects consumed by the next stage; nothing here
//! is mutated after creation.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`SentimentScores`] | Four-way confidence scores from the external classifier |
//! | [`RawSentimentLabel`] | Open-set label reported by the external classifier |
//! | [`SentimentLabel`] | Closed five-way label assigned by the classification engine |
//! | [`SentimentResult`] | Finalized per-comment classification |
//! | [`Batch`] | Contiguous slice of the input with absolute index bounds |
//! | [`BatchOutcome`] | Result of one batch attempt |
//! | [`SentimentBreakdown`] | Per-label counts for one analysis run |
//! | [`AnalysisResult`] | Top-level analyzer output |

/// Analysis output value objects
pub mod analysis;
/// Batch scheduling value objects
pub mod batch;
/// Sentiment classification value objects
pub mod sentiment;

// Re-export commonly used value objects
pub use analysis::{AnalysisMetadata, AnalysisResult, CommentSentiment, SentimentBreakdown};
pub use batch::{Batch, BatchOutcome};
pub use sentiment::{RawSentimentLabel, SentimentLabel, SentimentResult, SentimentScores};
