//! Analysis Output Value Objects
//!
//! Aggregate types returned by one analysis run: the per-label breakdown,
//! per-comment labels, and run metadata.

use serde::{Deserialize, Serialize};

use super::sentiment::SentimentLabel;

/// Value Object: Per-label counts for one analysis run
///
/// ## Business Rules
///
/// - The sum of all five counts equals the number of classified comments
/// - Created once per run by the aggregator and never mutated afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    /// Count of positive comments
    pub positive: usize,
    /// Count of negative comments
    pub negative: usize,
    /// Count of neutral comments
    pub neutral: usize,
    /// Count of question comments
    pub question: usize,
    /// Count of confusion comments (reserved label)
    pub confusion: usize,
}

impl SentimentBreakdown {
    /// Total number of classified comments
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral + self.question + self.confusion
    }

    /// Increment the counter for one label
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Question => self.question += 1,
            SentimentLabel::Confusion => self.confusion += 1,
        }
    }
}

/// Value Object: One comment with its final label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentSentiment {
    /// Original comment text as supplied by the caller
    pub text: String,
    /// Final sentiment label
    pub sentiment: SentimentLabel,
    /// Confidence of the final label
    pub confidence: f64,
}

/// Value Object: Run metadata
///
/// `success_count` counts results with confidence above zero; a run degraded
/// by provider trouble shows up here as a high `failure_count`, not as an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Results classified with non-zero confidence
    pub success_count: usize,
    /// Results that fell back to the zero-confidence neutral default
    pub failure_count: usize,
    /// Total number of input comments
    pub total_count: usize,
}

/// Value Object: Top-level analyzer output
///
/// Returned to the caller and not retained internally. The `comments` list
/// is in the same order as the analyzer's input regardless of which
/// batching or retry paths produced each entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Per-label counts
    pub sentiment_breakdown: SentimentBreakdown,
    /// Human-readable summary of the overall sentiment
    pub overall_sentiment: String,
    /// Per-comment labels, in input order
    pub comments: Vec<CommentSentiment>,
    /// Run metadata
    pub metadata: AnalysisMetadata,
}
