//! Sentiment Classification Engine
//!
//! Maps a raw four-way score from the external classifier plus the question
//! detector's verdict into one of the five final labels. Total over its
//! input domain: unrecognized labels resolve to a neutral fallback instead
//! of failing, so one garbage response can never poison a batch.

use pulse_domain::constants::BALANCE_THRESHOLD;
use pulse_domain::{RawSentimentLabel, SentimentLabel, SentimentResult, SentimentScores};
use tracing::debug;

use crate::question::QuestionDetector;

/// Classification rules:
///
/// 1. Direct mapping for POSITIVE, NEGATIVE, NEUTRAL
/// 2. MIXED resolved by highest score, or neutral when the scores are balanced
/// 3. Unrecognized labels fall back to neutral at zero confidence
/// 4. Question override applied last, keeping the confidence from steps 1-3
#[derive(Debug, Clone)]
pub struct ClassificationEngine {
    detector: QuestionDetector,
    balance_threshold: f64,
}

impl Default for ClassificationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassificationEngine {
    /// Create an engine with the standard 10-point balance threshold
    pub fn new() -> Self {
        Self {
            detector: QuestionDetector::new(),
            balance_threshold: BALANCE_THRESHOLD,
        }
    }

    /// Classify one text from its raw detection outcome.
    ///
    /// The returned result always carries the full four-way `scores`
    /// unchanged so downstream consumers can audit the decision.
    pub fn classify(
        &self,
        label: &RawSentimentLabel,
        scores: &SentimentScores,
        text: &str,
    ) -> SentimentResult {
        let (mut sentiment, confidence) = match label {
            RawSentimentLabel::Positive => (SentimentLabel::Positive, scores.positive),
            RawSentimentLabel::Negative => (SentimentLabel::Negative, scores.negative),
            RawSentimentLabel::Neutral => (SentimentLabel::Neutral, scores.neutral),
            RawSentimentLabel::Mixed => self.resolve_mixed(scores),
            RawSentimentLabel::Other(value) => {
                debug!(label = %value, "unrecognized sentiment label, using neutral fallback");
                (SentimentLabel::Neutral, 0.0)
            }
        };

        // Interrogative form wins over score-derived sentiment; the
        // confidence from the score mapping is retained, not recomputed.
        if self.detector.is_question(text) {
            sentiment = SentimentLabel::Question;
        }

        SentimentResult {
            sentiment,
            confidence,
            scores: *scores,
        }
    }

    /// Resolve a MIXED label from the three comparable scores.
    ///
    /// The mixed score itself is excluded from the comparison. Balanced
    /// scores (spread within the threshold) model genuine ambivalence and
    /// resolve to neutral; otherwise the highest score wins, positive
    /// checked before negative before neutral on exact ties.
    #[allow(clippy::float_cmp)]
    fn resolve_mixed(&self, scores: &SentimentScores) -> (SentimentLabel, f64) {
        let max = scores.positive.max(scores.negative).max(scores.neutral);
        let min = scores.positive.min(scores.negative).min(scores.neutral);

        if max - min <= self.balance_threshold {
            return (SentimentLabel::Neutral, scores.neutral);
        }

        if max == scores.positive {
            (SentimentLabel::Positive, scores.positive)
        } else if max == scores.negative {
            (SentimentLabel::Negative, scores.negative)
        } else {
            (SentimentLabel::Neutral, scores.neutral)
        }
    }
}
