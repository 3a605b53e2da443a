//! Sentiment Classification Value Objects
//!
//! Types describing what the external classifier reported for a text and
//! what the classification engine finalized it into.

use serde::{Deserialize, Serialize};

/// Value Object: Four-way Sentiment Scores
///
/// Confidence scores reported by the external sentiment classifier. Each
/// value lies in `[0, 1]`; the four values are not required to sum to 1
/// exactly. Immutable once obtained from the classifier.
///
/// ## Example
///
/// ```rust
/// use pulse_domain::SentimentScores;
///
/// let scores = SentimentScores {
///     positive: 0.92,
///     negative: 0.03,
///     neutral: 0.04,
///     mixed: 0.01,
/// };
/// assert!(scores.positive > scores.negative);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScores {
    /// Confidence that the text is positive
    pub positive: f64,
    /// Confidence that the text is negative
    pub negative: f64,
    /// Confidence that the text is neutral
    pub neutral: f64,
    /// Confidence that the text mixes positive and negative signals
    pub mixed: f64,
}

impl SentimentScores {
    /// Scores for the canonical neutral fallback: all certainty on neutral
    pub fn neutral_certain() -> Self {
        Self {
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
            mixed: 0.0,
        }
    }
}

/// Value Object: Raw label from the external classifier
///
/// The external service's label set is not under our control, so this type
/// stays open: anything outside the four documented values is carried in
/// [`RawSentimentLabel::Other`] and resolved to a neutral fallback by the
/// classification engine rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawSentimentLabel {
    /// Classifier reported POSITIVE
    Positive,
    /// Classifier reported NEGATIVE
    Negative,
    /// Classifier reported NEUTRAL
    Neutral,
    /// Classifier reported MIXED
    Mixed,
    /// Unrecognized label, preserved verbatim
    Other(String),
}

impl From<&str> for RawSentimentLabel {
    fn from(value: &str) -> Self {
        match value {
            "POSITIVE" => Self::Positive,
            "NEGATIVE" => Self::Negative,
            "NEUTRAL" => Self::Neutral,
            "MIXED" => Self::Mixed,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Value Object: Final sentiment label
///
/// The closed five-way label set produced by the classification engine.
/// `Confusion` is reserved: it exists in the set and is counted by the
/// aggregator, but no classification rule currently produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Clearly positive comment
    Positive,
    /// Clearly negative comment
    Negative,
    /// Neutral or unresolved comment
    Neutral,
    /// Interrogative comment, regardless of score
    Question,
    /// Reserved label with no current producer
    Confusion,
}

impl SentimentLabel {
    /// Lowercase string form used in API payloads and summaries
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Question => "question",
            Self::Confusion => "confusion",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value Object: Finalized per-comment classification
///
/// Created once per input text by the classification engine and never
/// mutated afterwards. The full four-way scores are always carried so
/// downstream consumers can audit the decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Final label after MIXED resolution and the question override
    pub sentiment: SentimentLabel,
    /// Confidence of the final label (0.0 for fallback results)
    pub confidence: f64,
    /// Unmodified scores from the external classifier
    pub scores: SentimentScores,
}

impl SentimentResult {
    /// The canonical zero-confidence neutral result
    ///
    /// Substituted whenever classification cannot be completed for an item:
    /// empty input, a per-item provider error, or an exhausted retry.
    pub fn neutral_fallback() -> Self {
        Self {
            sentiment: SentimentLabel::Neutral,
            confidence: 0.0,
            scores: SentimentScores::neutral_certain(),
        }
    }
}
