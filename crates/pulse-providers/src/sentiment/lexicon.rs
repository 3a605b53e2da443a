//! Lexicon sentiment provider for testing and development
//!
//! Scores texts against small positive/negative keyword lists. Fully
//! deterministic and offline - always works without a remote service, which
//! makes it the provider of choice for unit tests and local development.

use async_trait::async_trait;

use pulse_domain::constants::SENTIMENT_BATCH_MAX_ITEMS;
use pulse_domain::error::{Error, Result};
use pulse_domain::ports::providers::{
    BatchSentimentDetection, IndexedDetection, SentimentDetection, SentimentProvider,
};
use pulse_domain::value_objects::{RawSentimentLabel, SentimentScores};

use crate::constants::{
    LEXICON_BASE_CONFIDENCE, LEXICON_CONFIDENCE_STEP, LEXICON_MAX_CONFIDENCE,
};

/// Keywords treated as positive signals
const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "love", "loved", "awesome", "amazing", "excellent", "best", "helpful",
    "fantastic", "perfect", "thanks", "thank", "brilliant", "wonderful",
];

/// Keywords treated as negative signals
const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "hate", "hated", "awful", "worst", "boring", "useless", "wrong",
    "horrible", "waste", "disappointing", "poor", "broken",
];

/// Lexicon sentiment provider
///
/// Counts positive and negative keyword hits in the lower-cased text and
/// reports the same label/scores shape a remote service would: both
/// polarities present yields MIXED, one polarity yields that label with a
/// hit-count-scaled confidence, no hits yields NEUTRAL.
///
/// # Example
///
/// ```rust
/// use pulse_providers::sentiment::LexiconSentimentProvider;
/// use pulse_providers::SentimentProvider;
///
/// let provider = LexiconSentimentProvider::new("en".to_string());
/// assert_eq!(provider.provider_name(), "lexicon");
/// ```
pub struct LexiconSentimentProvider {
    language_code: String,
}

impl LexiconSentimentProvider {
    /// Create a new lexicon provider
    pub fn new(language_code: String) -> Self {
        Self { language_code }
    }

    /// Score one text against the keyword lists
    fn score(text: &str) -> (RawSentimentLabel, SentimentScores) {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();

        let positive_hits = tokens
            .iter()
            .filter(|t| POSITIVE_WORDS.contains(t))
            .count();
        let negative_hits = tokens
            .iter()
            .filter(|t| NEGATIVE_WORDS.contains(t))
            .count();

        match (positive_hits, negative_hits) {
            (0, 0) => (
                RawSentimentLabel::Neutral,
                SentimentScores {
                    positive: 0.05,
                    negative: 0.05,
                    neutral: 0.9,
                    mixed: 0.0,
                },
            ),
            (p, 0) => {
                let confidence = Self::confidence(p);
                (
                    RawSentimentLabel::Positive,
                    SentimentScores {
                        positive: confidence,
                        negative: (1.0 - confidence) * 0.2,
                        neutral: (1.0 - confidence) * 0.8,
                        mixed: 0.0,
                    },
                )
            }
            (0, n) => {
                let confidence = Self::confidence(n);
                (
                    RawSentimentLabel::Negative,
                    SentimentScores {
                        positive: (1.0 - confidence) * 0.2,
                        negative: confidence,
                        neutral: (1.0 - confidence) * 0.8,
                        mixed: 0.0,
                    },
                )
            }
            (p, n) => (
                RawSentimentLabel::Mixed,
                SentimentScores {
                    positive: Self::confidence(p),
                    negative: Self::confidence(n),
                    neutral: 0.1,
                    mixed: 0.6,
                },
            ),
        }
    }

    /// Hit-count-scaled confidence, capped
    fn confidence(hits: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let extra = (hits.saturating_sub(1)) as f64 * LEXICON_CONFIDENCE_STEP;
        (LEXICON_BASE_CONFIDENCE + extra).min(LEXICON_MAX_CONFIDENCE)
    }
}

#[async_trait]
impl SentimentProvider for LexiconSentimentProvider {
    async fn detect_sentiment(&self, text: &str) -> Result<SentimentDetection> {
        let (label, scores) = Self::score(text);
        Ok(SentimentDetection { label, scores })
    }

    async fn batch_detect_sentiment(&self, texts: &[String]) -> Result<BatchSentimentDetection> {
        if texts.len() > SENTIMENT_BATCH_MAX_ITEMS {
            return Err(Error::validation(format!(
                "batch size cannot exceed {SENTIMENT_BATCH_MAX_ITEMS} items, got {}",
                texts.len()
            )));
        }

        let results = texts
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let (label, scores) = Self::score(text);
                IndexedDetection {
                    index,
                    label,
                    scores,
                }
            })
            .collect();

        Ok(BatchSentimentDetection {
            results,
            errors: Vec::new(),
        })
    }

    fn provider_name(&self) -> &str {
        "lexicon"
    }

    fn language_code(&self) -> &str {
        &self.language_code
    }
}
