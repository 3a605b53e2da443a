//! Sentiment Analyzer
//!
//! Orchestrates the full pipeline: preprocess, batch, classify, retry on
//! failure, aggregate. This is the component external callers invoke.
//!
//! The analyzer owns no global state: it is constructed from a
//! caller-supplied [`SentimentProvider`] handle, so tests inject fakes and
//! two concurrent analyses share nothing.

use std::sync::Arc;
use std::time::Duration;

use pulse_domain::constants::{
    DEFAULT_BATCH_SIZE, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_MS, MAX_TEXT_BYTES,
};
use pulse_domain::{
    AnalysisMetadata, AnalysisResult, CommentSentiment, Error, Result, SentimentBreakdown,
    SentimentProvider, SentimentResult,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::aggregation::{calculate_breakdown, generate_overall_sentiment};
use crate::batching::BatchManager;
use crate::classification::ClassificationEngine;
use crate::preprocess::{is_empty, preprocess_comment_with_limit};
use crate::retry::retry_with_backoff;

/// Tunable parameters for one analyzer instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Attempts per external call before giving up
    pub max_retries: u32,
    /// Base delay in milliseconds for exponential backoff
    pub retry_delay_ms: u64,
    /// Texts per batch request (the service caps this at 25)
    pub batch_size: usize,
    /// Maximum UTF-8 encoded text size submitted to the service
    pub max_text_bytes: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
            batch_size: DEFAULT_BATCH_SIZE,
            max_text_bytes: MAX_TEXT_BYTES,
        }
    }
}

/// Comment sentiment analysis pipeline.
///
/// Batches are processed one at a time, in order, and individual retries
/// after a batch failure are sequential as well. That throttling is
/// deliberate: the external service enforces per-second request caps, and a
/// failed batch must not turn into a thundering herd of parallel retries.
pub struct SentimentAnalyzer {
    provider: Arc<dyn SentimentProvider>,
    batch_manager: BatchManager,
    engine: ClassificationEngine,
    config: AnalyzerConfig,
}

impl SentimentAnalyzer {
    /// Create an analyzer around a caller-owned provider handle
    pub fn new(provider: Arc<dyn SentimentProvider>, config: AnalyzerConfig) -> Self {
        Self {
            provider,
            batch_manager: BatchManager::new(),
            engine: ClassificationEngine::new(),
            config,
        }
    }

    /// Create an analyzer with the default configuration
    pub fn with_defaults(provider: Arc<dyn SentimentProvider>) -> Self {
        Self::new(provider, AnalyzerConfig::default())
    }

    /// Analyze sentiment for an array of comments.
    ///
    /// Always returns a complete, well-formed result: total failure of the
    /// external service degrades to zero-confidence neutral entries rather
    /// than an error. The output `comments` list is in input order
    /// regardless of which batching or retry paths were taken.
    pub async fn analyze_comments(&self, comments: &[String]) -> AnalysisResult {
        if comments.is_empty() {
            let breakdown = SentimentBreakdown::default();
            return AnalysisResult {
                overall_sentiment: generate_overall_sentiment(&breakdown),
                sentiment_breakdown: breakdown,
                comments: Vec::new(),
                metadata: AnalysisMetadata::default(),
            };
        }

        let preprocessed: Vec<String> = comments
            .iter()
            .map(|comment| preprocess_comment_with_limit(comment, self.config.max_text_bytes))
            .collect();

        let results = self.process_batches(&preprocessed).await;

        let breakdown = calculate_breakdown(&results);
        let overall_sentiment = generate_overall_sentiment(&breakdown);

        let success_count = results
            .iter()
            .filter(|result| result.confidence > 0.0)
            .count();

        AnalysisResult {
            sentiment_breakdown: breakdown,
            overall_sentiment,
            comments: comments
                .iter()
                .zip(&results)
                .map(|(text, result)| CommentSentiment {
                    text: text.clone(),
                    sentiment: result.sentiment,
                    confidence: result.confidence,
                })
                .collect(),
            metadata: AnalysisMetadata {
                success_count,
                failure_count: results.len() - success_count,
                total_count: comments.len(),
            },
        }
    }

    /// Drive all batches sequentially, degrading failed batches to
    /// per-item retries.
    async fn process_batches(&self, comments: &[String]) -> Vec<SentimentResult> {
        let mut results = Vec::with_capacity(comments.len());
        let batches = self
            .batch_manager
            .create_batches(comments, self.config.batch_size);

        for (number, batch) in batches.iter().enumerate() {
            let outcome = self
                .batch_manager
                .process_batch(batch, |items| self.classify_batch(items))
                .await;

            if outcome.success {
                debug!(batch = number + 1, items = batch.len(), "batch classified");
                results.extend(outcome.results);
            } else {
                warn!(
                    batch = number + 1,
                    items = batch.len(),
                    "batch failed, retrying items individually"
                );
                let recovered = self
                    .batch_manager
                    .retry_failed_items(&batch.items, |item| self.classify_single(item))
                    .await;
                results.extend(recovered);
            }
        }

        results
    }

    /// Classify one batch of preprocessed texts through the provider.
    ///
    /// Results are assembled in an index-keyed slot array: empty texts are
    /// resolved locally without an external call, provider results land in
    /// the slot their `index` field names, per-item provider errors become
    /// neutral fallbacks, and any slot the provider left unfilled falls
    /// back to neutral as well.
    async fn classify_batch(&self, texts: Vec<String>) -> Result<Vec<SentimentResult>> {
        let mut slots: Vec<Option<SentimentResult>> = vec![None; texts.len()];
        let mut valid_texts: Vec<String> = Vec::new();
        let mut valid_indices: Vec<usize> = Vec::new();

        for (index, text) in texts.iter().enumerate() {
            if is_empty(text) {
                // Blank input never earns an API round-trip
                slots[index] = Some(SentimentResult::neutral_fallback());
            } else {
                valid_texts.push(text.clone());
                valid_indices.push(index);
            }
        }

        if !valid_texts.is_empty() {
            let detection = retry_with_backoff(
                || self.provider.batch_detect_sentiment(&valid_texts),
                self.config.max_retries,
                Duration::from_millis(self.config.retry_delay_ms),
                Error::is_retryable,
            )
            .await?;

            for item in &detection.results {
                let Some(&slot) = valid_indices.get(item.index) else {
                    warn!(index = item.index, "provider reported an out-of-range result index");
                    continue;
                };
                slots[slot] = Some(self.engine.classify(&item.label, &item.scores, &texts[slot]));
            }

            for item_error in &detection.errors {
                let Some(&slot) = valid_indices.get(item_error.index) else {
                    warn!(
                        index = item_error.index,
                        "provider reported an out-of-range error index"
                    );
                    continue;
                };
                warn!(
                    index = slot,
                    error = %item_error.message,
                    "item failed inside batch, using neutral fallback"
                );
                slots[slot] = Some(SentimentResult::neutral_fallback());
            }
        }

        Ok(slots
            .into_iter()
            .map(|slot| slot.unwrap_or_else(SentimentResult::neutral_fallback))
            .collect())
    }

    /// Classify a single text, used for individual retries after a batch
    /// failure.
    async fn classify_single(&self, text: String) -> Result<SentimentResult> {
        if is_empty(&text) {
            return Ok(SentimentResult::neutral_fallback());
        }

        let detection = retry_with_backoff(
            || self.provider.detect_sentiment(&text),
            self.config.max_retries,
            Duration::from_millis(self.config.retry_delay_ms),
            Error::is_retryable,
        )
        .await?;

        Ok(self
            .engine
            .classify(&detection.label, &detection.scores, &text))
    }
}
