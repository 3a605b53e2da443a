//! End-to-end tests for the analyzer orchestration
//!
//! These tests drive the full pipeline against scripted in-memory providers
//! so every degradation path is exercised without a network.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pulse_application::{AnalyzerConfig, SentimentAnalyzer};
use pulse_domain::{
    BatchItemError, BatchSentimentDetection, Error, IndexedDetection, RawSentimentLabel, Result,
    SentimentDetection, SentimentLabel, SentimentProvider, SentimentScores,
};

/// Scripted provider: labels texts by keyword, counts calls, and fails on
/// demand at either granularity.
#[derive(Default)]
struct ScriptedProvider {
    batch_calls: AtomicUsize,
    single_calls: AtomicUsize,
    fail_batch_calls: bool,
    fail_single_calls: bool,
}

impl ScriptedProvider {
    fn new() -> Self {
        Self::default()
    }

    fn failing_batches() -> Self {
        Self {
            fail_batch_calls: true,
            ..Self::default()
        }
    }

    fn failing_everything() -> Self {
        Self {
            fail_batch_calls: true,
            fail_single_calls: true,
            ..Self::default()
        }
    }

    fn detect(text: &str) -> (RawSentimentLabel, SentimentScores) {
        if text.contains("love") {
            (
                RawSentimentLabel::Positive,
                SentimentScores {
                    positive: 0.9,
                    negative: 0.02,
                    neutral: 0.08,
                    mixed: 0.0,
                },
            )
        } else if text.contains("hate") {
            (
                RawSentimentLabel::Negative,
                SentimentScores {
                    positive: 0.03,
                    negative: 0.88,
                    neutral: 0.09,
                    mixed: 0.0,
                },
            )
        } else {
            (
                RawSentimentLabel::Neutral,
                SentimentScores {
                    positive: 0.1,
                    negative: 0.1,
                    neutral: 0.8,
                    mixed: 0.0,
                },
            )
        }
    }
}

#[async_trait]
impl SentimentProvider for ScriptedProvider {
    async fn detect_sentiment(&self, text: &str) -> Result<SentimentDetection> {
        self.single_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_single_calls {
            // Validation errors are non-retryable, so tests stay sleep-free
            return Err(Error::validation("scripted single-call failure"));
        }
        let (label, scores) = Self::detect(text);
        Ok(SentimentDetection { label, scores })
    }

    async fn batch_detect_sentiment(&self, texts: &[String]) -> Result<BatchSentimentDetection> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_batch_calls {
            return Err(Error::validation("scripted batch failure"));
        }
        let results = texts
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let (label, scores) = Self::detect(text);
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
        "scripted"
    }
}

fn comments(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| (*t).to_string()).collect()
}

#[tokio::test]
async fn test_empty_input_short_circuits_without_external_calls() {
    let provider = Arc::new(ScriptedProvider::new());
    let analyzer = SentimentAnalyzer::with_defaults(provider.clone());

    let result = analyzer.analyze_comments(&[]).await;

    assert_eq!(result.sentiment_breakdown.total(), 0);
    assert_eq!(result.overall_sentiment, "No comments to analyze");
    assert!(result.comments.is_empty());
    assert_eq!(result.metadata.total_count, 0);
    assert_eq!(result.metadata.success_count, 0);
    assert_eq!(result.metadata.failure_count, 0);

    assert_eq!(provider.batch_calls.load(Ordering::SeqCst), 0);
    assert_eq!(provider.single_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_happy_path_classifies_and_preserves_order() {
    let provider = Arc::new(ScriptedProvider::new());
    let analyzer = SentimentAnalyzer::with_defaults(provider.clone());

    let input = comments(&[
        "I love this video",
        "I hate everything about it",
        "How does this even work",
        "just a plain remark",
    ]);
    let result = analyzer.analyze_comments(&input).await;

    assert_eq!(result.comments.len(), 4);
    for (comment, original) in result.comments.iter().zip(&input) {
        assert_eq!(&comment.text, original);
    }

    assert_eq!(result.comments[0].sentiment, SentimentLabel::Positive);
    assert_eq!(result.comments[1].sentiment, SentimentLabel::Negative);
    assert_eq!(result.comments[2].sentiment, SentimentLabel::Question);
    assert_eq!(result.comments[3].sentiment, SentimentLabel::Neutral);

    assert_eq!(result.sentiment_breakdown.positive, 1);
    assert_eq!(result.sentiment_breakdown.negative, 1);
    assert_eq!(result.sentiment_breakdown.question, 1);
    assert_eq!(result.sentiment_breakdown.neutral, 1);
    assert_eq!(result.sentiment_breakdown.total(), 4);

    assert_eq!(result.metadata.total_count, 4);
    assert_eq!(result.metadata.success_count, 4);
    assert_eq!(result.metadata.failure_count, 0);

    assert_eq!(provider.batch_calls.load(Ordering::SeqCst), 1);
    assert_eq!(provider.single_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_blank_comments_skip_the_external_call() {
    let provider = Arc::new(ScriptedProvider::new());
    let analyzer = SentimentAnalyzer::with_defaults(provider.clone());

    let input = comments(&["   ", "I love it", ""]);
    let result = analyzer.analyze_comments(&input).await;

    assert_eq!(result.comments[0].sentiment, SentimentLabel::Neutral);
    assert_eq!(result.comments[0].confidence, 0.0);
    assert_eq!(result.comments[1].sentiment, SentimentLabel::Positive);
    assert_eq!(result.comments[2].sentiment, SentimentLabel::Neutral);

    // Blank entries count as failures in the metadata
    assert_eq!(result.metadata.success_count, 1);
    assert_eq!(result.metadata.failure_count, 2);
}

#[tokio::test]
async fn test_all_blank_input_makes_no_external_calls() {
    let provider = Arc::new(ScriptedProvider::new());
    let analyzer = SentimentAnalyzer::with_defaults(provider.clone());

    let result = analyzer.analyze_comments(&comments(&["  ", "\t", ""])).await;

    assert_eq!(result.sentiment_breakdown.neutral, 3);
    assert_eq!(provider.batch_calls.load(Ordering::SeqCst), 0);
    assert_eq!(provider.single_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_batch_size_controls_number_of_batch_calls() {
    let provider = Arc::new(ScriptedProvider::new());
    let analyzer = SentimentAnalyzer::new(
        provider.clone(),
        AnalyzerConfig {
            batch_size: 2,
            ..AnalyzerConfig::default()
        },
    );

    let input = comments(&["one", "two", "three", "four", "five"]);
    let result = analyzer.analyze_comments(&input).await;

    assert_eq!(result.comments.len(), 5);
    assert_eq!(provider.batch_calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_batch_failure_degrades_to_individual_retries() {
    let provider = Arc::new(ScriptedProvider::failing_batches());
    let analyzer = SentimentAnalyzer::with_defaults(provider.clone());

    let input = comments(&["I love this", "I hate this"]);
    let result = analyzer.analyze_comments(&input).await;

    assert_eq!(result.comments[0].sentiment, SentimentLabel::Positive);
    assert_eq!(result.comments[1].sentiment, SentimentLabel::Negative);
    assert_eq!(result.metadata.success_count, 2);

    assert_eq!(provider.batch_calls.load(Ordering::SeqCst), 1);
    assert_eq!(provider.single_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_total_provider_failure_degrades_to_all_neutral() {
    let provider = Arc::new(ScriptedProvider::failing_everything());
    let analyzer = SentimentAnalyzer::with_defaults(provider.clone());

    let input = comments(&["I love this", "I hate this", "whatever"]);
    let result = analyzer.analyze_comments(&input).await;

    assert_eq!(result.comments.len(), 3);
    for comment in &result.comments {
        assert_eq!(comment.sentiment, SentimentLabel::Neutral);
        assert_eq!(comment.confidence, 0.0);
    }
    assert_eq!(result.sentiment_breakdown.neutral, 3);
    assert_eq!(result.metadata.success_count, 0);
    assert_eq!(result.metadata.failure_count, 3);
}

/// Provider whose first batch call fails and whose later calls succeed.
#[derive(Default)]
struct FlakyFirstBatchProvider {
    inner: ScriptedProvider,
}

#[async_trait]
impl SentimentProvider for FlakyFirstBatchProvider {
    async fn detect_sentiment(&self, text: &str) -> Result<SentimentDetection> {
        self.inner.detect_sentiment(text).await
    }

    async fn batch_detect_sentiment(&self, texts: &[String]) -> Result<BatchSentimentDetection> {
        if self.inner.batch_calls.fetch_add(1, Ordering::SeqCst) == 0 {
            return Err(Error::validation("first batch always fails"));
        }
        let results = texts
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let (label, scores) = ScriptedProvider::detect(text);
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
        "flaky-first-batch"
    }
}

#[tokio::test]
async fn test_order_preserved_across_mixed_batch_paths() {
    let provider = Arc::new(FlakyFirstBatchProvider::default());
    let analyzer = SentimentAnalyzer::new(
        provider.clone(),
        AnalyzerConfig {
            batch_size: 2,
            ..AnalyzerConfig::default()
        },
    );

    // First batch degrades to single-item retries, second batch succeeds
    let input = comments(&["I love a", "I hate b", "I love c", "I hate d"]);
    let result = analyzer.analyze_comments(&input).await;

    for (comment, original) in result.comments.iter().zip(&input) {
        assert_eq!(&comment.text, original);
    }
    assert_eq!(result.comments[0].sentiment, SentimentLabel::Positive);
    assert_eq!(result.comments[1].sentiment, SentimentLabel::Negative);
    assert_eq!(result.comments[2].sentiment, SentimentLabel::Positive);
    assert_eq!(result.comments[3].sentiment, SentimentLabel::Negative);

    assert_eq!(provider.inner.single_calls.load(Ordering::SeqCst), 2);
}

/// Provider whose batch response reports one item as individually errored.
struct PartialErrorProvider;

#[async_trait]
impl SentimentProvider for PartialErrorProvider {
    async fn batch_detect_sentiment(&self, texts: &[String]) -> Result<BatchSentimentDetection> {
        let results = texts
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != 1)
            .map(|(index, text)| {
                let (label, scores) = ScriptedProvider::detect(text);
                IndexedDetection {
                    index,
                    label,
                    scores,
                }
            })
            .collect();
        Ok(BatchSentimentDetection {
            results,
            errors: vec![BatchItemError {
                index: 1,
                message: "unsupported characters".to_string(),
            }],
        })
    }

    fn provider_name(&self) -> &str {
        "partial-error"
    }
}

#[tokio::test]
async fn test_per_item_error_gets_fallback_without_affecting_siblings() {
    let analyzer = SentimentAnalyzer::with_defaults(Arc::new(PartialErrorProvider));

    let input = comments(&["I love this", "I hate this", "I love that too"]);
    let result = analyzer.analyze_comments(&input).await;

    assert_eq!(result.comments[0].sentiment, SentimentLabel::Positive);
    assert_eq!(result.comments[1].sentiment, SentimentLabel::Neutral);
    assert_eq!(result.comments[1].confidence, 0.0);
    assert_eq!(result.comments[2].sentiment, SentimentLabel::Positive);

    assert_eq!(result.metadata.success_count, 2);
    assert_eq!(result.metadata.failure_count, 1);
}

/// Provider that silently omits an item from both lists.
struct DroppingProvider;

#[async_trait]
impl SentimentProvider for DroppingProvider {
    async fn batch_detect_sentiment(&self, texts: &[String]) -> Result<BatchSentimentDetection> {
        let results = texts
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, text)| {
                let (label, scores) = ScriptedProvider::detect(text);
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
        "dropping"
    }
}

#[tokio::test]
async fn test_unfilled_slots_fall_back_to_neutral() {
    let analyzer = SentimentAnalyzer::with_defaults(Arc::new(DroppingProvider));

    let input = comments(&["I love this", "I hate this"]);
    let result = analyzer.analyze_comments(&input).await;

    assert_eq!(result.comments.len(), 2);
    assert_eq!(result.comments[0].sentiment, SentimentLabel::Neutral);
    assert_eq!(result.comments[0].confidence, 0.0);
    assert_eq!(result.comments[1].sentiment, SentimentLabel::Negative);
}
