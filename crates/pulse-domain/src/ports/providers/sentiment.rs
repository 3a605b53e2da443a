//! Sentiment Detection Port
//!
//! Contract for external sentiment services. The analyzer drives this port
//! in bounded batches; whole-request failures surface as `Err`, per-item
//! failures ride inside [`BatchSentimentDetection::errors`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::value_objects::{RawSentimentLabel, SentimentScores};

/// Detection outcome for a single text
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentDetection {
    /// Raw label reported by the service
    pub label: RawSentimentLabel,
    /// Four-way confidence scores
    pub scores: SentimentScores,
}

/// Detection outcome for one item of a batch request
///
/// `index` is the item's position in the submitted text list. Correlation
/// happens through this explicit field, never through list position: a
/// service is free to return results out of order or to omit errored items.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedDetection {
    /// Position of the item in the submitted batch
    pub index: usize,
    /// Raw label reported by the service
    pub label: RawSentimentLabel,
    /// Four-way confidence scores
    pub scores: SentimentScores,
}

/// Per-item failure inside an otherwise-successful batch response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchItemError {
    /// Position of the failed item in the submitted batch
    pub index: usize,
    /// Service-reported failure description
    pub message: String,
}

/// Response to a batch detection request
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchSentimentDetection {
    /// Successfully detected items, keyed by their `index` field
    pub results: Vec<IndexedDetection>,
    /// Items the service failed individually, keyed by their `index` field
    pub errors: Vec<BatchItemError>,
}

/// External Sentiment Detection Interface
///
/// Defines the contract for services that score short texts across the
/// four-way positive/negative/neutral/mixed axis. Implementations wrap a
/// remote API (see `pulse-providers`) or a deterministic local scorer for
/// tests and development.
///
/// Providers are constructed by the caller and injected into the analyzer,
/// so tests can substitute fakes without global state.
///
/// # Default Implementations
///
/// `detect_sentiment` has a default implementation that delegates to
/// `batch_detect_sentiment` with a single item. Providers with a dedicated
/// single-text endpoint should override it.
#[async_trait]
pub trait SentimentProvider: Send + Sync {
    /// Detect sentiment for a single text (default delegates to the batch call)
    async fn detect_sentiment(&self, text: &str) -> Result<SentimentDetection> {
        let batch = self.batch_detect_sentiment(&[text.to_string()]).await?;
        if let Some(item_error) = batch.errors.into_iter().next() {
            return Err(Error::provider_unknown(item_error.message));
        }
        batch
            .results
            .into_iter()
            .next()
            .map(|item| SentimentDetection {
                label: item.label,
                scores: item.scores,
            })
            .ok_or_else(|| Error::service("provider returned no result for single text"))
    }

    /// Detect sentiment for up to 25 texts in one request
    ///
    /// A whole-request failure (network, auth, 5xx) is an `Err`; per-item
    /// failures are reported in the returned `errors` list alongside the
    /// successful `results`.
    async fn batch_detect_sentiment(&self, texts: &[String]) -> Result<BatchSentimentDetection>;

    /// Name/identifier of this provider implementation
    fn provider_name(&self) -> &str;

    /// Language tag passed through to the service
    fn language_code(&self) -> &str {
        "en"
    }
}
