//! Batch Management
//!
//! Groups comments into bounded-size batches for the external sentiment
//! service and handles the two failure granularities: a batch that fails
//! wholesale, and the per-item recovery pass that follows it.

use std::future::Future;

use pulse_domain::{Batch, BatchOutcome, Result, SentimentResult};
use tracing::warn;

/// Partitions input and drives batch submission bookkeeping.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchManager;

impl BatchManager {
    /// Create a new batch manager
    pub fn new() -> Self {
        Self
    }

    /// Split comments into contiguous batches of at most `batch_size` items.
    ///
    /// Order is preserved and the index bounds on each batch are absolute
    /// positions in `comments` as a half-open interval. The last batch may
    /// be smaller than `batch_size`. Empty input produces no batches.
    pub fn create_batches(&self, comments: &[String], batch_size: usize) -> Vec<Batch> {
        if comments.is_empty() || batch_size == 0 {
            return Vec::new();
        }

        comments
            .chunks(batch_size)
            .enumerate()
            .map(|(chunk_index, chunk)| {
                let start_index = chunk_index * batch_size;
                Batch {
                    items: chunk.to_vec(),
                    start_index,
                    end_index: start_index + chunk.len(),
                }
            })
            .collect()
    }

    /// Process a single batch, converting any processor failure into a
    /// [`BatchOutcome`] that names every absolute index the batch covered.
    ///
    /// No partial-success inference happens here; per-item errors inside a
    /// successful response are the caller's concern.
    pub async fn process_batch<F, Fut>(&self, batch: &Batch, processor: F) -> BatchOutcome
    where
        F: FnOnce(Vec<String>) -> Fut,
        Fut: Future<Output = Result<Vec<SentimentResult>>>,
    {
        match processor(batch.items.clone()).await {
            Ok(results) => BatchOutcome::succeeded(results),
            Err(error) => {
                warn!(
                    start = batch.start_index,
                    end = batch.end_index,
                    %error,
                    "batch sentiment call failed"
                );
                BatchOutcome::failed(batch)
            }
        }
    }

    /// Retry failed items one at a time.
    ///
    /// Items are processed strictly sequentially, which caps the worst-case
    /// load on the external service right after a batch failure. A failed
    /// item is replaced with the neutral fallback, so the returned list
    /// always has exactly one result per input item and this method never
    /// fails.
    pub async fn retry_failed_items<F, Fut>(
        &self,
        items: &[String],
        processor: F,
    ) -> Vec<SentimentResult>
    where
        F: Fn(String) -> Fut,
        Fut: Future<Output = Result<SentimentResult>>,
    {
        let mut results = Vec::with_capacity(items.len());

        for item in items {
            match processor(item.clone()).await {
                Ok(result) => results.push(result),
                Err(error) => {
                    warn!(%error, "individual retry failed, using neutral fallback");
                    results.push(SentimentResult::neutral_fallback());
                }
            }
        }

        results
    }
}
