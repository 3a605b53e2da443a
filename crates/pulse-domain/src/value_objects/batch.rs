//! Batch Scheduling Value Objects
//!
//! Bookkeeping structures used while driving the external sentiment service
//! in bounded-size batches. Purely transient; never persisted.

use serde::{Deserialize, Serialize};

use super::sentiment::SentimentResult;

/// Value Object: Contiguous slice of the analyzer input
///
/// `start_index` and `end_index` are absolute positions in the original
/// input sequence, as a half-open interval `[start, end)`. Keeping absolute
/// bounds on the batch itself is what lets a whole-batch failure name the
/// exact input positions it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// Texts in this batch, in input order
    pub items: Vec<String>,
    /// Absolute index of the first item
    pub start_index: usize,
    /// Absolute index one past the last item
    pub end_index: usize,
}

impl Batch {
    /// Number of items in this batch
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this batch carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Absolute indices covered by this batch
    pub fn absolute_indices(&self) -> impl Iterator<Item = usize> + use<> {
        self.start_index..self.end_index
    }
}

/// Value Object: Result of one batch attempt
///
/// A whole-batch failure reports every absolute index it covered as failed;
/// no partial-success inference happens at this layer. Per-item failures
/// inside an otherwise-successful response are the orchestrator's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    /// Whether the batch call as a whole succeeded
    pub success: bool,
    /// Results from the processor, empty on failure
    pub results: Vec<SentimentResult>,
    /// Absolute input indices covered by a failed batch, empty on success
    pub failed_indices: Vec<usize>,
}

impl BatchOutcome {
    /// Outcome for a batch whose processor succeeded
    pub fn succeeded(results: Vec<SentimentResult>) -> Self {
        Self {
            success: true,
            results,
            failed_indices: Vec::new(),
        }
    }

    /// Outcome for a batch whose processor failed wholesale
    pub fn failed(batch: &Batch) -> Self {
        Self {
            success: false,
            results: Vec::new(),
            failed_indices: batch.absolute_indices().collect(),
        }
    }
}
