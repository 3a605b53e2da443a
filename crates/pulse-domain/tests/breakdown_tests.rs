//! Unit tests for breakdown and batch value objects

use pulse_domain::{Batch, BatchOutcome, SentimentBreakdown, SentimentLabel};

#[test]
fn test_breakdown_record_and_total() {
    let mut breakdown = SentimentBreakdown::default();
    breakdown.record(SentimentLabel::Positive);
    breakdown.record(SentimentLabel::Positive);
    breakdown.record(SentimentLabel::Question);
    breakdown.record(SentimentLabel::Confusion);

    assert_eq!(breakdown.positive, 2);
    assert_eq!(breakdown.question, 1);
    assert_eq!(breakdown.confusion, 1);
    assert_eq!(breakdown.negative, 0);
    assert_eq!(breakdown.total(), 4);
}

#[test]
fn test_batch_absolute_indices() {
    let batch = Batch {
        items: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        start_index: 25,
        end_index: 28,
    };

    assert_eq!(batch.len(), 3);
    assert!(!batch.is_empty());
    assert_eq!(batch.absolute_indices().collect::<Vec<_>>(), vec![25, 26, 27]);
}

#[test]
fn test_failed_outcome_covers_whole_batch() {
    let batch = Batch {
        items: vec!["a".to_string(), "b".to_string()],
        start_index: 50,
        end_index: 52,
    };

    let outcome = BatchOutcome::failed(&batch);

    assert!(!outcome.success);
    assert!(outcome.results.is_empty());
    assert_eq!(outcome.failed_indices, vec![50, 51]);
}

#[test]
fn test_succeeded_outcome_has_no_failed_indices() {
    let outcome = BatchOutcome::succeeded(Vec::new());

    assert!(outcome.success);
    assert!(outcome.failed_indices.is_empty());
}
