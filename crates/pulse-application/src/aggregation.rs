//! Sentiment Aggregation
//!
//! Reduces per-comment classifications into category counts and renders a
//! human-readable overall-sentiment summary.

use pulse_domain::{SentimentBreakdown, SentimentResult};

/// Count label occurrences across a list of classifications.
///
/// The returned breakdown's counts always sum to `results.len()`: the label
/// set is closed, so every result increments exactly one counter.
pub fn calculate_breakdown(results: &[SentimentResult]) -> SentimentBreakdown {
    let mut breakdown = SentimentBreakdown::default();
    for result in results {
        breakdown.record(result.sentiment);
    }
    breakdown
}

/// Render a deterministic one-line summary of the sentiment distribution.
///
/// The branch order is part of the contract: an overwhelmingly positive set
/// must never be described as "mostly questions" just because questions
/// also happen to be frequent. Percentages are compared unrounded and only
/// rounded for display.
pub fn generate_overall_sentiment(breakdown: &SentimentBreakdown) -> String {
    let total = breakdown.total();
    if total == 0 {
        return "No comments to analyze".to_string();
    }

    #[allow(clippy::cast_precision_loss)]
    let percent = |count: usize| count as f64 / total as f64 * 100.0;

    let positive = percent(breakdown.positive);
    let negative = percent(breakdown.negative);
    let question = percent(breakdown.question);

    let neutral_is_strict_max = [
        breakdown.positive,
        breakdown.negative,
        breakdown.question,
        breakdown.confusion,
    ]
    .iter()
    .all(|&count| count < breakdown.neutral);

    if positive >= 60.0 {
        format!("Overwhelmingly positive ({}% positive)", round(positive))
    } else if negative >= 60.0 {
        format!("Overwhelmingly negative ({}% negative)", round(negative))
    } else if question >= 40.0 {
        format!("Mostly questions ({}% questions)", round(question))
    } else if positive > negative && positive >= 40.0 {
        format!(
            "Generally positive ({}% positive, {}% negative)",
            round(positive),
            round(negative)
        )
    } else if negative > positive && negative >= 40.0 {
        format!(
            "Generally negative ({}% negative, {}% positive)",
            round(negative),
            round(positive)
        )
    } else if neutral_is_strict_max {
        format!("Mostly neutral ({}% neutral)", round(percent(breakdown.neutral)))
    } else {
        format!(
            "Mixed sentiment ({}% positive, {}% negative, {}% questions)",
            round(positive),
            round(negative),
            round(question)
        )
    }
}

/// Round a percentage to the nearest integer for display.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round(percentage: f64) -> u32 {
    percentage.round() as u32
}
