//! Unit tests for sentiment value objects

use pulse_domain::{RawSentimentLabel, SentimentLabel, SentimentResult, SentimentScores};

#[test]
fn test_raw_label_from_known_strings() {
    assert_eq!(
        RawSentimentLabel::from("POSITIVE"),
        RawSentimentLabel::Positive
    );
    assert_eq!(
        RawSentimentLabel::from("NEGATIVE"),
        RawSentimentLabel::Negative
    );
    assert_eq!(
        RawSentimentLabel::from("NEUTRAL"),
        RawSentimentLabel::Neutral
    );
    assert_eq!(RawSentimentLabel::from("MIXED"), RawSentimentLabel::Mixed);
}

#[test]
fn test_raw_label_preserves_unknown_strings() {
    assert_eq!(
        RawSentimentLabel::from("GARBAGE"),
        RawSentimentLabel::Other("GARBAGE".to_string())
    );
    // Casing matters: the external service reports uppercase labels
    assert_eq!(
        RawSentimentLabel::from("positive"),
        RawSentimentLabel::Other("positive".to_string())
    );
    assert_eq!(
        RawSentimentLabel::from(""),
        RawSentimentLabel::Other(String::new())
    );
}

#[test]
fn test_label_display_is_lowercase() {
    assert_eq!(SentimentLabel::Positive.to_string(), "positive");
    assert_eq!(SentimentLabel::Negative.to_string(), "negative");
    assert_eq!(SentimentLabel::Neutral.to_string(), "neutral");
    assert_eq!(SentimentLabel::Question.to_string(), "question");
    assert_eq!(SentimentLabel::Confusion.to_string(), "confusion");
}

#[test]
fn test_label_serializes_lowercase() {
    let json = serde_json::to_string(&SentimentLabel::Question).unwrap();
    assert_eq!(json, "\"question\"");
}

#[test]
fn test_neutral_fallback_shape() {
    let fallback = SentimentResult::neutral_fallback();

    assert_eq!(fallback.sentiment, SentimentLabel::Neutral);
    assert_eq!(fallback.confidence, 0.0);
    assert_eq!(
        fallback.scores,
        SentimentScores {
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
            mixed: 0.0,
        }
    );
}

#[test]
fn test_scores_roundtrip_through_json() {
    let scores = SentimentScores {
        positive: 0.25,
        negative: 0.5,
        neutral: 0.2,
        mixed: 0.05,
    };

    let json = serde_json::to_string(&scores).unwrap();
    let back: SentimentScores = serde_json::from_str(&json).unwrap();

    assert_eq!(back, scores);
}
