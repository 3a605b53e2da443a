//! Question Detection
//!
//! Pattern-based detection of interrogative comments. A question is always
//! labeled `question` in the final classification regardless of what the
//! external classifier scored, so this check runs on the raw text,
//! independent of scores.

use regex::Regex;
use std::sync::LazyLock;

/// Words that mark a comment as a question when they open it
const QUESTION_WORDS: &[&str] = &[
    "what", "when", "where", "who", "why", "how", "which", "whose", "whom",
];

/// Anchored, case-insensitive question-word pattern
static QUESTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(what|when|where|who|why|how|which|whose|whom)\s")
        .expect("question pattern is a valid regex")
});

/// Detects question-oriented comments.
///
/// Detection criteria, any match wins:
/// 1. The text contains a `?` anywhere
/// 2. The first whitespace-delimited word, lower-cased, is a question word
/// 3. The anchored question-word pattern matches
///
/// There is no suppression for questions embedded mid-sentence: "I wonder
/// how this works" carries no leading question word and no `?`, so it is
/// not a question under this policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionDetector;

impl QuestionDetector {
    /// Create a new question detector
    pub fn new() -> Self {
        Self
    }

    /// Whether the given text is a question.
    ///
    /// Empty or whitespace-only text is never a question.
    pub fn is_question(&self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }

        if trimmed.contains('?') {
            return true;
        }

        if Self::starts_with_question_word(trimmed) {
            return true;
        }

        QUESTION_PATTERN.is_match(trimmed)
    }

    /// Whether the first whitespace-delimited word is a question word
    fn starts_with_question_word(text: &str) -> bool {
        text.split_whitespace()
            .next()
            .is_some_and(|first| QUESTION_WORDS.contains(&first.to_lowercase().as_str()))
    }
}

/// Convenience function to check if text is a question.
pub fn is_question(text: &str) -> bool {
    QuestionDetector::new().is_question(text)
}
