//! Comment Text Preprocessing
//!
//! Normalizes comment text before submission to the external sentiment
//! service. The service enforces a limit on the UTF-8 encoded size of each
//! text, so truncation must be byte-aware: emoji and non-Latin scripts can
//! blow the limit while the character count still looks small.

use pulse_domain::constants::MAX_TEXT_BYTES;
use unicode_segmentation::UnicodeSegmentation;

/// Preprocess one comment for sentiment detection.
///
/// Trims surrounding whitespace and truncates the text to the service's
/// byte limit. A whitespace-only comment becomes the empty string, the
/// sentinel the analyzer uses to skip the external call and assign the
/// neutral fallback directly.
pub fn preprocess_comment(text: &str) -> String {
    preprocess_comment_with_limit(text, MAX_TEXT_BYTES)
}

/// [`preprocess_comment`] with a caller-supplied byte limit.
pub fn preprocess_comment_with_limit(text: &str, max_bytes: usize) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    truncate_to_bytes(trimmed, max_bytes)
}

/// Whether the text is empty or whitespace-only.
pub fn is_empty(text: &str) -> bool {
    text.trim().is_empty()
}

/// UTF-8 encoded length of the text in bytes.
pub fn byte_length(text: &str) -> usize {
    text.len()
}

/// Truncate trailing graphemes until the text fits in `max_bytes`.
///
/// Removing whole graphemes keeps the output valid UTF-8 and never splits
/// a composed emoji or combining sequence in half.
fn truncate_to_bytes(text: &str, max_bytes: usize) -> String {
    if text.len() <= max_bytes {
        return text.to_string();
    }

    let mut truncated = text.to_string();
    while truncated.len() > max_bytes && !truncated.is_empty() {
        let last_boundary = truncated
            .grapheme_indices(true)
            .last()
            .map_or(0, |(index, _)| index);
        truncated.truncate(last_boundary);
    }
    truncated
}
