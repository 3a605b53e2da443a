//! Provider Constants
//!
//! Constants specific to provider implementations. Domain-level limits
//! (batch size, byte limits) live in `pulse-domain::constants`.

// ============================================================================
// HTTP PROVIDER CONSTANTS
// ============================================================================

/// Content type for JSON request bodies
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Default base URL for a locally hosted sentiment service
pub const HTTP_SENTIMENT_DEFAULT_URL: &str = "http://localhost:8600";

/// Single-text detection endpoint, relative to the base URL
pub const HTTP_SENTIMENT_DETECT_PATH: &str = "/v1/sentiment";

/// Batch detection endpoint, relative to the base URL
pub const HTTP_SENTIMENT_BATCH_PATH: &str = "/v1/sentiment/batch";

// ============================================================================
// LEXICON PROVIDER CONSTANTS
// ============================================================================

/// Confidence floor for a lexicon match
pub const LEXICON_BASE_CONFIDENCE: f64 = 0.6;

/// Confidence added per additional matched keyword
pub const LEXICON_CONFIDENCE_STEP: f64 = 0.1;

/// Confidence ceiling for lexicon scores
pub const LEXICON_MAX_CONFIDENCE: f64 = 0.95;
