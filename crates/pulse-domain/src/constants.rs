//! Domain layer constants
//!
//! Constants that are part of the sentiment pipeline's business rules and
//! are shared by the application layer and the providers. Infrastructure
//! defaults (timeouts, endpoints) live with the infrastructure crate.

// ============================================================================
// BATCHING DOMAIN CONSTANTS
// ============================================================================

/// Maximum number of texts accepted by a single batch sentiment request
pub const SENTIMENT_BATCH_MAX_ITEMS: usize = 25;

/// Default batch size used by the analyzer when none is configured
pub const DEFAULT_BATCH_SIZE: usize = SENTIMENT_BATCH_MAX_ITEMS;

// ============================================================================
// TEXT DOMAIN CONSTANTS
// ============================================================================

/// Maximum UTF-8 encoded size of a single text submitted for detection
pub const MAX_TEXT_BYTES: usize = 5000;

// ============================================================================
// CLASSIFICATION DOMAIN CONSTANTS
// ============================================================================

/// Maximum spread between the positive/negative/neutral scores for a MIXED
/// result to be treated as balanced (10 percentage points)
pub const BALANCE_THRESHOLD: f64 = 0.10;

// ============================================================================
// RETRY DOMAIN CONSTANTS
// ============================================================================

/// Default number of attempts against the external sentiment service
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default base delay in milliseconds for exponential backoff
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

/// Default delay in milliseconds between fixed-delay retries
pub const DEFAULT_FIXED_RETRY_DELAY_MS: u64 = 2000;

/// Fraction of the exponential delay drawn as uniform jitter
pub const BACKOFF_JITTER_FACTOR: f64 = 0.3;
