//! Retry with Backoff
//!
//! Generic retry wrappers for calls against the external sentiment service.
//! Exponential backoff carries uniform jitter so a fleet of clients backing
//! off from the same throttling event does not re-converge on one instant.

use std::future::Future;
use std::time::Duration;

use pulse_domain::constants::BACKOFF_JITTER_FACTOR;
use pulse_domain::{Error, Result};
use rand::Rng;
use tokio::time::sleep;
use tracing::debug;

/// Retry an async operation with exponential backoff and jitter.
///
/// Attempts `operation` up to `max_retries` times. The delay before retry
/// *n* is `base_delay * 2^n` plus jitter drawn uniformly from `[0, 0.3x]`
/// of that exponential value; there is no delay after the final attempt.
///
/// When `is_retryable` rejects the caught error, the error is returned
/// immediately without further attempts or delay. On exhaustion the most
/// recent error is returned unchanged.
pub async fn retry_with_backoff<T, F, Fut, P>(
    mut operation: F,
    max_retries: u32,
    base_delay: Duration,
    is_retryable: P,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
    P: Fn(&Error) -> bool,
{
    let mut last_error: Option<Error> = None;

    for attempt in 0..max_retries {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if !is_retryable(&error) {
                    return Err(error);
                }

                let exhausted = attempt + 1 >= max_retries;
                last_error = Some(error);

                if !exhausted {
                    let delay = backoff_delay(base_delay, attempt);
                    debug!(attempt, ?delay, "retrying after backoff");
                    sleep(delay).await;
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| Error::internal("retry requested with zero attempts")))
}

/// Retry an async operation with a constant delay between attempts.
///
/// Same attempt-count and exhaustion semantics as [`retry_with_backoff`],
/// but every failure is retried (no retryability filter) and the delay
/// never grows.
pub async fn retry_with_fixed_delay<T, F, Fut>(
    mut operation: F,
    max_retries: u32,
    delay: Duration,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut last_error: Option<Error> = None;

    for attempt in 0..max_retries {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                let exhausted = attempt + 1 >= max_retries;
                last_error = Some(error);

                if !exhausted {
                    debug!(attempt, ?delay, "retrying after fixed delay");
                    sleep(delay).await;
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| Error::internal("retry requested with zero attempts")))
}

/// Exponential delay for the given 0-indexed attempt, with jitter.
fn backoff_delay(base_delay: Duration, attempt: u32) -> Duration {
    let exponential = base_delay.saturating_mul(2u32.saturating_pow(attempt));
    let jitter = exponential.mul_f64(rand::rng().random_range(0.0..BACKOFF_JITTER_FACTOR));
    exponential.saturating_add(jitter)
}
