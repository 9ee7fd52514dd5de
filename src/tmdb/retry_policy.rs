//! Retry policy for TMDb requests.
//!
//! Implements linear backoff with separate step sizes for rate limiting and
//! for transient network/parse failures.

use super::FetchError;
use std::time::Duration;

/// Retry policy implementing linear backoff.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one.
    pub max_attempts: u32,
    /// Backoff step after an HTTP 429 response.
    pub rate_limit_backoff: Duration,
    /// Backoff step after a network or parse failure.
    pub transient_backoff: Duration,
}

impl RetryPolicy {
    /// Number of attempts the request loop makes at most. Never zero.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Decide what to do after `error` on the zero-based attempt `attempt`.
    ///
    /// Returns the time to wait before trying again, or None if the request
    /// must give up. The wait is `step * (attempt + 1)`.
    pub fn backoff_for(&self, error: &FetchError, attempt: u32) -> Option<Duration> {
        if attempt + 1 >= self.attempts() {
            return None;
        }

        let step = match error {
            FetchError::RateLimited => self.rate_limit_backoff,
            e if e.is_transient() => self.transient_backoff,
            _ => return None,
        };

        Some(step * (attempt + 1))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            rate_limit_backoff: Duration::from_secs(1),
            transient_backoff: Duration::from_millis(500),
        }
    }
}
