//! Retry policy for transient upstream failures.

use scriptorium_error::RetryableError;
use std::time::Duration;
use tokio_retry2::{Retry, RetryError};
use tracing::warn;

use crate::RateLimiter;

/// How many times to try a call and how long to wait between tries.
///
/// The wait before retry `n` (0-based) is `min(2^n seconds, max_wait)`,
/// so the default schedule is 1s, 2s, 4s, 8s. No jitter is applied.
///
/// # Examples
///
/// ```
/// use scriptorium_rate_limit::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::new(5, Duration::from_secs(60));
/// let delays: Vec<_> = policy.delays().collect();
/// assert_eq!(delays.len(), 4);
/// assert_eq!(delays[0], Duration::from_secs(1));
/// assert_eq!(delays[3], Duration::from_secs(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_getters::Getters)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    max_attempts: usize,
    /// Upper bound on any single wait
    max_wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(5, Duration::from_secs(60))
    }
}

impl RetryPolicy {
    /// Create a policy. At least one attempt is always made.
    pub fn new(max_attempts: usize, max_wait: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            max_wait,
        }
    }

    /// The wait after failed attempt `attempt` (0-based).
    pub fn delay_for(&self, attempt: usize) -> Duration {
        let exponent = attempt.min(32) as u32;
        let secs = 2u64.saturating_pow(exponent);
        Duration::from_secs(secs).min(self.max_wait)
    }

    /// Waits between consecutive attempts, one fewer than `max_attempts`.
    pub fn delays(&self) -> impl Iterator<Item = Duration> + use<> {
        let policy = *self;
        (0..self.max_attempts - 1).map(move |attempt| policy.delay_for(attempt))
    }

    /// Run `operation` under this policy, pacing each attempt through `limiter`.
    ///
    /// Retryable errors are retried until the attempts run out, at which
    /// point the last error is returned. Other errors return immediately.
    pub async fn execute<F, Fut, R, E>(
        &self,
        limiter: Option<&RateLimiter>,
        mut operation: F,
    ) -> Result<R, E>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<R, E>>,
        E: RetryableError + std::fmt::Display,
    {
        Retry::spawn(self.delays(), || {
            let attempt = operation();
            async move {
                let _guard = match limiter {
                    Some(limiter) => Some(limiter.acquire().await),
                    None => None,
                };

                match attempt.await {
                    Ok(value) => Ok(value),
                    Err(e) if e.is_retryable() => {
                        warn!(error = %e, "Transient error, will retry");
                        Err(RetryError::Transient {
                            err: e,
                            retry_after: None,
                        })
                    }
                    Err(e) => {
                        warn!(error = %e, "Permanent error, failing immediately");
                        Err(RetryError::Permanent(e))
                    }
                }
            }
        })
        .await
    }
}
