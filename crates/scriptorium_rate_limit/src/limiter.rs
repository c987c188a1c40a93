//! Rate limiter implementation using governor and Tokio Semaphore.
//!
//! The GCRA (Generic Cell Rate Algorithm) in governor paces requests per
//! minute without locking; a semaphore caps concurrent requests.

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

type DirectRateLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Process-wide limiter shared by every request that calls the same API.
///
/// Cloning is cheap and clones share the same budget.
///
/// # Example
///
/// ```
/// use scriptorium_rate_limit::RateLimiter;
///
/// let limiter = RateLimiter::new(Some(50), Some(2));
/// assert_eq!(limiter.available_permits(), 2);
/// ```
#[derive(Clone)]
pub struct RateLimiter {
    rpm_limiter: Option<Arc<DirectRateLimiter>>,
    concurrent_semaphore: Arc<Semaphore>,
}

impl RateLimiter {
    /// Create a limiter.
    ///
    /// `None` or zero for either limit leaves that dimension unbounded.
    pub fn new(requests_per_minute: Option<u32>, max_concurrent: Option<u32>) -> Self {
        let rpm_limiter = requests_per_minute.and_then(NonZeroU32::new).map(|n| {
            let quota = Quota::per_minute(n);
            Arc::new(GovernorRateLimiter::direct(quota))
        });

        let max_concurrent = max_concurrent
            .filter(|n| *n > 0)
            .map(|n| n as usize)
            .unwrap_or(Semaphore::MAX_PERMITS);

        tracing::debug!(
            requests_per_minute = ?requests_per_minute,
            max_concurrent,
            "Created rate limiter"
        );

        Self {
            rpm_limiter,
            concurrent_semaphore: Arc::new(Semaphore::new(max_concurrent)),
        }
    }

    /// A limiter that never waits.
    pub fn unlimited() -> Self {
        Self::new(None, None)
    }

    /// Wait until the per-minute quota and a concurrency slot are available.
    ///
    /// The returned guard releases the slot when dropped.
    pub async fn acquire(&self) -> RateLimiterGuard {
        if let Some(limiter) = &self.rpm_limiter {
            limiter.until_ready().await;
        }

        // Slot last, so it is not held while waiting on the quota
        let permit = match self.concurrent_semaphore.clone().acquire_owned().await {
            Ok(permit) => Some(permit),
            Err(e) => {
                tracing::warn!(error = %e, "Concurrency semaphore closed, proceeding unbounded");
                None
            }
        };

        RateLimiterGuard { _permit: permit }
    }

    /// Try to acquire without waiting.
    ///
    /// Returns `None` if either limit would block.
    pub fn try_acquire(&self) -> Option<RateLimiterGuard> {
        if let Some(limiter) = &self.rpm_limiter {
            limiter.check().ok()?;
        }

        let permit = self.concurrent_semaphore.clone().try_acquire_owned().ok()?;
        Some(RateLimiterGuard {
            _permit: Some(permit),
        })
    }

    /// Concurrency slots currently free.
    pub fn available_permits(&self) -> usize {
        self.concurrent_semaphore.available_permits()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("paced", &self.rpm_limiter.is_some())
            .field("available_permits", &self.available_permits())
            .finish()
    }
}

/// RAII guard for the rate limiter.
///
/// Releases the concurrent request slot when dropped, even if the request
/// fails.
pub struct RateLimiterGuard {
    _permit: Option<OwnedSemaphorePermit>,
}
