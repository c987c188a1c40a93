//! Tests for the retry policy and rate limiter.

use scriptorium_error::RetryableError;
use scriptorium_rate_limit::{RateLimiter, RetryPolicy};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug)]
struct TestError {
    transient: bool,
}

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "test error (transient: {})", self.transient)
    }
}

impl RetryableError for TestError {
    fn is_retryable(&self) -> bool {
        self.transient
    }
}

#[test]
fn test_delays_are_capped() {
    let policy = RetryPolicy::new(8, Duration::from_secs(10));
    let delays: Vec<_> = policy.delays().collect();

    assert_eq!(delays.len(), 7);
    assert_eq!(delays[0], Duration::from_secs(1));
    assert_eq!(delays[3], Duration::from_secs(8));
    assert_eq!(delays[4], Duration::from_secs(10));
    assert_eq!(delays[6], Duration::from_secs(10));
}

#[test]
fn test_single_attempt_has_no_delays() {
    let policy = RetryPolicy::new(0, Duration::from_secs(60));
    assert_eq!(*policy.max_attempts(), 1);
    assert_eq!(policy.delays().count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_transient_errors_retried_until_success() -> anyhow::Result<()> {
    let call_count = Arc::new(Mutex::new(0usize));
    let policy = RetryPolicy::default();
    let start = tokio::time::Instant::now();

    let counter = call_count.clone();
    let result = policy
        .execute(None, || {
            let counter = counter.clone();
            async move {
                let mut count = counter.lock().unwrap();
                *count += 1;
                if *count < 3 {
                    Err(TestError { transient: true })
                } else {
                    Ok("done")
                }
            }
        })
        .await;

    assert_eq!(result.map_err(|e| anyhow::anyhow!("{}", e))?, "done");
    assert_eq!(*call_count.lock().unwrap(), 3);
    // 1s + 2s of backoff
    assert!(start.elapsed() >= Duration::from_secs(3));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_permanent_error_not_retried() {
    let call_count = Arc::new(Mutex::new(0usize));
    let policy = RetryPolicy::default();

    let counter = call_count.clone();
    let result: Result<(), TestError> = policy
        .execute(None, || {
            let counter = counter.clone();
            async move {
                *counter.lock().unwrap() += 1;
                Err(TestError { transient: false })
            }
        })
        .await;

    assert!(result.is_err());
    assert_eq!(*call_count.lock().unwrap(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_attempts_bounded() {
    let call_count = Arc::new(Mutex::new(0usize));
    let policy = RetryPolicy::new(3, Duration::from_secs(60));
    let limiter = RateLimiter::unlimited();

    let counter = call_count.clone();
    let result: Result<(), TestError> = policy
        .execute(Some(&limiter), || {
            let counter = counter.clone();
            async move {
                *counter.lock().unwrap() += 1;
                Err(TestError { transient: true })
            }
        })
        .await;

    let err = result.unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(*call_count.lock().unwrap(), 3);
}

#[tokio::test]
async fn test_concurrency_slot_released_on_drop() {
    let limiter = RateLimiter::new(None, Some(1));

    let guard = limiter.acquire().await;
    assert_eq!(limiter.available_permits(), 0);
    assert!(limiter.try_acquire().is_none());

    drop(guard);
    assert!(limiter.try_acquire().is_some());
}
