//! Outbound request pacing and retry policy.
//!
//! Requests to a generation API pass through two layers:
//! - [`RateLimiter`] paces calls per minute and bounds how many run at once.
//! - [`RetryPolicy`] retries transient failures with capped exponential delays.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod limiter;
mod retry;

pub use limiter::{RateLimiter, RateLimiterGuard};
pub use retry::RetryPolicy;
