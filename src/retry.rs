//! Fixed-interval retry for delivery attempts.
//!
//! Every failure is retried the same way: there is no backoff growth, no
//! jitter and no error class that short-circuits the loop.

use anyhow::{Result, anyhow};
use std::future::Future;
use std::time::Duration;
use tracing::error;

use crate::runtime::Runtime;

/// Number of delivery attempts before giving up.
pub const MAX_ATTEMPTS: usize = 5;

/// Pause after each failed attempt.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: usize,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }
}

/// Runs `operation` until it succeeds or `policy.max_attempts` is reached.
///
/// Each failure is logged as `<label> - Unsuccessful: <error> (attempt i out of n)`
/// and followed by a sleep, the final one included. Returns the last error
/// once attempts are exhausted.
pub async fn with_retry<R, F, Fut, T>(
    runtime: &R,
    policy: &RetryPolicy,
    label: &str,
    mut operation: F,
) -> Result<T>
where
    R: Runtime,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut last_error = None;

    for attempt in 1..=policy.max_attempts {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) => {
                error!(
                    "{} - Unsuccessful: {:#} (attempt {} out of {})",
                    label, e, attempt, policy.max_attempts
                );

                runtime.sleep(policy.delay).await;
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| {
        anyhow!("{}: failed after {} attempts", label, policy.max_attempts)
    }))
}
