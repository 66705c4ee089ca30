use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;

use crate::ClientConfig;

/// Exponential backoff parameters for [`run_with_backoff`].
///
/// Derived from [`ClientConfig`] at client construction; a pure value with no
/// mutable state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackoffPolicy {
    /// Number of retries performed, not counting the caller's initial attempt.
    pub attempts: u32,
    /// Delay before the first retry.
    pub min: Duration,
    /// Upper bound on any delay.
    pub max: Duration,
    /// Growth factor applied to the delay after each retry.
    pub scalar: f64,
}

impl BackoffPolicy {
    pub(crate) fn from_config(config: &ClientConfig) -> Self {
        Self {
            attempts: config.fetch_retries,
            min: Duration::from_millis(config.retry_backoff_min_ms),
            max: Duration::from_millis(config.retry_backoff_max_ms),
            scalar: config.retry_backoff_scalar,
        }
    }

    /// Delay before retry `retry` (1-indexed): `min(max, min * scalar^(retry-1))`.
    /// No jitter.
    pub fn delay(&self, retry: u32) -> Duration {
        let exp = retry.saturating_sub(1).min(63) as i32;
        let millis = self.min.as_millis() as f64 * self.scalar.powi(exp);
        let capped = millis.min(self.max.as_millis() as f64);
        Duration::from_millis(capped as u64)
    }
}

/// Drives `operation` until it succeeds or `policy.attempts` retries have
/// failed, sleeping the policy's delay before each retry.
///
/// The operation is generic; it knows nothing about what it retries. On
/// success the result is returned immediately; once attempts are exhausted
/// the *last* failure's error is returned (earlier errors are dropped).
///
/// Each delay is a non-blocking `tokio::time::sleep`, and invocations are
/// strictly sequential: a retry starts only after the previous attempt has
/// resolved and its delay has elapsed. Callers are expected to have already
/// made (and failed) one attempt of their own, so the total number of tries
/// across caller and scheduler is `attempts + 1`. Do not invoke this with
/// `attempts == 0`.
pub async fn run_with_backoff<T, E, F, Fut>(policy: BackoffPolicy, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    debug_assert!(policy.attempts > 0, "backoff invoked with zero attempts");
    let mut retry = 1u32;
    loop {
        sleep(policy.delay(retry)).await;
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if retry >= policy.attempts {
                    return Err(err);
                }
                tracing::debug!(retry, "attempt failed, backing off");
                retry += 1;
            }
        }
    }
}
