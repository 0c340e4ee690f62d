use std::{fmt::Display, future::Future, time::Duration};

use tracing::{error, info, warn};

use crate::{config::RetrySettings, utils::measure_metrics::record_startup_attempt};

/// Bounded retry with a multiplicative backoff capped at `max_delay`.
///
/// A multiplier of `1.0` gives a constant delay.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
    multiplier: f64,
    max_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration, multiplier: f64, max_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
            multiplier: if multiplier.is_finite() && multiplier >= 1.0 {
                multiplier
            } else {
                1.0
            },
            max_delay,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay to wait after the `retry`-th failure (0-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = self.multiplier.powi(retry.min(i32::MAX as u32) as i32);
        let secs = (self.base_delay.as_secs_f64() * factor).min(self.max_delay.as_secs_f64());

        Duration::try_from_secs_f64(secs).unwrap_or(self.max_delay)
    }

    /// Runs `f` until it succeeds or attempts run out, returning the last error.
    /// `f` receives the 1-based attempt number.
    pub async fn run<F, Fut, T, E>(&self, operation: &'static str, mut f: F) -> Result<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let mut attempt = 1;
        loop {
            match f(attempt).await {
                Ok(value) => {
                    record_startup_attempt(operation, true);
                    info!(operation, attempt, "startup step succeeded");
                    return Ok(value);
                }
                Err(e) if attempt < self.max_attempts => {
                    record_startup_attempt(operation, false);
                    let delay = self.delay_for(attempt - 1);
                    warn!(
                        operation,
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %e,
                        delay_ms = delay.as_millis() as u64,
                        "startup step failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    record_startup_attempt(operation, false);
                    error!(operation, attempt, error = %e, "all startup attempts failed");
                    return Err(e);
                }
            }
        }
    }
}

impl From<&RetrySettings> for RetryPolicy {
    fn from(value: &RetrySettings) -> Self {
        Self::new(
            value.max_attempts,
            Duration::from_millis(value.base_delay_ms),
            value.multiplier,
            Duration::from_millis(value.max_delay_ms),
        )
    }
}
