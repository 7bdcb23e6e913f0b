use best_stories_domain::DomainError;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Outcome of one failed HTTP attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptError {
    /// Worth another try: connect/timeout errors, 5xx, 408, 429
    Transient(String),
    /// Retrying cannot help: other non-success statuses
    Fatal(String),
}

impl AttemptError {
    pub fn message(&self) -> &str {
        match self {
            AttemptError::Transient(m) | AttemptError::Fatal(m) => m,
        }
    }
}

/// Exponential backoff for transient upstream failures.
///
/// Retry `n` (1-based) waits `base_delay * 2^(n-1)` plus up to a quarter
/// of `base_delay` of random jitter.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_retries: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    pub fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn delay_for(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(16);
        let backoff = self.base_delay.saturating_mul(1u32 << exponent);

        let jitter_ceiling = (self.base_delay.as_millis() / 4) as u64;
        let jitter = if jitter_ceiling > 0 {
            Duration::from_millis(fastrand::u64(0..=jitter_ceiling))
        } else {
            Duration::ZERO
        };

        backoff + jitter
    }

    /// Run `attempt` until it succeeds, fails fatally, or retries run out.
    ///
    /// # Errors
    ///
    /// * `DomainError::Upstream` - the last attempt's failure
    pub async fn run<T, F, Fut>(&self, target: &str, mut attempt: F) -> Result<T, DomainError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, AttemptError>>,
    {
        let mut retry = 0;
        loop {
            match attempt().await {
                Ok(value) => return Ok(value),
                Err(AttemptError::Transient(message)) if retry < self.max_retries => {
                    retry += 1;
                    let delay = self.delay_for(retry);
                    warn!(
                        target_url = %target,
                        retry,
                        delay_ms = delay.as_millis() as u64,
                        error = %message,
                        "Transient upstream failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(DomainError::Upstream(e.message().to_string())),
            }
        }
    }
}
