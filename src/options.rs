use std::time::Duration;

/// Configures HTTP timeout and retry behavior.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RetryOptions {
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Total number of attempts, including the first one. Must be at least 1.
    pub max_retries: usize,
    /// Base retry backoff in milliseconds, doubled for every attempt.
    pub base_delay_ms: u64,
}

impl Default for RetryOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            max_retries: 3,
            base_delay_ms: 2_000,
        }
    }
}

impl RetryOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Backoff for the zero-based `attempt`: `base_delay * 2^attempt`.
    ///
    /// The exponent stops growing at 16, so attempts past the 17th all wait
    /// `base_delay * 2^16`. The product saturates at `u64::MAX` milliseconds.
    pub fn backoff(&self, attempt: usize) -> Duration {
        let exp = attempt.min(16) as u32;
        let multiplier = 1u64 << exp;
        Duration::from_millis(self.base_delay_ms.saturating_mul(multiplier))
    }
}
