use std::{fmt, sync::Arc, time::Duration};

use tokio::{sync::Mutex, time::Instant};

use crate::{Sleeper, TokioSleeper};

/// Minimum spacing between CoinGecko free-tier calls.
pub const COINGECKO_MIN_INTERVAL: Duration = Duration::from_secs(12);

/// Enforces a minimum interval between consecutive calls.
///
/// This is a bucket of one: there is no burst capacity. Concurrent callers
/// are serialized on the internal lock, so spacing holds across tasks that
/// share the limiter.
pub struct RateLimiter {
    interval: Duration,
    last_call: Mutex<Option<Instant>>,
    sleeper: Arc<dyn Sleeper>,
}

impl fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RateLimiter")
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_call: Mutex::new(None),
            sleeper: Arc::new(TokioSleeper),
        }
    }

    /// Limiter tuned for the CoinGecko free tier.
    pub fn coingecko() -> Self {
        Self::new(COINGECKO_MIN_INTERVAL)
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Waits until at least `interval` has passed since the previous
    /// acquisition, then records the current instant.
    pub async fn acquire(&self) {
        let mut last_call = self.last_call.lock().await;
        if let Some(previous) = *last_call {
            let elapsed = previous.elapsed();
            if elapsed < self.interval {
                let wait = self.interval - elapsed;

                #[cfg(feature = "tracing")]
                tracing::debug!("rate limiter waiting {:?}", wait);

                self.sleeper.sleep(wait).await;
            }
        }
        *last_call = Some(Instant::now());
    }
}
