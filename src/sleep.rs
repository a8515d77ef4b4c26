use std::{fmt, future::Future, pin::Pin, time::Duration};

/// Boxed future returned by [`Sleeper::sleep`].
pub type SleepFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// Source of the waits between attempts.
///
/// The fetcher and rate limiter never call the timer directly, so tests can
/// substitute an implementation that records durations instead of waiting.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration) -> SleepFuture<'_>;
}

/// Default sleeper backed by `tokio::time::sleep`.
#[derive(Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> SleepFuture<'_> {
        Box::pin(tokio::time::sleep(duration))
    }
}

impl fmt::Debug for TokioSleeper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokioSleeper")
    }
}
