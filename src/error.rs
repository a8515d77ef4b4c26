use std::time::Duration;

/// Why a single fetch attempt did not produce a usable response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AttemptFailure {
    /// Upstream answered 429; the attempt waited before trying again.
    #[error("rate limited, waited {wait:?}")]
    RateLimited { wait: Duration },
    /// 5xx status.
    #[error("server error {status}")]
    Server { status: u16 },
    /// Timeout, connection failure or truncated body.
    #[error("transport error: {0}")]
    Transport(String),
    /// A status outside 200/4xx/5xx, e.g. 204 or a redirect left unfollowed.
    #[error("unexpected status {status}")]
    UnexpectedStatus { status: u16 },
}

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be issued as described.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// Non-retryable 4xx status (anything but 429) with raw response body.
    #[error("client error {status}: {body}")]
    Client { status: u16, body: String },
    /// Every attempt failed with a retryable condition.
    #[error("all {attempts} attempts failed, last: {last}")]
    Exhausted {
        /// Number of attempts made.
        attempts: usize,
        /// Failure observed on the final attempt.
        last: AttemptFailure,
    },
    /// Response body did not have the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
    /// A required environment variable was unset or empty.
    #[error("required environment variable {0} is not set")]
    MissingEnv(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FetchError {
    /// Returns `true` when the failure came from exhausting retryable attempts.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Client { status, .. } => Some(*status),
            Self::Exhausted {
                last: AttemptFailure::Server { status } | AttemptFailure::UnexpectedStatus { status },
                ..
            } => Some(*status),
            Self::Exhausted {
                last: AttemptFailure::RateLimited { .. },
                ..
            } => Some(429),
            _ => None,
        }
    }
}
