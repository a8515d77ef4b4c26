use std::{error::Error as _, fmt, sync::Arc, time::Duration};

use reqwest::{
    header::{self, HeaderMap},
    StatusCode,
};

use crate::{
    AttemptFailure, FetchError, FetchRequest, FetchResponse, Method, Result, RetryOptions,
    Sleeper, TokioSleeper,
};

/// How a single HTTP status is handled by the retry loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Disposition {
    Success,
    RateLimited,
    /// 4xx other than 429; never retried.
    Abort,
    Retry(RetryClass),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum RetryClass {
    Server,
    Unexpected,
}

fn classify(status: StatusCode) -> Disposition {
    match status.as_u16() {
        200 => Disposition::Success,
        429 => Disposition::RateLimited,
        400..=499 => Disposition::Abort,
        500..=999 => Disposition::Retry(RetryClass::Server),
        _ => Disposition::Retry(RetryClass::Unexpected),
    }
}

/// Parses `Retry-After` given in whole seconds.
///
/// HTTP-date values are not supported and yield `None`.
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    let value = headers.get(header::RETRY_AFTER)?.to_str().ok()?;
    value.trim().parse::<u64>().ok().map(Duration::from_secs)
}

fn describe_transport(err: &reqwest::Error) -> String {
    let kind = if err.is_timeout() {
        "timeout"
    } else if err.is_connect() {
        "connection error"
    } else if err.is_builder() {
        "invalid request"
    } else {
        "request error"
    };
    match err.source() {
        Some(source) => format!("{kind}: {err}: {source}"),
        None => format!("{kind}: {err}"),
    }
}

/// HTTP fetcher with exponential backoff retry.
#[derive(Clone)]
pub struct Fetcher {
    http: reqwest::Client,
    options: RetryOptions,
    sleeper: Arc<dyn Sleeper>,
}

impl fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fetcher")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    /// Creates a fetcher with default [`RetryOptions`].
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Creates a fetcher around an existing `reqwest` client.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self {
            http,
            options: RetryOptions::default(),
            sleeper: Arc::new(TokioSleeper),
        }
    }

    /// Applies timeout and retry options to every request.
    pub fn with_options(mut self, opts: RetryOptions) -> Self {
        self.options = opts;
        self
    }

    /// Replaces the source of backoff waits.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn options(&self) -> &RetryOptions {
        &self.options
    }

    /// Shorthand for `fetch(&FetchRequest::get(url))`.
    pub async fn get(&self, url: impl Into<String>) -> Result<FetchResponse> {
        self.fetch(&FetchRequest::get(url)).await
    }

    /// Sends `request`, retrying 429, 5xx and transport failures.
    ///
    /// - 200 returns immediately.
    /// - 429 waits `Retry-After` seconds (or `base_delay * 2^attempt`) and
    ///   moves to the next attempt without the regular backoff.
    /// - Other 4xx fail at once with [`FetchError::Client`].
    /// - Anything else, including URLs or headers reqwest rejects, waits
    ///   `base_delay * 2^attempt` when attempts remain.
    ///
    /// After `max_retries` attempts the last failure is returned inside
    /// [`FetchError::Exhausted`].
    pub async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse> {
        if request.url.trim().is_empty() {
            return Err(FetchError::InvalidRequest("url must not be empty".to_owned()));
        }
        let opts = request.options.as_ref().unwrap_or(&self.options);
        if opts.max_retries == 0 {
            return Err(FetchError::InvalidRequest(
                "max_retries must be at least 1".to_owned(),
            ));
        }

        let mut last = None;
        for attempt in 0..opts.max_retries {
            let failure = match self.send_once(request, opts).await {
                Ok(response) => {
                    let status = response.status();
                    match classify(status) {
                        Disposition::Success => {
                            let headers = response.headers().clone();
                            match response.text().await {
                                Ok(body) => {
                                    return Ok(FetchResponse {
                                        status: status.as_u16(),
                                        headers,
                                        body,
                                    })
                                }
                                Err(err) => AttemptFailure::Transport(describe_transport(&err)),
                            }
                        }
                        Disposition::RateLimited => {
                            let wait = retry_after(response.headers())
                                .unwrap_or_else(|| opts.backoff(attempt));

                            #[cfg(feature = "tracing")]
                            tracing::warn!(url = %request.url, "rate limited, waiting {:?}", wait);

                            self.sleeper.sleep(wait).await;
                            last = Some(AttemptFailure::RateLimited { wait });
                            continue;
                        }
                        Disposition::Abort => {
                            let body = response.text().await.unwrap_or_default();

                            #[cfg(feature = "tracing")]
                            tracing::error!(url = %request.url, "client error {}", status.as_u16());

                            return Err(FetchError::Client {
                                status: status.as_u16(),
                                body,
                            });
                        }
                        Disposition::Retry(RetryClass::Server) => AttemptFailure::Server {
                            status: status.as_u16(),
                        },
                        Disposition::Retry(RetryClass::Unexpected) => {
                            AttemptFailure::UnexpectedStatus {
                                status: status.as_u16(),
                            }
                        }
                    }
                }
                Err(err) => AttemptFailure::Transport(describe_transport(&err)),
            };

            #[cfg(feature = "tracing")]
            tracing::warn!(
                url = %request.url,
                "{failure}, attempt {}/{}",
                attempt + 1,
                opts.max_retries
            );

            last = Some(failure);
            if attempt + 1 < opts.max_retries {
                self.wait_before_retry(opts, attempt).await;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::error!(url = %request.url, "all {} attempts failed", opts.max_retries);

        let Some(last) = last else {
            return Err(FetchError::InvalidRequest(
                "max_retries must be at least 1".to_owned(),
            ));
        };
        Err(FetchError::Exhausted {
            attempts: opts.max_retries,
            last,
        })
    }

    async fn send_once(
        &self,
        request: &FetchRequest,
        opts: &RetryOptions,
    ) -> std::result::Result<reqwest::Response, reqwest::Error> {
        let mut builder = match request.method {
            Method::Get => self.http.get(&request.url),
            Method::Post => self.http.post(&request.url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let (Method::Post, Some(body)) = (request.method, &request.json_body) {
            builder = builder.json(body);
        }
        builder.timeout(opts.timeout()).send().await
    }

    async fn wait_before_retry(&self, opts: &RetryOptions, attempt: usize) {
        let delay = opts.backoff(attempt);

        #[cfg(feature = "tracing")]
        tracing::debug!("retrying in {:?}", delay);

        self.sleeper.sleep(delay).await;
    }
}
