use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::{FetchRequest, Fetcher, RateLimiter, Result};

pub const COINGECKO_BASE: &str = "https://api.coingecko.com/api/v3";

/// Longest history the free tier serves.
pub const MAX_HISTORY_DAYS: u32 = 365;

/// CoinGecko public API client.
///
/// Every call first waits on the shared [`RateLimiter`].
#[derive(Clone, Debug)]
pub struct CoinGeckoClient {
    fetcher: Fetcher,
    limiter: Arc<RateLimiter>,
    base_url: String,
}

impl CoinGeckoClient {
    /// Creates a client with its own free-tier limiter.
    pub fn new(fetcher: Fetcher) -> Self {
        Self {
            fetcher,
            limiter: Arc::new(RateLimiter::coingecko()),
            base_url: COINGECKO_BASE.to_owned(),
        }
    }

    /// Shares `limiter` with other callers of the same API key or IP.
    pub fn with_rate_limiter(mut self, limiter: Arc<RateLimiter>) -> Self {
        self.limiter = limiter;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Current prices: `{coin_id: {usd: price, usd_24h_change: pct}}`.
    pub async fn simple_price<S: AsRef<str>>(
        &self,
        coin_ids: &[S],
        vs_currencies: &str,
        include_24h_change: bool,
    ) -> Result<JsonValue> {
        let request = FetchRequest::get(format!("{}/simple/price", self.base_url)).query([
            ("ids", join_ids(coin_ids)),
            ("vs_currencies", vs_currencies.to_owned()),
            ("include_24hr_change", include_24h_change.to_string()),
        ]);
        self.send(&request).await
    }

    /// Market data list (price, market cap, volume, 24h change, ...).
    pub async fn market_data<S: AsRef<str>>(
        &self,
        coin_ids: &[S],
        vs_currency: &str,
    ) -> Result<JsonValue> {
        let request = FetchRequest::get(format!("{}/coins/markets", self.base_url)).query([
            ("ids", join_ids(coin_ids)),
            ("vs_currency", vs_currency.to_owned()),
            ("order", "market_cap_desc".to_owned()),
            ("sparkline", "false".to_owned()),
        ]);
        self.send(&request).await
    }

    /// Historical `prices`, `market_caps` and `total_volumes` as
    /// `[timestamp_ms, value]` pairs. `days` is capped at [`MAX_HISTORY_DAYS`].
    pub async fn historical(
        &self,
        coin_id: &str,
        days: u32,
        vs_currency: &str,
    ) -> Result<JsonValue> {
        let days = days.min(MAX_HISTORY_DAYS);
        let url = format!("{}/coins/{coin_id}/market_chart", self.base_url);
        let request = FetchRequest::get(url).query([
            ("vs_currency", vs_currency.to_owned()),
            ("days", days.to_string()),
        ]);
        self.send(&request).await
    }

    async fn send(&self, request: &FetchRequest) -> Result<JsonValue> {
        self.limiter.acquire().await;
        self.fetcher.fetch(request).await?.json()
    }
}

fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",")
}
