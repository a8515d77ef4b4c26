use serde_json::Value as JsonValue;

use crate::{FetchRequest, Fetcher, Result};

pub const DEFILLAMA_BASE: &str = "https://api.llama.fi";

/// DeFiLlama open API client. No key required.
#[derive(Clone, Debug)]
pub struct DefiLlamaClient {
    fetcher: Fetcher,
    base_url: String,
}

impl DefiLlamaClient {
    pub fn new(fetcher: Fetcher) -> Self {
        Self {
            fetcher,
            base_url: DEFILLAMA_BASE.to_owned(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// TVL history and metadata for a protocol slug such as `"aave"`.
    pub async fn protocol_tvl(&self, protocol: &str) -> Result<JsonValue> {
        self.get(FetchRequest::get(format!("{}/protocol/{protocol}", self.base_url)))
            .await
    }

    /// Fees and revenue overview across protocols.
    pub async fn fees(&self, exclude_charts: bool) -> Result<JsonValue> {
        let mut request = FetchRequest::get(format!("{}/overview/fees", self.base_url));
        if exclude_charts {
            request = request.query([
                ("excludeTotalDataChart", "true"),
                ("excludeTotalDataChartBreakdown", "true"),
            ]);
        }
        self.get(request).await
    }

    /// Yield pools.
    pub async fn yields(&self) -> Result<JsonValue> {
        self.get(FetchRequest::get(format!("{}/pools", self.base_url)))
            .await
    }

    async fn get(&self, request: FetchRequest) -> Result<JsonValue> {
        self.fetcher.fetch(&request).await?.json()
    }
}
