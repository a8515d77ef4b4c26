use std::collections::HashMap;

use serde::Deserialize;

use crate::{FetchError, FetchRequest, Fetcher, Result};

pub const BINANCE_BASE: &str = "https://api.binance.com/api/v3";

#[derive(Debug, Deserialize)]
struct Ticker {
    symbol: String,
    price: String,
}

impl Ticker {
    fn parse_price(&self) -> Result<f64> {
        self.price.parse::<f64>().map_err(|err| {
            FetchError::Decode(format!(
                "invalid price '{}' for {}: {err}",
                self.price, self.symbol
            ))
        })
    }
}

/// Binance public spot ticker client.
#[derive(Clone, Debug)]
pub struct BinanceClient {
    fetcher: Fetcher,
    base_url: String,
}

impl BinanceClient {
    pub fn new(fetcher: Fetcher) -> Self {
        Self {
            fetcher,
            base_url: BINANCE_BASE.to_owned(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Last price of `symbol`, e.g. `"BTCUSDT"`.
    pub async fn price(&self, symbol: &str) -> Result<f64> {
        let request = FetchRequest::get(format!("{}/ticker/price", self.base_url))
            .query([("symbol", symbol)]);
        let ticker: Ticker = self.fetcher.fetch(&request).await?.json()?;
        ticker.parse_price()
    }

    /// Prices for `symbols` from a single all-tickers call.
    ///
    /// Symbols Binance does not list map to `0.0`.
    pub async fn prices<S: AsRef<str>>(&self, symbols: &[S]) -> Result<HashMap<String, f64>> {
        let request = FetchRequest::get(format!("{}/ticker/price", self.base_url));
        let tickers: Vec<Ticker> = self.fetcher.fetch(&request).await?.json()?;

        let mut all = HashMap::with_capacity(tickers.len());
        for ticker in &tickers {
            all.insert(ticker.symbol.as_str(), ticker.parse_price()?);
        }

        Ok(symbols
            .iter()
            .map(|symbol| {
                let symbol = symbol.as_ref();
                (symbol.to_owned(), all.get(symbol).copied().unwrap_or(0.0))
            })
            .collect())
    }
}
