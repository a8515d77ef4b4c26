//! `market-fetch` collects helpers for pulling market data from public HTTP
//! APIs.
//!
//! The core is [`Fetcher::fetch`], an HTTP call with exponential backoff
//! retry. API clients built on it:
//! - [`CoinGeckoClient`] (rate limited through [`RateLimiter`])
//! - [`BinanceClient`]
//! - [`DefiLlamaClient`]
//!
//! Plus JSON file persistence, environment lookups, number formatting and
//! KST time helpers.

mod binance;
mod coingecko;
mod defillama;
mod env;
mod error;
mod fetcher;
mod format;
mod kst;
mod options;
mod public_data;
mod rate_limit;
mod request;
mod sleep;
mod store;
mod types;

pub use binance::{BinanceClient, BINANCE_BASE};
pub use coingecko::{CoinGeckoClient, COINGECKO_BASE, MAX_HISTORY_DAYS};
pub use defillama::{DefiLlamaClient, DEFILLAMA_BASE};
pub use env::{get_env, is_github_actions};
pub use error::{AttemptFailure, FetchError};
pub use fetcher::Fetcher;
pub use format::{format_number, format_percent, format_usd};
pub use kst::{format_kst, kst_date, kst_now, kst_now_formatted, kst_timestamp, to_kst};
pub use options::RetryOptions;
pub use public_data::build_data_go_kr_url;
pub use rate_limit::{RateLimiter, COINGECKO_MIN_INTERVAL};
pub use request::{FetchRequest, Method};
pub use sleep::{SleepFuture, Sleeper, TokioSleeper};
pub use store::{ensure_data_dir, load_json, load_json_or, save_json, try_save_json};
pub use types::FetchResponse;

pub use reqwest::header::HeaderMap;

pub type Result<T> = std::result::Result<T, FetchError>;
