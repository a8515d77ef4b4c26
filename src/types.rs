use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::{FetchError, Result};

/// Successful (HTTP 200) response with its body fully read.
#[derive(Clone, Debug)]
pub struct FetchResponse {
    pub(crate) status: u16,
    pub(crate) headers: HeaderMap,
    pub(crate) body: String,
}

impl FetchResponse {
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw body text.
    pub fn text(&self) -> &str {
        &self.body
    }

    pub fn into_text(self) -> String {
        self.body
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|err| {
            FetchError::Decode(format!("invalid JSON response: {err}; body: {}", self.body))
        })
    }
}
