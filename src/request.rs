use serde_json::Value as JsonValue;

use crate::RetryOptions;

/// HTTP method supported by the fetcher.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Method {
    #[default]
    Get,
    Post,
}

/// Description of one outbound request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FetchRequest {
    pub method: Method,
    pub url: String,
    /// Query parameters, appended in order.
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    /// JSON body, only sent with [`Method::Post`].
    pub json_body: Option<JsonValue>,
    /// Overrides the fetcher-wide options for this request.
    pub options: Option<RetryOptions>,
}

impl FetchRequest {
    /// Builds a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Builds a POST request carrying `body` as JSON.
    pub fn post(url: impl Into<String>, body: JsonValue) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            json_body: Some(body),
            ..Self::default()
        }
    }

    /// Appends query parameters.
    pub fn query<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Appends a single header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_options(mut self, opts: RetryOptions) -> Self {
        self.options = Some(opts);
        self
    }
}
