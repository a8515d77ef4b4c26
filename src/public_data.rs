//! Helpers for the Korean public data portal (`data.go.kr`).

/// Builds a `data.go.kr` request URL.
///
/// Service keys issued by the portal are already percent-encoded, so the key
/// and the remaining parameters are written into the query string verbatim.
/// Passing them through a query encoder would encode the key twice.
pub fn build_data_go_kr_url<I, K, V>(base_url: &str, api_key: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut url = format!("{base_url}?serviceKey={api_key}");
    for (key, value) in params {
        url.push('&');
        url.push_str(key.as_ref());
        url.push('=');
        url.push_str(value.as_ref());
    }
    url
}
