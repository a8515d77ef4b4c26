use crate::{FetchError, Result};

/// Reads `key`, falling back to `default`.
///
/// With `required`, an empty result (unset without a default, or set to an
/// empty string) is an error.
pub fn get_env(key: &str, default: &str, required: bool) -> Result<String> {
    let value = std::env::var(key).unwrap_or_else(|_| default.to_owned());
    if required && value.is_empty() {
        return Err(FetchError::MissingEnv(key.to_owned()));
    }
    Ok(value)
}

/// Whether the process runs inside a GitHub Actions job.
pub fn is_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|value| value == "true")
}
