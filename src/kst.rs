use std::fmt::Write as _;

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::{Asia::Seoul, Tz};

use crate::{FetchError, Result};

pub const KST_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S KST";
pub const KST_DATE_FORMAT: &str = "%Y-%m-%d";

/// Current time in Korea Standard Time.
pub fn kst_now() -> DateTime<Tz> {
    to_kst(Utc::now())
}

pub fn to_kst<Z: TimeZone>(at: DateTime<Z>) -> DateTime<Tz> {
    at.with_timezone(&Seoul)
}

/// Current KST time, e.g. `"2024-06-01 09:30:00 KST"`.
pub fn kst_timestamp() -> String {
    kst_now().format(KST_TIMESTAMP_FORMAT).to_string()
}

/// Current KST time rendered with a `strftime` pattern.
///
/// Unknown directives such as `%Q` are rejected with
/// [`FetchError::InvalidRequest`].
pub fn kst_now_formatted(fmt: &str) -> Result<String> {
    format_kst(kst_now(), fmt)
}

/// Renders `at` in KST with a `strftime` pattern.
pub fn format_kst<Z: TimeZone>(at: DateTime<Z>, fmt: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", to_kst(at).format(fmt))
        .map_err(|_| FetchError::InvalidRequest(format!("invalid time format '{fmt}'")))?;
    Ok(out)
}

/// Current KST date, e.g. `"2024-06-01"`.
pub fn kst_date() -> String {
    kst_now().format(KST_DATE_FORMAT).to_string()
}
