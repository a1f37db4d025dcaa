//! Tolerant query-string parsing for the shareable-URL contract.

use veyra_core::fx::UrlParams;

/// Parses a query string into the recognized parameter set.
///
/// Accepts the string with or without a leading `?`, ignores any `#fragment`
/// tail, and percent-decodes keys and values (`+` as space). Unrecognized
/// keys are skipped and the first value wins when a key repeats; a key
/// without a value is recorded as an empty string. Input that yields no
/// recognized pair parses to an empty set, never an error.
#[must_use]
pub fn parse_query(query: &str) -> UrlParams {
    let query = query.strip_prefix('?').unwrap_or(query);
    let query = query.split_once('#').map_or(query, |(before, _)| before);
    let mut params = UrlParams::default();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        params.set(&key, &value);
    }
    params
}
