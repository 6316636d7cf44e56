//! Request header values.
//!
//! The fetcher sends these alongside the configured User-Agent so that requests
//! resemble a standard browser navigation.

/// Accept header of a top-level Chrome navigation
pub const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8";
/// Accept-Language header (English-speaking user, the common default)
pub const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.9";
/// Accept-Encoding header; reqwest decompresses all three
pub const ACCEPT_ENCODING_VALUE: &str = "gzip, deflate, br";
/// Connection header
pub const CONNECTION_VALUE: &str = "keep-alive";

/// Headers sent with every page request, in the order they are applied.
///
/// Used for logging and tests; `fetch::request` applies them through reqwest's
/// header constants.
pub const BROWSER_HEADERS: &[(&str, &str)] = &[
    ("accept", ACCEPT_HTML),
    ("accept-language", ACCEPT_LANGUAGE_VALUE),
    ("accept-encoding", ACCEPT_ENCODING_VALUE),
    ("connection", CONNECTION_VALUE),
    ("upgrade-insecure-requests", "1"),
    ("sec-fetch-dest", "document"),
    ("sec-fetch-mode", "navigate"),
    ("sec-fetch-site", "none"),
    ("sec-fetch-user", "?1"),
];
