//! Configuration constants.
//!
//! This module defines the constants used by the fetch and extraction pipeline,
//! including timeouts, size limits, and the fallback values used in responses.

// Network operation limits
/// Total per-request timeout in seconds (connect, redirects and body)
pub const HTTP_TIMEOUT_SECS: u64 = 10;

// Redirect handling
/// Maximum number of redirect hops to follow
/// A sixth redirect fails the request with a network failure
pub const MAX_REDIRECT_HOPS: usize = 5;

/// Default User-Agent string for HTTP requests.
///
/// Mimics a current desktop Chrome build, since many origins reject clients that
/// do not look like a browser. Users can override this via the `--user-agent`
/// CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Response and body size limits
/// Maximum response body size in bytes (2MB)
/// Larger responses fail with a network failure instead of being parsed
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Number of leading bytes inspected when deciding whether a body is markup at all
pub const BINARY_SNIFF_LEN: usize = 1024;

// Input validation
/// Maximum accepted input URL length (2048 characters)
/// This matches common browser and server limits
pub const MAX_URL_LENGTH: usize = 2048;

// Extraction
/// Name recorded for a `<meta>` element that carries content but no name,
/// property or charset attribute
pub const UNNAMED_META: &str = "unnamed";

/// Status description used when a status code has no canonical reason phrase
pub const UNKNOWN_STATUS_TEXT: &str = "Unknown Status Code";

// Server defaults
/// Default listening port for `serve`
pub const DEFAULT_PORT: u16 = 3000;
