//! Charset token extraction.

use std::sync::LazyLock;

use regex::Regex;

const CHARSET_TOKEN_PATTERN: &str = r#"(?i)charset\s*=\s*["']?([^\s;"']+)"#;

static CHARSET_TOKEN_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(CHARSET_TOKEN_PATTERN)
        .map_err(|e| {
            log::error!(
                "Failed to compile charset pattern '{}': {}",
                CHARSET_TOKEN_PATTERN,
                e
            )
        })
        .ok()
});

/// Extracts the `charset=` token from a Content-Type style string.
///
/// `"text/html; charset=ISO-8859-1"` yields `ISO-8859-1`.
pub fn charset_token(content: &str) -> Option<String> {
    CHARSET_TOKEN_RE
        .as_ref()?
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
