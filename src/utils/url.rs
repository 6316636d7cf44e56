//! URL resolution.

use url::Url;

/// Resolves a possibly-relative URL found in markup against the page address.
///
/// - An empty input yields an empty string.
/// - Absolute, protocol-relative and relative inputs are joined onto `base`.
/// - Input whose first path segment carries a `:` is joined only when the text
///   before it is a valid scheme (`mailto:`, `https:img.png` ...); otherwise
///   it is malformed (`:::bad:::`).
/// - Malformed input, or an unusable base, is returned unchanged.
///
/// # Arguments
///
/// * `raw` - The attribute value as written in the document
/// * `base` - The page's resolved address (after redirects)
///
/// # Examples
///
/// ```
/// use meta_analyzer::utils::resolve_url;
///
/// assert_eq!(
///     resolve_url("../img/x.png", "https://example.com/blog/post"),
///     "https://example.com/img/x.png"
/// );
/// assert_eq!(resolve_url(":::bad:::", "https://example.com/"), ":::bad:::");
/// ```
pub fn resolve_url(raw: &str, base: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let scheme = scheme_prefix(raw);
    if scheme.is_some_and(|scheme| !is_valid_scheme(scheme)) {
        log::debug!("Leaving malformed URL '{raw}' unresolved");
        return raw.to_string();
    }

    let joined = Url::parse(base).and_then(|base| base.join(raw));
    // A base that does not parse still leaves absolute input usable
    let resolved = match (joined, scheme) {
        (Ok(url), _) => Ok(url),
        (Err(_), Some(_)) => Url::parse(raw.trim()),
        (Err(e), None) => Err(e),
    };

    match resolved {
        Ok(url) => url.to_string(),
        Err(e) => {
            log::debug!("Could not resolve '{raw}' against '{base}': {e}");
            raw.to_string()
        }
    }
}

/// The text before a `:` that appears ahead of the first `/`, `?` or `#`.
fn scheme_prefix(raw: &str) -> Option<&str> {
    let head = raw
        .trim_start()
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    head.split_once(':').map(|(scheme, _)| scheme)
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
