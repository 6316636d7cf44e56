// Utils module tests.

use crate::utils::{charset_token, parse_selector_with_fallback, resolve_url};

const BASE: &str = "https://example.com/blog/post";

#[test]
fn test_resolve_url_parent_relative() {
    assert_eq!(
        resolve_url("../img/x.png", BASE),
        "https://example.com/img/x.png"
    );
}

#[test]
fn test_resolve_url_root_relative() {
    assert_eq!(
        resolve_url("/favicon.ico", BASE),
        "https://example.com/favicon.ico"
    );
}

#[test]
fn test_resolve_url_protocol_relative_takes_base_scheme() {
    assert_eq!(
        resolve_url("//cdn.example.com/icon.png", "http://example.com/"),
        "http://cdn.example.com/icon.png"
    );
}

#[test]
fn test_resolve_url_absolute_passes_through() {
    assert_eq!(
        resolve_url("https://cdn.example.com/a.png", BASE),
        "https://cdn.example.com/a.png"
    );
}

#[test]
fn test_resolve_url_empty_is_empty() {
    assert_eq!(resolve_url("", BASE), "");
}

#[test]
fn test_resolve_url_malformed_is_unchanged() {
    assert_eq!(resolve_url(":::bad:::", BASE), ":::bad:::");
    assert_eq!(resolve_url("http://[::1", BASE), "http://[::1");
}

#[test]
fn test_resolve_url_same_scheme_without_slashes_is_relative() {
    assert_eq!(
        resolve_url("https:img.png", BASE),
        "https://example.com/blog/img.png"
    );
}

#[test]
fn test_resolve_url_invalid_scheme_prefix_is_unchanged() {
    assert_eq!(resolve_url("1ab:cd", BASE), "1ab:cd");
    assert_eq!(resolve_url("we ird:thing", BASE), "we ird:thing");
}

#[test]
fn test_resolve_url_absolute_with_bad_base() {
    assert_eq!(
        resolve_url("https://cdn.example.com/a.png", "not a base"),
        "https://cdn.example.com/a.png"
    );
}

#[test]
fn test_resolve_url_bad_base_is_unchanged() {
    assert_eq!(resolve_url("img/x.png", "not a base"), "img/x.png");
}

#[test]
fn test_resolve_url_other_schemes() {
    assert_eq!(
        resolve_url("mailto:team@example.com", BASE),
        "mailto:team@example.com"
    );
}

#[test]
fn test_resolve_url_is_idempotent_for_resolved_output() {
    let once = resolve_url("a/b.png?x=1#frag", BASE);
    assert_eq!(once, "https://example.com/blog/a/b.png?x=1#frag");
    assert_eq!(resolve_url(&once, BASE), once);
}

#[test]
fn test_parse_selector_with_fallback_invalid_matches_nothing() {
    let selector = parse_selector_with_fallback("meta[[", "test");
    let html = scraper::Html::parse_document("<meta name='a'>");
    assert_eq!(html.select(&selector).count(), 0);
}

#[test]
fn test_charset_token() {
    assert_eq!(
        charset_token("text/html; charset=ISO-8859-1").as_deref(),
        Some("ISO-8859-1")
    );
    assert_eq!(
        charset_token(r#"text/html;charset="utf-8""#).as_deref(),
        Some("utf-8")
    );
    assert_eq!(charset_token("text/html"), None);
}
