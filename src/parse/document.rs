//! Queryable document tree.
//!
//! A thin wrapper over `scraper::Html` exposing the handful of queries the
//! extractor needs: elements by tag, and elements by tag plus an attribute
//! predicate. Parsing is html5ever's browser-style recovery, so malformed
//! markup still yields a tree.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::BINARY_SNIFF_LEN;
use crate::error_handling::AnalysisError;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_with_fallback("title", "TITLE_SELECTOR"));

/// A parsed HTML document.
///
/// Not `Send`: build it, query it and drop it without crossing an `.await`.
pub struct Document {
    html: Html,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("parse_errors", &self.html.errors.len())
            .finish()
    }
}

/// True when the leading bytes contain a NUL, which markup never does.
fn looks_binary(markup: &str) -> bool {
    markup
        .as_bytes()
        .iter()
        .take(BINARY_SNIFF_LEN)
        .any(|&b| b == 0)
}

fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

impl Document {
    /// Parses markup into a document tree.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Parse` only when the input is not markup at all
    /// (binary payload). Malformed HTML never fails.
    pub fn parse(markup: &str) -> Result<Self, AnalysisError> {
        if looks_binary(markup) {
            return Err(AnalysisError::Parse(
                "response body is binary data, not markup".to_string(),
            ));
        }

        let html = Html::parse_document(markup);
        if !html.errors.is_empty() {
            log::trace!("Recovered from {} markup errors", html.errors.len());
        }
        Ok(Self { html })
    }

    /// All elements with the given (lowercase) tag name, in document order.
    pub fn elements<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(move |element| element.value().name() == tag)
    }

    /// Elements named `tag` whose `attr` equals `value` (ASCII case-insensitive).
    pub fn elements_with_attr<'a>(
        &'a self,
        tag: &'a str,
        attr: &'a str,
        value: &'a str,
    ) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.elements(tag).filter(move |element| {
            element
                .value()
                .attr(attr)
                .is_some_and(|actual| actual.eq_ignore_ascii_case(value))
        })
    }

    /// Elements named `tag` that carry `attr` at all.
    pub fn elements_having_attr<'a>(
        &'a self,
        tag: &'a str,
        attr: &'a str,
    ) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.elements(tag)
            .filter(move |element| element.value().attr(attr).is_some())
    }

    /// Trimmed text of the first `<title>` element.
    pub fn title(&self) -> Option<String> {
        self.html.select(&TITLE_SELECTOR).next().map(trimmed_text)
    }

    /// Trimmed text of the first element named `tag`.
    pub fn first_text(&self, tag: &str) -> Option<String> {
        if tag == "title" {
            return self.title();
        }
        self.elements(tag).next().map(trimmed_text)
    }

    /// An attribute of the root `<html>` element.
    pub fn root_attr(&self, attr: &str) -> Option<&str> {
        self.html.root_element().value().attr(attr)
    }
}
