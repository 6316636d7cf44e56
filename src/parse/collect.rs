//! Bulk collection of every `<meta>` and `<link>` element.

use serde::Serialize;

use super::document::Document;
use crate::config::UNNAMED_META;
use crate::utils::resolve_url;

/// One `<meta>` element as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawMetaEntry {
    /// The `name`, `property` or `charset` attribute, or `"unnamed"`
    pub name: String,
    /// The `content` attribute, empty when absent
    pub content: String,
    /// The `property` attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
}

/// One `<link>` element with its href made absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    /// The `rel` attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    /// The `href` attribute resolved against the page address
    pub href: String,
    /// The `type` attribute
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    /// The `sizes` attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
}

/// Collects every `<meta>` element in document order.
///
/// Duplicates are kept. An element is skipped only when it yields neither a
/// name nor content.
pub fn collect_meta_tags(document: &Document) -> Vec<RawMetaEntry> {
    let entries: Vec<RawMetaEntry> = document
        .elements("meta")
        .filter_map(|element| {
            let attrs = element.value();
            let content = attrs.attr("content").unwrap_or_default().to_string();
            let name = ["name", "property", "charset"]
                .iter()
                .filter_map(|key| attrs.attr(key))
                .find(|value| !value.is_empty())
                .map(str::to_string)
                .or_else(|| (!content.is_empty()).then(|| UNNAMED_META.to_string()))?;

            Some(RawMetaEntry {
                name,
                content,
                property: attrs.attr("property").map(str::to_string),
            })
        })
        .collect();

    log::debug!("Collected {} meta tags", entries.len());
    entries
}

/// Collects every `<link>` element in document order, resolving each href
/// against `base`.
pub fn collect_links(document: &Document, base: &str) -> Vec<LinkEntry> {
    let links: Vec<LinkEntry> = document
        .elements("link")
        .map(|element| {
            let attrs = element.value();
            LinkEntry {
                rel: attrs.attr("rel").map(str::to_string),
                href: resolve_url(attrs.attr("href").unwrap_or_default(), base),
                link_type: attrs.attr("type").map(str::to_string),
                sizes: attrs.attr("sizes").map(str::to_string),
            }
        })
        .collect();

    log::debug!("Collected {} links", links.len());
    links
}
