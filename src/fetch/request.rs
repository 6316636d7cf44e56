//! HTTP request building.
//!
//! This module provides utilities for constructing browser-like page requests.

use reqwest::header::{HeaderName, HeaderValue};

use crate::config::BROWSER_HEADERS;

/// Browser request headers sent with every page fetch.
///
/// Many origins reject clients that do not look like a browser, so each request
/// carries the content negotiation and fetch-metadata headers of a Chrome
/// navigation. The User-Agent is set on the client itself.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Returns headers as a vector of (name, value) tuples for logging.
    pub(crate) fn as_vec() -> Vec<(String, String)> {
        BROWSER_HEADERS
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        BROWSER_HEADERS
            .iter()
            .fold(builder, |builder, &(name, value)| {
                builder.header(
                    HeaderName::from_static(name),
                    HeaderValue::from_static(value),
                )
            })
    }
}
