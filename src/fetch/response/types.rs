//! Response data structures.

use serde::Serialize;

/// The outcome of a completed page request.
///
/// Non-2xx responses are still a `FetchedPage`; deciding whether a status or
/// an empty body is a failure belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Address after all redirects were followed
    pub final_url: String,
    /// HTTP status code
    pub status: u16,
    /// Canonical reason phrase of the status
    pub status_text: String,
    /// Value of the Content-Type header, empty when absent
    pub content_type: String,
    /// Decoded response body
    pub body: String,
}

impl FetchedPage {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True when the body carries no bytes at all. Whitespace counts as content.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// The response metadata reported alongside an analysis.
    pub fn response_info(&self) -> ResponseInfo {
        ResponseInfo {
            status: self.status,
            content_type: self.content_type.clone(),
            final_url: self.final_url.clone(),
        }
    }
}

/// Response metadata echoed in a successful analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseInfo {
    /// HTTP status code of the final response
    pub status: u16,
    /// Content-Type header value, empty when absent
    pub content_type: String,
    /// Address after redirects
    pub final_url: String,
}
