//! Page retrieval.
//!
//! The fetcher sends one browser-like GET request, follows redirects (bounded by
//! the client's redirect policy) and reports the final address, status,
//! content-type and body. Non-2xx statuses are results, not errors.

mod request;
mod response;

use log::{debug, info};
use url::Url;

use crate::error_handling::AnalysisError;
use request::RequestHeaders;

pub use response::{FetchedPage, ResponseInfo};

/// Fetches a page.
///
/// # Arguments
///
/// * `client` - HTTP client built by `initialization::init_client`
/// * `url` - Validated absolute http(s) URL
///
/// # Errors
///
/// Returns `AnalysisError::Network` when no usable response arrives (DNS,
/// refused connection, timeout, redirect limit, oversized body) and
/// `AnalysisError::Http` when a response arrives but its body cannot be read.
pub async fn fetch_page(client: &reqwest::Client, url: &Url) -> Result<FetchedPage, AnalysisError> {
    debug!("Fetching {url}");
    log::trace!("Request headers: {:?}", RequestHeaders::as_vec());

    let response = RequestHeaders::apply_to_request_builder(client.get(url.clone()))
        .send()
        .await
        .map_err(|e| {
            let error = AnalysisError::from(e);
            info!("Request to {url} failed: {error}");
            error
        })?;

    if response.url() != url {
        debug!("{url} redirected to {}", response.url());
    }

    response::extract_page(response).await
}
