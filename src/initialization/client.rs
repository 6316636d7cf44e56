//! HTTP client initialization.
//!
//! This module builds the client the fetcher sends page requests with.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client from the library configuration.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - A total request timeout of `timeout_seconds`
/// - Redirect following, limited to `max_redirects` hops
/// - gzip/deflate/brotli decompression
///
/// # Arguments
///
/// * `config` - Library configuration
///
/// # Errors
///
/// Returns `InitializationError::ConfigError` if the configuration fails
/// validation, or `InitializationError::HttpClientError` if the client cannot
/// be built.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    config.validate()?;

    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
        .user_agent(config.user_agent.clone())
        .gzip(true)
        .deflate(true)
        .brotli(true)
        .build()?;

    log::debug!(
        "HTTP client ready (timeout {}s, max {} redirects)",
        config.timeout_seconds,
        config.max_redirects
    );
    Ok(Arc::new(client))
}
