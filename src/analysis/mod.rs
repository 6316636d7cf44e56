//! The analysis pipeline.
//!
//! `analyze_url` runs one request end to end: validate the input, fetch the
//! page, parse it, extract the profile and bulk collections, and assemble the
//! result. The first failure of any stage is classified once, here.

mod types;

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use log::{debug, info, warn};

use crate::app::validate_url;
use crate::config::Config;
use crate::error_handling::{classify, AnalysisError, InitializationError};
use crate::fetch::{fetch_page, FetchedPage};
use crate::initialization::init_client;
use crate::parse::{collect_links, collect_meta_tags, extract_profile, Document};

pub use types::{AnalysisFailure, AnalysisResponse, AnalysisResult};

/// Analyzes the page at `url`.
///
/// Never fails: every failure is classified into an
/// [`AnalysisResponse::Failure`].
///
/// # Arguments
///
/// * `client` - HTTP client built by [`crate::initialization::init_client`]
/// * `url` - Absolute http(s) address as supplied by the caller
pub async fn analyze_url(client: &reqwest::Client, url: &str) -> AnalysisResponse {
    match run_pipeline(client, url).await {
        Ok(result) => {
            info!(
                "Analyzed {} ({} meta tags, {} links)",
                url,
                result.all_meta_tags.len(),
                result.all_links.len()
            );
            AnalysisResponse::Success(Box::new(result))
        }
        Err(error) => {
            let classified = classify(&error);
            warn!("Analysis of {url} failed: {error}");
            debug!("Classified as {:?}", classified);
            AnalysisResponse::Failure(classified.into())
        }
    }
}

async fn run_pipeline(client: &reqwest::Client, url: &str) -> Result<AnalysisResult, AnalysisError> {
    let target = validate_url(url)?;
    let page = fetch_page(client, &target).await?;

    if page.is_empty() {
        return Err(AnalysisError::NoContent {
            status: page.status,
        });
    }
    if !page.is_success() {
        debug!(
            "{} answered {} {} with a body; analyzing it",
            page.final_url, page.status, page.status_text
        );
    }

    build_result(url, &page)
}

/// Parses the fetched page and assembles the result.
///
/// The document is not `Send`, so it lives only inside this synchronous call.
fn build_result(url: &str, page: &FetchedPage) -> Result<AnalysisResult, AnalysisError> {
    let document = Document::parse(&page.body)?;
    let response_info = page.response_info();
    let base = page.final_url.as_str();

    Ok(AnalysisResult {
        success: true,
        url: url.to_string(),
        meta_tags: extract_profile(&document, base, &response_info),
        all_meta_tags: collect_meta_tags(&document),
        all_links: collect_links(&document, base),
        analyzed_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        response_info,
    })
}

/// A reusable analyzer holding a shared HTTP client.
///
/// Cloning is cheap; clones share the client's connection pool.
#[derive(Debug, Clone)]
pub struct Analyzer {
    client: Arc<reqwest::Client>,
}

impl Analyzer {
    /// Builds an analyzer with a client configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError` if the configuration is invalid or the
    /// client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self {
            client: init_client(config)?,
        })
    }

    /// Wraps an existing client.
    pub fn with_client(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }

    /// Analyzes the page at `url`. See [`analyze_url`].
    pub async fn analyze(&self, url: &str) -> AnalysisResponse {
        analyze_url(&self.client, url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::{CLIENT_ERROR_STATUS, INVALID_URL_MESSAGE};

    fn page(body: &str) -> FetchedPage {
        FetchedPage {
            final_url: "https://example.com/after/redirect".to_string(),
            status: 200,
            status_text: "OK".to_string(),
            content_type: "text/html".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_build_result_uses_final_url_as_base() {
        let result = build_result(
            "https://example.com/start",
            &page(r#"<link rel="icon" href="fav.ico"><title>T</title>"#),
        )
        .expect("build");
        assert!(result.success);
        assert_eq!(result.url, "https://example.com/start");
        assert_eq!(result.meta_tags.final_url, "https://example.com/after/redirect");
        assert_eq!(result.meta_tags.favicon, "https://example.com/after/fav.ico");
        assert_eq!(result.response_info.status, 200);
        assert_eq!(result.all_links.len(), 1);
    }

    #[test]
    fn test_build_result_timestamp_is_rfc3339_utc() {
        let result = build_result("https://example.com/", &page("<p>hi</p>")).expect("build");
        assert!(result.analyzed_at.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&result.analyzed_at).is_ok());
    }

    #[test]
    fn test_build_result_binary_body_is_parse_failure() {
        let err = build_result("https://example.com/", &page("\u{0}PNG")).unwrap_err();
        assert!(matches!(err, AnalysisError::Parse(_)));
    }

    #[test]
    fn test_success_serializes_camel_case() {
        let result = build_result("https://example.com/", &page("<title>x</title>")).expect("build");
        let json = serde_json::to_value(AnalysisResponse::Success(Box::new(result))).expect("json");
        assert_eq!(json["success"], true);
        assert_eq!(json["metaTags"]["title"], "x");
        assert!(json["allMetaTags"].is_array());
        assert!(json["allLinks"].is_array());
        assert_eq!(json["responseInfo"]["contentType"], "text/html");
        assert!(json["analyzedAt"].is_string());
    }

    #[tokio::test]
    async fn test_invalid_input_fails_before_io() {
        let client = reqwest::Client::new();
        let response = analyze_url(&client, "not a url").await;
        assert_eq!(response.http_status(), CLIENT_ERROR_STATUS);
        let failure = response.failure().expect("failure");
        assert_eq!(failure.error, INVALID_URL_MESSAGE);
        assert_eq!(failure.code, None);

        let json = serde_json::to_value(&response).expect("json");
        assert_eq!(json, serde_json::json!({ "success": false, "error": "Invalid URL" }));
    }

    #[test]
    fn test_analyzer_new_rejects_invalid_config() {
        let config = Config {
            user_agent: String::new(),
            ..Default::default()
        };
        assert!(Analyzer::new(&config).is_err());
    }
}
