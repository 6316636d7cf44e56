//! Server data structures.

use serde::{Deserialize, Serialize};

use crate::analysis::Analyzer;

/// Shared state for the analyze server
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Analyzer shared by every request
    pub analyzer: Analyzer,
}

/// JSON body of `POST /api/analyze`
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    /// Address to analyze
    #[serde(default)]
    pub url: Option<String>,
}

impl AnalyzeRequest {
    /// The requested URL, if one was supplied and is not blank.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Body of a request rejected before analysis
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Reason the request was rejected
    pub error: String,
}

/// JSON response for `/health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok`
    pub status: &'static str,
    /// RFC 3339 UTC time of the probe
    pub timestamp: String,
}
