//! Analysis output types.

use serde::Serialize;

use crate::error_handling::{ClassifiedError, SERVER_ERROR_STATUS};
use crate::fetch::ResponseInfo;
use crate::parse::{LinkEntry, MetaProfile, RawMetaEntry};

/// A successful analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Always `true`
    pub success: bool,
    /// The address as the caller supplied it
    pub url: String,
    /// The curated metadata profile
    pub meta_tags: MetaProfile,
    /// Every `<meta>` element, in document order
    pub all_meta_tags: Vec<RawMetaEntry>,
    /// Every `<link>` element, in document order
    pub all_links: Vec<LinkEntry>,
    /// RFC 3339 UTC timestamp of when the analysis completed
    pub analyzed_at: String,
    /// Metadata of the final response
    pub response_info: ResponseInfo,
}

/// A failed analysis, as presented to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisFailure {
    /// Always `false`
    pub success: bool,
    /// Classified, user-safe message
    pub error: String,
    /// Machine-readable code, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Transport status an adapter should answer with
    #[serde(skip)]
    pub http_status: u16,
}

impl From<ClassifiedError> for AnalysisFailure {
    fn from(classified: ClassifiedError) -> Self {
        Self {
            success: false,
            error: classified.message,
            code: classified.code,
            http_status: classified.http_status,
        }
    }
}

/// What one analysis returns: a result or a classified failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResponse {
    /// The page was fetched and parsed
    Success(Box<AnalysisResult>),
    /// Some stage failed
    Failure(AnalysisFailure),
}

impl AnalysisResponse {
    /// True for [`AnalysisResponse::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisResponse::Success(_))
    }

    /// Transport status an adapter should answer with: 200 on success, 400 for
    /// invalid input, 500 otherwise.
    pub fn http_status(&self) -> u16 {
        match self {
            AnalysisResponse::Success(_) => 200,
            AnalysisResponse::Failure(failure) if failure.http_status != 0 => failure.http_status,
            AnalysisResponse::Failure(_) => SERVER_ERROR_STATUS,
        }
    }

    /// The result, if the analysis succeeded.
    pub fn into_result(self) -> Option<AnalysisResult> {
        match self {
            AnalysisResponse::Success(result) => Some(*result),
            AnalysisResponse::Failure(_) => None,
        }
    }

    /// The failure, if the analysis failed.
    pub fn failure(&self) -> Option<&AnalysisFailure> {
        match self {
            AnalysisResponse::Success(_) => None,
            AnalysisResponse::Failure(failure) => Some(failure),
        }
    }
}
