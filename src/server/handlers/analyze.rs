//! Analyze handler.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::super::types::{AnalyzeRequest, ErrorBody, ServerState};

/// Message for a request without a usable `url` field
pub const URL_REQUIRED_MESSAGE: &str = "URL is required";

/// `POST /api/analyze`: analyzes the page named by the JSON body's `url`.
///
/// A missing or unreadable body is a 400 with `{"error": "URL is required"}`.
/// Otherwise the analysis response is returned with the status it maps to.
pub async fn analyze_handler(State(state): State<ServerState>, body: Bytes) -> Response {
    let request = if body.is_empty() {
        AnalyzeRequest::default()
    } else {
        serde_json::from_slice::<AnalyzeRequest>(&body).unwrap_or_else(|e| {
            log::debug!("Unreadable analyze request body: {e}");
            AnalyzeRequest::default()
        })
    };

    let Some(url) = request.url() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: URL_REQUIRED_MESSAGE.to_string(),
            }),
        )
            .into_response();
    };

    log::info!("Analyze request for {url}");
    let response = state.analyzer.analyze(url).await;
    let status =
        StatusCode::from_u16(response.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (status, Json(response)).into_response()
}
