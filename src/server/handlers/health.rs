//! Liveness handlers.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};

use super::super::types::HealthResponse;

/// Plain-text liveness message served at `/`
pub const ROOT_MESSAGE: &str = "Meta Tag Analyzer API is running 🚀";

/// `GET /`
pub async fn root_handler() -> &'static str {
    ROOT_MESSAGE
}

/// `GET /health`: status plus the current UTC time
pub async fn health_handler() -> Response {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
    .into_response()
}
