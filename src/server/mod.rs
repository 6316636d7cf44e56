//! HTTP server exposing the analyzer.
//!
//! Provides three endpoints:
//! - `POST /api/analyze` - analyze the page named by `{"url": ...}`
//! - `GET /` - plain-text liveness message
//! - `GET /health` - JSON status with a timestamp

mod handlers;
mod types;

use axum::routing::{get, post};
use axum::Router;

use crate::analysis::Analyzer;
use handlers::{analyze_handler, health_handler, root_handler};
pub use types::{AnalyzeRequest, ServerState};

/// Builds the router with all endpoints.
pub fn create_router(analyzer: Analyzer) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/analyze", post(analyze_handler))
        .with_state(ServerState { analyzer })
}

/// Binds `host:port` and serves until the process is stopped.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(host: &str, port: u16, analyzer: Analyzer) -> Result<(), anyhow::Error> {
    let app = create_router(analyzer);

    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}:{}: {}", host, port, e))?;

    log::info!("Server running on http://{}:{}/", host, port);
    log::info!("  - Analyze: POST http://{}:{}/api/analyze", host, port);
    log::info!("  - Health: http://{}:{}/health", host, port);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
