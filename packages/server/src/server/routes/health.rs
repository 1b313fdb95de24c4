use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct RootResponse {
    message: &'static str,
}

/// Liveness check
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Instagram relay API is running",
    })
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    scraper: bool,
    llm: bool,
    publisher: bool,
}

/// Health check endpoint
///
/// Always 200. Reports which vendor clients were configured at startup so a
/// missing credential shows up before the first failing request.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    let deps = state.relay.deps();
    Json(HealthResponse {
        status: "ok",
        scraper: deps.scraper.is_some(),
        llm: deps.ai.is_some(),
        publisher: deps.publisher.is_some(),
    })
}
