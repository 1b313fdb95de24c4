use axum::{
    extract::{Extension, Path},
    Json,
};

use crate::domains::relay::AnalyzedPost;
use crate::server::{ApiError, AppState};

/// Latest post of `handle` with its generated message. 404 when the fetch fails.
pub async fn instagram_post_handler(
    Extension(state): Extension<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<AnalyzedPost>, ApiError> {
    let analyzed = state.relay.analyze_latest(Some(&handle)).await?;
    Ok(Json(analyzed))
}

/// Same as [`instagram_post_handler`] for the configured default account.
pub async fn default_instagram_post_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<AnalyzedPost>, ApiError> {
    let analyzed = state.relay.analyze_latest(None).await?;
    Ok(Json(analyzed))
}
