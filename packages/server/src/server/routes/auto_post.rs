use axum::{
    extract::{Extension, Path},
    Json,
};

use crate::domains::relay::AutoPostResult;
use crate::server::{ApiError, AppState};

/// Fetch, rewrite and republish in one call.
///
/// Only a failed fetch is an HTTP error (404). Publish failures come back
/// inside `twitter` with a 200.
pub async fn auto_post_handler(
    Extension(state): Extension<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<AutoPostResult>, ApiError> {
    let result = state.relay.auto_post(Some(&handle)).await?;
    Ok(Json(result))
}

pub async fn default_auto_post_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<AutoPostResult>, ApiError> {
    let result = state.relay.auto_post(None).await?;
    Ok(Json(result))
}
