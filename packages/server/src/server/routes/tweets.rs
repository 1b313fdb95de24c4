use axum::{extract::Extension, Json};
use serde::Deserialize;

use crate::domains::publishing::PublishResult;
use crate::server::{ApiError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostTweetRequest {
    pub content: String,
    #[serde(default, alias = "image_url")]
    pub image_url: Option<String>,
}

/// Publish caller-supplied content. 400 when publishing fails.
pub async fn post_tweet_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<PostTweetRequest>,
) -> Result<Json<PublishResult>, ApiError> {
    let result = state
        .relay
        .publish(&request.content, request.image_url.as_deref())
        .await;

    if !result.ok {
        let detail = result
            .error_message
            .unwrap_or_else(|| "Failed to post tweet".to_string());
        return Err(ApiError::BadRequest(detail));
    }

    Ok(Json(result))
}
