use serde::Serialize;

use crate::domains::instagram::CanonicalPost;
use crate::domains::publishing::PublishResult;

/// Fetched post plus its rewritten message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedPost {
    #[serde(flatten)]
    pub post: CanonicalPost,
    /// Generated message, or the "Error during analysis: ..." text
    pub analysis: String,
    pub analysis_failed: bool,
}

/// Source side of an auto-post.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourcePost {
    pub username: String,
    pub caption: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoPostResult {
    pub instagram: SourcePost,
    pub twitter: PublishResult,
    pub generated_tweet: String,
}
