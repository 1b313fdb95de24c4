use apify_client::InstagramPost;
use serde::Serialize;
use thiserror::Error;

/// The latest post of an account, normalized from whatever the scraper returned.
///
/// Lives for one request only. Missing source fields become empty strings or zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalPost {
    pub caption: String,
    pub image_url: String,
    pub timestamp: String,
    pub like_count: u64,
    pub comment_count: u64,
    pub post_url: String,
    #[serde(rename = "success")]
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl CanonicalPost {
    pub fn from_scraped(post: &InstagramPost) -> Self {
        Self {
            caption: post.caption.clone().unwrap_or_default(),
            image_url: post.display_url.clone().unwrap_or_default(),
            timestamp: post.timestamp.clone().unwrap_or_default(),
            like_count: non_negative(post.likes_count),
            comment_count: non_negative(post.comments_count),
            post_url: post.url.clone().unwrap_or_default(),
            ok: true,
            error_message: None,
        }
    }

    /// `ok=false` record carrying only the failure message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error_message: Some(message.into()),
            ..Default::default()
        }
    }

    /// Image to republish, if the post has one.
    pub fn image(&self) -> Option<&str> {
        Some(self.image_url.as_str()).filter(|url| !url.trim().is_empty())
    }
}

// Instagram hides like counts on some posts; the scraper reports -1.
fn non_negative(count: Option<i64>) -> u64 {
    count.and_then(|c| u64::try_from(c).ok()).unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Scraper API key not configured")]
    Configuration,

    #[error("{0}")]
    Backend(String),

    #[error("No posts found for {handle}")]
    NotFound { handle: String },
}

impl FetchError {
    pub fn into_failed_post(self) -> CanonicalPost {
        CanonicalPost::failed(self.to_string())
    }
}
