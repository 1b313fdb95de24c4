use serde::Serialize;

pub const NOT_INITIALIZED: &str = "platform client not initialized";

/// Outcome of one publish attempt. Returned to the caller, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResult {
    #[serde(rename = "success")]
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl PublishResult {
    pub fn published(post_id: impl Into<String>) -> Self {
        let post_id = post_id.into();
        Self {
            ok: true,
            post_url: Some(twitter_client::tweet_url(&post_id)),
            post_id: Some(post_id),
            error_message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            post_id: None,
            post_url: None,
            error_message: Some(message.into()),
        }
    }
}
