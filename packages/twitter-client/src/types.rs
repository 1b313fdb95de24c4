use serde::{Deserialize, Serialize};

/// Body for `POST /2/tweets`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTweetRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<TweetMedia>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TweetMedia {
    pub media_ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreateTweetResponse {
    pub data: CreatedTweet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedTweet {
    pub id: String,
    pub text: String,
}

/// Response of the v1.1 media upload endpoint. Only the string id is kept;
/// the numeric `media_id` overflows JSON number precision in some clients.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MediaUploadResponse {
    pub media_id_string: String,
}
