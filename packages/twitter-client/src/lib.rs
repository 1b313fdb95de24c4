//! Pure X (Twitter) REST client.
//!
//! Covers exactly what a publishing bot needs: uploading an image through the
//! v1.1 media endpoint and creating a post through the v2 API, both signed
//! with OAuth 1.0a user context.
//!
//! ```rust,ignore
//! use twitter_client::{Credentials, TwitterClient};
//!
//! let client = TwitterClient::new(credentials);
//! let media_id = client.upload_media(bytes, "image.jpg").await?;
//! let tweet = client.create_tweet("Hello", &[media_id]).await?;
//! println!("{}", tweet_url(&tweet.id));
//! ```

pub mod error;
pub mod oauth;
pub mod types;

pub use error::{Result, TwitterError};
pub use oauth::Credentials;
pub use types::{CreateTweetRequest, CreatedTweet, TweetMedia};

use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};

const API_BASE_URL: &str = "https://api.twitter.com";
const UPLOAD_BASE_URL: &str = "https://upload.twitter.com";

/// Public URL of a post. X redirects `/user/` to the author's handle.
pub fn tweet_url(tweet_id: &str) -> String {
    format!("https://twitter.com/user/status/{}", tweet_id)
}

#[derive(Clone)]
pub struct TwitterClient {
    client: reqwest::Client,
    credentials: Credentials,
    api_base_url: String,
    upload_base_url: String,
}

impl TwitterClient {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
            api_base_url: API_BASE_URL.to_string(),
            upload_base_url: UPLOAD_BASE_URL.to_string(),
        }
    }

    pub fn with_base_urls(mut self, api: impl Into<String>, upload: impl Into<String>) -> Self {
        self.api_base_url = api.into();
        self.upload_base_url = upload.into();
        self
    }

    /// Upload image bytes and return the media id to attach to a post.
    pub async fn upload_media(&self, bytes: Vec<u8>, file_name: &str) -> Result<String> {
        let url = format!("{}/1.1/media/upload.json", self.upload_base_url);
        let auth = oauth::authorization_header(&self.credentials, "POST", &url, &[])?;

        let size = bytes.len();
        let form = Form::new().part("media", Part::bytes(bytes).file_name(file_name.to_string()));

        let resp = self
            .client
            .post(&url)
            .header(AUTHORIZATION, auth)
            .multipart(form)
            .send()
            .await?;

        let resp = check_status(resp).await?;
        let uploaded: types::MediaUploadResponse = resp.json().await?;
        tracing::info!(media_id = %uploaded.media_id_string, size, "Media uploaded");

        Ok(uploaded.media_id_string)
    }

    /// Create a post, attaching `media_ids` when non-empty.
    pub async fn create_tweet(&self, text: &str, media_ids: &[String]) -> Result<CreatedTweet> {
        let url = format!("{}/2/tweets", self.api_base_url);
        let auth = oauth::authorization_header(&self.credentials, "POST", &url, &[])?;

        let body = CreateTweetRequest {
            text: text.to_string(),
            media: (!media_ids.is_empty()).then(|| TweetMedia {
                media_ids: media_ids.to_vec(),
            }),
        };

        let resp = self
            .client
            .post(&url)
            .header(AUTHORIZATION, auth)
            .json(&body)
            .send()
            .await?;

        let resp = check_status(resp).await?;
        let created: types::CreateTweetResponse = resp.json().await?;
        tracing::info!(tweet_id = %created.data.id, "Tweet created");

        Ok(created.data)
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    tracing::warn!(status = %status, error = %body, "X API error");
    Err(TwitterError::Api {
        status: status.as_u16(),
        message: body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header_regex, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credentials() -> Credentials {
        Credentials {
            consumer_key: "ck".into(),
            consumer_secret: "cs".into(),
            access_token: "at".into(),
            access_token_secret: "ats".into(),
        }
    }

    fn client(server: &MockServer) -> TwitterClient {
        TwitterClient::new(credentials()).with_base_urls(server.uri(), server.uri())
    }

    #[test]
    fn test_tweet_url() {
        assert_eq!(tweet_url("123"), "https://twitter.com/user/status/123");
    }

    #[test]
    fn test_client_builder() {
        let client = TwitterClient::new(credentials())
            .with_base_urls("http://localhost:1", "http://localhost:2");
        assert_eq!(client.api_base_url, "http://localhost:1");
        assert_eq!(client.upload_base_url, "http://localhost:2");
    }

    #[tokio::test]
    async fn test_upload_media_returns_string_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/1.1/media/upload.json"))
            .and(header_regex("authorization", "^OAuth .*oauth_signature="))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "media_id": 710511363345354753_u64,
                "media_id_string": "710511363345354753",
                "size": 4
            })))
            .expect(1)
            .mount(&server)
            .await;

        let media_id = client(&server)
            .upload_media(vec![0xFF, 0xD8, 0xFF, 0xE0], "image.jpg")
            .await
            .unwrap();

        assert_eq!(media_id, "710511363345354753");
    }

    #[tokio::test]
    async fn test_create_tweet_sends_media_and_decodes_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/2/tweets"))
            .and(header_regex("authorization", "^OAuth "))
            .and(body_json(json!({"text": "hello", "media": {"media_ids": ["m1"]}})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": {"id": "1445880548472328192", "text": "hello"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tweet = client(&server)
            .create_tweet("hello", &["m1".to_string()])
            .await
            .unwrap();

        assert_eq!(tweet.id, "1445880548472328192");
        assert_eq!(tweet.text, "hello");
    }

    #[tokio::test]
    async fn test_text_only_tweet_has_no_media_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/2/tweets"))
            .and(body_json(json!({"text": "hello"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": {"id": "1", "text": "hello"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tweet = client(&server).create_tweet("hello", &[]).await.unwrap();

        assert_eq!(tweet.id, "1");
    }

    #[tokio::test]
    async fn test_rejected_tweet_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/2/tweets"))
            .respond_with(ResponseTemplate::new(403).set_body_string("duplicate content"))
            .mount(&server)
            .await;

        let err = client(&server).create_tweet("hello", &[]).await.unwrap_err();

        assert!(matches!(
            &err,
            TwitterError::Api { status: 403, message } if message == "duplicate content"
        ));
        assert_eq!(err.to_string(), "X API error (403): duplicate content");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        let client = TwitterClient::new(credentials())
            .with_base_urls("http://127.0.0.1:1", "http://127.0.0.1:1");
        let err = client.create_tweet("hello", &[]).await.unwrap_err();
        assert!(matches!(err, TwitterError::Http(_)));
    }
}
